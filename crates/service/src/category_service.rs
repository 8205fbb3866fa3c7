use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait,
};
use serde::Serialize;

use crate::errors::ServiceError;
use models::{category, family, product};

/// One row of the category listing: the category plus the number of products
/// reachable through its families.
#[derive(Clone, Debug, PartialEq, Serialize, FromQueryResult)]
pub struct CategoryWithCount {
    pub category_id: i32,
    pub category_name: String,
    pub product_count: i64,
}

/// List every category with its product count. Categories without families
/// or products report a count of zero.
pub async fn list_categories_with_counts(
    db: &DatabaseConnection,
) -> Result<Vec<CategoryWithCount>, ServiceError> {
    category::Entity::find()
        .select_only()
        .column_as(category::Column::Id, "category_id")
        .column_as(category::Column::Name, "category_name")
        .column_as(product::Column::Id.count(), "product_count")
        .join(JoinType::LeftJoin, category::Relation::Family.def())
        .join(JoinType::LeftJoin, family::Relation::Product.def())
        .group_by(category::Column::Id)
        .group_by(category::Column::Name)
        .into_model::<CategoryWithCount>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Count products whose family belongs to the category. Unknown category ids
/// simply count zero.
pub async fn count_products_in_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<u64, ServiceError> {
    product::Entity::find()
        .join(JoinType::InnerJoin, product::Relation::Family.def())
        .filter(family::Column::CategoryId.eq(category_id))
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
