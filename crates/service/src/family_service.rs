use sea_orm::sea_query::{extension::postgres::PgExpr, Expr, Query};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::errors::ServiceError;
use crate::facets::FacetFilter;
use models::{family, product};

/// Families in a category for which at least one contained product matches
/// all supplied facet filters. The product check is an existence test on
/// family ids, not an enumeration of products. Callers decide what an empty
/// result means; here it is simply an empty vec.
pub async fn families_with_matching_products(
    db: &DatabaseConnection,
    category_id: i32,
    facets: &FacetFilter,
) -> Result<Vec<family::Model>, ServiceError> {
    let mut query = family::Entity::find().filter(family::Column::CategoryId.eq(category_id));
    if facets.is_active() {
        let mut matching = Query::select();
        matching.column(product::Column::FamilyId).from(product::Entity);
        for (column, pattern) in facets.predicates() {
            matching.and_where(Expr::col((product::Entity, column)).ilike(pattern));
        }
        query = query.filter(family::Column::Id.in_subquery(matching));
    }
    query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}
