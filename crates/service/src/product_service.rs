use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};
use tracing::debug;

use crate::descriptors;
use crate::errors::ServiceError;
use crate::facets::{wildcard, FacetFilter};
use crate::pagination::Pagination;
use models::{category, family, product};

/// All products in families under the category. No pagination; the storefront
/// renders the full set.
pub async fn list_products_in_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<product::Model>, ServiceError> {
    product::Entity::find()
        .join(JoinType::InnerJoin, product::Relation::Family.def())
        .filter(family::Column::CategoryId.eq(category_id))
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Case-insensitive substring search over product, family, and category
/// names, joined Product→Family→Category. Offset/limit apply after the
/// filter; ordering is whatever the planner returns.
pub async fn search_products(
    db: &DatabaseConnection,
    term: &str,
    page: Pagination,
) -> Result<Vec<product::Model>, ServiceError> {
    let (skip, limit) = page.normalize();
    let pattern = wildcard(term);
    product::Entity::find()
        .join(JoinType::InnerJoin, product::Relation::Family.def())
        .join(JoinType::InnerJoin, family::Relation::Category.def())
        .filter(
            Condition::any()
                .add(Expr::col((product::Entity, product::Column::Name)).ilike(pattern.clone()))
                .add(Expr::col((family::Entity, family::Column::Name)).ilike(pattern.clone()))
                .add(Expr::col((category::Entity, category::Column::Name)).ilike(pattern)),
        )
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Independent, combinable filters for the detailed product filter endpoint.
#[derive(Clone, Debug, Default)]
pub struct DetailedFilter {
    pub search_query: Option<String>,
    pub category: Option<String>,
    pub min_wattage: Option<i32>,
    pub color_temp: Option<i32>,
}

/// Substring filters compile to SQL; the descriptor filters run as a
/// row-wise pass over each candidate's stored text, so malformed descriptors
/// drop out instead of erroring.
pub async fn filter_products(
    db: &DatabaseConnection,
    filter: &DetailedFilter,
) -> Result<Vec<product::Model>, ServiceError> {
    let mut query = product::Entity::find();
    if let Some(name) = &filter.search_query {
        query = query.filter(Expr::col((product::Entity, product::Column::Name)).ilike(wildcard(name)));
    }
    if let Some(category_name) = &filter.category {
        query = query
            .join(JoinType::InnerJoin, product::Relation::Family.def())
            .join(JoinType::InnerJoin, family::Relation::Category.def())
            .filter(Expr::col((category::Entity, category::Column::Name)).ilike(wildcard(category_name)));
    }
    let mut candidates = query.all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    debug!(candidates = candidates.len(), "detailed filter sql candidates");

    if let Some(min_wattage) = filter.min_wattage {
        candidates.retain(|p| descriptors::wattage_range_contains(p.wattage.as_deref(), min_wattage));
    }
    if let Some(color_temp) = filter.color_temp {
        candidates.retain(|p| descriptors::color_temps_contain(p.color_temp.as_deref(), color_temp));
    }
    Ok(candidates)
}

/// Products in one exact family (scoped also by category id through the
/// family join), AND-filtered by the facet substrings, paginated.
pub async fn filter_products_in_family(
    db: &DatabaseConnection,
    category_id: i32,
    family_id: i32,
    facets: &FacetFilter,
    page: Pagination,
) -> Result<Vec<product::Model>, ServiceError> {
    let (skip, limit) = page.normalize();
    let mut query = product::Entity::find()
        .join(JoinType::InnerJoin, product::Relation::Family.def())
        .filter(family::Column::CategoryId.eq(category_id))
        .filter(product::Column::FamilyId.eq(family_id));
    for (column, pattern) in facets.predicates() {
        query = query.filter(Expr::col((product::Entity, column)).ilike(pattern));
    }
    query
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
