use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use service::facets::FacetFilter;
use service::pagination::Pagination;
use service::product_service::{self, DetailedFilter};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Term matched case-insensitively against product, family, and category names
    pub query: String,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get, path = "/products/searchbar/products_search", tag = "products",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching products"),
        (status = 400, description = "Missing query parameter"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<models::product::Model>>, ApiError> {
    let page = Pagination::from_query(params.skip, params.limit);
    let products = product_service::search_products(&state.db, &params.query, page).await?;
    info!(term = %params.query, count = products.len(), "product search");
    Ok(Json(products))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DetailedFilterParams {
    /// Product-name substring
    pub search_query: Option<String>,
    /// Category-name substring
    pub category: Option<String>,
    /// Minimum wattage; matched against each product's parsed wattage range
    pub min_wattage: Option<i32>,
    /// Exact color temperature in Kelvin
    pub color_temp: Option<i32>,
}

#[utoipa::path(
    get, path = "/products/product_details/filter", tag = "products",
    params(DetailedFilterParams),
    responses(
        (status = 200, description = "Products matching every supplied filter"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn detailed_filter(
    State(state): State<ServerState>,
    Query(params): Query<DetailedFilterParams>,
) -> Result<Json<Vec<models::product::Model>>, ApiError> {
    let filter = DetailedFilter {
        search_query: params.search_query,
        category: params.category,
        min_wattage: params.min_wattage,
        color_temp: params.color_temp,
    };
    let products = product_service::filter_products(&state.db, &filter).await?;
    Ok(Json(products))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct FamilyProductFilterParams {
    /// Mounting type substring (e.g. "Ceiling recessed")
    pub mounting_type: Option<String>,
    /// Light distribution substring (e.g. "A10-A32 wide 100% direct")
    pub light_distribution: Option<String>,
    /// Lamp type substring (e.g. "LED")
    pub lamp_type: Option<String>,
    /// IP rating substring (e.g. "IP20")
    pub ip_rating: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

#[utoipa::path(
    get, path = "/products/category/{category_id}/{family_id}/filter", tag = "products",
    params(
        ("category_id" = i32, Path, description = "Category owning the family"),
        ("family_id" = i32, Path, description = "Family to filter products in"),
        FamilyProductFilterParams
    ),
    responses(
        (status = 200, description = "Products in the family matching every supplied facet"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn family_products_filter(
    State(state): State<ServerState>,
    Path((category_id, family_id)): Path<(i32, i32)>,
    Query(params): Query<FamilyProductFilterParams>,
) -> Result<Json<Vec<models::product::Model>>, ApiError> {
    let facets = FacetFilter {
        mounting_type: params.mounting_type,
        light_distribution: params.light_distribution,
        lamp_type: params.lamp_type,
        ip_rating: params.ip_rating,
    };
    let page = Pagination::from_query(params.skip, params.limit);
    let products =
        product_service::filter_products_in_family(&state.db, category_id, family_id, &facets, page)
            .await?;
    Ok(Json(products))
}
