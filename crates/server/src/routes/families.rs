use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use service::facets::FacetFilter;
use service::family_service;

use crate::errors::ApiError;
use crate::images::{self, RequestOrigin};
use crate::routes::ServerState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct FamilyFacetParams {
    /// Mounting type substring (e.g. "Ceiling recessed")
    pub mounting_type: Option<String>,
    /// Light distribution substring (e.g. "A10-A32 wide 100% direct")
    pub light_distribution: Option<String>,
    /// Lamp type substring (e.g. "LED")
    pub lamp_type: Option<String>,
}

#[utoipa::path(
    get, path = "/products/category/{category_id}/families", tag = "families",
    params(
        ("category_id" = i32, Path, description = "Category to fetch families for"),
        FamilyFacetParams
    ),
    responses(
        (status = 200, description = "Families with at least one product matching the facets"),
        (status = 404, description = "No family matched"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn families_in_category(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
    Query(params): Query<FamilyFacetParams>,
    origin: RequestOrigin,
) -> Result<Json<Vec<models::family::Model>>, ApiError> {
    let facets = FacetFilter {
        mounting_type: params.mounting_type,
        light_distribution: params.light_distribution,
        lamp_type: params.lamp_type,
        ip_rating: None,
    };
    let mut families =
        family_service::families_with_matching_products(&state.db, category_id, &facets).await?;
    if families.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no families found for category ID {category_id} with the specified filters"
        )));
    }
    images::rewrite_family_images(&origin, &mut families);
    Ok(Json(families))
}
