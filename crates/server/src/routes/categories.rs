use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use service::category_service::{self, CategoryWithCount};
use service::product_service;

use crate::errors::ApiError;
use crate::images::{self, RequestOrigin};
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses(
        (status = 200, description = "Every category with its product count"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn list_categories(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CategoryWithCount>>, ApiError> {
    let categories = category_service::list_categories_with_counts(&state.db).await?;
    info!(count = categories.len(), "list categories");
    Ok(Json(categories))
}

#[utoipa::path(
    get, path = "/home/products/products_button/{category_id}", tag = "categories",
    params(("category_id" = i32, Path, description = "Category to count products for")),
    responses(
        (status = 200, description = "Product count; 0 for unknown categories"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn product_count(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
) -> Result<Json<u64>, ApiError> {
    let count = category_service::count_products_in_category(&state.db, category_id).await?;
    Ok(Json(count))
}

#[utoipa::path(
    get, path = "/categories/{category_id}/products", tag = "categories",
    params(("category_id" = i32, Path, description = "Category to fetch products for")),
    responses(
        (status = 200, description = "Products in the category, imagery as absolute URLs"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn category_products(
    State(state): State<ServerState>,
    Path(category_id): Path<i32>,
    origin: RequestOrigin,
) -> Result<Json<Vec<models::product::Model>>, ApiError> {
    let mut products = product_service::list_products_in_category(&state.db, category_id).await?;
    images::rewrite_product_images(&origin, &mut products);
    Ok(Json(products))
}
