use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod categories;
pub mod families;
pub mod products;

/// Shared handler state: the database pool opened at startup.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service healthy"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: catalog API, docs, and static assets.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/categories", get(categories::list_categories))
        .route("/categories/:category_id/products", get(categories::category_products))
        .route("/home/products/products_button/:category_id", get(categories::product_count))
        .route("/products/searchbar/products_search", get(products::search))
        .route("/products/product_details/filter", get(products::detailed_filter))
        .route("/products/category/:category_id/families", get(families::families_in_category))
        .route(
            "/products/category/:category_id/:family_id/filter",
            get(products::family_products_filter),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
