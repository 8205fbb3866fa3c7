use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CategoryWithCountDoc {
    pub category_id: i32,
    pub category_name: String,
    pub product_count: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list_categories,
        crate::routes::categories::product_count,
        crate::routes::categories::category_products,
        crate::routes::products::search,
        crate::routes::products::detailed_filter,
        crate::routes::products::family_products_filter,
        crate::routes::families::families_in_category,
    ),
    components(
        schemas(
            HealthResponse,
            CategoryWithCountDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "products"),
        (name = "families")
    )
)]
pub struct ApiDoc;
