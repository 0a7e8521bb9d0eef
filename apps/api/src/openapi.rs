use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Product API",
        version = "0.1.0",
        description = "REST API for managing the product catalog"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/product", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
