use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateServiceDoc {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

#[derive(ToSchema)]
pub struct UpdateServiceDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::create,
        crate::routes::services::replace,
        crate::routes::services::patch,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            CreateServiceDoc,
            UpdateServiceDoc,
            ErrorDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services")
    )
)]
pub struct ApiDoc;
