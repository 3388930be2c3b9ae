use crate::models::*;
use utoipa::OpenApi;

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Completion Gateway API",
        description = "A gateway dispatching completion requests to multiple upstream AI providers behind one uniform contract.",
        version = "1.0.0",
        license(name = "MIT")
    ),
    paths(
        crate::routes::completion::create_completion,
        crate::routes::models::list_models,
        crate::routes::health::health_check,
    ),
    components(schemas(
        CompletionRequestBody,
        CompletionResponseBody,
        Usage,
        ErrorResponse,
        HealthResponse,
        ModelsResponse,
        ModelInfo,
    ))
)]
pub struct ApiDoc;
