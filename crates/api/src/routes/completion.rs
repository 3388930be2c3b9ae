use crate::{
    models::{CompletionRequestBody, CompletionResponseBody, ErrorResponse},
    routes::common::map_dispatch_error_to_status,
    AppState,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use providers::CompletionRequest;
use tracing::debug;

/// Create a completion
///
/// Dispatches the prompt to the provider resolved from the model identifier
/// and returns the normalized result.
#[utoipa::path(
    post,
    path = "/v1/completion",
    tag = "Completion",
    request_body = CompletionRequestBody,
    responses(
        (status = 200, description = "Successful completion", body = CompletionResponseBody),
        (status = 400, description = "Invalid request or unsupported model", body = ErrorResponse),
        (status = 502, description = "Upstream provider failed", body = ErrorResponse),
        (status = 503, description = "Provider not configured", body = ErrorResponse)
    )
)]
pub async fn create_completion(
    State(state): State<AppState>,
    Json(body): Json<CompletionRequestBody>,
) -> axum::response::Response {
    debug!(
        model = ?body.model,
        prompt_len = body.prompt.len(),
        "completion request"
    );

    let request = CompletionRequest::new(body.prompt, body.model);

    match state.dispatcher.dispatch(&request).await {
        Ok(result) => (
            StatusCode::OK,
            ResponseJson(CompletionResponseBody::from(result)),
        )
            .into_response(),
        Err(error) => {
            let status_code = map_dispatch_error_to_status(&error);
            (status_code, ResponseJson::<ErrorResponse>(error.into())).into_response()
        }
    }
}
