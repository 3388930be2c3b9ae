use crate::models::ErrorResponse;
use axum::http::StatusCode;
use providers::DispatchError;

/// Map dispatch errors to HTTP status codes
///
/// 503 for an unconfigured provider and 502 for upstream trouble are kept
/// apart deliberately: operators should be able to tell "not configured"
/// from "upstream is down" by status alone.
pub fn map_dispatch_error_to_status(error: &DispatchError) -> StatusCode {
    match error {
        DispatchError::InvalidRequest(_) | DispatchError::UnsupportedModel(_) => {
            StatusCode::BAD_REQUEST
        }
        DispatchError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DispatchError::UnexpectedResponseShape(_) | DispatchError::UpstreamFailure(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl From<DispatchError> for ErrorResponse {
    fn from(error: DispatchError) -> Self {
        let summary = match &error {
            DispatchError::InvalidRequest(_) => "Invalid request",
            DispatchError::UnsupportedModel(_) => "Unsupported model",
            DispatchError::ProviderUnavailable(_) => "Provider not configured",
            DispatchError::UnexpectedResponseShape(_) => "Upstream returned an unusable response",
            DispatchError::UpstreamFailure(_) => "Upstream completion failed",
        };
        let details = match error {
            DispatchError::InvalidRequest(msg)
            | DispatchError::UnsupportedModel(msg)
            | DispatchError::ProviderUnavailable(msg)
            | DispatchError::UnexpectedResponseShape(msg)
            | DispatchError::UpstreamFailure(msg) => msg,
        };
        ErrorResponse::with_details(summary, details)
    }
}
