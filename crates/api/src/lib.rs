//! HTTP surface of the completion gateway
//!
//! One dispatch endpoint plus health and routing-table introspection. All
//! state is read-only after startup: the registry is built once from the
//! environment and shared, so the router is safe under unbounded
//! concurrent requests.

pub mod models;
pub mod openapi;
pub mod routes;

pub use openapi::ApiDoc;

use axum::{
    routing::{get, post},
    Router,
};
use providers::{Dispatcher, ProviderRegistry};
use routes::{create_completion, health_check, list_models};
use std::sync::Arc;
use utoipa::OpenApi;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub registry: Arc<ProviderRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(registry.clone())),
            registry,
        }
    }
}

/// Build the application router
///
/// Method routing is axum's: anything but POST on /v1/completion gets a 405
/// without touching the dispatcher.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/completion", post(create_completion))
        .route("/v1/models", get(list_models))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
}
