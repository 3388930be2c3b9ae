use crate::{
    models::{ModelInfo, ModelsResponse},
    AppState,
};
use axum::{extract::State, response::Json as ResponseJson};
use providers::{MatchRule, ROUTING_TABLE};

/// List routable models
///
/// Exposes the static routing table: exact identifiers, prefix rules, the
/// vendor each one resolves to, and whether that vendor is currently
/// enabled (credential present).
#[utoipa::path(
    get,
    path = "/v1/models",
    tag = "Models",
    responses(
        (status = 200, description = "Routing table", body = ModelsResponse),
    )
)]
pub async fn list_models(State(state): State<AppState>) -> ResponseJson<ModelsResponse> {
    let data = ROUTING_TABLE
        .iter()
        .map(|entry| {
            let (id, matching) = match entry.rule {
                MatchRule::Exact(id) => (id, "exact"),
                MatchRule::Prefix(prefix) => (prefix, "prefix"),
            };
            let vendor = entry.kind.vendor();
            ModelInfo {
                id: id.to_string(),
                matching: matching.to_string(),
                provider: vendor.name().to_string(),
                enabled: state.registry.is_enabled(vendor),
            }
        })
        .collect();

    ResponseJson(ModelsResponse {
        object: "list".to_string(),
        data,
    })
}
