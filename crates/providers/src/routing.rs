//! Static model routing table
//!
//! Maps a caller-supplied model identifier to a provider variant and an
//! upstream model name. The table is fixed at compile time; there is no
//! dynamic registration.

/// Baseline model used when the caller omits one
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Vendors the gateway can talk to, one credential each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    OpenAi,
    Google,
    Anthropic,
    DeepSeek,
}

impl Vendor {
    /// Human-readable vendor name stamped on results and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::OpenAi => "OpenAI",
            Vendor::Google => "Google",
            Vendor::Anthropic => "Anthropic",
            Vendor::DeepSeek => "DeepSeek",
        }
    }

    pub const ALL: [Vendor; 4] = [
        Vendor::OpenAi,
        Vendor::Google,
        Vendor::Anthropic,
        Vendor::DeepSeek,
    ];
}

/// Provider variants a model identifier can resolve to
///
/// The two DeepSeek variants share one vendor (and one credential) but call
/// different upstream model names, so they are distinct variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Anthropic,
    DeepSeekChat,
    DeepSeekReasoner,
}

impl ProviderKind {
    pub fn vendor(&self) -> Vendor {
        match self {
            ProviderKind::OpenAi => Vendor::OpenAi,
            ProviderKind::Gemini => Vendor::Google,
            ProviderKind::Anthropic => Vendor::Anthropic,
            ProviderKind::DeepSeekChat | ProviderKind::DeepSeekReasoner => Vendor::DeepSeek,
        }
    }
}

/// How a table entry matches an incoming model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Exact(&'static str),
    Prefix(&'static str),
}

impl MatchRule {
    fn matches(&self, model_id: &str) -> bool {
        match self {
            MatchRule::Exact(id) => model_id == *id,
            MatchRule::Prefix(prefix) => model_id.starts_with(prefix),
        }
    }
}

/// One row of the routing table
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub rule: MatchRule,
    pub kind: ProviderKind,
    /// Upstream model name; `None` forwards the identifier as given
    /// (forward compatibility for unseen vendor sub-model names)
    pub upstream_model: Option<&'static str>,
}

/// The routing table, evaluated in order
///
/// Exact entries come before prefix entries; `resolve_model` relies on this
/// ordering so an exact alias always beats a generic prefix.
pub const ROUTING_TABLE: &[RouteEntry] = &[
    RouteEntry {
        rule: MatchRule::Exact("gemini-1.5-flash"),
        kind: ProviderKind::Gemini,
        upstream_model: Some("gemini-1.5-flash"),
    },
    RouteEntry {
        rule: MatchRule::Exact("claude-3.5"),
        kind: ProviderKind::Anthropic,
        upstream_model: Some("claude-3-5-sonnet-20241022"),
    },
    RouteEntry {
        rule: MatchRule::Exact("deepseek-chat"),
        kind: ProviderKind::DeepSeekChat,
        upstream_model: Some("deepseek-chat"),
    },
    RouteEntry {
        rule: MatchRule::Exact("deepseek-reasoner"),
        kind: ProviderKind::DeepSeekReasoner,
        upstream_model: Some("deepseek-reasoner"),
    },
    RouteEntry {
        rule: MatchRule::Prefix("gpt-"),
        kind: ProviderKind::OpenAi,
        upstream_model: None,
    },
];

/// A resolved model identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub kind: ProviderKind,
    pub upstream_model: String,
}

/// Resolve a model identifier against the routing table
///
/// Pure and deterministic: the same identifier always resolves to the same
/// descriptor. Returns `None` when no rule matches.
pub fn resolve_model(model_id: &str) -> Option<ModelDescriptor> {
    ROUTING_TABLE
        .iter()
        .find(|entry| entry.rule.matches(model_id))
        .map(|entry| ModelDescriptor {
            kind: entry.kind,
            upstream_model: entry
                .upstream_model
                .map(str::to_string)
                .unwrap_or_else(|| model_id.to_string()),
        })
}
