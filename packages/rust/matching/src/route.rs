//! Route handles and handler identity.
//!
//! A [`RouteHandle`] is the pipeline's read-only view of one registered HTTP
//! route. The route table itself is owned by the host application and handed
//! over through the [`RouteMatcher`] seam; this crate never discovers routes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Handler identity
// ---------------------------------------------------------------------------

/// What a route's handler resolved to in the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandlerIdentity {
    /// A controller class plus a named method on it.
    Method { class: String, method: String },
    /// A class instance that is itself the handler.
    Invokable { class: String },
    /// A bare named callable with no backing class.
    Function { name: String },
    /// An anonymous closure registered inline.
    Closure,
}

impl HandlerIdentity {
    /// The backing class, for identities that have one.
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Method { class, .. } | Self::Invokable { class } => Some(class),
            Self::Function { .. } | Self::Closure => None,
        }
    }
}

impl std::fmt::Display for HandlerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Method { class, method } => write!(f, "{class}::{method}"),
            Self::Invokable { class } => write!(f, "{class}"),
            Self::Function { name } => write!(f, "{name}"),
            Self::Closure => write!(f, "<closure>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Route handle
// ---------------------------------------------------------------------------

/// Opaque reference to one registered route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteHandle {
    /// HTTP verbs the route answers to.
    pub methods: Vec<String>,
    /// URI template, e.g. `users/{id}`.
    pub uri: String,
    /// Resolved handler identity; `None` when the host could not resolve one.
    #[serde(default)]
    pub handler: Option<HandlerIdentity>,
}

impl RouteHandle {
    /// `[GET,HEAD] users/{id}`: the representation used in log lines.
    pub fn display_name(&self) -> String {
        format!("[{}] {}", self.methods.join(","), self.uri)
    }
}

/// A route handle paired with its validation rules, as supplied by the
/// host's route matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedRoute {
    pub handle: RouteHandle,
    /// Validation rules attached to the route, passed through to the
    /// extractor verbatim.
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Supplies the ordered route table. Implemented by the host application;
/// the pipeline only iterates the result.
pub trait RouteMatcher {
    fn routes(&self) -> Vec<MatchedRoute>;
}
