//! Route handles, handler identity, and the descriptive-comment index.
//!
//! The host application owns route discovery; this crate models what the
//! pipeline reads from it: route handles with resolved handler identities,
//! validation rules, and a queryable index of handler doc-comment tags.

pub mod comments;
pub mod route;

pub use comments::{InMemorySourceIndex, SourceIndex};
pub use route::{HandlerIdentity, MatchedRoute, RouteHandle, RouteMatcher};
