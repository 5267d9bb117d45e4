//! The extraction seam.
//!
//! The algorithms that mine parameter, body, and response detail out of a
//! single route live outside this crate. The driver only needs a fallible
//! call per route.

use routedoc_matching::RouteHandle;
use routedoc_shared::{EndpointRecord, Result};

/// Mines one route's documentation detail.
///
/// Invoked once per eligible, non-suppressed route. May fail; the driver
/// contains the failure at the per-route boundary.
pub trait RouteExtractor {
    fn process_route(&self, handle: &RouteHandle, rules: &[String]) -> Result<EndpointRecord>;
}
