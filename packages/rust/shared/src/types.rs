//! Core domain types for extracted endpoint documentation.
//!
//! An extraction run produces one [`EndpointRecord`] per documented route.
//! Records are created fresh each run and never mutated afterwards; the
//! staging layer buckets them into [`Group`]s for persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fallback bucket for records whose extractor left the group name unset.
pub const DEFAULT_GROUP_NAME: &str = "Endpoints";

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Descriptive metadata mined from a route handler's documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Documentation section this endpoint belongs to.
    #[serde(default)]
    pub group_name: Option<String>,
    /// Description of the group as a whole.
    #[serde(default)]
    pub group_description: Option<String>,
    /// Short endpoint title.
    #[serde(default)]
    pub title: Option<String>,
    /// Longer endpoint description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the endpoint requires authentication.
    #[serde(default)]
    pub authenticated: bool,
}

// ---------------------------------------------------------------------------
// Extraction output
// ---------------------------------------------------------------------------

/// A single documented parameter (URL, query, or body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared type, e.g. `string` or `integer`.
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Example value; any YAML scalar or structure.
    #[serde(default)]
    pub example: Option<serde_yaml::Value>,
}

/// An example response for an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    #[serde(default)]
    pub description: Option<String>,
    /// Response body, verbatim.
    #[serde(default)]
    pub content: Option<String>,
}

/// The output of a successful extraction for one route.
///
/// Collections are always serialized, so an endpoint with zero responses
/// round-trips as an explicit empty list rather than a missing field.
/// Consumers identify a record by `method` + `uri`, never by its position
/// in the staging directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRecord {
    pub metadata: Metadata,
    /// HTTP verb.
    pub method: String,
    /// URI template, e.g. `users/{id}`.
    pub uri: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub url_parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub query_parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub body_parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl EndpointRecord {
    /// `GET users/{id}`: the identity used in log lines and by consumers.
    pub fn endpoint_name(&self) -> String {
        format!("{} {}", self.method, self.uri)
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A named bucket of endpoint records, one per staged file.
///
/// Within-group order is extraction order; groups themselves are ordered by
/// first appearance in the record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub endpoints: Vec<EndpointRecord>,
}
