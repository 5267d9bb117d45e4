//! Route-table export adapter.
//!
//! Route discovery happens inside the host application; what crosses the
//! boundary is a JSON export of its route table, its handlers' doc-comment
//! tags, and the endpoint detail its own tooling mined per route. This
//! module deserializes that export and adapts it to the pipeline's
//! `RouteMatcher` / `SourceIndex` / `RouteExtractor` seams.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use routedoc_extraction::RouteExtractor;
use routedoc_matching::{InMemorySourceIndex, MatchedRoute, RouteHandle, RouteMatcher};
use routedoc_shared::{EndpointRecord, Result, RoutedocError};

// ---------------------------------------------------------------------------
// Export format
// ---------------------------------------------------------------------------

/// Top-level structure of the host's route-table export.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RouteTableExport {
    /// Handler types with their doc-comment tags.
    #[serde(default)]
    pub types: Vec<TypeExport>,
    /// The ordered route table.
    #[serde(default)]
    pub routes: Vec<RouteExport>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TypeExport {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodExport>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MethodExport {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteExport {
    #[serde(flatten)]
    pub matched: MatchedRoute,
    /// Endpoint detail pre-mined by the host's tooling. A route exported
    /// without it fails extraction for that route only.
    #[serde(default)]
    pub endpoint: Option<EndpointRecord>,
}

/// Load and parse a route-table export file.
pub(crate) fn load_export(path: &Path) -> Result<RouteTableExport> {
    let content = std::fs::read_to_string(path).map_err(|e| RoutedocError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| {
        RoutedocError::validation(format!("malformed route export {}: {e}", path.display()))
    })
}

// ---------------------------------------------------------------------------
// Trait adapters
// ---------------------------------------------------------------------------

/// `RouteMatcher` over the export's route table.
pub(crate) struct ExportRouteMatcher {
    routes: Vec<MatchedRoute>,
}

impl ExportRouteMatcher {
    pub fn new(export: &RouteTableExport) -> Self {
        Self {
            routes: export.routes.iter().map(|r| r.matched.clone()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }
}

impl RouteMatcher for ExportRouteMatcher {
    fn routes(&self) -> Vec<MatchedRoute> {
        self.routes.clone()
    }
}

/// Build the source-comment index from the export's type listing.
pub(crate) fn build_source_index(export: &RouteTableExport) -> InMemorySourceIndex {
    let mut index = InMemorySourceIndex::new();
    for type_export in &export.types {
        index.add_type(&type_export.name, type_export.tags.clone());
        for method in &type_export.methods {
            index.add_method(&type_export.name, &method.name, method.tags.clone());
        }
    }
    index
}

/// `RouteExtractor` serving the export's pre-mined endpoint detail.
pub(crate) struct ExportExtractor {
    by_route: HashMap<String, EndpointRecord>,
    default_group: String,
}

impl ExportExtractor {
    pub fn new(export: &RouteTableExport, default_group: impl Into<String>) -> Self {
        let by_route = export
            .routes
            .iter()
            .filter_map(|r| {
                r.endpoint
                    .as_ref()
                    .map(|e| (route_key(&r.matched.handle), e.clone()))
            })
            .collect();
        Self {
            by_route,
            default_group: default_group.into(),
        }
    }

    pub fn empty(default_group: impl Into<String>) -> Self {
        Self {
            by_route: HashMap::new(),
            default_group: default_group.into(),
        }
    }
}

impl RouteExtractor for ExportExtractor {
    fn process_route(&self, handle: &RouteHandle, _rules: &[String]) -> Result<EndpointRecord> {
        let mut record = self
            .by_route
            .get(&route_key(handle))
            .cloned()
            .ok_or_else(|| {
                RoutedocError::extraction(format!(
                    "no endpoint detail in route export for {}",
                    handle.display_name()
                ))
            })?;

        if record.metadata.group_name.is_none() {
            record.metadata.group_name = Some(self.default_group.clone());
        }

        Ok(record)
    }
}

fn route_key(handle: &RouteHandle) -> String {
    format!("{} {}", handle.methods.join(","), handle.uri)
}
