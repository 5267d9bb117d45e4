//! Descriptive-comment index over handler types and methods.
//!
//! Rust offers no runtime reflection over a host application's classes, so
//! the comment scan works against a pre-parsed index of the host's source:
//! which handler types exist, which methods they declare, and which
//! annotation tags their doc comments carry. Hosts populate an
//! [`InMemorySourceIndex`] (typically from a build-time export); the
//! pipeline only queries through the [`SourceIndex`] trait.

use std::collections::HashMap;

use tracing::debug;

/// Query surface for handler existence and doc-comment tags.
///
/// A type or method missing from the index simply has no tags; queries never
/// error.
pub trait SourceIndex {
    /// Whether the handler type is known to the index at all.
    fn has_type(&self, type_name: &str) -> bool;

    /// Whether the type declares the given method.
    fn has_method(&self, type_name: &str, method: &str) -> bool;

    /// Annotation tag names on the type's doc comment.
    fn type_tags(&self, type_name: &str) -> Vec<String>;

    /// Annotation tag names on the method's doc comment.
    fn method_tags(&self, type_name: &str, method: &str) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// In-memory index
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
struct TypeEntry {
    tags: Vec<String>,
    methods: HashMap<String, Vec<String>>,
}

/// A [`SourceIndex`] backed by plain maps.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourceIndex {
    types: HashMap<String, TypeEntry>,
}

impl InMemorySourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler type with the tags from its doc comment.
    pub fn add_type(&mut self, type_name: impl Into<String>, tags: Vec<String>) {
        let name = type_name.into();
        debug!(type_name = %name, tag_count = tags.len(), "indexed handler type");
        self.types.entry(name).or_default().tags = tags;
    }

    /// Register a method on a type with the tags from its doc comment.
    /// Registers the type too if it was not seen yet.
    pub fn add_method(
        &mut self,
        type_name: impl Into<String>,
        method: impl Into<String>,
        tags: Vec<String>,
    ) {
        self.types
            .entry(type_name.into())
            .or_default()
            .methods
            .insert(method.into(), tags);
    }
}

impl SourceIndex for InMemorySourceIndex {
    fn has_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    fn has_method(&self, type_name: &str, method: &str) -> bool {
        self.types
            .get(type_name)
            .is_some_and(|t| t.methods.contains_key(method))
    }

    fn type_tags(&self, type_name: &str) -> Vec<String> {
        self.types
            .get(type_name)
            .map(|t| t.tags.clone())
            .unwrap_or_default()
    }

    fn method_tags(&self, type_name: &str, method: &str) -> Vec<String> {
        self.types
            .get(type_name)
            .and_then(|t| t.methods.get(method))
            .cloned()
            .unwrap_or_default()
    }
}
