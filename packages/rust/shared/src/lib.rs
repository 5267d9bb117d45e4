//! Shared types, error model, and configuration for Routedoc.
//!
//! This crate is the foundation depended on by all other Routedoc crates.
//! It provides:
//! - [`RoutedocError`] — the unified error type
//! - Domain types ([`EndpointRecord`], [`Metadata`], [`Group`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ExportConfig, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{Result, RoutedocError};
pub use types::{DEFAULT_GROUP_NAME, EndpointRecord, Group, Metadata, Parameter, Response};
