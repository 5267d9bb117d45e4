//! Core pipeline orchestration for Routedoc.
//!
//! This crate ties route matching, extraction, and staging into the
//! end-to-end `generate` workflow and defines the rendering seam.

pub mod pipeline;
pub mod writer;

pub use pipeline::{GenerateConfig, GenerateReport, generate};
pub use writer::{DocsWriter, NullWriter};
