//! The rendering seam.
//!
//! Turning reloaded records into final documents is a downstream concern;
//! the pipeline only needs somewhere to hand them.

use routedoc_shared::{EndpointRecord, Result};

/// Consumes the reloaded record sequence at the end of a generate run.
pub trait DocsWriter {
    /// Write final documentation for the given records.
    ///
    /// `force` asks the writer to overwrite output it would otherwise
    /// preserve, such as files carrying manual edits.
    fn write_docs(&self, records: &[EndpointRecord], force: bool) -> Result<()>;
}

/// No-op writer for headless/test usage.
pub struct NullWriter;

impl DocsWriter for NullWriter {
    fn write_docs(&self, _records: &[EndpointRecord], _force: bool) -> Result<()> {
        Ok(())
    }
}
