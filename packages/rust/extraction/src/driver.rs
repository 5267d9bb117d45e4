//! Sequential extraction over the route table.
//!
//! The driver walks routes in table order, applies the eligibility and
//! suppression checks, and invokes the extractor for the survivors. Every
//! per-route failure is contained here: a bad route is logged and skipped,
//! and the batch always runs to completion.

use tracing::{error, info, instrument, warn};

use routedoc_matching::{MatchedRoute, SourceIndex};
use routedoc_shared::EndpointRecord;

use crate::eligibility::{handler_exists, is_eligible};
use crate::extractor::RouteExtractor;
use crate::suppression::is_suppressed;

/// Drives per-route extraction with failure isolation.
pub struct ExtractionDriver<'a> {
    extractor: &'a dyn RouteExtractor,
    index: &'a dyn SourceIndex,
    /// Print full diagnostic detail for caught extractor errors.
    verbose_errors: bool,
}

impl<'a> ExtractionDriver<'a> {
    pub fn new(
        extractor: &'a dyn RouteExtractor,
        index: &'a dyn SourceIndex,
        verbose_errors: bool,
    ) -> Self {
        Self {
            extractor,
            index,
            verbose_errors,
        }
    }

    /// Extract records for every documentable route, in table order.
    ///
    /// Total over its input: never errors, and returns at most one record
    /// per route, order-preserving among successes.
    #[instrument(skip_all, fields(route_count = routes.len()))]
    pub fn extract_all(&self, routes: &[MatchedRoute]) -> Vec<EndpointRecord> {
        let mut records = Vec::new();

        for matched in routes {
            let handle = &matched.handle;
            let name = handle.display_name();

            if !is_eligible(handle) {
                warn!(route = %name, "skipping invalid route: handler is not a class-backed target");
                continue;
            }

            if !handler_exists(handle, self.index) {
                warn!(route = %name, "skipping route: handler method does not exist");
                continue;
            }

            if is_suppressed(handle, self.index) {
                info!(route = %name, "skipping route: hidden from documentation");
                continue;
            }

            info!(route = %name, "processing route");
            match self.extractor.process_route(handle, &matched.rules) {
                Ok(record) => {
                    info!(route = %name, "processed route");
                    records.push(record);
                }
                Err(e) => {
                    error!(route = %name, "failed processing route");
                    if self.verbose_errors {
                        error!(route = %name, error = %e, "extraction diagnostics");
                    }
                }
            }
        }

        records
    }
}
