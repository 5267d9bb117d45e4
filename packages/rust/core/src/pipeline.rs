//! End-to-end `generate` pipeline: route table → extraction → staging → docs.
//!
//! Extraction and rendering are deliberately split by the staging
//! directory: a run can skip extraction and re-render whatever was staged
//! before, including files the author edited by hand in between.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use routedoc_extraction::{ExtractionDriver, RouteExtractor};
use routedoc_matching::{RouteMatcher, SourceIndex};
use routedoc_shared::Result;

use crate::writer::DocsWriter;

/// Configuration for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Staging directory for intermediate group files.
    pub staging_dir: PathBuf,
    /// Overwrite output the writer would otherwise preserve.
    pub force: bool,
    /// Skip extraction and re-render the staged records as-is.
    pub skip_extraction: bool,
    /// Print full diagnostic detail for caught per-route errors.
    pub verbose_errors: bool,
}

/// Result of a `generate` run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path to the staging directory used.
    pub staging_dir: PathBuf,
    /// Records handed to the writer.
    pub endpoint_count: usize,
    /// Group files present in the staging directory.
    pub group_count: usize,
    /// Whether extraction ran (false under `skip_extraction`).
    pub extracted: bool,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Run the full generate pipeline.
///
/// 1. Unless skipped: pull the route table, extract, stage the records
/// 2. Reload the staging directory
/// 3. Hand the reloaded records to the writer
///
/// Per-route problems never surface here; only staging I/O, malformed
/// staged files, and writer failures do.
#[instrument(skip_all, fields(staging_dir = %config.staging_dir.display(), skip_extraction = config.skip_extraction))]
pub fn generate(
    config: &GenerateConfig,
    matcher: &dyn RouteMatcher,
    extractor: &dyn RouteExtractor,
    index: &dyn SourceIndex,
    writer: &dyn DocsWriter,
) -> Result<GenerateReport> {
    let start = Instant::now();
    let mut extracted = false;
    let mut group_count = 0;

    if config.skip_extraction {
        info!("extraction skipped, reusing staged records");
    } else {
        let routes = matcher.routes();
        info!(route_count = routes.len(), "pulled route table");

        let driver = ExtractionDriver::new(extractor, index, config.verbose_errors);
        let records = driver.extract_all(&routes);

        let written = routedoc_staging::persist(&config.staging_dir, &records)?;
        group_count = written.len();
        extracted = true;
    }

    let records = routedoc_staging::load(&config.staging_dir)?;
    if !extracted {
        group_count = count_group_files(&config.staging_dir);
    }

    writer.write_docs(&records, config.force)?;

    let report = GenerateReport {
        staging_dir: config.staging_dir.clone(),
        endpoint_count: records.len(),
        group_count,
        extracted,
        elapsed: start.elapsed(),
    };

    info!(
        endpoints = report.endpoint_count,
        groups = report.group_count,
        extracted = report.extracted,
        elapsed_ms = report.elapsed.as_millis(),
        "generate pipeline complete"
    );

    Ok(report)
}

/// Count the numbered group files a previous `persist` left behind.
///
/// Matches what the extraction path reports from `persist` itself:
/// integer-stemmed files only, not group files an author added by hand.
fn count_group_files(dir: &std::path::Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.extension().and_then(|x| x.to_str())
                == Some(routedoc_staging::STAGED_EXTENSION)
                && path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s.parse::<usize>().is_ok())
        })
        .count()
}
