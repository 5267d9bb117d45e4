//! Minimal downstream docs writer.
//!
//! Renders the reloaded records into a grouped `index.md`. An existing
//! index is assumed to carry manual edits and is preserved unless the run
//! was forced.

use std::path::PathBuf;

use tracing::{debug, info};

use routedoc_core::DocsWriter;
use routedoc_shared::{EndpointRecord, Result, RoutedocError};

pub(crate) struct IndexWriter {
    output_dir: PathBuf,
}

impl IndexWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl DocsWriter for IndexWriter {
    fn write_docs(&self, records: &[EndpointRecord], force: bool) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| RoutedocError::io(&self.output_dir, e))?;

        let target = self.output_dir.join("index.md");
        if target.exists() && !force {
            info!(
                path = %target.display(),
                "index.md exists, preserving it (re-run with --force to overwrite)"
            );
            return Ok(());
        }

        let content = render_index(records);
        std::fs::write(&target, content).map_err(|e| RoutedocError::io(&target, e))?;

        debug!(path = %target.display(), endpoints = records.len(), "wrote index");
        Ok(())
    }
}

fn render_index(records: &[EndpointRecord]) -> String {
    let mut out = String::from("# API Reference\n\n");
    out.push_str(&format!(
        "Generated {}.\n",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));

    for group in routedoc_staging::group_records(records) {
        out.push_str(&format!("\n## {}\n\n", group.name));
        if let Some(description) = &group.description {
            out.push_str(&format!("{description}\n\n"));
        }
        for endpoint in &group.endpoints {
            let title = endpoint
                .metadata
                .title
                .as_deref()
                .unwrap_or(&endpoint.uri);
            let auth = if endpoint.metadata.authenticated {
                " (requires authentication)"
            } else {
                ""
            };
            out.push_str(&format!(
                "- `{}` — {title}{auth}\n",
                endpoint.endpoint_name()
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use routedoc_shared::Metadata;

    fn record(group: &str, title: &str, authenticated: bool) -> EndpointRecord {
        EndpointRecord {
            metadata: Metadata {
                group_name: Some(group.into()),
                title: Some(title.into()),
                authenticated,
                ..Default::default()
            },
            method: "GET".into(),
            uri: "users".into(),
            headers: BTreeMap::new(),
            url_parameters: BTreeMap::new(),
            query_parameters: BTreeMap::new(),
            body_parameters: BTreeMap::new(),
            responses: vec![],
        }
    }

    #[test]
    fn writes_grouped_index() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let writer = IndexWriter::new(tmp.path().join("docs"));

        writer
            .write_docs(&[record("Users", "List users", true)], false)
            .expect("write");

        let content =
            std::fs::read_to_string(tmp.path().join("docs/index.md")).expect("read index");
        assert!(content.contains("## Users"));
        assert!(content.contains("`GET users` — List users (requires authentication)"));
    }

    #[test]
    fn preserves_existing_index_without_force() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let docs = tmp.path().join("docs");
        std::fs::create_dir_all(&docs).expect("mkdir");
        std::fs::write(docs.join("index.md"), "hand-edited").expect("seed");

        let writer = IndexWriter::new(&docs);
        writer
            .write_docs(&[record("Users", "List users", false)], false)
            .expect("write");

        let content = std::fs::read_to_string(docs.join("index.md")).expect("read");
        assert_eq!(content, "hand-edited");
    }

    #[test]
    fn force_overwrites_existing_index() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let docs = tmp.path().join("docs");
        std::fs::create_dir_all(&docs).expect("mkdir");
        std::fs::write(docs.join("index.md"), "hand-edited").expect("seed");

        let writer = IndexWriter::new(&docs);
        writer
            .write_docs(&[record("Users", "List users", false)], true)
            .expect("write");

        let content = std::fs::read_to_string(docs.join("index.md")).expect("read");
        assert!(content.contains("## Users"));
    }
}
