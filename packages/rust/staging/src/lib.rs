//! Grouped intermediate persistence for extracted endpoint records.
//!
//! Extraction output is staged on disk between the extract and write stages
//! so the two can run in separate invocations. Each distinct group of
//! records becomes one YAML file named by a zero-based index
//! (`0.yaml`, `1.yaml`, …) inside the staging directory. The files are
//! deliberately human-readable: authors edit them out-of-band and re-run
//! only the write stage.
//!
//! Indices are dense per run but carry no identity across runs; consumers
//! identify a record by its method + URI.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use routedoc_shared::{DEFAULT_GROUP_NAME, EndpointRecord, Group, Result, RoutedocError};

/// File extension for staged group files.
pub const STAGED_EXTENSION: &str = "yaml";

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Bucket records by group name.
///
/// Group order is first appearance in the record sequence; within-group
/// order is the record sequence itself. Records without a group name fall
/// back to [`DEFAULT_GROUP_NAME`]. The first non-empty group description
/// observed wins.
pub fn group_records(records: &[EndpointRecord]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for record in records {
        let name = record
            .metadata
            .group_name
            .clone()
            .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());

        let position = match groups.iter().position(|g| g.name == name) {
            Some(i) => i,
            None => {
                groups.push(Group {
                    name,
                    description: None,
                    endpoints: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[position];

        if group.description.is_none() {
            group.description = record.metadata.group_description.clone();
        }
        group.endpoints.push(record.clone());
    }

    groups
}

// ---------------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------------

/// Persist the record sequence as grouped, numbered YAML files.
///
/// Creates the staging directory if missing (a creation failure is fatal),
/// clears group files left over from a previous run, then writes one file
/// per group in group order. Each file lands via temp-file-then-rename, so
/// a half-written group is never observable under its final name.
///
/// Returns the written paths in index order.
#[instrument(skip_all, fields(dir = %dir.display(), record_count = records.len()))]
pub fn persist(dir: &Path, records: &[EndpointRecord]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|e| RoutedocError::io(dir, e))?;

    clear_staged(dir)?;

    let groups = group_records(records);
    let mut written = Vec::with_capacity(groups.len());

    for (i, group) in groups.iter().enumerate() {
        let target = dir.join(format!("{i}.{STAGED_EXTENSION}"));
        let temp = dir.join(format!(".{i}.{STAGED_EXTENSION}.tmp"));

        let yaml = serde_yaml::to_string(group).map_err(|e| {
            RoutedocError::validation(format!("YAML serialization failed for group {}: {e}", group.name))
        })?;

        std::fs::write(&temp, &yaml).map_err(|e| RoutedocError::io(&temp, e))?;
        std::fs::rename(&temp, &target).map_err(|e| RoutedocError::io(&target, e))?;

        debug!(
            file = %target.display(),
            group = %group.name,
            endpoints = group.endpoints.len(),
            "wrote group file"
        );
        written.push(target);
    }

    info!(
        groups = written.len(),
        records = records.len(),
        "staged endpoint records"
    );

    Ok(written)
}

/// Remove staged group files from a previous run.
///
/// Run before every write so a shrinking group set never leaves stale
/// high-numbered files behind.
fn clear_staged(dir: &Path) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| RoutedocError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| RoutedocError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(STAGED_EXTENSION) {
            std::fs::remove_file(&path).map_err(|e| RoutedocError::io(&path, e))?;
            debug!(file = %path.display(), "removed stale group file");
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// Reload every staged record, preserving group-then-within-group order.
///
/// Every file with the staged extension is read, including group files an
/// author added by hand. Index-named files come first, in numeric order
/// (not directory listing order); any remaining files follow in name
/// order. A missing directory or one with no matching files yields an
/// empty sequence, not an error.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn load(dir: &Path) -> Result<Vec<EndpointRecord>> {
    if !dir.is_dir() {
        debug!("staging directory absent, nothing to load");
        return Ok(Vec::new());
    }

    let mut staged: Vec<(Option<usize>, String, PathBuf)> = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(|e| RoutedocError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| RoutedocError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(STAGED_EXTENSION) {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        staged.push((stem.parse::<usize>().ok(), stem, path));
    }

    // Numeric indices first in numeric order, hand-added files after.
    staged.sort_by(|(a_idx, a_stem, _), (b_idx, b_stem, _)| match (a_idx, b_idx) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a_stem.cmp(b_stem),
    });

    let mut records = Vec::new();
    for (_, _, path) in &staged {
        let content =
            std::fs::read_to_string(path).map_err(|e| RoutedocError::io(path, e))?;
        let group: Group = serde_yaml::from_str(&content).map_err(|e| {
            RoutedocError::validation(format!("malformed group file {}: {e}", path.display()))
        })?;
        records.extend(group.endpoints);
    }

    info!(files = staged.len(), records = records.len(), "loaded staged records");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use routedoc_shared::{Metadata, Parameter, Response};

    fn record(group: Option<&str>, method: &str, uri: &str, title: &str) -> EndpointRecord {
        EndpointRecord {
            metadata: Metadata {
                group_name: group.map(Into::into),
                group_description: None,
                title: Some(title.into()),
                description: None,
                authenticated: false,
            },
            method: method.into(),
            uri: uri.into(),
            headers: BTreeMap::new(),
            url_parameters: BTreeMap::new(),
            query_parameters: BTreeMap::new(),
            body_parameters: BTreeMap::new(),
            responses: vec![],
        }
    }

    fn sample_records() -> Vec<EndpointRecord> {
        vec![
            record(Some("Users"), "GET", "users", "List users"),
            record(Some("Orders"), "GET", "orders", "List orders"),
            record(Some("Users"), "POST", "users", "Create a user"),
        ]
    }

    #[test]
    fn grouping_is_stable_first_seen() {
        let groups = group_records(&sample_records());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Users");
        assert_eq!(groups[1].name, "Orders");
        // Within-group order is extraction order.
        assert_eq!(groups[0].endpoints[0].method, "GET");
        assert_eq!(groups[0].endpoints[1].method, "POST");
    }

    #[test]
    fn ungrouped_records_fall_back_to_default() {
        let groups = group_records(&[record(None, "GET", "ping", "Ping")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, DEFAULT_GROUP_NAME);
    }

    #[test]
    fn first_group_description_wins() {
        let mut a = record(Some("Users"), "GET", "users", "List users");
        a.metadata.group_description = Some("Managing users.".into());
        let mut b = record(Some("Users"), "POST", "users", "Create a user");
        b.metadata.group_description = Some("Something else.".into());

        let groups = group_records(&[a, b]);
        assert_eq!(groups[0].description.as_deref(), Some("Managing users."));
    }

    #[test]
    fn persist_writes_one_file_per_group() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");

        let written = persist(&dir, &sample_records()).expect("persist");

        assert_eq!(written.len(), 2);
        assert!(dir.join("0.yaml").exists());
        assert!(dir.join("1.yaml").exists());
        assert!(!dir.join("2.yaml").exists());
    }

    #[test]
    fn persist_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");

        persist(&dir, &sample_records()).expect("persist");

        for entry in std::fs::read_dir(&dir).expect("read_dir") {
            let name = entry.expect("entry").file_name().to_string_lossy().to_string();
            assert!(!name.starts_with('.'), "temp file left behind: {name}");
        }
    }

    #[test]
    fn roundtrip_preserves_every_field() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");

        let mut rich = record(Some("Users"), "GET", "users/{id}", "Show a user");
        rich.metadata.authenticated = true;
        rich.headers
            .insert("Accept".into(), "application/json".into());
        rich.url_parameters.insert(
            "id".into(),
            Parameter {
                type_name: "integer".into(),
                description: Some("User id.".into()),
                required: true,
                example: Some(serde_yaml::Value::from(17)),
            },
        );
        rich.responses.push(Response {
            status: 404,
            description: Some("Not found.".into()),
            content: None,
        });

        let records = vec![
            rich,
            record(Some("Orders"), "GET", "orders", "List orders"),
            record(Some("Users"), "POST", "users", "Create a user"),
        ];

        persist(&dir, &records).expect("persist");
        let loaded = load(&dir).expect("load");

        // load returns group-then-within-group order: the grouped form of
        // the original sequence.
        let grouped: Vec<EndpointRecord> = group_records(&records)
            .into_iter()
            .flat_map(|g| g.endpoints)
            .collect();
        assert_eq!(loaded, grouped);
    }

    #[test]
    fn load_of_empty_directory_is_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        assert!(load(tmp.path()).expect("load").is_empty());
    }

    #[test]
    fn load_of_missing_directory_is_empty() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("never-created");
        assert!(load(&missing).expect("load").is_empty());
    }

    #[test]
    fn load_ignores_files_with_other_extensions() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");
        persist(&dir, &[record(Some("Users"), "GET", "users", "List users")])
            .expect("persist");
        std::fs::write(dir.join("README.md"), "hands off").expect("write");

        let loaded = load(&dir).expect("load");
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn load_includes_hand_added_group_files_after_indexed_ones() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");
        persist(&dir, &[record(Some("Users"), "GET", "users", "List users")])
            .expect("persist");

        let custom = Group {
            name: "Webhooks".into(),
            description: None,
            endpoints: vec![record(Some("Webhooks"), "POST", "hooks", "Receive a hook")],
        };
        std::fs::write(
            dir.join("custom.yaml"),
            serde_yaml::to_string(&custom).expect("serialize"),
        )
        .expect("write");

        let loaded = load(&dir).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].uri, "users");
        assert_eq!(loaded[1].uri, "hooks");
    }

    #[test]
    fn load_orders_numerically_not_lexicographically() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");

        // Eleven groups: lexicographic order would put 10.yaml before 2.yaml.
        let records: Vec<EndpointRecord> = (0..11)
            .map(|i| {
                record(
                    Some(&format!("Group{i}")),
                    "GET",
                    &format!("things/{i}"),
                    "Thing",
                )
            })
            .collect();

        persist(&dir, &records).expect("persist");
        let loaded = load(&dir).expect("load");

        let uris: Vec<&str> = loaded.iter().map(|r| r.uri.as_str()).collect();
        let expected: Vec<String> = (0..11).map(|i| format!("things/{i}")).collect();
        assert_eq!(uris, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn repersist_clears_stale_group_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".endpoints");

        persist(&dir, &sample_records()).expect("first persist");
        assert!(dir.join("1.yaml").exists());

        // Second run collapses to one group; 1.yaml must not linger.
        persist(&dir, &[record(Some("Users"), "GET", "users", "List users")])
            .expect("second persist");

        assert!(dir.join("0.yaml").exists());
        assert!(!dir.join("1.yaml").exists());
        assert_eq!(load(&dir).expect("load").len(), 1);
    }
}
