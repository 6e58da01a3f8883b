//! Roadmap snapshot files
//!
//! A snapshot is what the application layer hands over: either a whole
//! roadmap item or a bare list of deliverables, as JSON or YAML.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::domain::{Deliverable, RoadmapItem};

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Picks the format from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SnapshotFormat::Yaml
            }
            _ => SnapshotFormat::Json,
        }
    }
}

/// Loads a snapshot file into a roadmap item
///
/// A bare deliverable list becomes an item named after the file.
pub fn load_snapshot(path: &Path) -> Result<RoadmapItem> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roadmap");

    parse_snapshot(&content, SnapshotFormat::from_path(path), name)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))
}

/// Parses snapshot text; `name` labels a bare deliverable list
pub fn parse_snapshot(content: &str, format: SnapshotFormat, name: &str) -> Result<RoadmapItem> {
    let item = match format {
        SnapshotFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(content).context("Invalid JSON")?;
            if value.is_array() {
                bare_item(name, serde_json::from_value(value)?)
            } else {
                serde_json::from_value(value)?
            }
        }
        SnapshotFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(content).context("Invalid YAML")?;
            if value.is_sequence() {
                bare_item(name, serde_yaml::from_value(value)?)
            } else {
                serde_yaml::from_value(value)?
            }
        }
    };

    check_unique_ids(&item)?;
    Ok(item)
}

fn bare_item(name: &str, deliverables: Vec<Deliverable>) -> RoadmapItem {
    let mut item = RoadmapItem::new(name, name);
    item.deliverables = deliverables;
    item
}

fn check_unique_ids(item: &RoadmapItem) -> Result<()> {
    let mut seen = HashSet::new();
    for deliverable in &item.deliverables {
        if !seen.insert(deliverable.id.as_str()) {
            bail!(
                "Duplicate deliverable id '{}' in roadmap item '{}'",
                deliverable.id,
                item.id
            );
        }
    }
    Ok(())
}
