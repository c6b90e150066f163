use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::FramekitError;

/// Placement and timing of one exported frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Horizontal anchor offset from the canvas center (world x points the
    /// opposite way to canvas x)
    pub x: i32,
    /// Vertical anchor offset from the canvas center
    pub y: i32,
    pub delay: i32,
    /// Shared canvas width, equal mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_w: Option<u32>,
    /// Shared canvas height, equal mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_h: Option<u32>,
}

/// Per-frame metadata keyed by frame id.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, ManifestEntry)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, entry: ManifestEntry) {
        self.entries.push((id.into(), entry));
    }

    pub fn get(&self, id: &str) -> Option<&ManifestEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

impl Serialize for Manifest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, entry) in &self.entries {
            map.serialize_entry(id, entry)?;
        }
        map.end()
    }
}

/// Write the manifest as `<base_name>.json` into `output_dir`
pub fn write_manifest(manifest: &Manifest, output_dir: &Path, base_name: &str) -> Result<()> {
    let json_path = output_dir.join(format!("{}.json", base_name));
    let content = serde_json::to_string_pretty(manifest)?;

    fs::write(&json_path, content).map_err(|e| FramekitError::OutputWrite {
        path: json_path,
        source: e,
    })?;

    Ok(())
}
