//! Curated descriptions for known snapshot files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{SnapshotError, SnapshotResult};

/// Built-in descriptions, keyed by exact filename.
pub const BUILTIN_DESCRIPTIONS: [(&str, &str); 6] = [
    ("out1.html", "З тегами CIMEIKA (через редирект)"),
    ("out2.html", "З тегами CIMEIKA (через pipe)"),
    ("out3.html", "Без тегів (мінімальна версія)"),
    ("test_output.html", "Тестовий снапшот"),
    ("pipe_output.html", "Демо через pipe"),
    ("no_tags_output.html", "Демо без тегів"),
];

/// Look up a built-in description.
pub fn builtin_description(filename: &str) -> Option<&'static str> {
    BUILTIN_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, desc)| *desc)
}

#[derive(Debug, Deserialize)]
struct DescriptionsFile {
    #[serde(default)]
    descriptions: BTreeMap<String, String>,
}

/// Built-in descriptions plus entries loaded from a TOML file.
///
/// Loaded entries take precedence over built-in ones.
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    overrides: BTreeMap<String, String>,
}

impl DescriptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `[descriptions]` table from TOML text.
    pub fn from_toml_str(s: &str) -> SnapshotResult<Self> {
        Self::parse(s).map_err(|e| SnapshotError::Config(e.to_string()))
    }

    fn parse(s: &str) -> Result<Self, toml::de::Error> {
        let file: DescriptionsFile = toml::from_str(s)?;
        Ok(DescriptionTable {
            overrides: file.descriptions,
        })
    }

    /// Load a description file from disk.
    pub fn load(path: &Path) -> SnapshotResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            SnapshotError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&s).map_err(|e| SnapshotError::Config(format!("{}: {e}", path.display())))
    }

    pub fn insert(&mut self, filename: impl Into<String>, description: impl Into<String>) {
        self.overrides.insert(filename.into(), description.into());
    }

    pub fn describe(&self, filename: &str) -> Option<&str> {
        self.overrides
            .get(filename)
            .map(String::as_str)
            .or_else(|| builtin_description(filename))
    }
}
