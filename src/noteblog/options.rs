//! Per-conversion settings.

use serde::Deserialize;

/// Image directory used when nothing else is configured.
pub const DEFAULT_IMAGE_DIRECTORY: &str = "/directory_name";

/// Class attribute written on every `<table>`.
pub const DEFAULT_TABLE_CLASS: &str = "table is-hoverable";

/// How a footnote definition without an earlier inline reference is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrphanFootnotes {
    /// Give the definition the next free sequential number.
    #[default]
    Renumber,
    /// Consume the definition line and emit nothing.
    Drop,
}

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Prefix of every `<img src>`, used verbatim.
    pub image_directory: String,
    pub table_class: String,
    pub orphan_footnotes: OrphanFootnotes,
}

impl ConvertOptions {
    pub fn with_image_directory(image_directory: impl Into<String>) -> Self {
        Self {
            image_directory: image_directory.into(),
            ..Self::default()
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            image_directory: DEFAULT_IMAGE_DIRECTORY.to_string(),
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            orphan_footnotes: OrphanFootnotes::default(),
        }
    }
}
