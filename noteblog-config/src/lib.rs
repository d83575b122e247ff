//! Configuration loader for noteblog.
//!
//! `defaults/noteblog.default.toml` is embedded into the binary so that the
//! documented defaults and the runtime behavior stay in sync. On top of it the
//! [`Loader`] layers, in order: a [`NOTE_CONFIG_FILE`] sitting next to the note
//! being converted, an explicit user file, and single-key overrides. The result
//! deserializes into [`NoteblogConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use noteblog::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/noteblog.default.toml");

/// Per-directory settings file picked up next to a note.
pub const NOTE_CONFIG_FILE: &str = "noteblog.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteblogConfig {
    pub convert: ConvertOptions,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer the [`NOTE_CONFIG_FILE`] in the directory of `note`, if there is one.
    pub fn with_note_settings(self, note: impl AsRef<Path>) -> Self {
        let directory = note.as_ref().parent().unwrap_or_else(|| Path::new(""));
        self.with_optional_file(directory.join(NOTE_CONFIG_FILE))
    }

    /// Apply a single key/value override, e.g. `convert.table_class`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<NoteblogConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteblog::OrphanFootnotes;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.convert, ConvertOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.orphan_footnotes", "drop")
            .expect("override to apply")
            .set_override("convert.image_directory", "/img")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.convert.orphan_footnotes, OrphanFootnotes::Drop);
        assert_eq!(config.convert.image_directory, "/img");
        assert_eq!(config.convert.table_class, "table is-hoverable");
    }

    #[test]
    fn layers_user_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("noteblog.toml");
        fs::write(&path, "[convert]\ntable_class = \"striped\"\n").expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.convert.table_class, "striped");
        assert_eq!(config.convert.image_directory, "/directory_name");
    }

    #[test]
    fn layers_settings_next_to_the_note() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(NOTE_CONFIG_FILE),
            "[convert]\nimage_directory = \"/notes/img\"\n",
        )
        .expect("write config");

        let config = Loader::new()
            .with_note_settings(dir.path().join("post.md"))
            .build()
            .expect("config to build");
        assert_eq!(config.convert.image_directory, "/notes/img");
    }

    #[test]
    fn note_without_settings_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_note_settings(dir.path().join("post.md"))
            .build()
            .expect("config to build");
        assert_eq!(config.convert, ConvertOptions::default());
    }

    #[test]
    fn explicit_file_wins_over_note_settings() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join(NOTE_CONFIG_FILE),
            "[convert]\ntable_class = \"local\"\n",
        )
        .expect("write config");
        let explicit = dir.path().join("site.toml");
        fs::write(&explicit, "[convert]\ntable_class = \"site\"\n").expect("write config");

        let config = Loader::new()
            .with_note_settings(dir.path().join("post.md"))
            .with_file(&explicit)
            .build()
            .expect("config to build");
        assert_eq!(config.convert.table_class, "site");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_optional_file(dir.path().join("absent.toml"))
            .build()
            .expect("config to build");
        assert_eq!(config.convert, ConvertOptions::default());
    }

    #[test]
    fn rejects_unknown_orphan_policy() {
        let result = Loader::new()
            .set_override("convert.orphan_footnotes", "keep")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
