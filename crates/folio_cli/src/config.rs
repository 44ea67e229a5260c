//! Folio configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    /// Directory the file was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// Which theme commands use when neither `--preset` nor `--theme` is given
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Theme file (JSON or TOML); takes precedence over `preset`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_preset() -> String {
    "studio".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            file: None,
        }
    }
}

/// Editor settings
#[derive(Debug, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Prefix for generated block ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

fn default_id_prefix() -> String {
    "block".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from a directory (looks for folio.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!("No {} found in {}", CONFIG_FILE, path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.root = config_path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Explicit `--config` must exist; otherwise use ./folio.toml when present.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_dir(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::load_from_dir(Path::new(".")),
            None => Ok(Self::default()),
        }
    }

    /// The configured theme file, resolved against the config directory
    pub fn theme_file(&self) -> Option<PathBuf> {
        let file = self.theme.file.as_ref()?;
        Some(match &self.root {
            Some(root) if file.is_relative() => root.join(file),
            _ => file.clone(),
        })
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: FolioConfig = toml::from_str("[theme]\npreset = \"forest\"\n").unwrap();
        assert_eq!(config.theme.preset, "forest");
        assert!(config.theme.file.is_none());
        assert_eq!(config.editor.id_prefix, "block");
    }

    #[test]
    fn load_resolves_theme_file_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[theme]\nfile = \"brand.json\"\n\n[editor]\nid_prefix = \"blk\"\n",
        )
        .unwrap();

        let config = FolioConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.theme_file(), Some(dir.path().join("brand.json")));
        assert_eq!(config.editor.id_prefix, "blk");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::discover(Some(dir.path())).unwrap_err();
        assert!(err.to_string().starts_with("No folio.toml found"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = FolioConfig::default();
        let parsed: FolioConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.theme.preset, "studio");
    }
}
