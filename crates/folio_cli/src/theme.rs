//! Theme inspection commands

use anyhow::{Context, Result};
use folio_theme::{
    build_color_catalog, group_by_category, hex_to_rgb_triplet, preset_catalog,
    resolve_button_style, resolve_contrast_text, ButtonVariant, ThemeDiagnostic, ThemePreset,
    ThemeState, VisualStyle,
};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::FolioConfig;

/// Where a command's theme comes from.
///
/// Precedence: `--theme`, `--preset`, the config's theme file, the config's preset.
#[derive(Debug, Default, clap::Args)]
pub struct ThemeSource {
    /// Built-in preset id
    #[arg(long, value_name = "ID", conflicts_with = "theme")]
    pub preset: Option<ThemePreset>,

    /// Theme file (JSON, or TOML with a .toml extension)
    #[arg(long, value_name = "FILE")]
    pub theme: Option<PathBuf>,
}

impl ThemeSource {
    pub fn load(&self, config: &FolioConfig) -> Result<ThemeState> {
        if let Some(path) = &self.theme {
            return load_theme_file(path);
        }
        if let Some(preset) = self.preset {
            debug!(preset = preset.id(), "using preset theme");
            return Ok(preset.theme());
        }
        if let Some(path) = config.theme_file() {
            return load_theme_file(&path);
        }
        let preset = ThemePreset::from_id(&config.theme.preset)
            .with_context(|| "Invalid [theme] preset in folio.toml")?;
        debug!(preset = preset.id(), "using configured preset");
        Ok(preset.theme())
    }
}

pub fn load_theme_file(path: &Path) -> Result<ThemeState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let theme = if is_toml {
        ThemeState::from_toml_str(&content)
    } else {
        ThemeState::from_json_str(&content)
    }
    .with_context(|| format!("Failed to parse theme {}", path.display()))?;

    debug!(path = %path.display(), "loaded theme file");
    Ok(theme)
}

pub fn presets() -> Result<String> {
    let mut out = String::new();
    for info in preset_catalog() {
        writeln!(
            out,
            "{:<12} {:<12} {}",
            info.id, info.name, info.description
        )?;
    }
    Ok(out)
}

pub fn catalog(theme: &ThemeState, json: bool) -> Result<String> {
    let entries = build_color_catalog(theme);
    if json {
        return serde_json::to_string_pretty(&entries)
            .context("Failed to serialize catalogue");
    }

    let mut out = String::new();
    for (category, members) in group_by_category(&entries) {
        writeln!(out, "{category}")?;
        for entry in members {
            writeln!(
                out,
                "  {:<22} {}  {:<22} {}",
                entry.name, entry.hex, entry.var, entry.usage
            )?;
        }
    }
    Ok(out)
}

pub fn button(theme: &ThemeState, variant: ButtonVariant, style: VisualStyle) -> Result<String> {
    let resolved = resolve_button_style(theme, variant, style);
    serde_json::to_string_pretty(&resolved)
        .context("Failed to serialize button style")
}

pub fn contrast(hex: &str) -> String {
    let (r, g, b) = hex_to_rgb_triplet(hex);
    format!("{} ({r}, {g}, {b})", resolve_contrast_text(hex).as_str())
}

pub fn css_variables(theme: &ThemeState) -> Result<String> {
    let mut vars: Vec<(String, String)> = theme.to_css_variable_map().into_iter().collect();
    vars.sort();

    let mut out = String::from(":root {\n");
    for (name, value) in vars {
        writeln!(out, "  {name}: {value};")?;
    }
    out.push_str("}\n");
    Ok(out)
}

/// Report diagnostics; fails when any field holds an unusable value.
pub fn check(theme: &ThemeState) -> Result<String> {
    let diagnostics = theme.diagnostics();
    let invalid = diagnostics
        .iter()
        .filter(|d| !matches!(d, ThemeDiagnostic::MissingField { .. }))
        .count();

    let mut out = String::new();
    for diagnostic in &diagnostics {
        writeln!(out, "{diagnostic}")?;
    }

    if invalid > 0 {
        anyhow::bail!("{out}{invalid} invalid field(s)");
    }
    info!(missing = diagnostics.len(), "theme check passed");
    if diagnostics.is_empty() {
        out.push_str("ok\n");
    }
    Ok(out)
}
