//! Built-in theme presets.

use crate::error::ThemeError;
use crate::role::ColorRole;
use crate::state::{FillMode, ThemeState};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Neutral light theme with a blue brand color.
    Studio,
    /// Dark slate surfaces with an indigo accent.
    Midnight,
    /// Earthy greens, soft depth.
    Forest,
    /// Warm gradient buttons on cream.
    Sunset,
    /// Black and white, no shadows.
    Monochrome,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::Midnight => "midnight",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Monochrome => "monochrome",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::Midnight => "Midnight",
            Self::Forest => "Forest",
            Self::Sunset => "Sunset",
            Self::Monochrome => "Monochrome",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Studio => "Clean white surfaces and a confident blue for product documentation",
            Self::Midnight => "Deep slate surfaces with indigo accents for dark-mode systems",
            Self::Forest => "Calm greens and warm neutrals with rounded, softly raised cards",
            Self::Sunset => "Orange-to-rose gradient actions over a warm cream canvas",
            Self::Monochrome => "Strict black and white with square corners and flat depth",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Studio,
            ThemePreset::Midnight,
            ThemePreset::Forest,
            ThemePreset::Sunset,
            ThemePreset::Monochrome,
        ];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Result<Self, ThemeError> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| ThemeError::UnknownPreset(id.to_string()))
    }

    /// Build the complete theme for this preset.
    pub fn theme(self) -> ThemeState {
        match self {
            Self::Studio => build_theme(studio_palette(), studio_shape()),
            Self::Midnight => build_theme(midnight_palette(), midnight_shape()),
            Self::Forest => build_theme(forest_palette(), forest_shape()),
            Self::Sunset => build_theme(sunset_palette(), sunset_shape()),
            Self::Monochrome => build_theme(monochrome_palette(), monochrome_shape()),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

/// A preset as listed to users: identity plus the complete theme.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub theme: ThemeState,
}

/// Snapshot of every preset, in catalog order.
pub fn preset_catalog() -> Vec<PresetInfo> {
    ThemePreset::all()
        .iter()
        .map(|&preset| PresetInfo {
            id: preset.id(),
            name: preset.display_name(),
            description: preset.description(),
            theme: preset.theme(),
        })
        .collect()
}

#[derive(Clone, Copy)]
struct Palette {
    primary: &'static str,
    secondary: &'static str,
    background: &'static str,
    background2: &'static str,
    background3: &'static str,
    dark_text: &'static str,
    gray_text: &'static str,
    light_text: &'static str,
    active: &'static str,
    form_error: &'static str,
    input_border: &'static str,
    primary_btn_text: &'static str,
    secondary_btn_text: &'static str,
    tertiary_btn_text: &'static str,
}

#[derive(Clone, Copy)]
struct Shape {
    border_radius: f32,
    btn_padding: (f32, f32),
    layout_gap: f32,
    section_padding: f32,
    depth: f32,
    font_family: &'static str,
    secondary_font_family: &'static str,
    fill_mode: FillMode,
    gradient_angle: f32,
    button_hover_opacity: f32,
}

fn build_theme(palette: Palette, shape: Shape) -> ThemeState {
    let colors = [
        (ColorRole::Primary, palette.primary),
        (ColorRole::Secondary, palette.secondary),
        (ColorRole::Background, palette.background),
        (ColorRole::Background2, palette.background2),
        (ColorRole::Background3, palette.background3),
        (ColorRole::DarkText, palette.dark_text),
        (ColorRole::GrayText, palette.gray_text),
        (ColorRole::LightText, palette.light_text),
        (ColorRole::ActiveColor, palette.active),
        (ColorRole::FormErrorColor, palette.form_error),
        (ColorRole::InputBorder, palette.input_border),
        (ColorRole::PrimaryBtnText, palette.primary_btn_text),
        (ColorRole::SecondaryBtnText, palette.secondary_btn_text),
        (ColorRole::TertiaryBtnText, palette.tertiary_btn_text),
    ];

    colors
        .into_iter()
        .fold(ThemeState::new(), |theme, (role, hex)| {
            theme.with_color(role, hex)
        })
        .with_border_radius(shape.border_radius)
        .with_btn_padding(shape.btn_padding.0, shape.btn_padding.1)
        .with_layout_gap(shape.layout_gap)
        .with_section_padding(shape.section_padding)
        .with_depth(shape.depth)
        .with_font_family(shape.font_family)
        .with_secondary_font_family(shape.secondary_font_family)
        .with_fill_mode(shape.fill_mode)
        .with_gradient_angle(shape.gradient_angle)
        .with_button_hover_opacity(shape.button_hover_opacity)
}

fn studio_palette() -> Palette {
    Palette {
        primary: "#2563EB",
        secondary: "#7C3AED",
        background: "#FFFFFF",
        background2: "#F8FAFC",
        background3: "#F1F5F9",
        dark_text: "#0F172A",
        gray_text: "#64748B",
        light_text: "#FFFFFF",
        active: "#2563EB",
        form_error: "#EF4444",
        input_border: "#E2E8F0",
        primary_btn_text: "#FFFFFF",
        secondary_btn_text: "#FFFFFF",
        tertiary_btn_text: "#2563EB",
    }
}

fn studio_shape() -> Shape {
    Shape {
        border_radius: 8.0,
        btn_padding: (24.0, 12.0),
        layout_gap: 16.0,
        section_padding: 64.0,
        depth: 1.0,
        font_family: "Inter",
        secondary_font_family: "Inter",
        fill_mode: FillMode::Solid,
        gradient_angle: 135.0,
        button_hover_opacity: 90.0,
    }
}

fn midnight_palette() -> Palette {
    Palette {
        primary: "#6366F1",
        secondary: "#22D3EE",
        background: "#0B1120",
        background2: "#111827",
        background3: "#1E293B",
        dark_text: "#F8FAFC",
        gray_text: "#94A3B8",
        light_text: "#0B1120",
        active: "#818CF8",
        form_error: "#F87171",
        input_border: "#334155",
        primary_btn_text: "#FFFFFF",
        secondary_btn_text: "#0B1120",
        tertiary_btn_text: "#A5B4FC",
    }
}

fn midnight_shape() -> Shape {
    Shape {
        border_radius: 10.0,
        btn_padding: (22.0, 11.0),
        layout_gap: 18.0,
        section_padding: 72.0,
        depth: 1.5,
        font_family: "IBM Plex Sans",
        secondary_font_family: "IBM Plex Mono",
        fill_mode: FillMode::Solid,
        gradient_angle: 135.0,
        button_hover_opacity: 85.0,
    }
}

fn forest_palette() -> Palette {
    Palette {
        primary: "#15803D",
        secondary: "#CA8A04",
        background: "#FBFAF5",
        background2: "#F3F1E7",
        background3: "#E7E5D8",
        dark_text: "#1C2A1E",
        gray_text: "#5F6B5C",
        light_text: "#FBFAF5",
        active: "#16A34A",
        form_error: "#B91C1C",
        input_border: "#D6D3C4",
        primary_btn_text: "#FFFFFF",
        secondary_btn_text: "#1C2A1E",
        tertiary_btn_text: "#15803D",
    }
}

fn forest_shape() -> Shape {
    Shape {
        border_radius: 14.0,
        btn_padding: (26.0, 13.0),
        layout_gap: 20.0,
        section_padding: 80.0,
        depth: 0.75,
        font_family: "Nunito",
        secondary_font_family: "Lora",
        fill_mode: FillMode::Solid,
        gradient_angle: 135.0,
        button_hover_opacity: 90.0,
    }
}

fn sunset_palette() -> Palette {
    Palette {
        primary: "#F97316",
        secondary: "#E11D48",
        background: "#FFF7ED",
        background2: "#FFEDD5",
        background3: "#FED7AA",
        dark_text: "#431407",
        gray_text: "#9A3412",
        light_text: "#FFFFFF",
        active: "#EA580C",
        form_error: "#BE123C",
        input_border: "#FDBA74",
        primary_btn_text: "#FFFFFF",
        secondary_btn_text: "#FFFFFF",
        tertiary_btn_text: "#C2410C",
    }
}

fn sunset_shape() -> Shape {
    Shape {
        border_radius: 999.0,
        btn_padding: (28.0, 12.0),
        layout_gap: 16.0,
        section_padding: 64.0,
        depth: 2.0,
        font_family: "Poppins",
        secondary_font_family: "Inter",
        fill_mode: FillMode::Gradient,
        gradient_angle: 120.0,
        button_hover_opacity: 92.0,
    }
}

fn monochrome_palette() -> Palette {
    Palette {
        primary: "#000000",
        secondary: "#404040",
        background: "#FFFFFF",
        background2: "#FAFAFA",
        background3: "#F0F0F0",
        dark_text: "#000000",
        gray_text: "#6B6B6B",
        light_text: "#FFFFFF",
        active: "#000000",
        form_error: "#D00000",
        input_border: "#000000",
        primary_btn_text: "#FFFFFF",
        secondary_btn_text: "#FFFFFF",
        tertiary_btn_text: "#000000",
    }
}

fn monochrome_shape() -> Shape {
    Shape {
        border_radius: 0.0,
        btn_padding: (20.0, 10.0),
        layout_gap: 12.0,
        section_padding: 48.0,
        depth: 0.0,
        font_family: "Helvetica Neue",
        secondary_font_family: "Georgia",
        fill_mode: FillMode::Solid,
        gradient_angle: 135.0,
        button_hover_opacity: 80.0,
    }
}
