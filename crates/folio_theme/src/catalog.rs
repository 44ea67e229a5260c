//! Ordered color catalogue
//!
//! Projects a theme onto a fixed list of named swatches, grouped brand
//! identity → surfaces → typography → interactive → component specific.
//! The order never depends on the theme, so consumers can lay entries out
//! deterministically.

use crate::role::ColorRole;
use crate::state::ThemeState;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ColorCategory {
    #[serde(rename = "Brand Identity")]
    BrandIdentity,
    #[serde(rename = "Surfaces")]
    Surfaces,
    #[serde(rename = "Typography")]
    Typography,
    #[serde(rename = "Interactive")]
    Interactive,
    #[serde(rename = "Component Specific")]
    ComponentSpecific,
}

impl ColorCategory {
    pub const ALL: [ColorCategory; 5] = [
        Self::BrandIdentity,
        Self::Surfaces,
        Self::Typography,
        Self::Interactive,
        Self::ComponentSpecific,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BrandIdentity => "Brand Identity",
            Self::Surfaces => "Surfaces",
            Self::Typography => "Typography",
            Self::Interactive => "Interactive",
            Self::ComponentSpecific => "Component Specific",
        }
    }
}

impl Display for ColorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One resolved catalogue swatch
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    pub name: &'static str,
    pub usage: &'static str,
    pub hex: String,
    pub var: &'static str,
    pub category: ColorCategory,
    #[serde(skip)]
    pub role: ColorRole,
}

struct CatalogSlot {
    category: ColorCategory,
    role: ColorRole,
    name: &'static str,
    usage: &'static str,
}

const fn slot(
    category: ColorCategory,
    role: ColorRole,
    name: &'static str,
    usage: &'static str,
) -> CatalogSlot {
    CatalogSlot {
        category,
        role,
        name,
        usage,
    }
}

const CATALOG: [CatalogSlot; 14] = [
    slot(
        ColorCategory::BrandIdentity,
        ColorRole::Primary,
        "Primary",
        "Main brand color, primary actions and highlights",
    ),
    slot(
        ColorCategory::BrandIdentity,
        ColorRole::Secondary,
        "Secondary",
        "Supporting brand accent and gradient end stop",
    ),
    slot(
        ColorCategory::Surfaces,
        ColorRole::Background,
        "Background",
        "Page background",
    ),
    slot(
        ColorCategory::Surfaces,
        ColorRole::Background2,
        "Background 2",
        "Cards and raised sections",
    ),
    slot(
        ColorCategory::Surfaces,
        ColorRole::Background3,
        "Background 3",
        "Insets, wells and muted panels",
    ),
    slot(
        ColorCategory::Typography,
        ColorRole::DarkText,
        "Dark Text",
        "Headings and body copy on light surfaces",
    ),
    slot(
        ColorCategory::Typography,
        ColorRole::GrayText,
        "Gray Text",
        "Captions, hints and secondary copy",
    ),
    slot(
        ColorCategory::Typography,
        ColorRole::LightText,
        "Light Text",
        "Copy on dark or saturated surfaces",
    ),
    slot(
        ColorCategory::Interactive,
        ColorRole::ActiveColor,
        "Active Color",
        "Focus rings, selected and active states",
    ),
    slot(
        ColorCategory::Interactive,
        ColorRole::FormErrorColor,
        "Form Error",
        "Validation errors and destructive states",
    ),
    slot(
        ColorCategory::Interactive,
        ColorRole::InputBorder,
        "Input Border",
        "Form field outlines",
    ),
    slot(
        ColorCategory::ComponentSpecific,
        ColorRole::PrimaryBtnText,
        "Primary Button Text",
        "Label on primary buttons",
    ),
    slot(
        ColorCategory::ComponentSpecific,
        ColorRole::SecondaryBtnText,
        "Secondary Button Text",
        "Label on secondary buttons",
    ),
    slot(
        ColorCategory::ComponentSpecific,
        ColorRole::TertiaryBtnText,
        "Tertiary Button Text",
        "Label and outline of tertiary buttons",
    ),
];

/// Build the fixed-order color catalogue for a theme.
pub fn build_color_catalog(theme: &ThemeState) -> Vec<ColorEntry> {
    CATALOG
        .iter()
        .map(|slot| ColorEntry {
            name: slot.name,
            usage: slot.usage,
            hex: theme.color_hex(slot.role),
            var: slot.role.css_var(),
            category: slot.category,
            role: slot.role,
        })
        .collect()
}

/// Catalogue entries grouped by category, categories in catalogue order.
pub fn group_by_category(entries: &[ColorEntry]) -> Vec<(ColorCategory, Vec<&ColorEntry>)> {
    ColorCategory::ALL
        .into_iter()
        .map(|category| {
            let members: Vec<&ColorEntry> =
                entries.iter().filter(|e| e.category == category).collect();
            (category, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}
