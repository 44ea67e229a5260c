//! Semantic color roles
//!
//! Every color a theme can carry is addressed through [`ColorRole`]. Each role
//! knows its wire field name, its CSS custom property, and where to fall back
//! when a theme leaves it out or supplies something that is not a 6-digit hex.

use crate::error::ThemeError;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Semantic color role keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    // Brand
    Primary,
    Secondary,

    // Surfaces
    Background,
    Background2,
    Background3,

    // Text
    DarkText,
    GrayText,
    LightText,

    // Interactive / status
    ActiveColor,
    FormErrorColor,
    InputBorder,

    // Buttons
    PrimaryBtnText,
    SecondaryBtnText,
    TertiaryBtnText,
}

/// Where a role resolves to when its own value is unusable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFallback {
    /// A literal `0xRRGGBB` value
    Literal(u32),
    /// Another role's resolved value
    Role(ColorRole),
}

impl ColorRole {
    pub const ALL: [ColorRole; 14] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Background,
        ColorRole::Background2,
        ColorRole::Background3,
        ColorRole::DarkText,
        ColorRole::GrayText,
        ColorRole::LightText,
        ColorRole::ActiveColor,
        ColorRole::FormErrorColor,
        ColorRole::InputBorder,
        ColorRole::PrimaryBtnText,
        ColorRole::SecondaryBtnText,
        ColorRole::TertiaryBtnText,
    ];

    /// Field name used in theme documents
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Background => "background",
            Self::Background2 => "background2",
            Self::Background3 => "background3",
            Self::DarkText => "darkText",
            Self::GrayText => "grayText",
            Self::LightText => "lightText",
            Self::ActiveColor => "activeColor",
            Self::FormErrorColor => "formErrorColor",
            Self::InputBorder => "inputBorder",
            Self::PrimaryBtnText => "primaryBtnText",
            Self::SecondaryBtnText => "secondaryBtnText",
            Self::TertiaryBtnText => "tertiaryBtnText",
        }
    }

    /// CSS custom property carrying this role
    pub fn css_var(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::Secondary => "--secondary",
            Self::Background => "--background",
            Self::Background2 => "--background-2",
            Self::Background3 => "--background-3",
            Self::DarkText => "--dark-text",
            Self::GrayText => "--gray-text",
            Self::LightText => "--light-text",
            Self::ActiveColor => "--active-color",
            Self::FormErrorColor => "--form-error-color",
            Self::InputBorder => "--input-border",
            Self::PrimaryBtnText => "--primary-btn-text",
            Self::SecondaryBtnText => "--secondary-btn-text",
            Self::TertiaryBtnText => "--tertiary-btn-text",
        }
    }

    pub fn fallback(self) -> ColorFallback {
        use ColorFallback::{Literal, Role};
        match self {
            Self::Primary => Literal(0x2563EB),
            Self::Secondary => Literal(0x7C3AED),
            Self::Background => Literal(0xFFFFFF),
            Self::Background2 => Literal(0xF8FAFC),
            Self::Background3 => Literal(0xF1F5F9),
            Self::DarkText => Literal(0x0F172A),
            Self::GrayText => Literal(0x64748B),
            Self::LightText => Literal(0xFFFFFF),
            Self::ActiveColor => Role(Self::Primary),
            Self::FormErrorColor => Literal(0xEF4444),
            Self::InputBorder => Literal(0xE2E8F0),
            Self::PrimaryBtnText => Role(Self::LightText),
            Self::SecondaryBtnText => Role(Self::LightText),
            Self::TertiaryBtnText => Role(Self::Primary),
        }
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for ColorRole {
    type Err = ThemeError;

    /// Accepts `darkText`, `dark-text`, `dark_text`, and `DARKTEXT` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Self::ALL
            .into_iter()
            .find(|role| squash(role.field_name()) == wanted)
            .ok_or_else(|| ThemeError::UnknownColorRole(s.to_string()))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
