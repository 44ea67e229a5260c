//! Style resolution
//!
//! Pure functions from a [`ThemeState`](crate::ThemeState) plus a semantic
//! role to concrete paint values. Every function is total: missing or invalid
//! theme fields resolve through their fallbacks, never through an error.

mod button;
mod contrast;
mod swatch;

pub use button::*;
pub use contrast::*;
pub use swatch::*;

use crate::error::ThemeError;
use crate::state::ThemeState;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which of the theme's two font slots a text element uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    #[default]
    Primary,
    Secondary,
}

impl FromStr for FontRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(ThemeError::UnknownKeyword {
                kind: "font role",
                value: s.to_string(),
            }),
        }
    }
}

pub fn resolve_font(theme: &ThemeState, role: FontRole) -> &str {
    match role {
        FontRole::Primary => theme.font_family(),
        FontRole::Secondary => theme.secondary_font_family(),
    }
}
