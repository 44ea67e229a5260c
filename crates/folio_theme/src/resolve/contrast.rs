//! Contrast text selection

use crate::role::ColorRole;
use crate::state::ThemeState;
use folio_core::Color;
use serde::Serialize;

/// Luminance threshold (scaled by 1000) above which a background counts as light
pub const CONTRAST_THRESHOLD_MILLI: u32 = 155_000;

/// Which text color reads well on a given background
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastText {
    /// Light background, use dark text
    Dark,
    /// Dark background, use light text
    Light,
}

impl ContrastText {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Pick dark or light text for a background hex.
///
/// Luminance is `Y = 0.299R + 0.587G + 0.114B`; `Y > 155` selects dark text.
/// Malformed input resolves to [`ContrastText::Dark`].
pub fn resolve_contrast_text(hex: &str) -> ContrastText {
    match Color::parse_hex(hex) {
        Some(color) if color.luma_milli() <= CONTRAST_THRESHOLD_MILLI => ContrastText::Light,
        Some(_) => ContrastText::Dark,
        None => {
            tracing::trace!(hex, "contrast requested for malformed hex");
            ContrastText::Dark
        }
    }
}

/// `(r, g, b)` for a 6-digit hex string, `(0, 0, 0)` when malformed.
pub fn hex_to_rgb_triplet(hex: &str) -> (u8, u8, u8) {
    Color::parse_hex(hex)
        .map(|c| c.to_rgb8())
        .unwrap_or((0, 0, 0))
}

/// The theme's own text color for content placed on `background_hex`.
pub fn resolve_text_on(theme: &ThemeState, background_hex: &str) -> Color {
    match resolve_contrast_text(background_hex) {
        ContrastText::Dark => theme.color(ColorRole::DarkText),
        ContrastText::Light => theme.color(ColorRole::LightText),
    }
}
