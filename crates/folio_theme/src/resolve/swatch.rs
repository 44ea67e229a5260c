//! Color swatch card geometry

use crate::role::ColorRole;
use crate::state::ThemeState;
use folio_core::{Color, Shadow};
use serde::Serialize;

/// Box geometry for a color swatch card
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchGeometry {
    pub radius: f32,
    pub padding: f32,
    pub margin_bottom: f32,
    pub shadow: Option<Shadow>,
}

const SWATCH_OFFSET_Y: f32 = 4.0;
const SWATCH_BLUR: f32 = 12.0;
const SWATCH_SPREAD: f32 = 2.0;

/// Resolve swatch geometry; spacing derives from `layoutGap`, shadow from `depth`.
///
/// A pure white page background gets a neutral dark shadow; anything else gets
/// a primary-tinted one. Zero depth removes the shadow.
pub fn resolve_swatch_geometry(theme: &ThemeState) -> SwatchGeometry {
    let gap = theme.layout_gap();
    let depth = theme.depth();

    let shadow = (depth > 0.0).then(|| {
        let color = if theme.color(ColorRole::Background).is_white() {
            Color::BLACK.with_alpha(0.08)
        } else {
            theme.color(ColorRole::Primary).with_alpha(0.18)
        };
        Shadow::new(
            0.0,
            SWATCH_OFFSET_Y,
            SWATCH_BLUR * depth,
            SWATCH_SPREAD * depth,
            color,
        )
    });

    SwatchGeometry {
        radius: theme.border_radius(),
        padding: gap * 0.625,
        margin_bottom: gap * 0.5,
        shadow,
    }
}
