//! Button style resolution

use crate::error::ThemeError;
use crate::role::ColorRole;
use crate::state::{FillMode, ThemeState};
use folio_core::{Border, Color, Fill, LinearGradient, Shadow};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Space between an icon and its label inside a button
pub const BUTTON_ICON_GAP: f32 = 8.0;

/// Semantic role a button plays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

/// Visual treatment, independent of the semantic role
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Flat,
    Soft,
    Neo,
    Glow,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }

    /// Role used for the button's label
    pub fn text_role(self) -> ColorRole {
        match self {
            Self::Primary => ColorRole::PrimaryBtnText,
            Self::Secondary => ColorRole::SecondaryBtnText,
            Self::Tertiary => ColorRole::TertiaryBtnText,
        }
    }

    /// Role the variant's shadows are tinted from
    fn tint_role(self) -> ColorRole {
        match self {
            Self::Secondary => ColorRole::Secondary,
            Self::Primary | Self::Tertiary => ColorRole::Primary,
        }
    }

    fn neo_alpha(self) -> f32 {
        match self {
            Self::Primary => 0.9,
            Self::Secondary => 0.7,
            Self::Tertiary => 0.5,
        }
    }
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [Self::Flat, Self::Soft, Self::Neo, Self::Glow];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Soft => "soft",
            Self::Neo => "neo",
            Self::Glow => "glow",
        }
    }
}

impl Display for ButtonVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for VisualStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownKeyword {
                kind: "button variant",
                value: s.to_string(),
            })
    }
}

impl FromStr for VisualStyle {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownKeyword {
                kind: "visual style",
                value: s.to_string(),
            })
    }
}

/// Concrete, ready-to-apply button style
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    pub background: Fill,
    pub foreground: Color,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub padding_x: f32,
    pub padding_y: f32,
    pub radius: f32,
    pub font_family: String,
    pub gap: f32,
    /// Opacity multiplier the presentation layer applies while hovered
    pub hover_opacity: f32,
}

/// The primary-to-secondary fill used in gradient mode, `None` in solid mode.
pub fn resolve_gradient(theme: &ThemeState) -> Option<LinearGradient> {
    match theme.fill_mode() {
        FillMode::Solid => None,
        FillMode::Gradient => Some(LinearGradient::two_stop(
            theme.gradient_angle(),
            theme.color(ColorRole::Primary),
            theme.color(ColorRole::Secondary),
        )),
    }
}

/// Resolve a button's concrete style from the theme.
///
/// Gradient mode only changes primary buttons, and always wins over the solid
/// background whatever the visual style.
pub fn resolve_button_style(
    theme: &ThemeState,
    variant: ButtonVariant,
    visual: VisualStyle,
) -> ButtonStyle {
    let foreground = theme.color(variant.text_role());

    let solid = match variant {
        ButtonVariant::Primary => Fill::Solid(theme.color(ColorRole::Primary)),
        ButtonVariant::Secondary => Fill::Solid(theme.color(ColorRole::Secondary)),
        ButtonVariant::Tertiary => Fill::Transparent,
    };
    let background = match (variant, resolve_gradient(theme)) {
        (ButtonVariant::Primary, Some(gradient)) => Fill::LinearGradient(gradient),
        _ => solid,
    };

    let border = match variant {
        ButtonVariant::Tertiary => Some(Border::solid(1.0, foreground)),
        ButtonVariant::Primary | ButtonVariant::Secondary => None,
    };

    ButtonStyle {
        background,
        foreground,
        border,
        shadow: button_shadow(theme, variant, visual),
        padding_x: theme.btn_padding_x(),
        padding_y: theme.btn_padding_y(),
        radius: theme.border_radius(),
        font_family: theme.font_family().to_string(),
        gap: BUTTON_ICON_GAP,
        hover_opacity: theme.button_hover_opacity() / 100.0,
    }
}

fn button_shadow(
    theme: &ThemeState,
    variant: ButtonVariant,
    visual: VisualStyle,
) -> Option<Shadow> {
    let tint = theme.color(variant.tint_role());
    let primary = theme.color(ColorRole::Primary);
    match visual {
        VisualStyle::Flat => None,
        VisualStyle::Soft => Some(Shadow::new(0.0, 4.0, 14.0, 0.0, tint.with_alpha(0.4))),
        VisualStyle::Neo => {
            let color = primary.with_alpha(variant.neo_alpha());
            Some(Shadow::new(3.0, 3.0, 0.0, 0.0, color))
        }
        VisualStyle::Glow => Some(Shadow::new(0.0, 0.0, 20.0, 0.0, tint.with_alpha(0.6))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> ThemeState {
        ThemeState::new()
            .with_color(ColorRole::Primary, "#7E22CE")
            .with_color(ColorRole::Secondary, "#F59E0B")
            .with_color(ColorRole::PrimaryBtnText, "#FFFFFF")
            .with_color(ColorRole::SecondaryBtnText, "#111827")
            .with_color(ColorRole::TertiaryBtnText, "#7E22CE")
            .with_btn_padding(20.0, 10.0)
            .with_border_radius(6.0)
    }

    #[test]
    fn primary_uses_primary_pair() {
        let style = resolve_button_style(&theme(), ButtonVariant::Primary, VisualStyle::Flat);
        assert_eq!(style.background, Fill::Solid(Color::from_hex(0x7E22CE)));
        assert_eq!(style.foreground, Color::from_hex(0xFFFFFF));
        assert!(style.border.is_none());
        assert!(style.shadow.is_none());
        let geometry = (style.padding_x, style.padding_y, style.radius);
        assert_eq!(geometry, (20.0, 10.0, 6.0));
        assert_eq!(style.gap, BUTTON_ICON_GAP);
    }

    #[test]
    fn secondary_uses_secondary_pair() {
        let style = resolve_button_style(&theme(), ButtonVariant::Secondary, VisualStyle::Flat);
        assert_eq!(style.background, Fill::Solid(Color::from_hex(0xF59E0B)));
        assert_eq!(style.foreground, Color::from_hex(0x111827));
    }

    #[test]
    fn tertiary_is_transparent_with_text_colored_border() {
        let style = resolve_button_style(&theme(), ButtonVariant::Tertiary, VisualStyle::Flat);
        assert_eq!(style.background, Fill::Transparent);
        let outline = Border::solid(1.0, Color::from_hex(0x7E22CE));
        assert_eq!(style.border, Some(outline));
    }

    #[test]
    fn shadows_by_visual_style() {
        let t = theme();
        let soft = resolve_button_style(&t, ButtonVariant::Primary, VisualStyle::Soft)
            .shadow
            .unwrap();
        assert_eq!(soft.color.a, 0.4);
        assert!(soft.blur > 0.0);

        let neo = resolve_button_style(&t, ButtonVariant::Secondary, VisualStyle::Neo)
            .shadow
            .unwrap();
        assert_eq!((neo.offset_x, neo.offset_y, neo.blur), (3.0, 3.0, 0.0));
        assert_eq!(neo.color.to_rgb8(), (126, 34, 206));
        assert_eq!(neo.color.a, 0.7);

        let glow = resolve_button_style(&t, ButtonVariant::Primary, VisualStyle::Glow)
            .shadow
            .unwrap();
        assert_eq!((glow.offset_x, glow.offset_y), (0.0, 0.0));
        assert!(glow.color.a > soft.color.a);
    }

    #[test]
    fn gradient_mode_overrides_primary_for_every_style() {
        let t = theme()
            .with_fill_mode(FillMode::Gradient)
            .with_gradient_angle(90.0);
        for visual in VisualStyle::ALL {
            let style = resolve_button_style(&t, ButtonVariant::Primary, visual);
            let Fill::LinearGradient(gradient) = style.background else {
                panic!("{visual} should produce a gradient");
            };
            assert_eq!(gradient.angle, 90.0);
            let colors: Vec<_> = gradient.stops.iter().map(|s| s.color).collect();
            let expected = [Color::from_hex(0x7E22CE), Color::from_hex(0xF59E0B)];
            assert_eq!(colors, expected);
        }
    }

    #[test]
    fn gradient_mode_leaves_other_variants_alone() {
        let t = theme().with_fill_mode(FillMode::Gradient);
        let style = resolve_button_style(&t, ButtonVariant::Secondary, VisualStyle::Soft);
        assert_eq!(style.background, Fill::Solid(Color::from_hex(0xF59E0B)));
    }

    #[test]
    fn hover_opacity_defaults_to_point_nine() {
        let style = resolve_button_style(
            &ThemeState::new(),
            ButtonVariant::Primary,
            VisualStyle::Flat,
        );
        assert_eq!(style.hover_opacity, 0.9);
        let style = resolve_button_style(
            &ThemeState::new().with_button_hover_opacity(75.0),
            ButtonVariant::Primary,
            VisualStyle::Flat,
        );
        assert_eq!(style.hover_opacity, 0.75);
    }

    #[test]
    fn parses_keywords() {
        let variant: ButtonVariant = "Tertiary".parse().unwrap();
        let visual: VisualStyle = "glow".parse().unwrap();
        assert_eq!(variant, ButtonVariant::Tertiary);
        assert_eq!(visual, VisualStyle::Glow);
        assert!("ghost".parse::<ButtonVariant>().is_err());
    }
}
