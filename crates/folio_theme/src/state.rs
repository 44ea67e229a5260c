//! Theme configuration record
//!
//! [`ThemeState`] is supplied whole by an external store and is read-only to
//! everything in this crate. Every field is optional on the wire; accessors
//! bake in literal defaults so an incomplete or partly invalid theme still
//! resolves to usable values.

use crate::error::Result;
use crate::role::{ColorFallback, ColorRole};
use folio_core::Color;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

pub const DEFAULT_BORDER_RADIUS: f32 = 8.0;
pub const DEFAULT_BTN_PADDING_X: f32 = 24.0;
pub const DEFAULT_BTN_PADDING_Y: f32 = 12.0;
pub const DEFAULT_LAYOUT_GAP: f32 = 16.0;
pub const DEFAULT_SECTION_PADDING: f32 = 64.0;
pub const DEFAULT_DEPTH: f32 = 1.0;
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_GRADIENT_ANGLE: f32 = 135.0;
pub const DEFAULT_BUTTON_HOVER_OPACITY: f32 = 90.0;

/// How primary surfaces are filled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Solid,
    Gradient,
}

impl FillMode {
    /// Case-insensitive parse; `None` for anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
        }
    }
}

/// Abstract theme configuration
///
/// Loading never fails on a field's value: a field holding the wrong type
/// reads as absent and is reported by [`ThemeState::diagnostics`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct ThemeState {
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    background3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gray_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    light_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_error_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_btn_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_btn_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tertiary_btn_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    btn_padding_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    btn_padding_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section_padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    depth: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary_font_family: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    fill_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gradient_angle: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    button_hover_opacity: Option<f32>,

    /// Values dropped at load time because of their type
    #[serde(skip)]
    rejected: Vec<ThemeDiagnostic>,
}

impl From<Map<String, Value>> for ThemeState {
    fn from(fields: Map<String, Value>) -> Self {
        let mut theme = Self::default();
        for (key, value) in fields {
            if !value.is_null() {
                theme.load_field(&key, value);
            }
        }
        theme
    }
}

impl ThemeState {
    /// An empty theme; every accessor yields its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn load_field(&mut self, key: &str, value: Value) {
        if let Some(role) = ColorRole::ALL.into_iter().find(|r| r.field_name() == key) {
            match value {
                Value::String(hex) => *self.color_slot_mut(role) = Some(hex),
                other => self.rejected.push(ThemeDiagnostic::InvalidColorFormat {
                    role,
                    value: other.to_string(),
                }),
            }
            return;
        }

        let (field, slot) = match key {
            "borderRadius" => ("borderRadius", &mut self.border_radius),
            "btnPaddingX" => ("btnPaddingX", &mut self.btn_padding_x),
            "btnPaddingY" => ("btnPaddingY", &mut self.btn_padding_y),
            "layoutGap" => ("layoutGap", &mut self.layout_gap),
            "sectionPadding" => ("sectionPadding", &mut self.section_padding),
            "depth" => ("depth", &mut self.depth),
            "gradientAngle" => ("gradientAngle", &mut self.gradient_angle),
            "buttonHoverOpacity" => ("buttonHoverOpacity", &mut self.button_hover_opacity),
            _ => return self.load_text_field(key, value),
        };
        match value.as_f64() {
            Some(number) => *slot = Some(number as f32),
            None => self.rejected.push(ThemeDiagnostic::InvalidValue {
                field,
                value: value.to_string(),
            }),
        }
    }

    fn load_text_field(&mut self, key: &str, value: Value) {
        let (field, slot) = match key {
            "fontFamily" => ("fontFamily", &mut self.font_family),
            "secondaryFontFamily" => ("secondaryFontFamily", &mut self.secondary_font_family),
            "fillMode" => ("fillMode", &mut self.fill_mode),
            _ => {
                tracing::trace!(key, "ignoring unknown theme field");
                return;
            }
        };
        match value {
            Value::String(text) => *slot = Some(text),
            other => self.rejected.push(ThemeDiagnostic::InvalidValue {
                field,
                value: other.to_string(),
            }),
        }
    }

    /// Forget a load-time rejection once the field is set or cleared.
    fn accept(&mut self, field: &str) {
        self.rejected.retain(|d| d.field() != field);
    }

    // ========== Colors ==========

    fn color_slot(&self, role: ColorRole) -> &Option<String> {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Background => &self.background,
            ColorRole::Background2 => &self.background2,
            ColorRole::Background3 => &self.background3,
            ColorRole::DarkText => &self.dark_text,
            ColorRole::GrayText => &self.gray_text,
            ColorRole::LightText => &self.light_text,
            ColorRole::ActiveColor => &self.active_color,
            ColorRole::FormErrorColor => &self.form_error_color,
            ColorRole::InputBorder => &self.input_border,
            ColorRole::PrimaryBtnText => &self.primary_btn_text,
            ColorRole::SecondaryBtnText => &self.secondary_btn_text,
            ColorRole::TertiaryBtnText => &self.tertiary_btn_text,
        }
    }

    fn color_slot_mut(&mut self, role: ColorRole) -> &mut Option<String> {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Background => &mut self.background,
            ColorRole::Background2 => &mut self.background2,
            ColorRole::Background3 => &mut self.background3,
            ColorRole::DarkText => &mut self.dark_text,
            ColorRole::GrayText => &mut self.gray_text,
            ColorRole::LightText => &mut self.light_text,
            ColorRole::ActiveColor => &mut self.active_color,
            ColorRole::FormErrorColor => &mut self.form_error_color,
            ColorRole::InputBorder => &mut self.input_border,
            ColorRole::PrimaryBtnText => &mut self.primary_btn_text,
            ColorRole::SecondaryBtnText => &mut self.secondary_btn_text,
            ColorRole::TertiaryBtnText => &mut self.tertiary_btn_text,
        }
    }

    /// The raw value stored for a role, exactly as supplied
    pub fn color_value(&self, role: ColorRole) -> Option<&str> {
        self.color_slot(role).as_deref()
    }

    /// Resolve a role to a concrete color, following the fallback chain.
    pub fn color(&self, role: ColorRole) -> Color {
        let mut current = role;
        loop {
            if let Some(color) = self.color_value(current).and_then(Color::parse_hex) {
                return color;
            }
            match current.fallback() {
                ColorFallback::Literal(hex) => {
                    tracing::trace!(
                        %role,
                        resolved_from = %current,
                        "color role fell back to literal default"
                    );
                    return Color::from_hex(hex);
                }
                ColorFallback::Role(next) => current = next,
            }
        }
    }

    /// Resolved role as `#RRGGBB`
    pub fn color_hex(&self, role: ColorRole) -> String {
        self.color(role).to_hex_string()
    }

    pub fn set_color(&mut self, role: ColorRole, hex: impl Into<String>) {
        *self.color_slot_mut(role) = Some(hex.into());
        self.accept(role.field_name());
    }

    pub fn clear_color(&mut self, role: ColorRole) {
        *self.color_slot_mut(role) = None;
        self.accept(role.field_name());
    }

    pub fn with_color(mut self, role: ColorRole, hex: impl Into<String>) -> Self {
        self.set_color(role, hex);
        self
    }

    // ========== Geometry ==========

    pub fn border_radius(&self) -> f32 {
        non_negative(self.border_radius, DEFAULT_BORDER_RADIUS)
    }

    pub fn btn_padding_x(&self) -> f32 {
        non_negative(self.btn_padding_x, DEFAULT_BTN_PADDING_X)
    }

    pub fn btn_padding_y(&self) -> f32 {
        non_negative(self.btn_padding_y, DEFAULT_BTN_PADDING_Y)
    }

    pub fn layout_gap(&self) -> f32 {
        non_negative(self.layout_gap, DEFAULT_LAYOUT_GAP)
    }

    pub fn section_padding(&self) -> f32 {
        non_negative(self.section_padding, DEFAULT_SECTION_PADDING)
    }

    /// Shadow intensity multiplier
    pub fn depth(&self) -> f32 {
        non_negative(self.depth, DEFAULT_DEPTH)
    }

    pub fn with_border_radius(mut self, px: f32) -> Self {
        self.border_radius = Some(px);
        self.accept("borderRadius");
        self
    }

    pub fn with_btn_padding(mut self, x: f32, y: f32) -> Self {
        self.btn_padding_x = Some(x);
        self.btn_padding_y = Some(y);
        self.accept("btnPaddingX");
        self.accept("btnPaddingY");
        self
    }

    pub fn with_layout_gap(mut self, px: f32) -> Self {
        self.layout_gap = Some(px);
        self.accept("layoutGap");
        self
    }

    pub fn with_section_padding(mut self, px: f32) -> Self {
        self.section_padding = Some(px);
        self.accept("sectionPadding");
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = Some(depth);
        self.accept("depth");
        self
    }

    // ========== Typography ==========

    pub fn font_family(&self) -> &str {
        non_blank(self.font_family.as_deref())
            .unwrap_or(DEFAULT_FONT_FAMILY)
    }

    pub fn secondary_font_family(&self) -> &str {
        non_blank(self.secondary_font_family.as_deref())
            .unwrap_or_else(|| self.font_family())
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self.accept("fontFamily");
        self
    }

    pub fn with_secondary_font_family(mut self, family: impl Into<String>) -> Self {
        self.secondary_font_family = Some(family.into());
        self.accept("secondaryFontFamily");
        self
    }

    // ========== Fill & interaction ==========

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
            .as_deref()
            .and_then(FillMode::parse)
            .unwrap_or_default()
    }

    /// Degrees; only meaningful in gradient mode
    pub fn gradient_angle(&self) -> f32 {
        self.gradient_angle
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_GRADIENT_ANGLE)
    }

    /// Hover opacity percentage clamped to `0..=100`
    pub fn button_hover_opacity(&self) -> f32 {
        self.button_hover_opacity
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 100.0))
            .unwrap_or(DEFAULT_BUTTON_HOVER_OPACITY)
    }

    pub fn with_fill_mode(mut self, mode: FillMode) -> Self {
        self.fill_mode = Some(mode.as_str().to_string());
        self.accept("fillMode");
        self
    }

    pub fn with_gradient_angle(mut self, degrees: f32) -> Self {
        self.gradient_angle = Some(degrees);
        self.accept("gradientAngle");
        self
    }

    pub fn with_button_hover_opacity(mut self, percent: f32) -> Self {
        self.button_hover_opacity = Some(percent);
        self.accept("buttonHoverOpacity");
        self
    }

    // ========== Audit ==========

    /// Report fields that are absent or unusable.
    ///
    /// Nothing here is an error: every reported field already resolves to a
    /// fallback. The list is for display and theme authoring tools.
    pub fn diagnostics(&self) -> Vec<ThemeDiagnostic> {
        let mut out = Vec::new();
        let rejected = |field: &str| self.rejected.iter().any(|d| d.field() == field);

        for role in ColorRole::ALL {
            match self.color_value(role) {
                None if rejected(role.field_name()) => {}
                None => out.push(ThemeDiagnostic::MissingField {
                    field: role.field_name(),
                }),
                Some(value) if Color::parse_hex(value).is_none() => {
                    out.push(ThemeDiagnostic::InvalidColorFormat {
                        role,
                        value: value.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        let numeric = [
            ("borderRadius", self.border_radius, true),
            ("btnPaddingX", self.btn_padding_x, true),
            ("btnPaddingY", self.btn_padding_y, true),
            ("layoutGap", self.layout_gap, true),
            ("sectionPadding", self.section_padding, true),
            ("depth", self.depth, true),
            ("gradientAngle", self.gradient_angle, false),
            ("buttonHoverOpacity", self.button_hover_opacity, false),
        ];
        for (field, value, must_be_non_negative) in numeric {
            match value {
                None if rejected(field) => {}
                None => out.push(ThemeDiagnostic::MissingField { field }),
                Some(v) if !v.is_finite() || (must_be_non_negative && v < 0.0) => {
                    out.push(ThemeDiagnostic::InvalidValue {
                        field,
                        value: v.to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        if let Some(v) = self.button_hover_opacity {
            if v.is_finite() && !(0.0..=100.0).contains(&v) {
                out.push(ThemeDiagnostic::InvalidValue {
                    field: "buttonHoverOpacity",
                    value: v.to_string(),
                });
            }
        }

        if non_blank(self.font_family.as_deref()).is_none() && !rejected("fontFamily") {
            out.push(ThemeDiagnostic::MissingField {
                field: "fontFamily",
            });
        }
        match self.fill_mode.as_deref() {
            None if rejected("fillMode") => {}
            None => out.push(ThemeDiagnostic::MissingField { field: "fillMode" }),
            Some(v) if FillMode::parse(v).is_none() => out.push(ThemeDiagnostic::InvalidValue {
                field: "fillMode",
                value: v.to_string(),
            }),
            Some(_) => {}
        }

        out.extend(self.rejected.iter().cloned());
        out
    }

    /// Export resolved values as CSS custom properties.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_theme::ThemeState;
    ///
    /// let vars = ThemeState::new().to_css_variable_map();
    /// assert_eq!(vars["--primary"], "#2563EB");
    /// assert_eq!(vars["--border-radius"], "8px");
    /// ```
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(ColorRole::ALL.len() + 10);

        for role in ColorRole::ALL {
            vars.insert(role.css_var().to_string(), self.color_hex(role));
        }

        let px = |v: f32| format!("{v}px");
        vars.insert("--border-radius".into(), px(self.border_radius()));
        vars.insert("--btn-padding-x".into(), px(self.btn_padding_x()));
        vars.insert("--btn-padding-y".into(), px(self.btn_padding_y()));
        vars.insert("--layout-gap".into(), px(self.layout_gap()));
        vars.insert("--section-padding".into(), px(self.section_padding()));
        vars.insert("--depth".into(), self.depth().to_string());
        vars.insert("--font-family".into(), self.font_family().to_string());
        vars.insert(
            "--secondary-font-family".into(),
            self.secondary_font_family().to_string(),
        );
        vars.insert(
            "--button-hover-opacity".into(),
            (self.button_hover_opacity() / 100.0).to_string(),
        );

        vars
    }
}

/// One absent or unusable theme field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeDiagnostic {
    MissingField { field: &'static str },
    InvalidColorFormat { role: ColorRole, value: String },
    InvalidValue { field: &'static str, value: String },
}

impl ThemeDiagnostic {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => field,
            Self::InvalidColorFormat { role, .. } => role.field_name(),
        }
    }
}

impl Display for ThemeDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field}: missing, using default"),
            Self::InvalidColorFormat { role, value } => {
                write!(
                    f,
                    "{role}: `{value}` is not a 6-digit hex color, using fallback"
                )
            }
            Self::InvalidValue { field, value } => {
                write!(f, "{field}: `{value}` is out of range, using default")
            }
        }
    }
}

fn non_negative(value: Option<f32>, default: f32) -> f32 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(default)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_uses_literal_defaults() {
        let theme = ThemeState::new();
        assert_eq!(theme.color_hex(ColorRole::Primary), "#2563EB");
        assert_eq!(theme.color_hex(ColorRole::Background), "#FFFFFF");
        assert_eq!(theme.border_radius(), 8.0);
        assert_eq!(theme.layout_gap(), 16.0);
        assert_eq!(theme.font_family(), "Inter");
        assert_eq!(theme.fill_mode(), FillMode::Solid);
        assert_eq!(theme.gradient_angle(), 135.0);
        assert_eq!(theme.button_hover_opacity(), 90.0);
    }

    #[test]
    fn active_color_follows_primary() {
        let theme = ThemeState::new().with_color(ColorRole::Primary, "#7E22CE");
        assert_eq!(theme.color_hex(ColorRole::ActiveColor), "#7E22CE");

        let theme = theme.with_color(ColorRole::ActiveColor, "#00FF00");
        assert_eq!(theme.color_hex(ColorRole::ActiveColor), "#00FF00");
    }

    #[test]
    fn invalid_color_uses_fallback_chain() {
        let theme = ThemeState::new()
            .with_color(ColorRole::Primary, "#12345")
            .with_color(ColorRole::TertiaryBtnText, "blue");
        assert_eq!(theme.color_hex(ColorRole::Primary), "#2563EB");
        assert_eq!(theme.color_hex(ColorRole::TertiaryBtnText), "#2563EB");
    }

    #[test]
    fn negative_geometry_is_ignored() {
        let theme = ThemeState::new()
            .with_border_radius(-4.0)
            .with_depth(f32::NAN);
        assert_eq!(theme.border_radius(), DEFAULT_BORDER_RADIUS);
        assert_eq!(theme.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn hover_opacity_is_clamped() {
        let theme = ThemeState::new().with_button_hover_opacity(140.0);
        assert_eq!(theme.button_hover_opacity(), 100.0);
    }

    #[test]
    fn secondary_font_falls_back_to_primary_font() {
        let theme = ThemeState::new().with_font_family("Manrope");
        assert_eq!(theme.secondary_font_family(), "Manrope");
        let theme = theme.with_secondary_font_family("  ");
        assert_eq!(theme.secondary_font_family(), "Manrope");
    }

    #[test]
    fn parses_camel_case_json() {
        let theme = ThemeState::from_json_str(
            r##"{"primary":"#7E22CE","darkText":"111827","btnPaddingX":18,"fillMode":"gradient"}"##,
        )
        .unwrap();
        assert_eq!(theme.color_hex(ColorRole::DarkText), "#111827");
        assert_eq!(theme.btn_padding_x(), 18.0);
        assert_eq!(theme.fill_mode(), FillMode::Gradient);
    }

    #[test]
    fn unknown_fill_mode_degrades_to_solid() {
        let src = r#"{"fillMode":"radial"}"#;
        let theme = ThemeState::from_json_str(src).unwrap();
        assert_eq!(theme.fill_mode(), FillMode::Solid);
        assert!(theme
            .diagnostics()
            .contains(&ThemeDiagnostic::InvalidValue {
                field: "fillMode",
                value: "radial".into(),
            }));
    }

    #[test]
    fn toml_round_trip_keeps_supplied_fields_only() {
        let theme = ThemeState::new()
            .with_color(ColorRole::Primary, "#7E22CE")
            .with_layout_gap(20.0);
        let src = theme.to_toml_string().unwrap();
        assert!(src.contains("primary = \"#7E22CE\""));
        assert!(src.contains("layoutGap = 20.0"));
        assert!(!src.contains("secondary"));
        assert_eq!(ThemeState::from_toml_str(&src).unwrap(), theme);
    }

    #[test]
    fn toml_with_wrong_types_still_loads() {
        let theme = ThemeState::from_toml_str(
            "primary = \"#7E22CE\"\nfontFamily = 12\nlayoutGap = \"wide\"\nfillMode = true\n",
        )
        .unwrap();
        assert_eq!(theme.color_hex(ColorRole::Primary), "#7E22CE");
        assert_eq!(theme.font_family(), DEFAULT_FONT_FAMILY);
        assert_eq!(theme.layout_gap(), DEFAULT_LAYOUT_GAP);
        assert_eq!(theme.fill_mode(), FillMode::Solid);

        let mut fields: Vec<&str> = theme
            .diagnostics()
            .iter()
            .filter(|d| matches!(d, ThemeDiagnostic::InvalidValue { .. }))
            .map(ThemeDiagnostic::field)
            .collect();
        fields.sort();
        assert_eq!(fields, ["fillMode", "fontFamily", "layoutGap"]);
    }

    #[test]
    fn setting_a_rejected_field_clears_its_diagnostic() {
        let theme = ThemeState::from_json_str(r#"{"depth": "deep"}"#)
            .unwrap()
            .with_depth(2.0);
        assert_eq!(theme.depth(), 2.0);
        assert!(theme.diagnostics().iter().all(|d| d.field() != "depth"));
    }

    #[test]
    fn diagnostics_report_missing_and_invalid() {
        let theme = ThemeState::new().with_color(ColorRole::Primary, "#XYZXYZ");
        let diags = theme.diagnostics();
        assert!(diags.contains(&ThemeDiagnostic::InvalidColorFormat {
            role: ColorRole::Primary,
            value: "#XYZXYZ".into(),
        }));
        let missing = ThemeDiagnostic::MissingField { field: "secondary" };
        assert!(diags.contains(&missing));
        for d in diags.iter().filter(|d| d.field() == "primary") {
            assert!(matches!(d, ThemeDiagnostic::InvalidColorFormat { .. }));
        }
    }
}
