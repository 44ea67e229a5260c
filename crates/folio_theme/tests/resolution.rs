//! End-to-end resolution against incomplete and hostile themes

use folio_theme::{
    build_color_catalog, hex_to_rgb_triplet, resolve_button_style, resolve_contrast_text,
    resolve_font, resolve_gradient, resolve_swatch_geometry, ButtonVariant, ColorCategory,
    ColorRole, ContrastText, Fill, FontRole, ThemeDiagnostic, ThemeState, VisualStyle,
};
use pretty_assertions::assert_eq;

fn hostile_theme() -> ThemeState {
    ThemeState::from_json_str(
        r##"{
            "primary": "not-a-color",
            "secondary": "#abc",
            "background": "",
            "borderRadius": -3,
            "layoutGap": 24,
            "fillMode": "GRADIENT",
            "buttonHoverOpacity": -20
        }"##,
    )
    .unwrap()
}

#[test]
fn wrongly_typed_fields_read_as_absent() {
    let src = r##"{"primary": 123, "secondary": "#F59E0B"}"##;
    let theme = ThemeState::from_json_str(src).unwrap();
    assert_eq!(theme.color_hex(ColorRole::Primary), "#2563EB");
    assert_eq!(theme.color_hex(ColorRole::Secondary), "#F59E0B");
    let diagnostics = theme.diagnostics();
    assert!(diagnostics.contains(&ThemeDiagnostic::InvalidColorFormat {
        role: ColorRole::Primary,
        value: "123".into(),
    }));

    let src = r##"{"borderRadius": "8px", "primary": "#7E22CE"}"##;
    let theme = ThemeState::from_json_str(src).unwrap();
    assert_eq!(theme.border_radius(), 8.0);
    assert_eq!(theme.color_hex(ColorRole::Primary), "#7E22CE");
    let diagnostics = theme.diagnostics();
    assert!(diagnostics.contains(&ThemeDiagnostic::InvalidValue {
        field: "borderRadius",
        value: "\"8px\"".into(),
    }));
    assert!(!diagnostics.contains(&ThemeDiagnostic::MissingField {
        field: "borderRadius",
    }));

    let style = resolve_button_style(&theme, ButtonVariant::Primary, VisualStyle::Soft);
    assert_eq!(style.radius, 8.0);
}

#[test]
fn contrast_is_a_function_of_luminance_only() {
    for hex in ["#7e22ce", "#facc15", "#0ea5e9", "#f1f5f9"] {
        let (r, g, b) = hex_to_rgb_triplet(hex);
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        let expected = if luma > 155_000 {
            ContrastText::Dark
        } else {
            ContrastText::Light
        };
        assert_eq!(resolve_contrast_text(hex), expected);
        assert_eq!(resolve_contrast_text(&hex.to_uppercase()), expected);
    }

    assert_eq!(resolve_contrast_text("#FFFFFF"), ContrastText::Dark);
    assert_eq!(resolve_contrast_text("#000000"), ContrastText::Light);
    assert_eq!(resolve_contrast_text("#9c9c9c"), ContrastText::Dark);
    assert_eq!(resolve_contrast_text("#9a9a9a"), ContrastText::Light);
}

#[test]
fn rgb_triplet_of_reference_purple() {
    assert_eq!(hex_to_rgb_triplet("#7E22CE"), (126, 34, 206));
}

#[test]
fn hostile_theme_still_resolves() {
    let theme = hostile_theme();

    for variant in ButtonVariant::ALL {
        for visual in VisualStyle::ALL {
            let style = resolve_button_style(&theme, variant, visual);
            assert_eq!(style.radius, 8.0);
            assert_eq!(style.hover_opacity, 0.0);
            assert_eq!(style.font_family, "Inter");
        }
    }

    let swatch = resolve_swatch_geometry(&theme);
    assert_eq!(swatch.padding, 15.0);
    assert_eq!(swatch.margin_bottom, 12.0);
}

#[test]
fn gradient_uses_resolved_primary_and_secondary() {
    let theme = hostile_theme();
    let gradient = resolve_gradient(&theme).expect("gradient fill mode");
    let stops: Vec<String> = gradient
        .stops
        .iter()
        .map(|s| s.color.to_hex_string())
        .collect();
    assert_eq!(stops, vec!["#2563EB".to_string(), "#7C3AED".to_string()]);

    for visual in VisualStyle::ALL {
        let style = resolve_button_style(&theme, ButtonVariant::Primary, visual);
        assert_eq!(style.background, Fill::LinearGradient(gradient.clone()));
    }
}

#[test]
fn catalogue_order_is_fixed_for_any_theme() {
    let expected = [
        ColorCategory::BrandIdentity,
        ColorCategory::Surfaces,
        ColorCategory::Typography,
        ColorCategory::Interactive,
        ColorCategory::ComponentSpecific,
    ];
    for theme in [ThemeState::new(), hostile_theme()] {
        let mut order: Vec<ColorCategory> = build_color_catalog(&theme)
            .into_iter()
            .map(|e| e.category)
            .collect();
        order.dedup();
        assert_eq!(order, expected.to_vec());
    }
}

#[test]
fn catalogue_is_stable_across_calls() {
    let theme = hostile_theme();
    let theme = theme.with_color(ColorRole::InputBorder, "#123456");
    assert_eq!(build_color_catalog(&theme), build_color_catalog(&theme));
}

#[test]
fn fonts_resolve_per_role() {
    let theme = ThemeState::new()
        .with_font_family("Space Grotesk")
        .with_secondary_font_family("Source Serif");
    assert_eq!(resolve_font(&theme, FontRole::Primary), "Space Grotesk");
    assert_eq!(resolve_font(&theme, FontRole::Secondary), "Source Serif");
}
