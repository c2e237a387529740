use astro_theme::{ColorScheme, Theme, ThemeBundle, PALETTE, SHADOW_SCALE_LEN};

#[test]
fn bundle_holds_one_theme_per_scheme() {
    let bundle = ThemeBundle::standard();
    for scheme in ColorScheme::ALL {
        let theme = bundle.for_scheme(scheme);
        assert_eq!(theme.scheme, scheme);
        assert_eq!(theme.palette.mode, scheme);
        assert_eq!(theme.name, "AstroMANIA");
    }
}

#[test]
fn descriptors_are_deterministic() {
    assert_eq!(Theme::light(), Theme::light());
    assert_eq!(Theme::dark(), Theme::dark());
    assert_ne!(Theme::light(), Theme::dark());
}

#[test]
fn descriptor_primary_roles() {
    let light = Theme::light();
    let dark = Theme::dark();
    assert_eq!(light.palette.primary.main, PALETTE.deep_blue);
    assert_eq!(dark.palette.primary.main, PALETTE.accent_blue);
    assert_eq!(light.components.button.contained.background, PALETTE.deep_blue);
    assert_eq!(dark.components.button.contained.background, PALETTE.accent_blue);
    assert_eq!(dark.components.button.contained.hover.background, Some(PALETTE.bright_blue));
}

#[test]
fn shared_shape_and_scale() {
    for theme in [Theme::light(), Theme::dark()] {
        assert_eq!(theme.shape_radius, 12.0);
        assert_eq!(theme.spacing.unit, 8.0);
        assert_eq!(theme.shadows.len(), SHADOW_SCALE_LEN);
        assert_eq!(theme.components.chip.radius, 24.0);
        assert_eq!(theme.components.paper.elevation.len(), 3);
    }
}

#[test]
fn descriptor_serializes_colors_as_css() {
    let json = serde_json::to_value(Theme::dark()).unwrap();
    assert_eq!(json["scheme"], "dark");
    assert_eq!(json["palette"]["text"]["primary"], "#ffffff");
    assert_eq!(json["components"]["app_bar"]["background"], "rgba(13, 19, 33, 0.95)");
    assert_eq!(json["components"]["app_bar"]["shadow"], "none");
}
