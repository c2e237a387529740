//! CSS custom property export
//!
//! Flattens every style query into `--<prefix>-<family>-<variant>` variables so
//! a stylesheet can switch modes with a single `data-theme` attribute.

use std::collections::BTreeMap;

use crate::styles::*;
use crate::theme::ColorScheme;
use crate::tokens::{RadiusToken, SpacingToken};

/// Every query family and variant resolved against `styles`.
///
/// Keys have no `--` prefix, e.g. `text-primary`, `shadow-medium`.
pub fn variable_map(styles: &StyleAccessor) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();

    for v in TextVariant::ALL {
        vars.insert(format!("text-{v}"), styles.text_color(*v).to_string());
    }
    for v in BackgroundVariant::ALL {
        vars.insert(format!("background-{v}"), styles.background_color(*v).to_string());
    }
    for v in BorderVariant::ALL {
        vars.insert(format!("border-{v}"), styles.border_color(*v).to_string());
    }
    for v in Elevation::ALL {
        vars.insert(format!("shadow-{v}"), styles.shadow(*v).to_string());
    }

    let buttons = styles.button_style();
    for v in ButtonVariant::ALL {
        let button = buttons.get(*v);
        vars.insert(format!("button-{v}-bg"), button.background.to_string());
        vars.insert(format!("button-{v}-color"), button.color.to_string());
    }
    for v in ChipVariant::ALL {
        let chip = styles.chip_style(*v);
        vars.insert(format!("chip-{v}-color"), chip.color.to_string());
    }

    let card = styles.card_style();
    vars.insert("card-bg".into(), card.background.to_string());
    vars.insert("card-border".into(), card.border.to_string());
    vars.insert("card-shadow".into(), card.shadow.to_string());

    let app_bar = styles.app_bar_style();
    vars.insert("app-bar-bg".into(), app_bar.background.to_string());
    vars.insert("app-bar-border".into(), app_bar.border_bottom.to_string());

    let spacing = styles.spacing();
    for token in SpacingToken::ALL {
        vars.insert(format!("spacing-{}", token.name()), spacing.css(token));
    }
    let radii = styles.radii();
    for token in RadiusToken::ALL {
        vars.insert(format!("radius-{}", token.name()), radii.css(token));
    }

    let families = styles.font_families();
    vars.insert("font-heading".into(), families.heading.to_string());
    vars.insert("font-body".into(), families.body.to_string());

    vars
}

/// Selector a scheme's variables are attached to
pub fn selector(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Light => ":root",
        ColorScheme::Dark => "[data-theme=\"dark\"]",
    }
}

/// Stylesheet with light variables on `:root` and dark ones on `[data-theme="dark"]`.
///
/// Each scheme is resolved through its own private store, so no caller state
/// is touched.
pub fn stylesheet(prefix: &str) -> String {
    let mut out = String::new();
    for scheme in ColorScheme::ALL {
        let styles = StyleAccessor::for_scheme(scheme);
        out.push_str(selector(scheme));
        out.push_str(" {\n");
        for (key, value) in variable_map(&styles) {
            out.push_str(&format!("  --{prefix}-{key}: {value};\n"));
        }
        out.push_str("}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn map_covers_every_query() {
        let vars = variable_map(&StyleAccessor::for_scheme(ColorScheme::Light));
        let expected = TextVariant::ALL.len()
            + BackgroundVariant::ALL.len()
            + BorderVariant::ALL.len()
            + Elevation::ALL.len();
        let query_keys = vars
            .keys()
            .filter(|k| {
                ["text-", "background-", "border-", "shadow-"]
                    .iter()
                    .any(|p| k.starts_with(p))
            })
            .count();
        assert_eq!(query_keys, expected);
        assert_eq!(vars["text-primary"], "#1e293b");
        assert_eq!(vars["shadow-none"], "none");
        assert_eq!(vars["radius-full"], "50%");
    }

    #[test]
    fn stylesheet_has_both_blocks() {
        let css = stylesheet("astro");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("[data-theme=\"dark\"] {\n"));
        assert!(css.contains("  --astro-text-primary: #1e293b;\n"));
        assert!(css.contains("  --astro-text-primary: #ffffff;\n"));
        assert_eq!(css.matches('}').count(), 2);
    }
}
