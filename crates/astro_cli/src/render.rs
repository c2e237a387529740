//! Query resolution and output rendering

use anyhow::{bail, Context, Result};
use astro_theme::css::{stylesheet, variable_map};
use astro_theme::{ColorScheme, StyleAccessor, ThemeBundle, PALETTE};
use clap::ValueEnum;
use serde_json::{json, Value};

use crate::config::OutputFormat;

/// Style query families exposed on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QueryFamily {
    Text,
    Background,
    Border,
    Shadow,
    Button,
    Chip,
    Heading,
    Body,
    Card,
    AppBar,
    Section,
}

impl QueryFamily {
    /// Bundles that take no variant argument
    fn is_fixed(self) -> bool {
        matches!(self, Self::Card | Self::AppBar | Self::Section)
    }
}

/// Resolve one query against `styles`; scalar tokens become JSON strings
pub fn resolve(styles: &StyleAccessor, family: QueryFamily, variant: Option<&str>) -> Result<Value> {
    if family.is_fixed() {
        if let Some(v) = variant {
            bail!("{family:?} takes no variant (got `{v}`)");
        }
    }

    let value = match family {
        QueryFamily::Text => json!(styles.get_text_color(variant)?.to_string()),
        QueryFamily::Background => json!(styles.get_background_color(variant)?.to_string()),
        QueryFamily::Border => json!(styles.get_border_color(variant)?.to_string()),
        QueryFamily::Shadow => json!(styles.get_shadow(variant)?.to_string()),
        QueryFamily::Button => serde_json::to_value(styles.get_button_style(variant)?)?,
        QueryFamily::Chip => serde_json::to_value(styles.get_chip_style(variant)?)?,
        QueryFamily::Heading => serde_json::to_value(styles.get_heading_style(variant)?)?,
        QueryFamily::Body => serde_json::to_value(styles.get_body_style(variant)?)?,
        QueryFamily::Card => serde_json::to_value(styles.card_style())?,
        QueryFamily::AppBar => serde_json::to_value(styles.app_bar_style())?,
        QueryFamily::Section => serde_json::to_value(styles.section_style())?,
    };
    tracing::debug!(?family, ?variant, scheme = %styles.scheme(), "resolved query");
    Ok(value)
}

/// Render a resolved query in the requested format
pub fn render_resolved(
    value: &Value,
    family: QueryFamily,
    variant: Option<&str>,
    scheme: ColorScheme,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match value {
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other)?,
        }),
        OutputFormat::Json => {
            let doc = json!({
                "family": format!("{family:?}").to_lowercase(),
                "variant": variant,
                "scheme": scheme,
                "value": value,
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Css => match value {
            Value::String(s) => Ok(s.clone()),
            _ => bail!("{family:?} resolves to a bundle and has no single CSS value"),
        },
    }
}

/// Brand palette listing
pub fn render_palette(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&PALETTE).context("Failed to serialize palette"),
        OutputFormat::Text | OutputFormat::Css => {
            let mut out = String::new();
            for (name, color) in PALETTE.entries() {
                let line = match format {
                    OutputFormat::Css => format!("--{name}: {color};\n"),
                    _ => format!("{name:<12} {color}\n"),
                };
                out.push_str(&line);
            }
            Ok(out)
        }
    }
}

/// Full theme export for both schemes
pub fn render_export(format: OutputFormat, prefix: &str) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(stylesheet(prefix)),
        OutputFormat::Json => {
            let mut variables = serde_json::Map::new();
            for scheme in ColorScheme::ALL {
                let vars = variable_map(&StyleAccessor::for_scheme(scheme));
                variables.insert(scheme.to_string(), serde_json::to_value(vars)?);
            }
            let doc = json!({
                "variables": variables,
                "themes": ThemeBundle::shared(),
            });
            serde_json::to_string_pretty(&doc).context("Failed to serialize theme export")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for scheme in ColorScheme::ALL {
                out.push_str(&format!("[{scheme}]\n"));
                for (key, value) in variable_map(&StyleAccessor::for_scheme(scheme)) {
                    out.push_str(&format!("{key} = {value}\n"));
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalar_queries_render_as_plain_tokens() {
        let styles = StyleAccessor::for_scheme(ColorScheme::Dark);
        let value = resolve(&styles, QueryFamily::Text, Some("primary")).unwrap();
        let out = render_resolved(
            &value,
            QueryFamily::Text,
            Some("primary"),
            ColorScheme::Dark,
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "#ffffff");
    }

    #[test]
    fn unknown_variant_surfaces_theme_error() {
        let styles = StyleAccessor::for_scheme(ColorScheme::Light);
        let err = resolve(&styles, QueryFamily::Shadow, Some("extreme")).unwrap_err();
        assert!(err.to_string().contains("unknown shadow variant `extreme`"));
    }

    #[test]
    fn fixed_bundles_reject_variants() {
        let styles = StyleAccessor::for_scheme(ColorScheme::Light);
        assert!(resolve(&styles, QueryFamily::Card, None).is_ok());
        assert!(resolve(&styles, QueryFamily::Card, Some("elevated")).is_err());
    }

    #[test]
    fn bundles_have_no_css_rendering() {
        let styles = StyleAccessor::for_scheme(ColorScheme::Light);
        let value = resolve(&styles, QueryFamily::Chip, None).unwrap();
        assert!(value.is_object());
        assert!(render_resolved(&value, QueryFamily::Chip, None, ColorScheme::Light, OutputFormat::Css).is_err());
    }

    #[test]
    fn json_query_document_names_scheme() {
        let styles = StyleAccessor::for_scheme(ColorScheme::Light);
        let value = resolve(&styles, QueryFamily::Border, Some("hover")).unwrap();
        let out = render_resolved(
            &value,
            QueryFamily::Border,
            Some("hover"),
            ColorScheme::Light,
            OutputFormat::Json,
        )
        .unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["scheme"], "light");
        assert_eq!(doc["family"], "border");
        assert_eq!(doc["value"], "#2563eb");
    }

    #[test]
    fn palette_lists_every_color() {
        let text = render_palette(OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), PALETTE.entries().len());
        assert!(text.contains("accentBlue   #2563eb"));
    }

    #[test]
    fn export_json_has_both_schemes() {
        let out = render_export(OutputFormat::Json, "astro").unwrap();
        let doc: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["variables"]["light"]["text-primary"], "#1e293b");
        assert_eq!(doc["variables"]["dark"]["text-primary"], "#ffffff");
        assert_eq!(doc["themes"]["dark"]["scheme"], "dark");
    }
}
