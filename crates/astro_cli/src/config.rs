//! astro.toml handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "astro.toml";

/// Top-level configuration (astro.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct AstroConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub css: CssConfig,
}

/// Theme settings
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ThemeConfig {
    /// Toggle into dark mode right after the store is created
    #[serde(default)]
    pub start_dark: bool,
}

/// How results are printed
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Css,
}

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// CSS export settings
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct CssConfig {
    /// Custom property prefix (`--<prefix>-text-primary`)
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl ThemeConfig {
    /// Whether a query runs in dark mode; `--dark` forces it on either way
    pub fn wants_dark(&self, dark_flag: bool) -> bool {
        self.start_dark || dark_flag
    }
}

fn default_prefix() -> String {
    "astro".to_string()
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl AstroConfig {
    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: AstroConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if config.css.prefix.is_empty() {
            anyhow::bail!("{}: css.prefix must not be empty", path.display());
        }

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AstroConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AstroConfig::default());
        assert_eq!(config.css.prefix, "astro");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.theme.start_dark);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[output]\nformat = \"css\"\n").unwrap();

        let config = AstroConfig::load(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Css);
        assert_eq!(config.css.prefix, "astro");
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AstroConfig {
            theme: ThemeConfig { start_dark: true },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
            css: CssConfig {
                prefix: "site".to_string(),
            },
        };
        let parsed: AstroConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn dark_flag_and_start_dark_combine() {
        let cases = [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, true),
        ];
        for (start_dark, flag, expected) in cases {
            let theme = ThemeConfig { start_dark };
            assert_eq!(
                theme.wants_dark(flag),
                expected,
                "start_dark={start_dark} --dark={flag}"
            );
        }
    }

    #[test]
    fn bad_values_are_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
        let err = AstroConfig::load(&path).unwrap_err();
        assert!(format!("{err}").starts_with("Failed to parse"));

        fs::write(&path, "[css]\nprefix = \"\"\n").unwrap();
        assert!(AstroConfig::load(&path).is_err());
    }
}
