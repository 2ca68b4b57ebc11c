//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's file in the source directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Welcome to Oman"
//! base_url = "http://localhost:8000/"   # Used to build shareable journey links
//! locale = "en"                         # Locale for CLI output: "en" or "ar"
//!
//! [journey]
//! generation_delay_ms = 3000   # "Curating your journey" pause before results
//! mobile_settle_ms = 1000      # Extra wait before trusting a mobile link
//!
//! [export]
//! page_size = "a4"             # "a4" or "letter"
//! margin_mm = 10               # Page margin on every side
//!
//! [colors.light]
//! background = "#fdfaf5"
//! text = "#2b2118"
//! text_muted = "#6f6253"
//! accent = "#b5451b"
//! border = "#e6dccd"
//!
//! [colors.dark]
//! background = "#15110d"
//! text = "#f2ebe1"
//! text_muted = "#a8998a"
//! accent = "#e07a4f"
//! border = "#3a3129"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [journey]
//! generation_delay_ms = 0
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and link settings.
    pub site: SiteSection,
    /// Journey guide timing.
    pub journey: JourneyConfig,
    /// Printable document layout.
    pub export: ExportConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.site.parsed_base_url().map_err(|e| {
            ConfigError::Validation(format!("site.base_url is not a valid URL: {e}"))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(
                "site.base_url must be an http or https URL".into(),
            ));
        }
        if self.journey.generation_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "journey.generation_delay_ms must be at most 60000".into(),
            ));
        }
        if self.journey.mobile_settle_ms > 60_000 {
            return Err(ConfigError::Validation(
                "journey.mobile_settle_ms must be at most 60000".into(),
            ));
        }
        if self.export.margin_mm > 50 {
            return Err(ConfigError::Validation(
                "export.margin_mm must be 0-50".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Title used in the page `<title>` and headers.
    pub title: String,
    /// Public root of the site. Shareable journey links are built under it.
    pub base_url: String,
    /// Locale for CLI output and the default landing page.
    pub locale: Locale,
}

impl SiteSection {
    pub fn parsed_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Welcome to Oman".to_string(),
            base_url: "http://localhost:8000/".to_string(),
            locale: Locale::En,
        }
    }
}

/// Timed transitions of the journey guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JourneyConfig {
    /// Pause between submitting the form and showing results.
    pub generation_delay_ms: u64,
    /// Extra wait before decoding a link flagged `mobile=true`.
    pub mobile_settle_ms: u64,
}

impl JourneyConfig {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn mobile_settle(&self) -> Duration {
        Duration::from_millis(self.mobile_settle_ms)
    }
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: 3000,
            mobile_settle_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Value for the CSS `@page { size: ... }` rule.
    pub fn css(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
        }
    }

    /// Paper width and height in millimetres.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub page_size: PageSize,
    /// Margin on every side of each page, in millimetres.
    pub margin_mm: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_mm: 10,
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Captions, card descriptions, secondary labels.
    pub text_muted: String,
    /// Buttons, active day, links.
    pub accent: String,
    pub border: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fdfaf5".to_string(),
            text: "#2b2118".to_string(),
            text_muted: "#6f6253".to_string(),
            accent: "#b5451b".to_string(),
            border: "#e6dccd".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#15110d".to_string(),
            text: "#f2ebe1".to_string(),
            text_muted: "#a8998a".to_string(),
            accent: "#e07a4f".to_string(),
            border: "#3a3129".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Oman Guide Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
title = "Welcome to Oman"

# Public root of the generated site. Shareable journey links and QR codes
# point at <base_url>journey/results?data=...
base_url = "http://localhost:8000/"

# Locale for CLI output: "en" or "ar". The site itself is generated in both.
locale = "en"

# ---------------------------------------------------------------------------
# Journey guide
# ---------------------------------------------------------------------------
[journey]
# Pause between submitting preferences and showing the itinerary.
generation_delay_ms = 3000

# Extra wait before decoding a shared link flagged mobile=true.
mobile_settle_ms = 1000

# ---------------------------------------------------------------------------
# Printable itinerary
# ---------------------------------------------------------------------------
[export]
# "a4" or "letter".
page_size = "a4"

# Margin on every side of each page, in millimetres (0-50).
margin_mm = 10

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fdfaf5"
text = "#2b2118"
text_muted = "#6f6253"
accent = "#b5451b"
border = "#e6dccd"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#15110d"
text = "#f2ebe1"
text_muted = "#a8998a"
accent = "#e07a4f"
border = "#3a3129"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-accent: {light_accent};
    --color-border: {light_border};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-accent: {dark_accent};
        --color-border: {dark_border};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_accent = colors.light.accent,
        light_border = colors.light.border,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_accent = colors.dark.accent,
        dark_border = colors.dark.border,
    )
}

/// Generate the `@page` rule for printable documents.
pub fn generate_page_css(export: &ExportConfig) -> String {
    format!(
        "@page {{\n    size: {size};\n    margin: {margin}mm;\n}}",
        size = export.page_size.css(),
        margin = export.margin_mm,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.base_url, "http://localhost:8000/");
        assert_eq!(config.site.locale, Locale::En);
        assert_eq!(config.journey.generation_delay(), Duration::from_secs(3));
        assert_eq!(config.journey.mobile_settle(), Duration::from_secs(1));
        assert_eq!(config.export.page_size, PageSize::A4);
        assert_eq!(config.export.margin_mm, 10);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[journey]
generation_delay_ms = 0
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.journey.generation_delay_ms, 0);
        // Defaults preserved
        assert_eq!(config.journey.mobile_settle_ms, 1000);
        assert_eq!(config.colors.light.background, "#fdfaf5");
    }

    #[test]
    fn parse_locale_and_page_size() {
        let toml = r#"
[site]
locale = "ar"

[export]
page_size = "letter"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.locale, Locale::Ar);
        assert_eq!(config.export.page_size, PageSize::Letter);
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.accent = "#123456".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent: #123456"));
        assert!(css.contains("--color-bg: #1a1a1a"));
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn generate_page_css_uses_export_settings() {
        let export = ExportConfig {
            page_size: PageSize::Letter,
            margin_mm: 15,
        };
        let css = generate_page_css(&export);
        assert!(css.contains("size: letter;"));
        assert!(css.contains("margin: 15mm;"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.journey.generation_delay_ms, 3000);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
base_url = "https://visit.example/oman/"

[journey]
mobile_settle_ms = 250
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.base_url, "https://visit.example/oman/");
        assert_eq!(config.journey.mobile_settle_ms, 250);
        // Unspecified values should be defaults
        assert_eq!(config.journey.generation_delay_ms, 3000);
        assert_eq!(config.site.title, "Welcome to Oman");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[journey]
generation_delay = 10
"#,
        )
        .unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[imagez]\nquality = 90\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[journey]
generation_delay_ms = 3000
mobile_settle_ms = 1000
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[journey]
generation_delay_ms = 10
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let journey = merged.get("journey").unwrap();
        assert_eq!(
            journey.get("generation_delay_ms").unwrap().as_integer(),
            Some(10)
        );
        assert_eq!(
            journey.get("mobile_settle_ms").unwrap().as_integer(),
            Some(1000)
        );
    }

    #[test]
    fn merge_toml_scalar_replaces() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = SiteConfig::default();
        config.site.base_url = "not a url".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.site.base_url = "ftp://files.example/".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn validate_margin_too_large() {
        let mut config = SiteConfig::default();
        config.export.margin_mm = 51;
        assert!(config.validate().is_err());
        config.export.margin_mm = 50;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_delay_too_long() {
        let mut config = SiteConfig::default();
        config.journey.generation_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[export]\nmargin_mm = 200\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock config tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.base_url, defaults.site.base_url);
        assert_eq!(
            config.journey.generation_delay_ms,
            defaults.journey.generation_delay_ms
        );
        assert_eq!(config.export.page_size, defaults.export.page_size);
        assert_eq!(config.colors.dark.accent, defaults.colors.dark.accent);
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        for section in ["site", "journey", "export", "colors"] {
            assert!(val.get(section).is_some(), "{section}");
        }
    }
}
