//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives at
//! the root of the site source directory, next to the content documents:
//!
//! ```text
//! site/
//! ├── config.toml                     # Site config (optional)
//! ├── resume.json                     # Content for the portfolio page
//! ├── glass_portfolio_content.json    # Content for the glass page
//! └── assets/                         # Logos, resume PDF → copied to output
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! tagline = "software_engineer --passionate --impact"
//! resume_path = "assets/resume.pdf"
//! # summary = "Shown in the hero when the content has none"
//!
//! [[pages]]
//! content = "resume.json"
//! output = "index.html"
//! variant = "portfolio"          # or "glass"
//! # title = "Portfolio"          # defaults to site.title
//! # particle_rgb = "137, 0, 225" # overrides theme.particle_rgb
//!
//! [skills.highlighted]
//! # languages = ["Rust"]        # chips listed first in their group
//!
//! [carousel]
//! swipe_threshold = 50.0         # px of horizontal travel that counts as a swipe
//! mobile_breakpoint = 768        # px; project carousel is active at or below
//! max_tags = 6                   # tags shown per experience card
//!
//! [animation]
//! particle_count = 30
//! stagger_step = 0.08            # seconds between staggered children
//!
//! [theme]
//! accent = "#f5a623"
//! particle_rgb = "245, 166, 35"
//! ```
//!
//! Config files are sparse: override just the values you want. Listing
//! `[[pages]]` replaces the default page list entirely. Unknown keys are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site-wide text and links.
    pub site: SiteSettings,
    /// Pages to build, each from one content document.
    pub pages: Vec<PageConfig>,
    /// Skill chip ordering.
    pub skills: SkillsConfig,
    /// Carousel input tuning.
    pub carousel: CarouselConfig,
    /// Background particles and reveal staggering.
    pub animation: AnimationConfig,
    /// Colors injected as CSS custom properties.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSettings::default(),
            pages: default_pages(),
            skills: SkillsConfig::default(),
            carousel: CarouselConfig::default(),
            animation: AnimationConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[pages]] entry is required".into(),
            ));
        }
        let mut outputs = HashSet::new();
        for page in &self.pages {
            if page.content.trim().is_empty() || page.output.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "pages.content and pages.output must not be empty".into(),
                ));
            }
            if !outputs.insert(page.output.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate page output: {}",
                    page.output
                )));
            }
        }
        if self.carousel.mobile_breakpoint == 0 {
            return Err(ConfigError::Validation(
                "carousel.mobile_breakpoint must be non-zero".into(),
            ));
        }
        if !(self.carousel.swipe_threshold > 0.0) {
            return Err(ConfigError::Validation(
                "carousel.swipe_threshold must be positive".into(),
            ));
        }
        if self.animation.particle_count > 500 {
            return Err(ConfigError::Validation(
                "animation.particle_count must be 0-500".into(),
            ));
        }
        if !(self.animation.stagger_step >= 0.0) {
            return Err(ConfigError::Validation(
                "animation.stagger_step must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Site-wide text and links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Document title used when a page has none of its own.
    pub title: String,
    /// Terminal-style line shown above the hero greeting.
    pub tagline: String,
    /// Hero summary used when the content document has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Target of the resume download button. Not checked for existence.
    pub resume_path: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: "software_engineer --passionate --impact".to_string(),
            summary: None,
            resume_path: "assets/resume.pdf".to_string(),
        }
    }
}

/// Which page shell and section set a page uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Hero, projects, experience carousel, education, skills.
    #[default]
    Portfolio,
    /// Hero, involvements, experience timeline, education, skills.
    Glass,
}

impl PageVariant {
    pub fn name(self) -> &'static str {
        match self {
            PageVariant::Portfolio => "portfolio",
            PageVariant::Glass => "glass",
        }
    }
}

/// One page: a content document rendered into a variant's shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Content document path, relative to the site source.
    pub content: String,
    /// Output HTML path, relative to the output directory.
    pub output: String,
    #[serde(default)]
    pub variant: PageVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Overrides `theme.particle_rgb` for this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_rgb: Option<String>,
}

impl PageConfig {
    pub fn portfolio() -> Self {
        Self {
            content: "resume.json".to_string(),
            output: "index.html".to_string(),
            variant: PageVariant::Portfolio,
            title: None,
            particle_rgb: None,
        }
    }
}

/// Default page list: the portfolio page only.
fn default_pages() -> Vec<PageConfig> {
    vec![PageConfig::portfolio()]
}

/// Skill chip ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsConfig {
    /// Group type (`languages`, `frameworks`, `tools`, `spoken`,
    /// `interests`) → chips listed first and marked as highlighted.
    pub highlighted: BTreeMap<String, Vec<String>>,
}

impl SkillsConfig {
    pub fn highlighted_for(&self, group_type: &str) -> &[String] {
        self.highlighted
            .get(group_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Carousel input tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Horizontal travel in CSS pixels beyond which a touch counts as a swipe.
    pub swipe_threshold: f64,
    /// Viewport width in CSS pixels at or below which the project carousel runs.
    pub mobile_breakpoint: u32,
    /// Tags shown per experience card.
    pub max_tags: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            mobile_breakpoint: 768,
            max_tags: 6,
        }
    }
}

/// Background particles and reveal staggering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Particles in the canvas background; 0 disables it.
    pub particle_count: u32,
    /// Seconds between the reveal of consecutive staggered children.
    pub stagger_step: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            stagger_step: 0.08,
        }
    }
}

/// Colors injected as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Accent color (buttons, badges, highlighted chips).
    pub accent: String,
    /// Particle color as an `r, g, b` triple, used inside `rgba()`.
    pub particle_rgb: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#f5a623".to_string(),
            particle_rgb: "245, 166, 35".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock defaults as a `toml::Value::Table`.
///
/// This is the base layer that user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
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

/// Load `config.toml` from a directory as a raw TOML value.
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

/// Load config from `config.toml` in the site source directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the site source directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site-wide text
# ---------------------------------------------------------------------------
[site]
# Document title for pages without their own.
title = "Portfolio"

# Terminal-style line above the hero greeting.
tagline = "software_engineer --passionate --impact"

# Target of the resume download button (relative to the output directory).
resume_path = "assets/resume.pdf"

# Hero summary used when the content document has none.
# summary = "Based in New York, NY."

# ---------------------------------------------------------------------------
# Pages
# ---------------------------------------------------------------------------
# Each page renders one JSON content document into a page shell.
# Listing any [[pages]] replaces this default list entirely.
[[pages]]
content = "resume.json"
output = "index.html"
variant = "portfolio"

# A second page using the glass shell:
# [[pages]]
# content = "glass_portfolio_content.json"
# output = "glass.html"
# variant = "glass"
# title = "GLASS"
# particle_rgb = "137, 0, 225"

# ---------------------------------------------------------------------------
# Skills
# ---------------------------------------------------------------------------
# Chips listed first (and highlighted) within each group, keyed by group
# type: languages, frameworks, tools, spoken, interests.
[skills.highlighted]
# languages = ["Rust"]
# tools = ["Git"]

# ---------------------------------------------------------------------------
# Carousels
# ---------------------------------------------------------------------------
[carousel]
# Horizontal travel (CSS px) beyond which a touch counts as a swipe.
swipe_threshold = 50.0

# Viewport width (CSS px) at or below which the project carousel runs.
mobile_breakpoint = 768

# Tags shown per experience card.
max_tags = 6

# ---------------------------------------------------------------------------
# Animation
# ---------------------------------------------------------------------------
[animation]
# Background particles; 0 disables the canvas animation.
particle_count = 30

# Seconds between the reveal of consecutive staggered children.
stagger_step = 0.08

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
accent = "#f5a623"
particle_rgb = "245, 166, 35"
"##
}

/// Generate CSS custom properties for one page.
pub fn generate_theme_css(theme: &ThemeConfig, page: &PageConfig) -> String {
    format!(
        r#":root {{
    --accent-main: {accent};
    --particle-color-rgb: {particle_rgb};
}}"#,
        accent = theme.accent,
        particle_rgb = page.particle_rgb.as_deref().unwrap_or(&theme.particle_rgb),
    )
}
