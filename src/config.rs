//! Gallery configuration.
//!
//! Loads `gallery.toml`, stacks the command-line overrides on top, and
//! validates the result. Every key has a default, so a file only needs the
//! keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [source]
//! owner = "Mangkah"                    # GitHub user or organization
//! repo = "PhotoSite"                   # Repository holding the images
//! path = "images"                      # Directory inside the repository
//! api_base = "https://api.github.com"  # Contents API root
//!
//! [gallery]
//! title = "Photo Wall"
//! batch_size = 12                      # Items added per batch
//! scroll_threshold = 1200              # Distance from bottom that loads more
//!
//! [theme]
//! name = "light"                       # light, dark or sepia
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog::{DEFAULT_API_BASE, RepoRef};
use crate::gallery::{DEFAULT_BATCH_SIZE, DEFAULT_SCROLL_THRESHOLD};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Themes the page stylesheet knows about.
pub const THEMES: &[&str] = &["light", "dark", "sepia"];

/// Configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Where the image listing comes from.
    pub source: SourceConfig,
    /// Batch and scroll behaviour.
    pub gallery: DisplayConfig,
    pub theme: ThemeConfig,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.owner.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source.owner must not be empty".into(),
            ));
        }
        if self.source.repo.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source.repo must not be empty".into(),
            ));
        }
        if self.gallery.batch_size == 0 {
            return Err(ConfigError::Validation(
                "gallery.batch_size must be at least 1".into(),
            ));
        }
        if !self.gallery.scroll_threshold.is_finite() || self.gallery.scroll_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "gallery.scroll_threshold must be a non-negative number".into(),
            ));
        }
        if !THEMES.contains(&self.theme.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "theme.name must be one of {}",
                THEMES.join(", ")
            )));
        }
        Ok(())
    }

    pub fn repo_ref(&self) -> RepoRef {
        RepoRef {
            owner: self.source.owner.clone(),
            repo: self.source.repo.clone(),
            path: self.source.path.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub owner: String,
    pub repo: String,
    /// Directory inside the repository that holds the images.
    pub path: String,
    /// Root of the contents API. Point this elsewhere for GitHub Enterprise.
    pub api_base: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            owner: "Mangkah".to_string(),
            repo: "PhotoSite".to_string(),
            path: "images".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Page title.
    pub title: String,
    /// Number of items added per batch.
    pub batch_size: usize,
    /// Distance from the bottom of the content at which another batch loads.
    pub scroll_threshold: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Photo Wall".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Applied as the page's body class.
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "light".to_string(),
        }
    }
}

// =============================================================================
// Config layers
// =============================================================================
//
// Lowest precedence first:
//
//   1. serde defaults   (any key no layer sets)
//   2. gallery.toml     (optional)
//   3. --owner / --repo (command line)

/// Source settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
}

impl SourceOverrides {
    /// The overrides as a `[source]` table. Empty when nothing is set.
    pub fn layer(&self) -> toml::Value {
        let mut source = toml::Table::new();
        if let Some(owner) = &self.owner {
            source.insert("owner".into(), toml::Value::String(owner.clone()));
        }
        if let Some(repo) = &self.repo {
            source.insert("repo".into(), toml::Value::String(repo.clone()));
        }
        let mut root = toml::Table::new();
        if !source.is_empty() {
            root.insert("source".into(), toml::Value::Table(source));
        }
        toml::Value::Table(root)
    }
}

/// Put `upper` on top of `lower`. Tables merge per key; anything else in
/// `upper` replaces what was below it.
pub fn stack_layers(lower: toml::Value, upper: toml::Value) -> toml::Value {
    match (lower, upper) {
        (toml::Value::Table(mut below), toml::Value::Table(above)) => {
            for (key, value) in above {
                let value = match below.remove(&key) {
                    Some(under) => stack_layers(under, value),
                    None => value,
                };
                below.insert(key, value);
            }
            toml::Value::Table(below)
        }
        (_, upper) => upper,
    }
}

/// Read a config file as a raw layer. `Ok(None)` when the file is absent.
pub fn read_layer(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Stack `layers` in order, deserialize, and validate.
pub fn resolve_layers(
    layers: impl IntoIterator<Item = toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = layers
        .into_iter()
        .fold(toml::Value::Table(toml::Table::new()), stack_layers);
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `path` (if present) with the command-line overrides on top.
pub fn load_config(
    path: &Path,
    overrides: &SourceOverrides,
) -> Result<GalleryConfig, ConfigError> {
    let file = read_layer(path)?;
    resolve_layers(file.into_iter().chain([overrides.layer()]))
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Photo Wall Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Image source
# ---------------------------------------------------------------------------
[source]
# GitHub user (or organization) and repository that hold the images.
owner = "Mangkah"
repo = "PhotoSite"

# Directory inside the repository to list. Only jpg, jpeg, png, webp and gif
# files are shown.
path = "images"

# Contents API root.
api_base = "https://api.github.com"

# ---------------------------------------------------------------------------
# Gallery behaviour
# ---------------------------------------------------------------------------
[gallery]
title = "Photo Wall"

# Number of images added each time the gallery grows.
batch_size = 12

# Another batch loads once the viewport is this close to the bottom.
scroll_threshold = 1200

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# One of: light, dark, sepia. Applied as the page body class.
name = "light"
"##
}
