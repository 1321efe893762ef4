//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    about::AboutContent,
    error::{CoreError, Result},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,

    /// About page prose. Falls back to the built-in biography.
    #[serde(default)]
    pub about: AboutContent,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Author name, used in page titles and descriptions.
    pub author: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Language code for the `lang` attribute.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory of static assets copied verbatim into the output.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Optional project catalog file. The built-in catalog is used when unset.
    #[serde(default)]
    pub projects: Option<String>,
}

/// robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether robots.txt is generated.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Paths crawlers should skip.
    #[serde(default)]
    pub disallow: Vec<String>,
}

// Default value functions
fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            static_dir: default_static_dir(),
            projects: None,
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disallow: Vec::new(),
        }
    }
}

impl Config {
    /// Build a configuration in code with default build, robots and about settings.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            site: SiteConfig {
                title: title.into(),
                author: author.into(),
                base_url: base_url.into(),
                description: None,
                language: default_language(),
            },
            build: BuildConfig::default(),
            robots: RobotsConfig::default(),
            about: AboutContent::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `FOLIO__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.author.is_empty() {
            return Err(CoreError::config("site.author cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }
}
