//! Robots.txt generation.

use std::{fs::File, io::Write, path::Path};

use folio_core::Config;
use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write `robots.txt` into `output_dir`. Returns whether a file was written.
    pub fn generate(&self, output_dir: &Path) -> Result<bool> {
        if !self.config.robots.enabled {
            return Ok(false);
        }

        info!("generating robots.txt");

        let mut file = File::create(output_dir.join("robots.txt"))?;

        writeln!(file, "User-agent: *")?;

        for path in &self.config.robots.disallow {
            writeln!(file, "Disallow: {path}")?;
        }

        if self.config.robots.disallow.is_empty() {
            writeln!(file, "Allow: /")?;
        }

        writeln!(file, "Sitemap: {}", self.config.url_for("sitemap.xml"))?;

        Ok(true)
    }
}
