//! Check command - validate configuration and the project catalog

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::Config;

use super::{load_catalog, site_path};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Warnings only fail the run in strict mode.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and catalog");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect every problem with the site at `config_path`.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    let config = match Config::load_with_env(config_path) {
        Ok(c) => c,
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            return result;
        }
    };

    check_config_values(&config, &mut result);

    match load_catalog(config_path, &config, None) {
        Ok(catalog) => {
            if catalog.is_empty() {
                result.add_warning("Project catalog is empty");
            }
            for warning in catalog.link_warnings() {
                result.add_warning(warning);
            }
        }
        Err(e) => result.add_error(format!("{e:#}")),
    }

    let static_dir = site_path(config_path, &config.build.static_dir);
    if !static_dir.is_dir() {
        result.add_warning(format!(
            "Static directory {} does not exist; project images will not be copied",
            static_dir.display()
        ));
    }

    result
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    let base_url = &config.site.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        result.add_warning(format!(
            "site.base_url \"{base_url}\" is not an absolute http(s) URL"
        ));
    }

    if base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    if config.site.description.is_none() {
        result.add_warning("site.description is not set; the projects page falls back to its title");
    }

    if config.about.paragraphs.is_empty() {
        result.add_warning("about.paragraphs is empty");
    }
}
