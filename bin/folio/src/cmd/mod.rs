//! CLI command implementations.

pub mod build;
pub mod check;
pub mod serve;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, ProjectCatalog};

/// Resolve a path from the config file against the config file's directory.
pub(crate) fn site_path(config_path: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    if relative.is_absolute() {
        return relative.to_path_buf();
    }
    config_path
        .parent()
        .map_or_else(|| relative.to_path_buf(), |dir| dir.join(relative))
}

/// Load the project catalog named by `override_path`, then `build.projects`,
/// falling back to the built-in catalog.
pub(crate) fn load_catalog(
    config_path: &Path,
    config: &Config,
    override_path: Option<&Path>,
) -> Result<ProjectCatalog> {
    let path = match (override_path, config.build.projects.as_deref()) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(configured)) => site_path(config_path, configured),
        (None, None) => {
            tracing::debug!("using built-in project catalog");
            return Ok(ProjectCatalog::builtin());
        }
    };

    ProjectCatalog::load(&path)
        .wrap_err_with(|| format!("Failed to load project catalog {}", path.display()))
}
