//! Static asset copying.
//!
//! Mirrors the static directory into the output so project image paths
//! resolve. Catalog paths are not consulted.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Asset processing errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Copies a static directory tree.
#[derive(Debug, Clone)]
pub struct AssetCopier {
    /// Destination prefix inside the output directory.
    mount: PathBuf,
}

impl AssetCopier {
    /// Copy assets to `<output>/<mount>`, e.g. `static` so that
    /// `/static/images/a.png` is served from the copied tree.
    #[must_use]
    pub fn new(mount: impl Into<PathBuf>) -> Self {
        Self {
            mount: mount.into(),
        }
    }

    /// Copy every file under `source_dir`. Returns the number of files copied.
    pub fn copy(&self, source_dir: &Path, output_dir: &Path) -> Result<usize> {
        if !source_dir.is_dir() {
            return Err(AssetError::NotADirectory(source_dir.to_path_buf()));
        }

        let dest = output_dir.join(&self.mount);
        info!(
            source = %source_dir.display(),
            dest = %dest.display(),
            "copying static assets"
        );

        let count = copy_dir(source_dir, &dest)?;
        info!(count, "copied static assets");
        Ok(count)
    }
}

fn copy_dir(source: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut count = 0;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            count += copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            debug!(path = %target.display(), "copied asset");
            count += 1;
        }
    }

    Ok(count)
}
