//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use folio_generator::{BuildStats, Builder};

use super::{load_catalog, site_path};

/// Overrides for a single build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory instead of `build.output_dir`.
    pub output: Option<PathBuf>,
    /// Catalog file instead of `build.projects`.
    pub projects: Option<PathBuf>,
    /// Site base URL instead of `site.base_url`.
    pub base_url: Option<String>,
}

/// Run the build command.
pub fn run(config_path: &Path, options: &BuildOptions) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting build");

    let (config, output) = prepare(config_path, options)?;
    let stats = build_site(config_path, config, &output, options.projects.as_deref())?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Assets:     {}", stats.assets);
    println!("  robots.txt: {}", if stats.robots { "yes" } else { "no" });
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}

/// Load configuration and apply CLI overrides. Returns the config and the
/// resolved output directory.
pub(crate) fn prepare(config_path: &Path, options: &BuildOptions) -> Result<(Config, PathBuf)> {
    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(url) = &options.base_url {
        tracing::info!(base_url = %url, "Overriding site base_url from CLI");
        config.site.base_url = url.clone();
        config.validate().wrap_err("Invalid --base-url")?;
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| site_path(config_path, &config.build.output_dir));

    tracing::debug!(?config, "Loaded configuration");
    Ok((config, output))
}

/// Build the site into `output`.
pub(crate) fn build_site(
    config_path: &Path,
    config: Config,
    output: &Path,
    projects: Option<&Path>,
) -> Result<BuildStats> {
    let catalog = load_catalog(config_path, &config, projects)?;

    for warning in catalog.link_warnings() {
        tracing::warn!("{warning}");
    }

    let static_dir = site_path(config_path, &config.build.static_dir);
    let mut builder = Builder::new(config, catalog, output);

    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Found static directory, will copy to output");
        builder = builder.with_static_dir(static_dir);
    }

    builder.build().wrap_err("Build failed")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_site(dir: &Path) -> PathBuf {
        let config_path = dir.join("config.toml");
        fs::write(
            &config_path,
            r#"
[site]
title = "Portfolio"
author = "X"
base_url = "https://example.com"
"#,
        )
        .unwrap();
        fs::create_dir_all(dir.join("static/images")).unwrap();
        fs::write(dir.join("static/images/gearbox-render.png"), b"png").unwrap();
        config_path
    }

    #[test]
    fn test_build_into_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_site(dir.path());

        let stats = run(&config_path, &BuildOptions::default()).unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.assets, 1);
        assert!(dir.path().join("public/about/index.html").exists());
        assert!(
            dir.path()
                .join("public/static/images/gearbox-render.png")
                .exists()
        );
    }

    #[test]
    fn test_build_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_site(dir.path());
        let output = dir.path().join("dist");
        let projects = dir.path().join("projects.toml");
        fs::write(
            &projects,
            "[[projects]]\ntitle = \"Only\"\ndescription = \"d\"\nimage_path = \"/o.png\"\nlink = \"/o\"\n",
        )
        .unwrap();

        let options = BuildOptions {
            output: Some(output.clone()),
            projects: Some(projects),
            base_url: Some("https://override.dev".to_string()),
        };
        run(&config_path, &options).unwrap();

        let about = fs::read_to_string(output.join("about/index.html")).unwrap();
        assert!(about.contains(r#"href="https://override.dev/about""#));
        let listing = fs::read_to_string(output.join("projects/index.html")).unwrap();
        assert!(listing.contains(">Only</a></h2>"));
        assert!(!listing.contains("Gearbox Design"));
    }

    #[test]
    fn test_build_missing_config() {
        let err = run(Path::new("/nonexistent/config.toml"), &BuildOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration"));
    }
}
