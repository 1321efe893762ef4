//! Build orchestration.
//!
//! Coordinates the full site build process.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::{Datelike, Utc};
use folio_core::{Config, PageMetadata, ProjectCatalog};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assets::{AssetCopier, AssetError},
    html::{HtmlError, HtmlGenerator, RenderedPage},
    robots::{RobotsError, RobotsGenerator},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// robots.txt generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages generated.
    pub pages: usize,

    /// Number of static assets copied.
    pub assets: usize,

    /// Whether robots.txt was written.
    pub robots: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Pages the site consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SitePage {
    About,
    Projects,
}

const SITE_PAGES: [SitePage; 2] = [SitePage::Projects, SitePage::About];

/// Where the site root sends visitors.
const ROOT_REDIRECT: &str = "/projects/";

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    catalog: ProjectCatalog,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, catalog: ProjectCatalog, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            catalog,
            output_dir: output_dir.into(),
            static_dir: None,
        }
    }

    /// Set the static assets directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();
        let today = Utc::now().date_naive();

        info!(
            output = %self.output_dir.display(),
            projects = self.catalog.len(),
            "starting build"
        );

        // 1. Clean output directory
        self.clean_output()?;

        // 2. Render and write pages
        let generator = HtmlGenerator::new(self.config.clone()).with_year(today.year());
        let pages = self.generate_pages(&generator)?;
        stats.pages = pages.len();
        self.write_root_redirect(&generator)?;

        // 3. Sitemap
        let metadata: Vec<PageMetadata> = pages.into_iter().map(|p| p.metadata).collect();
        self.generate_sitemap(&metadata, SitemapGenerator::new().with_lastmod(today))?;

        // 4. robots.txt
        stats.robots = RobotsGenerator::new(self.config.clone()).generate(&self.output_dir)?;

        // 5. Static assets
        if let Some(ref static_dir) = self.static_dir {
            stats.assets = self.copy_assets(static_dir)?;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            assets = stats.assets,
            robots = stats.robots,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Render every page and write it under its route. Pages come back in
    /// navigation order.
    fn generate_pages(&self, generator: &HtmlGenerator) -> Result<Vec<RenderedPage>> {
        info!(count = SITE_PAGES.len(), "generating HTML pages");

        SITE_PAGES
            .par_iter()
            .map(|page| {
                let rendered = match page {
                    SitePage::About => generator.render_about()?,
                    SitePage::Projects => generator.render_projects(&self.catalog)?,
                };
                let output_path = HtmlGenerator::output_path(&rendered.route, &self.output_dir);

                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_path, &rendered.html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, BuildError>(rendered)
            })
            .collect()
    }

    /// Write `index.html` at the output root pointing at the listing page.
    fn write_root_redirect(&self, generator: &HtmlGenerator) -> Result<()> {
        let html = generator.render_redirect(ROOT_REDIRECT)?;
        let output_path = HtmlGenerator::output_path("/", &self.output_dir);
        fs::write(&output_path, html)?;

        debug!(path = %output_path.display(), target = ROOT_REDIRECT, "wrote root redirect");
        Ok(())
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, pages: &[PageMetadata], generator: SitemapGenerator) -> Result<()> {
        let output_path = self.output_dir.join("sitemap.xml");
        let mut file = fs::File::create(&output_path)?;
        generator.write_to(pages, &mut file)?;

        info!(path = %output_path.display(), "generated sitemap");
        Ok(())
    }

    /// Copy static assets under `/<static dir name>`.
    fn copy_assets(&self, static_dir: &Path) -> Result<usize> {
        let mount = static_dir
            .file_name()
            .map_or_else(|| PathBuf::from("static"), PathBuf::from);
        Ok(AssetCopier::new(mount).copy(static_dir, &self.output_dir)?)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::ProjectRecord;
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        Config::new("Test Site", "X", "https://example.com")
    }

    #[test]
    fn test_build_site() {
        let output_dir = TempDir::new().unwrap();

        let builder = Builder::new(test_config(), ProjectCatalog::builtin(), output_dir.path());
        let stats = builder.build().unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.assets, 0);
        assert!(stats.robots);
        assert!(output_dir.path().join("about/index.html").exists());
        assert!(output_dir.path().join("projects/index.html").exists());
        assert!(output_dir.path().join("sitemap.xml").exists());
        assert!(output_dir.path().join("robots.txt").exists());
    }

    #[test]
    fn test_root_redirects_to_projects() {
        let output_dir = TempDir::new().unwrap();
        let stats = Builder::new(test_config(), ProjectCatalog::builtin(), output_dir.path())
            .build()
            .unwrap();

        let index = fs::read_to_string(output_dir.path().join("index.html")).unwrap();
        assert!(index.contains("url=/projects/"));
        assert_eq!(stats.pages, 2);

        let sitemap = fs::read_to_string(output_dir.path().join("sitemap.xml")).unwrap();
        assert!(!sitemap.contains("<loc>https://example.com/</loc>"));
    }

    #[test]
    fn test_build_cleans_output() {
        let output_dir = TempDir::new().unwrap();
        let stale = output_dir.path().join("stale.html");
        fs::write(&stale, "old").unwrap();

        Builder::new(test_config(), ProjectCatalog::builtin(), output_dir.path())
            .build()
            .unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_sitemap_lists_pages_in_order() {
        let output_dir = TempDir::new().unwrap();
        Builder::new(test_config(), ProjectCatalog::builtin(), output_dir.path())
            .build()
            .unwrap();

        let xml = fs::read_to_string(output_dir.path().join("sitemap.xml")).unwrap();
        let projects = xml.find("https://example.com/projects").unwrap();
        let about = xml.find("https://example.com/about").unwrap();
        assert!(projects < about);
    }

    #[test]
    fn test_build_with_custom_catalog() {
        let output_dir = TempDir::new().unwrap();
        let catalog = ProjectCatalog::new(vec![ProjectRecord::new(
            "Sorting Visualizer",
            "Visualizes sorting algorithms.",
            "/static/images/sorting.png",
            "/blog//sorting-visualizer",
        )]);

        Builder::new(test_config(), catalog, output_dir.path())
            .build()
            .unwrap();

        let html = fs::read_to_string(output_dir.path().join("projects/index.html")).unwrap();
        assert!(html.contains("Sorting Visualizer"));
        assert!(html.contains(r#"href="/blog//sorting-visualizer""#));
    }

    #[test]
    fn test_builder_with_static_dir() {
        let output_dir = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let static_dir = root.path().join("static");
        fs::create_dir_all(static_dir.join("images")).unwrap();
        fs::write(static_dir.join("images/aimduel-mainmenu.png"), b"png").unwrap();

        let stats = Builder::new(test_config(), ProjectCatalog::builtin(), output_dir.path())
            .with_static_dir(&static_dir)
            .build()
            .unwrap();

        assert_eq!(stats.assets, 1);
        assert!(
            output_dir
                .path()
                .join("static/images/aimduel-mainmenu.png")
                .exists()
        );
    }

    #[test]
    fn test_robots_disabled() {
        let output_dir = TempDir::new().unwrap();
        let mut config = test_config();
        config.robots.enabled = false;

        let stats = Builder::new(config, ProjectCatalog::builtin(), output_dir.path())
            .build()
            .unwrap();

        assert!(!stats.robots);
        assert!(!output_dir.path().join("robots.txt").exists());
    }
}
