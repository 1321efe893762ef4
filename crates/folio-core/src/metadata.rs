//! Per-page metadata handed to the head-tag emitter.

use serde::Serialize;

use crate::config::Config;

/// Title, description and canonical URL for one rendered page.
///
/// Built fresh for every render from the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl PageMetadata {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Metadata for the About page.
    #[must_use]
    pub fn about(config: &Config) -> Self {
        let author = &config.site.author;
        Self::new(
            format!("About - {author}"),
            format!("About me - {author}"),
            config.url_for("/about"),
        )
    }

    /// Metadata for the projects listing.
    ///
    /// Uses the site description when one is configured.
    #[must_use]
    pub fn projects(config: &Config) -> Self {
        let author = &config.site.author;
        let description = config
            .site
            .description
            .clone()
            .unwrap_or_else(|| format!("Projects - {author}"));
        Self::new(
            format!("Projects - {author}"),
            description,
            config.url_for("/projects"),
        )
    }
}
