//! Sitemap generation.
//!
//! Generates an XML sitemap listing every rendered page.

use std::io::Write;

use chrono::NaiveDate;
use folio_core::PageMetadata;
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Sitemap generator.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    lastmod: Option<NaiveDate>,
}

impl SitemapGenerator {
    /// Create a sitemap generator without `lastmod` dates.
    #[must_use]
    pub fn new() -> Self {
        Self { lastmod: None }
    }

    /// Stamp every entry with the given modification date.
    #[must_use]
    pub fn with_lastmod(mut self, date: NaiveDate) -> Self {
        self.lastmod = Some(date);
        self
    }

    /// Generate sitemap XML for the given pages, in order.
    #[must_use]
    pub fn generate(&self, pages: &[PageMetadata]) -> String {
        debug!(count = pages.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for page in pages {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&page.url)));
            if let Some(date) = self.lastmod {
                xml.push_str(&format!(
                    "    <lastmod>{}</lastmod>\n",
                    date.format("%Y-%m-%d")
                ));
            }
            xml.push_str("    <changefreq>yearly</changefreq>\n");
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, pages: &[PageMetadata], writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(pages).as_bytes())?;
        Ok(())
    }
}

impl Default for SitemapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
