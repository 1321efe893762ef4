//! Head and social-preview tag emission.

use folio_core::PageMetadata;

use crate::html::escape_html;

/// Turns a page's metadata into markup for the document `<head>`.
pub trait MetadataEmitter: Send + Sync {
    fn emit(&self, meta: &PageMetadata) -> String;
}

/// Standard title, description, canonical, Open Graph and Twitter tags.
#[derive(Debug, Clone)]
pub struct HeadTags {
    site_name: String,
}

impl HeadTags {
    #[must_use]
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }
}

impl MetadataEmitter for HeadTags {
    fn emit(&self, meta: &PageMetadata) -> String {
        let title = escape_html(&meta.title);
        let description = escape_html(&meta.description);
        let url = escape_html(&meta.url);
        let site_name = escape_html(&self.site_name);

        [
            format!("<title>{title}</title>"),
            format!(r#"<meta name="description" content="{description}">"#),
            format!(r#"<link rel="canonical" href="{url}">"#),
            format!(r#"<meta property="og:url" content="{url}">"#),
            r#"<meta property="og:type" content="website">"#.to_string(),
            format!(r#"<meta property="og:site_name" content="{site_name}">"#),
            format!(r#"<meta property="og:title" content="{title}">"#),
            format!(r#"<meta property="og:description" content="{description}">"#),
            r#"<meta name="twitter:card" content="summary">"#.to_string(),
            format!(r#"<meta name="twitter:title" content="{title}">"#),
            format!(r#"<meta name="twitter:description" content="{description}">"#),
        ]
        .join("\n    ")
    }
}
