//! Page rendering.
//!
//! Every render is a pure function of the configuration and its input data:
//! no I/O, no clocks. The builder supplies the footer year.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use folio_core::{Config, LinkKind, PageMetadata, ProfileLink, ProjectCatalog, ProjectRecord};
use thiserror::Error;
use tracing::debug;

use crate::{
    seo::{HeadTags, MetadataEmitter},
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// A rendered document and the metadata it was rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Site route, e.g. `/about`.
    pub route: String,
    pub metadata: PageMetadata,
    pub html: String,
}

/// HTML page generator.
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    emitter: Box<dyn MetadataEmitter>,
    config: Config,
    year: Option<i32>,
}

impl fmt::Debug for HtmlGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlGenerator")
            .field("templates", &self.templates)
            .field("config", &self.config)
            .field("year", &self.year)
            .finish_non_exhaustive()
    }
}

impl HtmlGenerator {
    /// Create a generator with the built-in templates and head tags.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let emitter = HeadTags::new(&config.site.title);
        Self {
            templates: TemplateRegistry::new(),
            emitter: Box::new(emitter),
            config,
            year: None,
        }
    }

    /// Replace the template registry.
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateRegistry) -> Self {
        self.templates = templates;
        self
    }

    /// Replace the head-tag emitter.
    #[must_use]
    pub fn with_emitter(mut self, emitter: impl MetadataEmitter + 'static) -> Self {
        self.emitter = Box::new(emitter);
        self
    }

    /// Set the copyright year shown in the footer.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Render the About page from the configured biography.
    pub fn render_about(&self) -> Result<RenderedPage> {
        let about = &self.config.about;
        let metadata = PageMetadata::about(&self.config);
        debug!(url = %metadata.url, "rendering about page");

        // The profile sentence closes the last paragraph.
        let sentence = profile_sentence_html(&about.profile);
        let mut paragraphs = about.paragraphs.iter().map(|p| escape_html(p)).collect::<Vec<_>>();
        match paragraphs.last_mut() {
            Some(last) => {
                last.push(' ');
                last.push_str(&sentence);
            }
            None => paragraphs.push(sentence),
        }
        let paragraphs = paragraphs
            .iter()
            .map(|p| format!("<p>{p}</p>"))
            .collect::<Vec<_>>()
            .join("\n        ");

        let ctx = TemplateContext::new()
            .with_var("heading", escape_html(&about.heading))
            .with_var("paragraphs", paragraphs);
        let inner_html = self.templates.render("about", &ctx)?;

        self.finish("/about", metadata, &inner_html)
    }

    /// Render the projects listing, one card per record in catalog order.
    pub fn render_projects(&self, catalog: &ProjectCatalog) -> Result<RenderedPage> {
        let metadata = PageMetadata::projects(&self.config);
        debug!(url = %metadata.url, count = catalog.len(), "rendering projects page");

        let items = catalog
            .iter()
            .map(project_card_html)
            .collect::<Vec<_>>()
            .join("\n        ");

        let mut ctx = TemplateContext::new()
            .with_var("heading", "Projects")
            .with_var("items", items);
        if let Some(description) = &self.config.site.description {
            ctx.insert("lead", escape_html(description));
        }
        let inner_html = self.templates.render("projects", &ctx)?;

        self.finish("/projects", metadata, &inner_html)
    }

    /// Render a page that immediately redirects to `target`.
    pub fn render_redirect(&self, target: &str) -> Result<String> {
        let ctx = TemplateContext::new().with_var("redirect_url", escape_html(target));
        Ok(self.templates.render("redirect", &ctx)?)
    }

    /// Wrap page content in the base layout.
    fn finish(&self, route: &str, metadata: PageMetadata, inner_html: &str) -> Result<RenderedPage> {
        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&self.config.site.language))
            .with_var("head", self.emitter.emit(&metadata))
            .with_var("site_title", escape_html(&self.config.site.title))
            .with_var("author", escape_html(&self.config.site.author))
            .with_var("content", inner_html);
        if let Some(year) = self.year {
            ctx.insert("year", year.to_string());
        }

        let html = self.templates.render("base", &ctx)?;
        Ok(RenderedPage {
            route: route.to_string(),
            metadata,
            html,
        })
    }

    /// Get the output path for a route.
    #[must_use]
    pub fn output_path(route: &str, output_dir: &Path) -> PathBuf {
        let relative = route.trim_matches('/');

        if relative.is_empty() {
            output_dir.join("index.html")
        } else {
            output_dir.join(relative).join("index.html")
        }
    }
}

/// Generate the card for one project.
///
/// `link` and `image_path` are emitted exactly as authored; external links
/// open in a new tab.
pub fn project_card_html(record: &ProjectRecord) -> String {
    let title = escape_html(&record.title);
    let href = escape_html(&record.link);
    let target = match record.link_kind() {
        LinkKind::External => r#" target="_blank" rel="noopener noreferrer""#,
        LinkKind::Internal => "",
    };

    format!(
        r#"<li class="project-card">
            <a href="{href}"{target} aria-label="Link to {title}"><img src="{src}" alt="{title}" loading="lazy"></a>
            <div class="project-body">
                <h2><a href="{href}"{target}>{title}</a></h2>
                <p>{description}</p>
                <a href="{href}"{target} class="learn-more">Learn more &rarr;</a>
            </div>
        </li>"#,
        src = escape_html(&record.image_path),
        description = escape_html(&record.description),
    )
}

/// Render `{lead} <a href="{url}">{label}</a>{trail}`.
///
/// The trail is separated by a space unless it opens with punctuation.
pub fn profile_sentence_html(profile: &ProfileLink) -> String {
    let mut out = String::new();
    if !profile.lead.is_empty() {
        out.push_str(&escape_html(&profile.lead));
        out.push(' ');
    }
    out.push_str(&format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(&profile.url),
        escape_html(&profile.label)
    ));
    if let Some(first) = profile.trail.chars().next() {
        if first.is_alphanumeric() {
            out.push(' ');
        }
        out.push_str(&escape_html(&profile.trail));
    }
    out
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
