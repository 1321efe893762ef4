//! HTML template system for page generation.
//!
//! Placeholders are `{{ name }}` (required) or `{{ name? }}` (empty when
//! absent). Values are inserted as-is; callers escape them first.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

}

/// A named template string.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    /// Create a new template with the given name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped.trim_end(), true),
                None => (var_name, false),
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            // Skip past the inserted value so it is never re-expanded.
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry.register(Template::new("about", DEFAULT_ABOUT_TEMPLATE));
        registry.register(Template::new("projects", DEFAULT_PROJECTS_TEMPLATE));
        registry.register(Template::new("redirect", DEFAULT_REDIRECT_TEMPLATE));
        registry
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    /// Get a template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Default base HTML template.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {{ head }}
    <style>
        :root {
            --color-primary: #3B82F6;
            --color-bg: #F8FAFC;
            --color-bg-secondary: #FFFFFF;
            --color-text: #1E293B;
            --color-text-muted: #64748B;
            --color-border: #E2E8F0;
            color-scheme: light dark;
        }

        @media (prefers-color-scheme: dark) {
            :root {
                --color-primary: #60A5FA;
                --color-bg: #0F172A;
                --color-bg-secondary: #1E293B;
                --color-text: #F1F5F9;
                --color-text-muted: #94A3B8;
                --color-border: #334155;
            }
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: system-ui, -apple-system, sans-serif;
            line-height: 1.7;
            color: var(--color-text);
            background-color: var(--color-bg);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .container { width: 100%; max-width: 960px; margin: 0 auto; padding: 0 1.5rem; }

        header { border-bottom: 1px solid var(--color-border); }
        header nav { display: flex; align-items: center; justify-content: space-between; padding: 1rem 0; }
        .site-title { font-weight: 600; color: var(--color-text); text-decoration: none; }
        .nav-links { display: flex; gap: 1.5rem; }
        .nav-links a { font-size: 0.875rem; color: var(--color-text-muted); text-decoration: none; }
        .nav-links a:hover { color: var(--color-primary); }

        main { flex: 1; padding: 3rem 0; }
        h1 { font-size: 2.5rem; font-weight: 800; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
        p { margin-bottom: 1.25rem; }
        a { color: var(--color-primary); }

        .project-grid { display: flex; flex-wrap: wrap; gap: 1.5rem; list-style: none; }
        .project-card {
            flex: 1 1 calc(50% - 1.5rem);
            border: 1px solid var(--color-border);
            border-radius: 0.5rem;
            overflow: hidden;
            background-color: var(--color-bg-secondary);
        }
        .project-card img { display: block; width: 100%; height: 220px; object-fit: cover; }
        .project-card .project-body { padding: 1.25rem; }
        .project-card h2 { font-size: 1.5rem; margin-bottom: 0.75rem; }
        .project-card h2 a { color: var(--color-text); text-decoration: none; }
        .project-card .learn-more { font-weight: 500; }

        footer { border-top: 1px solid var(--color-border); padding: 2rem 0; font-size: 0.875rem; color: var(--color-text-muted); }

        @media (max-width: 640px) {
            .project-card { flex-basis: 100%; }
            h1 { font-size: 2rem; }
        }
    </style>
</head>
<body>
    <header>
        <div class="container">
            <nav>
                <a href="/" class="site-title">{{ site_title }}</a>
                <div class="nav-links">
                    <a href="/projects">Projects</a>
                    <a href="/about">About</a>
                </div>
            </nav>
        </div>
    </header>
    <main>
        <div class="container">
            {{ content }}
        </div>
    </main>
    <footer>
        <div class="container">
            <p>&copy; {{ year? }} {{ author }}</p>
        </div>
    </footer>
</body>
</html>"##;

/// Default About page template.
pub const DEFAULT_ABOUT_TEMPLATE: &str = r#"<article class="about">
    <h1>{{ heading }}</h1>
    <div class="prose">
        {{ paragraphs }}
    </div>
</article>"#;

/// Default projects listing template.
pub const DEFAULT_PROJECTS_TEMPLATE: &str = r#"<section class="projects">
    <h1>{{ heading }}</h1>
    <p class="lead">{{ lead? }}</p>
    <ul class="project-grid">
        {{ items }}
    </ul>
</section>"#;

/// Redirect page written at the site root.
pub const DEFAULT_REDIRECT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta http-equiv="refresh" content="0; url={{ redirect_url }}">
    <link rel="canonical" href="{{ redirect_url }}">
    <title>Redirecting...</title>
</head>
<body>
    <p>Redirecting to <a href="{{ redirect_url }}">{{ redirect_url }}</a></p>
</body>
</html>"#;
