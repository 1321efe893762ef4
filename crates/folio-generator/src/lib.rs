//! Folio Generator Library
//!
//! Page rendering and build engine for Folio.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - About and projects page rendering
//! - [`seo`] - Head and social-preview tags from page metadata
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`assets`] - Static asset copying
//! - [`build`] - Build orchestration

pub mod assets;
pub mod build;
pub mod html;
pub mod robots;
pub mod seo;
pub mod sitemap;
pub mod template;

pub use assets::AssetCopier;
pub use build::{BuildStats, Builder};
pub use html::{HtmlGenerator, RenderedPage};
pub use robots::RobotsGenerator;
pub use seo::{HeadTags, MetadataEmitter};
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
