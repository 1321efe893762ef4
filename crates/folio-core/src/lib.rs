//! Folio Core Library
//!
//! Configuration, project catalog, About page content and page metadata for
//! the Folio portfolio site generator.

pub mod about;
pub mod config;
pub mod error;
pub mod metadata;
pub mod project;

pub use about::{AboutContent, ProfileLink};
pub use config::Config;
pub use error::{CoreError, Result};
pub use metadata::PageMetadata;
pub use project::{LinkKind, ProjectCatalog, ProjectRecord};
