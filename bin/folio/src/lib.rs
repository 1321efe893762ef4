//! Folio CLI Library
//!
//! Command implementations for the `folio` binary, exposed as a library so
//! they can be tested and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, serve, check)
//! - [`server`] - Static file server for previewing a build
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd::build::{self, BuildOptions};
//!
//! build::run(Path::new("config.toml"), &BuildOptions::default()).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use folio_core::{Config, ProjectCatalog};
pub use folio_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// `0` = WARN, `1` = INFO, `2` = DEBUG, `3+` = TRACE. `RUST_LOG` directives
/// are honoured on top of that.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
