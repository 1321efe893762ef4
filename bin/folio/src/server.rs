//! Static file server for previewing a build

use std::path::Path;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the preview server router.
///
/// `/about` resolves to `about/index.html` through `ServeDir`'s directory
/// index handling.
pub fn create_router(output_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(output_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}
