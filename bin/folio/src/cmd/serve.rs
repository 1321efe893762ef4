//! Serve command - build once and preview the output locally

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use super::build::{BuildOptions, build_site, prepare};
use crate::server::create_router;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, open_browser: bool) -> Result<()> {
    tracing::info!(?config_path, port, "Starting preview server");

    let addr = format!("127.0.0.1:{port}");

    // Canonical and sitemap URLs point at the preview server.
    let options = BuildOptions {
        base_url: Some(format!("http://{addr}")),
        ..BuildOptions::default()
    };
    let (config, output) = prepare(config_path, &options)?;
    let stats = build_site(config_path, config, &output, None)?;
    tracing::info!(?stats, "Initial build complete");

    let app = create_router(&output);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Built {} pages into {}", stats.pages, output.display());
    println!("  Preview server running at http://{addr}/projects/");
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(format!("http://{addr}/projects/")) {
            tracing::warn!(error = %e, "Failed to open browser");
        }
    }

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
