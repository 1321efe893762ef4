//! Folio CLI
//!
//! Builds and previews a personal portfolio site.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use folio::cmd::build::BuildOptions;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(name = "folio", version, about = "Build and preview a portfolio site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the static site
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Project catalog file (defaults to build.projects or the built-in catalog)
        #[arg(short, long)]
        projects: Option<PathBuf>,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Build once and serve the output locally
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
    /// Validate configuration and the project catalog
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            projects,
            base_url,
        } => {
            let options = BuildOptions {
                output,
                projects,
                base_url,
            };
            folio::cmd::build::run(&cli.config, &options)?;
        }
        Commands::Serve { port, open } => {
            folio::cmd::serve::run(&cli.config, port, open).await?;
        }
        Commands::Check { strict } => {
            folio::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
