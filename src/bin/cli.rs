//! Faculty site CLI
//!
//! Runs the dynamic site, the static export and the static file server.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use faculty::{
    error::Result,
    models::Config,
    pipeline,
    storage::LocalStorage,
};

/// Faculty website server and static exporter
#[derive(Parser, Debug)]
#[command(
    name = "faculty",
    version,
    about = "Server-rendered faculty website backed by a REST API"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dynamic site
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write static snapshots of every article
    Export {
        /// Output directory (default: export.output_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Serve an exported directory
    ServeStatic {
        /// Directory to serve (default: export.output_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the configuration, falling back to defaults, and validate it.
fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_or_default(path);
    config.validate()?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Serve { port } => {
            let mut config = load_config(&cli.config)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            pipeline::run_server(config).await?;
        }

        Command::Export { out } => {
            let config = load_config(&cli.config)?;
            let out = out.unwrap_or_else(|| config.export.output_dir.clone());
            let storage = LocalStorage::new(&out);
            let summary = pipeline::run_export(&config, &storage).await?;
            log::info!(
                "Exported {} of {} articles to {}",
                summary.written,
                summary.total,
                out.display()
            );
        }

        Command::ServeStatic { dir, port } => {
            let mut config = load_config(&cli.config)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            let dir = dir.unwrap_or_else(|| config.export.output_dir.clone());
            pipeline::run_static_server(&config, &dir).await?;
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            // No fallback here: a missing or malformed file is an error.
            let config = Config::load(&cli.config)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            if !config.server.assets_dir.is_dir() {
                log::warn!(
                    "Assets directory {} does not exist",
                    config.server.assets_dir.display()
                );
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
