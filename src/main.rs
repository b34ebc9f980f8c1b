//! Storefront - terminal shopping cart

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use storefront::config::Config;
use storefront::{App, Cart, paths, tui};
use tracing::info;

/// Terminal storefront with a single-slot confirmation coordinator
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default configuration as JSON
    DefaultConfig,
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to <temp dir>/storefront.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(std::env::temp_dir(), paths::log_file_name());
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::DefaultConfig) => {
            println!("{}", Config::default().to_json()?);
            Ok(())
        }
        None => {
            let config = match cli.config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load()?,
            };
            info!(path = %log_path.display(), "Starting storefront");

            let app = App::new(config, Cart::sample());
            tui::run(app)
        }
    }
}
