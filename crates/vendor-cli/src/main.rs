//! vendor-fix CLI
//!
//! Repairs drifted `.cargo-checksum.json` manifests in a vendored source
//! tree, either for every package under `vendor/` or for one package.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vendor_fs::VendorPath;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    let options = cli.reconcile.to_options();

    match cli.command.unwrap_or(Commands::All {
        root: PathBuf::from(VendorPath::VendorRoot.as_str()),
    }) {
        Commands::All { root } => commands::run_fix_all(&cwd, &root, &options)?,
        Commands::Package { dir } => commands::run_fix_package(&cwd, &dir, &options)?,
    };
    Ok(())
}
