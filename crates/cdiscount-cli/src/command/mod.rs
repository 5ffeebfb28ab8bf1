//! Command handlers
//!
//! Each handler returns the decoded result record, printed by `main` as JSON.

pub mod discussions;
pub mod offers;
pub mod orders;
pub mod products;
pub mod relays;
pub mod seller;
pub mod webmail;

use std::path::{Path, PathBuf};

use anyhow::Context;
use cdiscount_client::Connection;
use cdiscount_package::Package;
use clap::Args;
use serde_json::Value;
use tracing::info;

use crate::{cli::Command, settings::Settings};

/// Run a command
pub async fn run(command: Command, settings: &Settings) -> anyhow::Result<Value> {
    match command {
        Command::Seller(cmd) => seller::run(cmd, settings).await,
        Command::Orders(cmd) => orders::run(cmd, settings).await,
        Command::Offers(cmd) => offers::run(cmd, settings).await,
        Command::Products(cmd) => products::run(cmd, settings).await,
        Command::Discussions(cmd) => discussions::run(cmd, settings).await,
        Command::Webmail(cmd) => webmail::run(cmd, settings).await,
        Command::Relays(cmd) => relays::run(cmd, settings).await,
    }
}

/// Open an authenticated connection
pub(crate) async fn connect(settings: &Settings) -> anyhow::Result<Connection> {
    let config = settings.client_config()?;
    info!(
        "Connecting to {} as {}",
        config.service_url(),
        config.login
    );
    Connection::connect(config)
        .await
        .context("Failed to connect to the Marketplace API")
}

/// Read a JSON document from a file
pub(crate) fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Arguments shared by the package generation commands
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Package name
    #[arg(long)]
    pub name: String,
    /// JSON file describing the records
    #[arg(long)]
    pub input: PathBuf,
    /// Archive path, `.zip` is appended when missing
    #[arg(long)]
    pub output: PathBuf,
    /// Replace an existing archive
    #[arg(long)]
    pub overwrite: bool,
}

/// Write a package archive and report its path
pub(crate) fn write_package(package: &impl Package, args: &PackageArgs) -> anyhow::Result<Value> {
    let path = package.generate(&args.output, args.overwrite)?;
    info!("Package {} written to {}", args.name, path.display());
    Ok(serde_json::json!({ "Name": args.name, "Path": path.display().to_string() }))
}
