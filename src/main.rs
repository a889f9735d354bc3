//! shimo_mirror CLI - One full mirror run, no pause/resume.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use shimo_mirror::{ExportFormat, Mirror, RetryPolicy, RunConfig};

/// Download every document of a Shimo workspace into a local directory
/// tree mirroring the remote folders.
#[derive(Parser)]
#[command(name = "shimo_mirror")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Destination directory for the mirrored workspace.
    #[arg(long, default_value = "./download")]
    root_path: PathBuf,

    /// Export format for every document.
    #[arg(long, value_enum, default_value_t = ExportFormat::Md)]
    format: ExportFormat,

    /// Session token (value of the shimo_sid cookie).
    #[arg(long, env = "SHIMO_SID", default_value = "")]
    session: String,

    /// Strip spaces from every mirrored path segment.
    #[arg(long)]
    remove_blank: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = RunConfig {
        root_path: cli.root_path.clone(),
        format: cli.format,
        session: cli.session,
        remove_blank: cli.remove_blank,
    };
    let (mut mirror, _pause) = Mirror::new(config, RetryPolicy::default());

    std::fs::create_dir_all(&cli.root_path)
        .with_context(|| format!("failed to create destination directory {:?}", cli.root_path))?;

    mirror
        .check_credential()
        .await
        .context("session token check failed")?;

    let summary = mirror.run().await.context("mirror run aborted")?;

    info!(discovered = summary.discovered, "download complete");
    Ok(())
}
