use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand};

mod clean;
mod export;
mod ingest;
mod qualify;

#[derive(Debug, Parser)]
#[command(name = "leadqual")]
#[command(about = "Lead qualification against an Ideal Customer Profile")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Qualify a batch of leads against an ICP and export the results.
    Qualify(QualifyArgs),
    /// Clean and standardize a raw lead export without qualifying it.
    Clean(CleanArgs),
}

#[derive(Debug, clap::Args)]
struct QualifyArgs {
    /// Leads CSV (raw export or previously cleaned).
    #[arg(long)]
    leads: PathBuf,
    /// ICP CSV (Campo_ICP;Valor_ICP key/value sheet).
    #[arg(long)]
    icp: PathBuf,
    /// Output CSV path.
    #[arg(long)]
    out: PathBuf,
    /// Fetch each site's page text and classify the text instead of
    /// handing the URL to the responder.
    #[arg(long)]
    fetch_page_text: bool,
}

#[derive(Debug, clap::Args)]
struct CleanArgs {
    /// Raw leads CSV.
    #[arg(long)]
    input: PathBuf,
    /// Output CSV path.
    #[arg(long)]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Qualify(args) => {
            let cancel = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&cancel);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("interrupt received, stopping after the current lead");
                    flag.store(true, Ordering::SeqCst);
                }
            });
            qualify::run(&args, &cancel).await
        }
        Commands::Clean(args) => clean::run(&args),
    }
}
