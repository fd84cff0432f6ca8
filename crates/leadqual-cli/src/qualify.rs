//! The `qualify` subcommand: ingest, run the batch, export.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Context;
use leadqual_classifier::{AnalysisClient, PageFetcher};
use leadqual_core::load_app_config;
use leadqual_core::types::LeadStatus;
use leadqual_pipeline::{run_batch, BatchOptions};

use crate::{export, ingest, QualifyArgs};

pub async fn run(args: &QualifyArgs, cancel: &Arc<AtomicBool>) -> anyhow::Result<()> {
    let config = load_app_config().context("loading the responder configuration")?;
    let criteria = ingest::read_icp(&args.icp)
        .with_context(|| format!("reading the ICP sheet {}", args.icp.display()))?;
    let leads = ingest::read_leads(&args.leads)
        .with_context(|| format!("reading the leads file {}", args.leads.display()))?;
    anyhow::ensure!(!leads.is_empty(), "no leads found in {}", args.leads.display());
    tracing::info!(leads = leads.len(), "starting qualification batch");

    let classifier = AnalysisClient::new(&config)?;
    let fetcher = PageFetcher::new(config.text_timeout_secs, &config.user_agent)?;
    let options = BatchOptions {
        fetch_page_text: args.fetch_page_text,
    };
    let results = run_batch(&criteria, &leads, &classifier, &fetcher, &options, cancel).await?;

    export::write_results(&args.out, &leads, &results)
        .with_context(|| format!("writing results to {}", args.out.display()))?;

    let count = |status: LeadStatus| results.iter().filter(|r| r.status == status).count();
    tracing::info!(
        processed = results.len(),
        qualified = count(LeadStatus::Qualified),
        rejected_local = count(LeadStatus::RejectedLocal),
        rejected_competitor = count(LeadStatus::RejectedCompetitor),
        rejected_segment = count(LeadStatus::RejectedSegment),
        self_match = count(LeadStatus::SelfMatch),
        attention = count(LeadStatus::AttentionNeeded),
        errors = count(LeadStatus::Error),
        out = %args.out.display(),
        "batch finished"
    );
    if cancel.load(Ordering::SeqCst) {
        tracing::warn!(
            skipped = leads.len() - results.len(),
            "batch was interrupted; unprocessed leads are not in the output"
        );
    }
    Ok(())
}
