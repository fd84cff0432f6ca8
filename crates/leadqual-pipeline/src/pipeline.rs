//! Per-lead state machine and batch driver.
//!
//! Each lead runs Init → SizeCheck → LocalityCheck → RoleCheck →
//! Acquisition → Classify → Finalize. Local checks short-circuit on the
//! first failure, in that order, before any I/O happens. No failure
//! escapes a single lead: every terminal state is folded into that
//! lead's [`ClassificationResult`] and the batch always yields one row
//! per processed lead.

use std::sync::atomic::{AtomicBool, Ordering};

use leadqual_core::{
    ClassificationResult, CollabError, ContentClassifier, ContentFetcher, IcpCriteria, LeadRecord,
    LeadStatus, Subject,
};

use crate::enrich::{resolve_phone, resolve_subject, Resolution};
use crate::error::PipelineError;
use crate::locality::{locality_matches, normalize_text};
use crate::phone::normalize_phone;
use crate::rules::{employee_count_matches, role_matches};
use crate::validate::validate_verdict;

/// Knobs for one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Fetch the page text through the [`ContentFetcher`] and classify
    /// the text instead of handing the URL to the responder. Falls back
    /// to URL classification when the fetch fails.
    pub fetch_page_text: bool,
}

/// Runs a whole batch, strictly sequentially, one lead to its terminal
/// state before the next starts.
///
/// Cancellation is checked between leads, not mid-call; on cancel the
/// returned results cover only the leads already processed.
///
/// # Errors
///
/// Returns [`PipelineError::Config`] when the ICP lacks a usable
/// comparison basis — fatal before any lead is processed. Per-lead
/// failures never surface here; they land in the lead's result.
pub async fn run_batch<C, F>(
    criteria: &IcpCriteria,
    leads: &[LeadRecord],
    classifier: &C,
    fetcher: &F,
    options: &BatchOptions,
    cancel: &AtomicBool,
) -> Result<Vec<ClassificationResult>, PipelineError>
where
    C: ContentClassifier,
    F: ContentFetcher,
{
    criteria.validate()?;

    let mut results = Vec::with_capacity(leads.len());
    for (index, lead) in leads.iter().enumerate() {
        if cancel.load(Ordering::SeqCst) {
            tracing::info!(
                processed = results.len(),
                remaining = leads.len() - results.len(),
                "batch cancelled between leads"
            );
            break;
        }
        tracing::info!(index, company = %lead.company, "qualifying lead");
        let result = qualify_lead(lead, criteria, classifier, fetcher, options).await;
        tracing::info!(index, status = ?result.status, reason = %result.reason, "lead finalized");
        results.push(result);
    }
    Ok(results)
}

/// Runs one lead through the full state machine. Infallible: every
/// failure mode maps to a terminal status.
pub async fn qualify_lead<C, F>(
    lead: &LeadRecord,
    criteria: &IcpCriteria,
    classifier: &C,
    fetcher: &F,
    options: &BatchOptions,
) -> ClassificationResult
where
    C: ContentClassifier,
    F: ContentFetcher,
{
    // Local rules: cheap, no I/O, first failure wins. Order: size,
    // locality, role.
    if !employee_count_matches(lead.employee_count.as_deref(), &criteria.employee_range) {
        return ClassificationResult::bare(
            LeadStatus::RejectedLocal,
            "company size outside the ICP range",
        );
    }
    let (city, state, country) = lead.locality();
    if !locality_matches(city, state, country, &criteria.locality_rules) {
        return ClassificationResult::bare(
            LeadStatus::RejectedLocal,
            "locality outside the ICP rules",
        );
    }
    if !role_matches(lead.role.as_deref(), &criteria.allowed_roles) {
        return ClassificationResult::bare(
            LeadStatus::RejectedLocal,
            "role outside the ICP allow-list",
        );
    }

    // Acquisition: resolve something analyzable.
    let (subject, discovered_site) = match resolve_subject(lead, classifier).await {
        Ok(Resolution::Resolved {
            subject,
            discovered_site,
            ..
        }) => (subject, discovered_site),
        Ok(Resolution::Unresolved { .. }) => {
            return ClassificationResult::bare(
                LeadStatus::AttentionNeeded,
                "no analyzable data found",
            );
        }
        Err(e) => return collab_failure(&e),
    };

    // Self-exclusion: never send the contracting company to the
    // classifier.
    if is_self_match(lead, &subject, criteria) {
        return ClassificationResult::bare(
            LeadStatus::SelfMatch,
            "lead matches the contracting company",
        );
    }

    let summary_artifact = match &subject {
        Subject::Summary(s) => Some(s.clone()),
        Subject::Url(_) => None,
    };

    // Classify, optionally fetching page text first.
    let classify_subject = prepare_subject(subject, fetcher, options).await;
    let raw = match classifier.classify(&classify_subject, criteria).await {
        Ok(raw) => raw,
        Err(e) => return collab_failure(&e),
    };

    let verdict = match validate_verdict(&raw, criteria) {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::warn!(company = %lead.company, error = %e, "classifier response rejected");
            return ClassificationResult::bare(LeadStatus::Error, e.to_string());
        }
    };

    // Phone enrichment is best-effort and only worth doing when the lead
    // has no usable phone on record.
    let discovered_phone = if has_usable_phone(lead) {
        None
    } else {
        resolve_phone(lead, verdict.phone_found.as_deref(), classifier).await
    };

    let (status, reason) = if verdict.is_competitor {
        (
            LeadStatus::RejectedCompetitor,
            or_fallback(verdict.competitor_reason, "direct competitor"),
        )
    } else if verdict.is_segment_correct {
        (
            LeadStatus::Qualified,
            or_fallback(verdict.segment_reason, "segment confirmed"),
        )
    } else {
        (
            LeadStatus::RejectedSegment,
            or_fallback(verdict.segment_reason, "segment outside the ICP"),
        )
    };

    ClassificationResult {
        status,
        reason,
        segment_category: verdict.segment_category,
        discovered_site,
        discovered_phone,
        discovered_summary: summary_artifact,
    }
}

async fn prepare_subject<F: ContentFetcher>(
    subject: Subject,
    fetcher: &F,
    options: &BatchOptions,
) -> Subject {
    if !options.fetch_page_text {
        return subject;
    }
    let Subject::Url(url) = &subject else {
        return subject;
    };
    match fetcher.fetch_text(url).await {
        Ok(text) if !text.trim().is_empty() => Subject::Summary(text),
        Ok(_) => subject,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "page fetch failed, classifying URL directly");
            subject
        }
    }
}

fn collab_failure(e: &CollabError) -> ClassificationResult {
    ClassificationResult::bare(LeadStatus::Error, e.to_string())
}

fn has_usable_phone(lead: &LeadRecord) -> bool {
    lead.phones.iter().any(|p| !normalize_phone(p).is_empty())
}

/// Strips scheme, leading `www.`, and trailing slash for site identity
/// comparison.
fn normalize_domain(site: &str) -> String {
    let site = site.trim().to_lowercase();
    let site = site
        .strip_prefix("https://")
        .or_else(|| site.strip_prefix("http://"))
        .unwrap_or(&site);
    site.strip_prefix("www.")
        .unwrap_or(site)
        .trim_end_matches('/')
        .to_string()
}

fn is_self_match(lead: &LeadRecord, subject: &Subject, criteria: &IcpCriteria) -> bool {
    if let Subject::Url(url) = subject {
        let own = normalize_domain(&criteria.own_site);
        if !own.is_empty() && own.contains('.') && normalize_domain(url) == own {
            return true;
        }
    }
    let own_company = normalize_text(&criteria.own_company);
    !own_company.is_empty() && normalize_text(&lead.company) == own_company
}

fn or_fallback(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
