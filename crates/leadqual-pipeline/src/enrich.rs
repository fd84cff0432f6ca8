//! Enrichment cascade: ordered fallback strategies for acquiring an
//! analyzable subject, and an independent cascade for a contact phone.
//!
//! Each subject stage is a function with the same shape — try to produce
//! a usable subject, or yield to the next stage — and they run in fixed
//! priority order. A stage whose answer merely fails the usability check
//! advances the cascade; a collaborator transport failure aborts it.

use leadqual_core::collab::NOT_FOUND_SENTINEL;
use leadqual_core::{CollabError, ContentClassifier, LeadRecord, Subject};

use crate::phone::normalize_phone;

/// Which cascade stage produced (or failed to produce) a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentStage {
    /// The lead's own website field.
    LeadWebsite,
    /// AI discovery of the official website from name + location.
    WebsiteDiscovery,
    /// Online-presence lookup yielding a business summary.
    PresenceLookup,
}

/// One cascade stage's outcome, kept for the audit trail.
#[derive(Debug, Clone)]
pub struct EnrichmentAttempt {
    pub stage: EnrichmentStage,
    pub accepted: bool,
    pub detail: String,
}

/// Outcome of the subject cascade.
#[derive(Debug, Clone)]
pub enum Resolution {
    Resolved {
        subject: Subject,
        /// Website found by stage 2, absent when the lead already had one
        /// or the cascade ended on a summary.
        discovered_site: Option<String>,
        attempts: Vec<EnrichmentAttempt>,
    },
    Unresolved {
        attempts: Vec<EnrichmentAttempt>,
    },
}

/// Prefixes a scheme when the raw site value lacks one.
#[must_use]
pub fn ensure_scheme(site: &str) -> String {
    let site = site.trim();
    if site.starts_with("http://") || site.starts_with("https://") {
        site.to_string()
    } else {
        format!("https://{site}")
    }
}

/// Does a discovery answer look like a real domain?
fn looks_like_domain(answer: &str) -> bool {
    let answer = answer.trim().trim_matches(|c| c == '"' || c == '\'');
    !answer.is_empty()
        && answer.contains('.')
        && !answer.contains(char::is_whitespace)
        && !answer.to_uppercase().contains(NOT_FOUND_SENTINEL)
}

/// Stage 1: the lead's own website field.
fn stage_lead_website(lead: &LeadRecord) -> Option<Subject> {
    lead.usable_website()
        .map(|site| Subject::Url(ensure_scheme(site)))
}

/// Stage 2: ask the classifier to discover the official website.
async fn stage_discover_website<C: ContentClassifier>(
    lead: &LeadRecord,
    classifier: &C,
) -> Result<Option<String>, CollabError> {
    let (city, state, _) = lead.locality();
    let answer = classifier
        .discover_website(&lead.company, city, state)
        .await?;
    let candidate = answer.trim().trim_matches(|c| c == '"' || c == '\'');
    if looks_like_domain(candidate) {
        Ok(Some(candidate.to_string()))
    } else {
        tracing::debug!(company = %lead.company, answer = %answer, "discovery answer not domain-like");
        Ok(None)
    }
}

/// Stage 3: online-presence lookup; accepts the summary only when the
/// responder flags the company as active.
async fn stage_presence_lookup<C: ContentClassifier>(
    lead: &LeadRecord,
    classifier: &C,
) -> Result<Option<String>, CollabError> {
    let (city, _, _) = lead.locality();
    let answer = classifier.lookup_presence(&lead.company, city).await?;
    let cleaned = answer.replace("```json", "").replace("```", "");
    let Ok(value) = serde_json::from_str::<serde_json::Value>(cleaned.trim()) else {
        tracing::debug!(company = %lead.company, "presence answer not JSON");
        return Ok(None);
    };
    let active = value.get("active").and_then(serde_json::Value::as_bool);
    let summary = value
        .get("summary")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    match (active, summary) {
        (Some(true), Some(summary)) => Ok(Some(summary.to_string())),
        _ => Ok(None),
    }
}

/// Runs the subject cascade for one lead: own website, then AI website
/// discovery, then the online-presence summary.
///
/// # Errors
///
/// Propagates [`CollabError`] from the classifier; unusable answers are
/// not errors, they advance the cascade.
pub async fn resolve_subject<C: ContentClassifier>(
    lead: &LeadRecord,
    classifier: &C,
) -> Result<Resolution, CollabError> {
    let mut attempts = Vec::new();

    if let Some(subject) = stage_lead_website(lead) {
        attempts.push(EnrichmentAttempt {
            stage: EnrichmentStage::LeadWebsite,
            accepted: true,
            detail: subject.as_str().to_string(),
        });
        return Ok(Resolution::Resolved {
            subject,
            discovered_site: None,
            attempts,
        });
    }
    attempts.push(EnrichmentAttempt {
        stage: EnrichmentStage::LeadWebsite,
        accepted: false,
        detail: "no website on record".to_string(),
    });

    match stage_discover_website(lead, classifier).await? {
        Some(site) => {
            attempts.push(EnrichmentAttempt {
                stage: EnrichmentStage::WebsiteDiscovery,
                accepted: true,
                detail: site.clone(),
            });
            return Ok(Resolution::Resolved {
                subject: Subject::Url(ensure_scheme(&site)),
                discovered_site: Some(site),
                attempts,
            });
        }
        None => attempts.push(EnrichmentAttempt {
            stage: EnrichmentStage::WebsiteDiscovery,
            accepted: false,
            detail: "no domain-like answer".to_string(),
        }),
    }

    match stage_presence_lookup(lead, classifier).await? {
        Some(summary) => {
            attempts.push(EnrichmentAttempt {
                stage: EnrichmentStage::PresenceLookup,
                accepted: true,
                detail: summary.clone(),
            });
            Ok(Resolution::Resolved {
                subject: Subject::Summary(summary),
                discovered_site: None,
                attempts,
            })
        }
        None => {
            attempts.push(EnrichmentAttempt {
                stage: EnrichmentStage::PresenceLookup,
                accepted: false,
                detail: "no active presence".to_string(),
            });
            Ok(Resolution::Unresolved { attempts })
        }
    }
}

/// Is a discovered phone candidate worth keeping at all?
fn usable_phone_candidate(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
        && !candidate.to_uppercase().contains(NOT_FOUND_SENTINEL)
}

/// Phone cascade, independent of the subject cascade: a number spotted
/// during primary site analysis wins; otherwise one targeted lookup
/// against the company's professional-network presence; otherwise none.
///
/// Candidates are normalized when possible; a candidate that fails
/// normalization is kept raw as long as it carries a digit. Lookup
/// failures degrade to `None` — a phone is never worth failing a lead
/// over.
pub async fn resolve_phone<C: ContentClassifier>(
    lead: &LeadRecord,
    analysis_phone: Option<&str>,
    classifier: &C,
) -> Option<String> {
    let candidate = match analysis_phone.filter(|p| usable_phone_candidate(p)) {
        Some(found) => found.to_string(),
        None => match classifier.lookup_phone(&lead.company).await {
            Ok(answer) if usable_phone_candidate(&answer) => answer,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(company = %lead.company, error = %e, "phone lookup failed");
                return None;
            }
        },
    };

    let normalized = normalize_phone(&candidate);
    if normalized.is_empty() {
        Some(candidate.trim().to_string())
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
