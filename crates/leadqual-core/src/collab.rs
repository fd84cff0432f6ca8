//! Interfaces of the external collaborators the pipeline consumes.
//!
//! The pipeline never talks HTTP itself; it goes through these traits so
//! tests can substitute scripted implementations. Every answer is raw
//! text — parsing and validation of untrusted responses belong to the
//! pipeline, not to the transport.

use thiserror::Error;

use crate::criteria::IcpCriteria;
use crate::types::Subject;

/// Sentinel the responder is instructed to answer when a lookup finds
/// nothing. Shared by the prompt builders and the enrichment cascade.
pub const NOT_FOUND_SENTINEL: &str = "NAO_ENCONTRADO";

/// Failure modes shared by all collaborator calls.
#[derive(Debug, Error)]
pub enum CollabError {
    #[error("external call timed out")]
    Timeout,

    #[error("network failure: {0}")]
    Network(String),

    #[error("collaborator API error: {0}")]
    Api(String),
}

/// External content classifier (an AI analysis endpoint).
///
/// All methods return the responder's raw text; callers must validate it
/// before trusting any field.
pub trait ContentClassifier {
    /// Analyze a subject (site URL or business summary) against the ICP
    /// and answer with a JSON verdict.
    fn classify(
        &self,
        subject: &Subject,
        criteria: &IcpCriteria,
    ) -> impl std::future::Future<Output = Result<String, CollabError>> + Send;

    /// Discover a company's official website from its name and location.
    /// Answers a bare domain, or a not-found sentinel.
    fn discover_website(
        &self,
        company: &str,
        city: &str,
        state: &str,
    ) -> impl std::future::Future<Output = Result<String, CollabError>> + Send;

    /// Look up a company's online presence; answers JSON with a short
    /// business summary and an activity flag.
    fn lookup_presence(
        &self,
        company: &str,
        city: &str,
    ) -> impl std::future::Future<Output = Result<String, CollabError>> + Send;

    /// Look up a public phone number for a company through its
    /// professional-network presence. Answers the number, or a not-found
    /// sentinel.
    fn lookup_phone(
        &self,
        company: &str,
    ) -> impl std::future::Future<Output = Result<String, CollabError>> + Send;
}

/// Optional page-content fetcher, used by the variant that separates
/// fetching from analysis.
pub trait ContentFetcher {
    fn fetch_text(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, CollabError>> + Send;
}
