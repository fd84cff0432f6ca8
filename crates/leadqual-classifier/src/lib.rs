//! HTTP collaborators for the qualification pipeline.
//!
//! [`AnalysisClient`] talks to a `generateContent`-style generative API
//! and implements [`leadqual_core::ContentClassifier`] by building the
//! four prompt kinds the pipeline asks for. [`PageFetcher`] implements
//! [`leadqual_core::ContentFetcher`] with a plain GET. Both expose
//! `with_base_url` constructors so tests can point them at a wiremock
//! server.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod prompts;
mod types;

pub use client::AnalysisClient;
pub use error::ClassifierError;
pub use fetcher::PageFetcher;
