//! Core data model for the lead qualification pipeline.
//!
//! Defines the immutable batch inputs ([`LeadRecord`], [`IcpCriteria`]),
//! the per-lead outcome ([`ClassificationResult`]), the collaborator
//! traits the pipeline consumes ([`ContentClassifier`], [`ContentFetcher`]),
//! and application configuration loaded from environment variables.

pub mod collab;
pub mod config;
pub mod criteria;
pub mod error;
pub mod types;

pub use collab::{CollabError, ContentClassifier, ContentFetcher};
pub use config::{load_app_config, AppConfig};
pub use criteria::IcpCriteria;
pub use error::ConfigError;
pub use types::{ClassificationResult, LeadRecord, LeadStatus, Subject};
