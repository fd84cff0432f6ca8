//! Qualification and enrichment pipeline.
//!
//! Evaluates each lead against the ICP in two phases: cheap local rules
//! first (company size, locality, role), then the I/O-bound phase that
//! resolves an analyzable subject through the enrichment cascade and asks
//! the external classifier for a verdict. Classifier answers are untrusted
//! and pass through [`validate::validate_verdict`] before any field is
//! believed.

pub mod enrich;
pub mod error;
pub mod locality;
pub mod phone;
pub mod pipeline;
pub mod rules;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use enrich::{resolve_phone, resolve_subject, EnrichmentStage, Resolution};
pub use error::PipelineError;
pub use locality::{locality_matches, normalize_text, state_full_name};
pub use phone::normalize_phone;
pub use pipeline::{qualify_lead, run_batch, BatchOptions};
pub use rules::{employee_count_matches, role_matches};
pub use validate::{validate_verdict, ClassifierVerdict};
