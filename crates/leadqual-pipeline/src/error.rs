use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Batch-level precondition failure; fatal before any lead runs.
    #[error(transparent)]
    Config(#[from] leadqual_core::ConfigError),

    /// The classifier's answer could not be turned into a structured
    /// verdict. Recovered per-lead as an `Error` status.
    #[error("invalid classifier response: {reason}")]
    Validation { reason: String },
}
