use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error(
        "ICP is missing a usable comparison basis: fill in the contracting \
         company's site or its description (both are placeholders)"
    )]
    MissingComparisonBasis,
}
