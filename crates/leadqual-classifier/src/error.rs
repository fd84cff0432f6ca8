use leadqual_core::CollabError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Api { status: u16, url: String },

    #[error("responder returned no candidates")]
    EmptyResponse,

    #[error("response deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl From<ClassifierError> for CollabError {
    fn from(e: ClassifierError) -> Self {
        match e {
            ClassifierError::Http(inner) if inner.is_timeout() => CollabError::Timeout,
            ClassifierError::Http(inner) => CollabError::Network(inner.to_string()),
            other => CollabError::Api(other.to_string()),
        }
    }
}
