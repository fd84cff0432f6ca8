use std::time::Duration;

use reqwest::Client;

use leadqual_core::{CollabError, ContentFetcher};

use crate::error::ClassifierError;

/// Plain HTTP page fetcher for the fetch-then-analyze variant.
pub struct PageFetcher {
    client: Client,
    timeout: Duration,
}

impl PageFetcher {
    /// # Errors
    ///
    /// Returns [`ClassifierError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ContentFetcher for PageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, CollabError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CollabError::from(ClassifierError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollabError::Api(format!(
                "unexpected HTTP status {status} from {url}"
            )));
        }
        response
            .text()
            .await
            .map_err(|e| CollabError::from(ClassifierError::Http(e)))
    }
}
