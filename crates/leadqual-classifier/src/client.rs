use std::time::Duration;

use reqwest::Client;

use leadqual_core::{AppConfig, CollabError, ContentClassifier, IcpCriteria, Subject};

use crate::error::ClassifierError;
use crate::prompts::{phone_prompt, presence_prompt, verdict_prompt, website_discovery_prompt};
use crate::types::{GenerateRequest, GenerateResponse};

/// Client for a `generateContent`-style generative analysis API.
///
/// URL-subject analysis uses the longer timeout (the responder renders
/// the page); everything else uses the text timeout. Use
/// [`AnalysisClient::new`] in production and
/// [`AnalysisClient::with_base_url`] to point at a mock server in tests.
pub struct AnalysisClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    url_timeout: Duration,
    text_timeout: Duration,
}

impl AnalysisClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ClassifierError> {
        Self::with_base_url(
            &config.api_key,
            &config.model,
            &config.api_base_url,
            config.url_timeout_secs,
            config.text_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        base_url: &str,
        url_timeout_secs: u64,
        text_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            url_timeout: Duration::from_secs(url_timeout_secs),
            text_timeout: Duration::from_secs(text_timeout_secs),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends one prompt and extracts the first candidate's text.
    ///
    /// # Errors
    ///
    /// - [`ClassifierError::Http`] — network/TLS failure or timeout.
    /// - [`ClassifierError::Api`] — non-2xx status.
    /// - [`ClassifierError::Deserialize`] — body is not the expected shape.
    /// - [`ClassifierError::EmptyResponse`] — no candidate text.
    pub async fn generate(
        &self,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, ClassifierError> {
        let url = self.endpoint();
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest::from_prompt(prompt))
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&body)?;
        parsed.first_text().ok_or(ClassifierError::EmptyResponse)
    }
}

impl ContentClassifier for AnalysisClient {
    async fn classify(
        &self,
        subject: &Subject,
        criteria: &IcpCriteria,
    ) -> Result<String, CollabError> {
        let timeout = match subject {
            Subject::Url(_) => self.url_timeout,
            Subject::Summary(_) => self.text_timeout,
        };
        tracing::debug!(subject = %subject.as_str(), "requesting ICP verdict");
        self.generate(&verdict_prompt(subject, criteria), timeout)
            .await
            .map_err(CollabError::from)
    }

    async fn discover_website(
        &self,
        company: &str,
        city: &str,
        state: &str,
    ) -> Result<String, CollabError> {
        self.generate(
            &website_discovery_prompt(company, city, state),
            self.text_timeout,
        )
        .await
        .map_err(CollabError::from)
    }

    async fn lookup_presence(&self, company: &str, city: &str) -> Result<String, CollabError> {
        self.generate(&presence_prompt(company, city), self.text_timeout)
            .await
            .map_err(CollabError::from)
    }

    async fn lookup_phone(&self, company: &str) -> Result<String, CollabError> {
        self.generate(&phone_prompt(company), self.text_timeout)
            .await
            .map_err(CollabError::from)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
