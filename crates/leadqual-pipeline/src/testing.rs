//! Scripted collaborator implementations for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use leadqual_core::{CollabError, ContentClassifier, ContentFetcher, IcpCriteria, Subject};

/// A canned answer for one collaborator method.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Timeout,
    Network(String),
}

impl Answer {
    pub fn text(s: &str) -> Self {
        Answer::Text(s.to_string())
    }

    fn to_result(&self) -> Result<String, CollabError> {
        match self {
            Answer::Text(s) => Ok(s.clone()),
            Answer::Timeout => Err(CollabError::Timeout),
            Answer::Network(msg) => Err(CollabError::Network(msg.clone())),
        }
    }
}

/// Classifier whose four methods each return a fixed scripted answer and
/// count their invocations.
pub struct ScriptedClassifier {
    pub classify: Answer,
    pub discover: Answer,
    pub presence: Answer,
    pub phone: Answer,
    pub classify_calls: AtomicUsize,
    pub discover_calls: AtomicUsize,
    pub presence_calls: AtomicUsize,
    pub phone_calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(classify: Answer, discover: Answer, presence: Answer, phone: Answer) -> Self {
        Self {
            classify,
            discover,
            presence,
            phone,
            classify_calls: AtomicUsize::new(0),
            discover_calls: AtomicUsize::new(0),
            presence_calls: AtomicUsize::new(0),
            phone_calls: AtomicUsize::new(0),
        }
    }

    /// All methods answer the not-found sentinel.
    pub fn all_not_found() -> Self {
        Self::new(
            Answer::text("NAO_ENCONTRADO"),
            Answer::text("NAO_ENCONTRADO"),
            Answer::text(r#"{"summary": "", "active": false}"#),
            Answer::text("NAO_ENCONTRADO"),
        )
    }
}

impl ContentClassifier for ScriptedClassifier {
    async fn classify(
        &self,
        _subject: &Subject,
        _criteria: &IcpCriteria,
    ) -> Result<String, CollabError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        self.classify.to_result()
    }

    async fn discover_website(
        &self,
        _company: &str,
        _city: &str,
        _state: &str,
    ) -> Result<String, CollabError> {
        self.discover_calls.fetch_add(1, Ordering::SeqCst);
        self.discover.to_result()
    }

    async fn lookup_presence(&self, _company: &str, _city: &str) -> Result<String, CollabError> {
        self.presence_calls.fetch_add(1, Ordering::SeqCst);
        self.presence.to_result()
    }

    async fn lookup_phone(&self, _company: &str) -> Result<String, CollabError> {
        self.phone_calls.fetch_add(1, Ordering::SeqCst);
        self.phone.to_result()
    }
}

/// Fetcher with a fixed scripted answer.
pub struct ScriptedFetcher {
    pub answer: Answer,
    pub calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(answer: Answer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ContentFetcher for ScriptedFetcher {
    async fn fetch_text(&self, _url: &str) -> Result<String, CollabError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.to_result()
    }
}
