use std::time::Duration;

use async_trait::async_trait;
use dictionary_api::{get_definition, DICTIONARY_API_URL};
use thiserror::Error;

mod dictionary;
mod dictionary_api;

pub use dictionary::{PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
pub use reqwest::StatusCode;

pub const DEFAULT_API_URL: &str = DICTIONARY_API_URL;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to build the http client: {0}")]
    Client(reqwest::Error),
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("dictionary api responded with {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Deserialize(reqwest::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound(_))
    }
}

/// The API's own explanation of a failed lookup. All fields are absent when
/// the API answered with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotFoundError {
    pub title: Option<String>,
    pub message: Option<String>,
    pub resolution: Option<String>,
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title.as_deref().unwrap_or("No Definitions Found"))
    }
}

/// Anything that can resolve a word to its dictionary entry.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError>;
}

#[derive(Debug, Clone)]
pub struct DictionaryOptions {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    api_url: String,
}

impl Dictionary {
    pub fn with_options(options: DictionaryOptions) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(DictionaryError::Client)?;
        Ok(Self {
            client,
            api_url: options.api_url,
        })
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.api_url, word).await
    }
}

#[async_trait]
impl WordSource for Dictionary {
    async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        Dictionary::get_definition(self, word).await
    }
}
