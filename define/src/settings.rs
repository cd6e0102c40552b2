//! Settings for the dictionary client. Read from `DEFINE_*` environment
//! variables and an optional file named by `DEFINE_CONFIG`; command line
//! flags override both.

use std::time::Duration;

use dictionary::{DictionaryOptions, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "DEFINE";
pub const CONFIG_FILE_ENV: &str = "DEFINE_CONFIG";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base url lookups are appended to. Read from DEFINE_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Request timeout in seconds. Read from DEFINE_TIMEOUT_SECS.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .ignore_empty(true),
        );
        c.build()?.try_deserialize()
    }

    /// Values set in `other` win.
    pub fn merge(self, other: AppConfig) -> Self {
        Self {
            api_url: other.api_url.or(self.api_url),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    pub fn api_url_or_default(&self) -> &str {
        self.api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
    }

    /// A zero timeout is treated as unset.
    pub fn timeout_or_default(&self) -> Duration {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn dictionary_options(&self) -> DictionaryOptions {
        DictionaryOptions {
            api_url: self.api_url_or_default().to_owned(),
            timeout: self.timeout_or_default(),
        }
    }
}
