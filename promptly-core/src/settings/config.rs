use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_request_timeout_secs() -> u64 {
    300
}

/// Core application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Stored Gemini API key. When unset, the GEMINI_API_KEY and API_KEY
    /// environment variables are consulted instead.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Ceiling on a single request, in seconds. 0 removes the limit and
    /// waits on the provider indefinitely.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Override for the generateContent endpoint base URL, e.g. to route
    /// through a proxy.
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            api_base_url: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
