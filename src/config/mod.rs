pub mod env;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Options shared by every request of an [`ApiClient`](crate::ApiClient).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// 開啟後，所有回應在解析時都會呼叫 `validate()`
    #[serde(default)]
    pub response_validation: bool,
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            response_validation: false,
            default_headers: HashMap::new(),
            user_agent: None,
        }
    }

    pub fn with_response_validation(mut self, enabled: bool) -> Self {
        self.response_validation = enabled;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| concat!("small-sdk/", env!("CARGO_PKG_VERSION")).to_string())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        for name in self.default_headers.keys() {
            validate_non_empty_string("default_headers", name)?;
        }
        Ok(())
    }
}

// header 值多半是憑證，只印名稱
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .default_headers
            .keys()
            .map(|name| (name.as_str(), "<redacted>"))
            .collect();
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("response_validation", &self.response_validation)
            .field("default_headers", &headers)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
