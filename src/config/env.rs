use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{Result, SdkError};
use std::env;

pub const BASE_URL_VAR: &str = "SMALL_SDK_BASE_URL";
pub const TIMEOUT_VAR: &str = "SMALL_SDK_TIMEOUT_SECONDS";
pub const RESPONSE_VALIDATION_VAR: &str = "SMALL_SDK_RESPONSE_VALIDATION";

impl ClientConfig {
    /// 從環境變數建立設定；只有 base URL 是必填
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_VAR).map_err(|_| SdkError::MissingConfigError {
            field: BASE_URL_VAR.to_string(),
        })?;

        let timeout_seconds = match env::var(TIMEOUT_VAR) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SdkError::InvalidConfigValueError {
                    field: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: "Expected a whole number of seconds".to_string(),
                })?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        let response_validation = match env::var(RESPONSE_VALIDATION_VAR) {
            Ok(raw) => parse_flag(RESPONSE_VALIDATION_VAR, &raw)?,
            Err(_) => false,
        };

        Ok(Self {
            base_url,
            timeout_seconds,
            response_validation,
            ..Self::new(String::new())
        })
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(SdkError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected true/false".to_string(),
        }),
    }
}
