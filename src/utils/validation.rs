use crate::utils::error::{Result, SdkError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

/// 延遲驗證：模型、列舉、聯合型別與設定都透過這個 trait 檢查
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

macro_rules! always_valid {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<()> {
                    Ok(())
                }
            }
        )*
    };
}

always_valid!(String, bool, i32, i64, u32, u64, f64, Value, DateTime<Utc>);

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        for (index, item) in self.iter().enumerate() {
            item.validate()
                .map_err(|e| e.in_field(&format!("[{}]", index)))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

impl Validate for Map<String, Value> {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SdkError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 60u64, 1, 600).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 600).is_err());
        assert!(validate_range("timeout_seconds", 601u64, 1, 600).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("header", "X-Api-Key").is_ok());
        assert!(validate_non_empty_string("header", "   ").is_err());
    }

    #[test]
    fn test_primitives_and_collections_are_valid() {
        assert!("text".to_string().validate().is_ok());
        assert!(vec![1i64, 2, 3].validate().is_ok());
        assert!(Some(true).validate().is_ok());
        assert!(Value::Null.validate().is_ok());
    }
}
