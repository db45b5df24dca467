use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// 尚未解析的回應；呼叫 [`RawResponse::deserialize`] 才會解析與驗證
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    response: HttpResponse,
    validate: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned + Validate> RawResponse<T> {
    pub fn new(response: HttpResponse, validate: bool) -> Self {
        Self {
            response,
            validate,
            _marker: PhantomData,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.response.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.response.body
    }

    pub fn text(&self) -> String {
        self.response.text()
    }

    pub fn into_inner(self) -> HttpResponse {
        self.response
    }

    pub fn deserialize(&self) -> Result<T> {
        let parsed: T = serde_json::from_slice(&self.response.body).map_err(|e| {
            SdkError::invalid_data(format!(
                "failed to parse {} response body: {}",
                std::any::type_name::<T>(),
                e
            ))
        })?;
        if self.validate {
            parsed.validate()?;
        }
        Ok(parsed)
    }
}
