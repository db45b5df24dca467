use crate::app::services::{
    agents::AgentService, legal::LegalService, payments::PaymentService, vault::VaultService,
    workflows::WorkflowService,
};
use crate::config::ClientConfig;
use crate::core::request::HttpRequest;
use crate::core::response::HttpResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// HTTP client shared by every service.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }
        headers.insert(USER_AGENT, header_value("User-Agent", &config.user_agent())?);

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        tracing::debug!("Created API client for {}", base_url);

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// 以修改過的設定建立新的 client，原本的不受影響
    pub fn with_options(&self, modify: impl FnOnce(&mut ClientConfig)) -> Result<Self> {
        let mut config = self.config.clone();
        modify(&mut config);
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn vault(&self) -> VaultService<'_> {
        VaultService::new(self)
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(self)
    }

    pub fn workflows(&self) -> WorkflowService<'_> {
        WorkflowService::new(self)
    }

    pub fn agents(&self) -> AgentService<'_> {
        AgentService::new(self)
    }

    pub fn legal(&self) -> LegalService<'_> {
        LegalService::new(self)
    }
}

// reqwest 的 Debug 會印出預設 header，這裡只交給 ClientConfig 處理
impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpExecutor for ApiClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url(&self.base_url)?;
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), url);
        for (name, value) in request.header_pairs() {
            builder = builder.header(header_name(&name)?, header_value(&name, &value)?);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            "📡 {} {} -> {} ({} bytes)",
            request.method,
            request.path_template,
            status,
            body.len()
        );

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                "❌ {} {} failed with status {}",
                request.method,
                request.path_template,
                status
            );
            return Err(SdkError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn response_validation(&self) -> bool {
        self.config.response_validation
    }
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| SdkError::InvalidConfigValueError {
        field: "header".to_string(),
        value: name.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| SdkError::InvalidConfigValueError {
        field: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}
