use crate::core::request::HttpRequest;
use crate::core::response::HttpResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 服務層透過這個介面送出請求；`ApiClient` 是正式實作
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Whether `RawResponse::deserialize` validates what it parses.
    fn response_validation(&self) -> bool;
}
