pub mod agents;
pub mod legal;
pub mod payments;
pub mod vault;
pub mod workflows;

use crate::core::request::HttpRequest;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::domain::record::{RawRecord, Schema};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// 所有服務方法共用：建立請求、送出、包成未解析的回應
pub(crate) async fn send<S, T>(
    client: &dyn HttpExecutor,
    method: Method,
    path_template: &'static str,
    params: &RawRecord<S>,
) -> Result<RawResponse<T>>
where
    S: Schema,
    T: DeserializeOwned + Validate,
{
    let request = HttpRequest::from_params(method, path_template, params)?;
    // 路徑參數缺漏時在送出前就失敗
    let path = request.path()?;
    tracing::debug!("{} {} ({})", request.method, path, S::NAME);
    let response = client.execute(request).await?;
    Ok(RawResponse::new(response, client.response_validation()))
}
