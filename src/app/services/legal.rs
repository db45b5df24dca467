use crate::app::models::legal::{
    LegalFindParams, LegalFindResponse, LegalVerifyParams, LegalVerifyResponse,
};
use crate::app::services::send;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::Result;
use reqwest::Method;

/// Legal research: source discovery and citation checking.
#[derive(Clone, Copy)]
pub struct LegalService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> LegalService<'a> {
    pub fn new(client: &'a dyn HttpExecutor) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> LegalServiceWithRawResponse<'a> {
        LegalServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn find(&self, params: LegalFindParams) -> Result<LegalFindResponse> {
        self.with_raw_response().find(params).await?.deserialize()
    }

    pub async fn verify(&self, params: LegalVerifyParams) -> Result<LegalVerifyResponse> {
        self.with_raw_response().verify(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct LegalServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> LegalServiceWithRawResponse<'a> {
    pub async fn find(&self, params: LegalFindParams) -> Result<RawResponse<LegalFindResponse>> {
        send(self.client, Method::POST, "/legal/v1/find", &params).await
    }

    pub async fn verify(
        &self,
        params: LegalVerifyParams,
    ) -> Result<RawResponse<LegalVerifyResponse>> {
        send(self.client, Method::POST, "/legal/v1/verify", &params).await
    }
}
