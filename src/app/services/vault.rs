use crate::app::models::vault::{
    Vault, VaultCreateParams, VaultListParams, VaultListResponse, VaultObject,
    VaultObjectListParams, VaultObjectListResponse, VaultObjectRetrieveParams,
    VaultRetrieveParams, VaultSearchParams, VaultSearchResponse, VaultUploadParams,
    VaultUploadResponse,
};
use crate::app::services::send;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::Result;
use reqwest::Method;

/// Document vaults: creation, search and uploads.
#[derive(Clone, Copy)]
pub struct VaultService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> VaultService<'a> {
    pub fn new(client: &'a dyn HttpExecutor) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> VaultServiceWithRawResponse<'a> {
        VaultServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn objects(&self) -> VaultObjectService<'a> {
        VaultObjectService {
            client: self.client,
        }
    }

    pub async fn create(&self, params: VaultCreateParams) -> Result<Vault> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn list(&self, params: VaultListParams) -> Result<VaultListResponse> {
        self.with_raw_response().list(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: VaultRetrieveParams) -> Result<Vault> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    pub async fn search(&self, params: VaultSearchParams) -> Result<VaultSearchResponse> {
        self.with_raw_response().search(params).await?.deserialize()
    }

    /// 取得預簽名上傳網址；檔案本身由呼叫端直接 PUT 到 `uploadUrl`
    pub async fn upload(&self, params: VaultUploadParams) -> Result<VaultUploadResponse> {
        self.with_raw_response().upload(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct VaultServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> VaultServiceWithRawResponse<'a> {
    pub fn objects(&self) -> VaultObjectServiceWithRawResponse<'a> {
        VaultObjectServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: VaultCreateParams) -> Result<RawResponse<Vault>> {
        send(self.client, Method::POST, "/vault", &params).await
    }

    pub async fn list(&self, params: VaultListParams) -> Result<RawResponse<VaultListResponse>> {
        send(self.client, Method::GET, "/vault", &params).await
    }

    pub async fn retrieve(&self, params: VaultRetrieveParams) -> Result<RawResponse<Vault>> {
        send(self.client, Method::GET, "/vault/{id}", &params).await
    }

    pub async fn search(
        &self,
        params: VaultSearchParams,
    ) -> Result<RawResponse<VaultSearchResponse>> {
        send(self.client, Method::POST, "/vault/{id}/search", &params).await
    }

    pub async fn upload(
        &self,
        params: VaultUploadParams,
    ) -> Result<RawResponse<VaultUploadResponse>> {
        send(self.client, Method::POST, "/vault/{id}/upload", &params).await
    }
}

#[derive(Clone, Copy)]
pub struct VaultObjectService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> VaultObjectService<'a> {
    pub fn with_raw_response(&self) -> VaultObjectServiceWithRawResponse<'a> {
        VaultObjectServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn list(&self, params: VaultObjectListParams) -> Result<VaultObjectListResponse> {
        self.with_raw_response().list(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: VaultObjectRetrieveParams) -> Result<VaultObject> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct VaultObjectServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> VaultObjectServiceWithRawResponse<'a> {
    pub async fn list(
        &self,
        params: VaultObjectListParams,
    ) -> Result<RawResponse<VaultObjectListResponse>> {
        send(self.client, Method::GET, "/vault/{id}/objects", &params).await
    }

    pub async fn retrieve(
        &self,
        params: VaultObjectRetrieveParams,
    ) -> Result<RawResponse<VaultObject>> {
        send(
            self.client,
            Method::GET,
            "/vault/{id}/objects/{objectId}",
            &params,
        )
        .await
    }
}
