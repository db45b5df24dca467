use crate::app::models::workflows::{
    ExecutionRetrieveParams, Workflow, WorkflowExecuteParams, WorkflowExecution,
    WorkflowListParams, WorkflowListResponse, WorkflowRetrieveParams,
};
use crate::app::services::send;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::Result;
use reqwest::Method;

#[derive(Clone, Copy)]
pub struct WorkflowService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> WorkflowService<'a> {
    pub fn new(client: &'a dyn HttpExecutor) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> WorkflowServiceWithRawResponse<'a> {
        WorkflowServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn executions(&self) -> ExecutionService<'a> {
        ExecutionService {
            client: self.client,
        }
    }

    pub async fn list(&self, params: WorkflowListParams) -> Result<WorkflowListResponse> {
        self.with_raw_response().list(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: WorkflowRetrieveParams) -> Result<Workflow> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    /// 非同步執行；回傳的 execution 通常仍在 `queued` 或 `running`
    pub async fn execute(&self, params: WorkflowExecuteParams) -> Result<WorkflowExecution> {
        self.with_raw_response().execute(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct WorkflowServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> WorkflowServiceWithRawResponse<'a> {
    pub fn executions(&self) -> ExecutionServiceWithRawResponse<'a> {
        ExecutionServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn list(
        &self,
        params: WorkflowListParams,
    ) -> Result<RawResponse<WorkflowListResponse>> {
        send(self.client, Method::GET, "/workflows/v1", &params).await
    }

    pub async fn retrieve(&self, params: WorkflowRetrieveParams) -> Result<RawResponse<Workflow>> {
        send(self.client, Method::GET, "/workflows/v1/{id}", &params).await
    }

    pub async fn execute(
        &self,
        params: WorkflowExecuteParams,
    ) -> Result<RawResponse<WorkflowExecution>> {
        send(self.client, Method::POST, "/workflows/v1/{id}/execute", &params).await
    }
}

#[derive(Clone, Copy)]
pub struct ExecutionService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> ExecutionService<'a> {
    pub fn with_raw_response(&self) -> ExecutionServiceWithRawResponse<'a> {
        ExecutionServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn retrieve(&self, params: ExecutionRetrieveParams) -> Result<WorkflowExecution> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct ExecutionServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> ExecutionServiceWithRawResponse<'a> {
    pub async fn retrieve(
        &self,
        params: ExecutionRetrieveParams,
    ) -> Result<RawResponse<WorkflowExecution>> {
        send(
            self.client,
            Method::GET,
            "/workflows/v1/executions/{id}",
            &params,
        )
        .await
    }
}
