use crate::app::models::agents::{
    Agent, AgentCreateParams, AgentRetrieveParams, AgentRun, AgentRunParams, RunRetrieveParams,
};
use crate::app::services::send;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::Result;
use reqwest::Method;

#[derive(Clone, Copy)]
pub struct AgentService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> AgentService<'a> {
    pub fn new(client: &'a dyn HttpExecutor) -> Self {
        Self { client }
    }

    pub fn with_raw_response(&self) -> AgentServiceWithRawResponse<'a> {
        AgentServiceWithRawResponse {
            client: self.client,
        }
    }

    pub fn runs(&self) -> RunService<'a> {
        RunService {
            client: self.client,
        }
    }

    pub async fn create(&self, params: AgentCreateParams) -> Result<Agent> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: AgentRetrieveParams) -> Result<Agent> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    pub async fn run(&self, params: AgentRunParams) -> Result<AgentRun> {
        self.with_raw_response().run(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct AgentServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> AgentServiceWithRawResponse<'a> {
    pub fn runs(&self) -> RunServiceWithRawResponse<'a> {
        RunServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: AgentCreateParams) -> Result<RawResponse<Agent>> {
        send(self.client, Method::POST, "/agents/v1/agents", &params).await
    }

    pub async fn retrieve(&self, params: AgentRetrieveParams) -> Result<RawResponse<Agent>> {
        send(self.client, Method::GET, "/agents/v1/agents/{id}", &params).await
    }

    pub async fn run(&self, params: AgentRunParams) -> Result<RawResponse<AgentRun>> {
        send(self.client, Method::POST, "/agents/v1/run", &params).await
    }
}

#[derive(Clone, Copy)]
pub struct RunService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> RunService<'a> {
    pub fn with_raw_response(&self) -> RunServiceWithRawResponse<'a> {
        RunServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn retrieve(&self, params: RunRetrieveParams) -> Result<AgentRun> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct RunServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> RunServiceWithRawResponse<'a> {
    pub async fn retrieve(&self, params: RunRetrieveParams) -> Result<RawResponse<AgentRun>> {
        send(self.client, Method::GET, "/agents/v1/run/{id}", &params).await
    }
}
