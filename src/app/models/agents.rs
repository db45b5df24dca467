use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

crate::api_enum! {
    pub enum RunStatus {
        Queued = "queued",
        Running = "running",
        Completed = "completed",
        Failed = "failed",
        Cancelled = "cancelled",
    }
}

crate::raw_model! {
    pub struct Agent {
        required id: String = "id",
        required name: String = "name",
        required instructions: String = "instructions",
        optional model: String = "model",
        optional tools: Vec<String> = "tools",
        optional_nullable description: String = "description",
        required created_at: DateTime<Utc> = "createdAt",
    }
}

crate::raw_model! {
    pub struct AgentCreateParams {
        required name: String = "name",
        required instructions: String = "instructions",
        optional model: String = "model",
        optional tools: Vec<String> = "tools",
        optional_nullable description: String = "description",
    }
}

crate::raw_model! {
    pub struct AgentRetrieveParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct AgentRunParams {
        required agent_id: String = "agentId",
        required prompt: String = "prompt",
        optional metadata: Map<String, Value> = "metadata",
    }
}

crate::raw_model! {
    pub struct RunUsage {
        required input_tokens: i64 = "inputTokens",
        required output_tokens: i64 = "outputTokens",
    }
}

crate::raw_model! {
    pub struct AgentRun {
        required id: String = "id",
        required agent_id: String = "agentId",
        required status: RunStatus = "status",
        required_nullable output: String = "output",
        optional usage: RunUsage = "usage",
        required created_at: DateTime<Utc> = "createdAt",
    }
}

crate::raw_model! {
    pub struct RunRetrieveParams {
        required [path] id: String = "id",
    }
}
