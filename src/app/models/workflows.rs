use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

crate::api_enum! {
    pub enum ExecutionStatus {
        Queued = "queued",
        Running = "running",
        Completed = "completed",
        Failed = "failed",
    }
}

crate::raw_model! {
    pub struct Workflow {
        required id: String = "id",
        required name: String = "name",
        optional description: String = "description",
        optional category: String = "category",
        /// JSON Schema of the expected `input`.
        optional input_schema: Map<String, Value> = "inputSchema",
    }
}

crate::raw_model! {
    pub struct WorkflowListParams {
        optional [query] category: String = "category",
        optional [query] limit: i64 = "limit",
    }
}

crate::raw_model! {
    pub struct WorkflowListResponse {
        required workflows: Vec<Workflow> = "workflows",
        optional total: i64 = "total",
    }
}

crate::raw_model! {
    pub struct WorkflowRetrieveParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct WorkflowExecuteParams {
        required [path] id: String = "id",
        required input: Map<String, Value> = "input",
        optional_nullable webhook_url: String = "webhookUrl",
    }
}

crate::raw_model! {
    pub struct WorkflowExecution {
        required id: String = "id",
        required workflow_id: String = "workflowId",
        required status: ExecutionStatus = "status",
        /// 執行尚未完成時為 null
        required_nullable output: Map<String, Value> = "output",
        optional_nullable error: String = "error",
        required created_at: DateTime<Utc> = "createdAt",
        optional_nullable completed_at: DateTime<Utc> = "completedAt",
    }
}

crate::raw_model! {
    pub struct ExecutionRetrieveParams {
        required [path] id: String = "id",
    }
}
