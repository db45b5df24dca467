use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

crate::api_enum! {
    /// Retrieval strategy used by vault search.
    pub enum SearchMethod {
        Vector = "vector",
        Hybrid = "hybrid",
        Fast = "fast",
        Graph = "graph",
    }
}

crate::api_enum! {
    /// 物件的處理狀態
    pub enum VaultObjectStatus {
        Pending = "pending",
        Processing = "processing",
        Completed = "completed",
        Failed = "failed",
    }
}

crate::raw_model! {
    /// A document vault.
    pub struct Vault {
        required id: String = "id",
        required name: String = "name",
        optional description: String = "description",
        optional enable_graph: bool = "enableGraph",
        optional total_objects: i64 = "totalObjects",
        optional total_bytes: i64 = "totalBytes",
        optional metadata: Map<String, Value> = "metadata",
        required created_at: DateTime<Utc> = "createdAt",
        optional_nullable expires_at: DateTime<Utc> = "expiresAt",
    }
}

crate::raw_model! {
    pub struct VaultCreateParams {
        required name: String = "name",
        optional description: String = "description",
        optional enable_graph: bool = "enableGraph",
        optional metadata: Map<String, Value> = "metadata",
        optional_nullable expires_at: DateTime<Utc> = "expiresAt",
    }
}

crate::raw_model! {
    pub struct VaultListParams {
        optional [query] limit: i64 = "limit",
    }
}

crate::raw_model! {
    pub struct VaultListResponse {
        required vaults: Vec<Vault> = "vaults",
        optional total: i64 = "total",
    }
}

crate::raw_model! {
    pub struct VaultRetrieveParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct PageLocator {
        required page: i64 = "page",
    }
}

crate::raw_model! {
    /// Character offsets into the extracted text.
    pub struct SpanLocator {
        required start: i64 = "start",
        required end: i64 = "end",
    }
}

crate::union_variants! {
    /// Where a search chunk was found inside its object.
    pub union ChunkLocator {
        Page(PageLocator),
        Span(SpanLocator),
    }
}

crate::raw_model! {
    pub struct VaultSearchParams {
        required [path] id: String = "id",
        required query: String = "query",
        optional method: SearchMethod = "method",
        optional top_k: i64 = "topK",
        /// `None` 會送出明確的 null，代表清除預設過濾條件
        optional_nullable filters: Map<String, Value> = "filters",
    }
}

crate::raw_model! {
    pub struct SearchChunk {
        required text: String = "text",
        required object_id: String = "objectId",
        optional score: f64 = "score",
        optional locator: ChunkLocator = "locator",
    }
}

crate::raw_model! {
    pub struct VaultSearchResponse {
        required method: SearchMethod = "method",
        required query: String = "query",
        required chunks: Vec<SearchChunk> = "chunks",
    }
}

crate::raw_model! {
    pub struct VaultUploadParams {
        required [path] id: String = "id",
        required filename: String = "filename",
        required content_type: String = "contentType",
        optional size_bytes: i64 = "sizeBytes",
        optional auto_index: bool = "autoIndex",
    }
}

crate::raw_model! {
    /// A presigned upload slot for a new vault object.
    pub struct VaultUploadResponse {
        required object_id: String = "objectId",
        required upload_url: String = "uploadUrl",
        required expires_in: i64 = "expiresIn",
    }
}

crate::raw_model! {
    pub struct VaultObject {
        required id: String = "id",
        required filename: String = "filename",
        required status: VaultObjectStatus = "status",
        optional content_type: String = "contentType",
        optional size_bytes: i64 = "sizeBytes",
        optional page_count: i64 = "pageCount",
        required created_at: DateTime<Utc> = "createdAt",
        required_nullable error: String = "error",
    }
}

crate::raw_model! {
    pub struct VaultObjectListParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct VaultObjectListResponse {
        required vault_id: String = "vaultId",
        required objects: Vec<VaultObject> = "objects",
    }
}

crate::raw_model! {
    pub struct VaultObjectRetrieveParams {
        required [path] id: String = "id",
        required [path] object_id: String = "objectId",
    }
}
