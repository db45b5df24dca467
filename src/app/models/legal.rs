crate::api_enum! {
    pub enum CitationStatus {
        Verified = "verified",
        NotFound = "not_found",
        Ambiguous = "ambiguous",
    }
}

crate::raw_model! {
    pub struct LegalFindParams {
        required query: String = "query",
        optional jurisdiction: String = "jurisdiction",
        optional num_results: i64 = "numResults",
    }
}

crate::raw_model! {
    /// A primary or secondary legal source.
    pub struct LegalSource {
        required title: String = "title",
        required url: String = "url",
        optional citation: String = "citation",
        optional court: String = "court",
        /// `YYYY-MM-DD`
        optional_nullable decided_at: String = "decidedAt",
        optional snippet: String = "snippet",
    }
}

crate::raw_model! {
    pub struct LegalFindResponse {
        required query: String = "query",
        required candidates: Vec<LegalSource> = "candidates",
    }
}

crate::raw_model! {
    pub struct LegalVerifyParams {
        required text: String = "text",
    }
}

crate::raw_model! {
    pub struct Citation {
        required text: String = "text",
        required status: CitationStatus = "status",
        optional_nullable source: LegalSource = "source",
    }
}

crate::raw_model! {
    pub struct LegalVerifyResponse {
        required citations: Vec<Citation> = "citations",
        optional total_found: i64 = "totalFound",
    }
}
