use crate::domain::record::{Location, RawRecord, Schema};
use crate::utils::error::{Result, SdkError};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

/// Everything needed to send one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path_template: &'static str,
    pub path_params: Map<String, Value>,
    pub query: Map<String, Value>,
    pub headers: Map<String, Value>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path_template: &'static str) -> Self {
        Self {
            method,
            path_template,
            path_params: Map::new(),
            query: Map::new(),
            headers: Map::new(),
            body: None,
        }
    }

    /// 依欄位宣告的位置拆分參數；未宣告的鍵一律放進 body
    pub fn from_params<S: Schema>(
        method: Method,
        path_template: &'static str,
        params: &RawRecord<S>,
    ) -> Result<Self> {
        let mut request = Self::new(method, path_template);
        let mut body = Map::new();

        for (key, value) in params.raw().as_map() {
            let location = S::field(key)
                .map(|spec| spec.location)
                .unwrap_or(Location::Body);
            match location {
                Location::Path => {
                    request.path_params.insert(key.clone(), value.clone());
                }
                Location::Query => {
                    request.query.insert(key.clone(), value.clone());
                }
                Location::Header => {
                    request.headers.insert(key.clone(), value.clone());
                }
                Location::Body => {
                    body.insert(key.clone(), value.clone());
                }
            }
        }

        if !body.is_empty() || request.method_has_body() {
            request.body = Some(Value::Object(body));
        }

        Ok(request)
    }

    fn method_has_body(&self) -> bool {
        self.method == Method::POST || self.method == Method::PUT || self.method == Method::PATCH
    }

    /// 替換路徑參數後的路徑（未編碼，用於日誌）
    pub fn path(&self) -> Result<String> {
        let segments = self.path_segments()?;
        Ok(format!("/{}", segments.join("/")))
    }

    pub fn url(&self, base_url: &Url) -> Result<Url> {
        let segments = self.path_segments()?;
        let mut url = base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| SdkError::ConfigError {
                message: format!("Base URL cannot be a base: {}", base_url),
            })?;
            path.pop_if_empty();
            path.extend(segments.iter().map(String::as_str));
        }

        let mut pairs = Vec::new();
        for (key, value) in &self.query {
            collect_query_pairs(key, value, &mut pairs);
        }
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }

    /// Header values as strings; `null` headers are dropped.
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.clone(), v)))
            .collect()
    }

    fn path_segments(&self) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        for segment in self.path_template.split('/').filter(|s| !s.is_empty()) {
            match placeholder(segment) {
                Some(name) => {
                    let value = self
                        .path_params
                        .get(name)
                        .and_then(scalar_to_string)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| {
                            SdkError::invalid_data(format!(
                                "Unresolved path parameter '{}' in {}",
                                name, self.path_template
                            ))
                        })?;
                    // `.` 與 `..` 會被 URL 正規化吃掉，改打到別的端點
                    if value == "." || value == ".." {
                        return Err(SdkError::invalid_data(format!(
                            "Path parameter '{}' cannot be '{}' in {}",
                            name, value, self.path_template
                        )));
                    }
                    segments.push(value);
                }
                None => segments.push(segment.to_string()),
            }
        }
        Ok(segments)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn collect_query_pairs(key: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_query_pairs(key, item, pairs);
            }
        }
        other => {
            if let Some(v) = scalar_to_string(other) {
                pairs.push((key.to_string(), v));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::raw_model! {
        struct SearchParams {
            required [path] id: String = "id",
            optional [query] limit: i64 = "limit",
            optional [query] tags: Vec<String> = "tags",
            optional [header] request_id: String = "X-Request-Id",
            required query: String = "query",
        }
    }

    fn params() -> SearchParams {
        let mut params = SearchParams::new();
        params.set_id("vault 1").unwrap();
        params.set_limit(Some(5)).unwrap();
        params
            .set_tags(Some(vec!["a".to_string(), "b".to_string()]))
            .unwrap();
        params.set_request_id(Some("req-1".to_string())).unwrap();
        params.set_query("contract").unwrap();
        params
            .set_additional_property("extra", json!(true))
            .unwrap();
        params
    }

    #[test]
    fn test_from_params_partitions_by_location() {
        let request = HttpRequest::from_params(Method::POST, "/vault/{id}/search", &params()).unwrap();
        assert_eq!(request.path_params.get("id"), Some(&json!("vault 1")));
        assert_eq!(request.query.get("limit"), Some(&json!(5)));
        assert_eq!(
            request.header_pairs(),
            vec![("X-Request-Id".to_string(), "req-1".to_string())]
        );
        assert_eq!(
            request.body,
            Some(json!({"query": "contract", "extra": true}))
        );
    }

    #[test]
    fn test_url_encodes_path_and_repeats_array_query() {
        let request = HttpRequest::from_params(Method::POST, "/vault/{id}/search", &params()).unwrap();
        let base = Url::parse("https://api.example.com/").unwrap();
        let url = request.url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/vault/vault%201/search?limit=5&tags=a&tags=b"
        );
        assert_eq!(request.path().unwrap(), "/vault/vault 1/search");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let request = HttpRequest::new(Method::GET, "/workflows/v1");
        let base = Url::parse("http://localhost:8080/api").unwrap();
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "http://localhost:8080/api/workflows/v1"
        );
    }

    #[test]
    fn test_missing_path_param_is_an_error() {
        let request = HttpRequest::new(Method::GET, "/vault/{id}");
        let err = request.path().unwrap_err();
        assert!(err.to_string().contains("Unresolved path parameter 'id'"));
    }

    #[test]
    fn test_dot_segment_path_param_is_rejected() {
        let base = Url::parse("https://api.example.com").unwrap();
        for value in [".", ".."] {
            let mut request = HttpRequest::new(Method::GET, "/vault/{id}/objects/{objectId}");
            request.path_params.insert("id".to_string(), json!(value));
            request.path_params.insert("objectId".to_string(), json!("obj_1"));

            let err = request.url(&base).unwrap_err();
            assert!(matches!(err, SdkError::InvalidData { .. }));
            assert!(err.to_string().contains("Path parameter 'id' cannot be"));
            assert!(request.path().is_err());
        }
    }

    #[test]
    fn test_dots_inside_path_param_are_kept() {
        let base = Url::parse("https://api.example.com").unwrap();
        let mut request = HttpRequest::new(Method::GET, "/vault/{id}");
        request.path_params.insert("id".to_string(), json!("v1..2"));
        assert_eq!(
            request.url(&base).unwrap().as_str(),
            "https://api.example.com/vault/v1..2"
        );
    }

    #[test]
    fn test_get_without_body_fields_has_no_body() {
        crate::raw_model! {
            struct RetrieveParams {
                required [path] id: String = "id",
            }
        }
        let mut params = RetrieveParams::new();
        params.set_id("v1").unwrap();
        let request = HttpRequest::from_params(Method::GET, "/vault/{id}", &params).unwrap();
        assert_eq!(request.body, None);
        assert_eq!(request.path().unwrap(), "/vault/v1");
    }
}
