use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use small_sdk::models::{CitationStatus, LegalFindParams, LegalVerifyParams};
use small_sdk::{ApiClient, ClientConfig, SdkError};

#[tokio::test]
async fn test_find_sources() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/legal/v1/find").json_body(json!({
            "query": "non-compete enforceability",
            "jurisdiction": "CA",
            "numResults": 2
        }));
        then.status(200).json_body(json!({
            "query": "non-compete enforceability",
            "candidates": [
                {"title": "Edwards v. Arthur Andersen LLP", "url": "https://example.com/edwards",
                 "citation": "44 Cal.4th 937", "court": "Cal.", "decidedAt": "2008-08-07"},
                {"title": "Cal. Bus. & Prof. Code 16600", "url": "https://example.com/16600",
                 "decidedAt": null}
            ]
        }));
    });

    let client = ApiClient::new(ClientConfig::new(server.base_url()).with_response_validation(true))?;
    let mut params = LegalFindParams::new();
    params.set_query("non-compete enforceability")?;
    params.set_jurisdiction(Some("CA".to_string()))?;
    params.set_num_results(Some(2))?;

    let response = client.legal().find(params).await?;

    api_mock.assert();
    let candidates = response.candidates()?;
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].citation()?.as_deref(), Some("44 Cal.4th 937"));
    assert_eq!(candidates[1].decided_at()?, None);
    Ok(())
}

#[tokio::test]
async fn test_verify_with_unknown_status_only_fails_when_validating() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/legal/v1/verify");
        then.status(200).json_body(json!({
            "citations": [{"text": "Roe v. Wade, 410 U.S. 113", "status": "superseded"}]
        }));
    });

    let lenient = ApiClient::new(ClientConfig::new(server.base_url()))?;
    let mut params = LegalVerifyParams::new();
    params.set_text("See Roe v. Wade, 410 U.S. 113.")?;

    let response = lenient.legal().verify(params.clone()).await?;
    assert_eq!(response.citations()?[0].status()?, CitationStatus::Unknown);

    let strict = lenient.with_options(|config| config.response_validation = true)?;
    let err = strict.legal().verify(params).await.unwrap_err();
    assert!(matches!(err, SdkError::InvalidData { .. }));
    Ok(())
}
