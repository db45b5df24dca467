use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use small_sdk::models::{
    AccountBalanceParams, AccountCreateParams, AccountType, CardSource, PaymentSource,
    PaymentSourceVariant, TransferCreateParams, TransferRetrieveParams, TransferStatus,
};
use small_sdk::{ApiClient, ClientConfig};

#[tokio::test]
async fn test_account_create_and_balance() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/payments/v1/accounts")
            .json_body(json!({"name": "Client Trust", "type": "trust"}));
        then.status(201).json_body(json!({
            "id": "acct_1",
            "name": "Client Trust",
            "type": "trust",
            "currency": "USD",
            "createdAt": "2025-01-10T00:00:00Z"
        }));
    });
    let balance_mock = server.mock(|when, then| {
        when.method(GET).path("/payments/v1/accounts/acct_1/balance");
        then.status(200).json_body(json!({
            "accountId": "acct_1",
            "available": 125000,
            "pending": 5000,
            "currency": "USD",
            "asOf": "2025-01-11T00:00:00Z"
        }));
    });

    let client = ApiClient::new(ClientConfig::new(server.base_url()).with_response_validation(true))?;
    let payments = client.payments();

    let mut params = AccountCreateParams::new();
    params.set_name("Client Trust")?;
    params.set_account_type(AccountType::Trust)?;
    let account = payments.accounts().create(params).await?;
    assert_eq!(account.account_type()?, AccountType::Trust);

    let mut params = AccountBalanceParams::new();
    params.set_id(account.id()?)?;
    let balance = payments.accounts().balance(params).await?;
    assert_eq!(balance.available()?, 125000);
    assert_eq!(balance.pending()?, 5000);

    create_mock.assert();
    balance_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_transfer_with_card_source_and_idempotency_key() -> Result<()> {
    let server = MockServer::start();
    let card = json!({"brand": "visa", "last4": "4242", "expMonth": 12, "expYear": 2030});
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/payments/v1/transfers")
            .header("Idempotency-Key", "idem-001")
            .json_body(json!({
                "fromAccountId": "acct_1",
                "toAccountId": "acct_2",
                "amount": 9900,
                "memo": null,
                "source": {"brand": "visa", "last4": "4242", "expMonth": 12, "expYear": 2030}
            }));
        then.status(200).json_body(json!({
            "id": "tr_1",
            "status": "pending",
            "amount": 9900,
            "currency": "USD",
            "fromAccountId": "acct_1",
            "toAccountId": "acct_2",
            "memo": null,
            "source": card.clone(),
            "createdAt": "2025-01-12T00:00:00Z",
            "completedAt": null
        }));
    });

    let client = ApiClient::new(ClientConfig::new(server.base_url()))?;

    let card_source: CardSource = serde_json::from_value(card.clone())?;
    let mut params = TransferCreateParams::new();
    params.set_from_account_id("acct_1")?;
    params.set_to_account_id("acct_2")?;
    params.set_amount(9900)?;
    params.set_memo(None)?;
    params.set_source(Some(PaymentSource::new(card_source)?))?;
    params.set_idempotency_key(Some("idem-001".to_string()))?;

    let transfer = client.payments().transfers().create(params).await?;

    api_mock.assert();
    assert_eq!(transfer.status()?, TransferStatus::Pending);
    assert_eq!(transfer.memo()?, None);
    let source = transfer.source()?.expect("source present");
    match source.variant()? {
        PaymentSourceVariant::Card(card) => assert_eq!(card.last4()?, "4242"),
        other => panic!("unexpected source {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_transfer_with_unrecognized_source_is_untyped() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/payments/v1/transfers/tr_2");
        then.status(200).json_body(json!({
            "id": "tr_2",
            "status": "completed",
            "amount": 100,
            "currency": "USD",
            "fromAccountId": "acct_1",
            "toAccountId": "acct_2",
            "source": {"wallet": "apple_pay"},
            "createdAt": "2025-01-12T00:00:00Z"
        }));
    });

    let client = ApiClient::new(ClientConfig::new(server.base_url()))?;
    let mut params = TransferRetrieveParams::new();
    params.set_id("tr_2")?;
    let transfer = client.payments().transfers().retrieve(params).await?;

    let source = transfer.source()?.expect("source present");
    assert!(!source.is_typed());
    assert!(source.variant().is_err());
    assert_eq!(source.json(), &json!({"wallet": "apple_pay"}));
    Ok(())
}
