use crate::app::models::payments::{
    Account, AccountBalance, AccountBalanceParams, AccountCreateParams, AccountRetrieveParams,
    Transfer, TransferCreateParams, TransferRetrieveParams,
};
use crate::app::services::send;
use crate::core::response::RawResponse;
use crate::domain::ports::HttpExecutor;
use crate::utils::error::Result;
use reqwest::Method;

/// Payments API (`/payments/v1`).
#[derive(Clone, Copy)]
pub struct PaymentService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> PaymentService<'a> {
    pub fn new(client: &'a dyn HttpExecutor) -> Self {
        Self { client }
    }

    pub fn accounts(&self) -> AccountService<'a> {
        AccountService {
            client: self.client,
        }
    }

    pub fn transfers(&self) -> TransferService<'a> {
        TransferService {
            client: self.client,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> AccountService<'a> {
    pub fn with_raw_response(&self) -> AccountServiceWithRawResponse<'a> {
        AccountServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: AccountCreateParams) -> Result<Account> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: AccountRetrieveParams) -> Result<Account> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }

    pub async fn balance(&self, params: AccountBalanceParams) -> Result<AccountBalance> {
        self.with_raw_response().balance(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct AccountServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> AccountServiceWithRawResponse<'a> {
    pub async fn create(&self, params: AccountCreateParams) -> Result<RawResponse<Account>> {
        send(self.client, Method::POST, "/payments/v1/accounts", &params).await
    }

    pub async fn retrieve(&self, params: AccountRetrieveParams) -> Result<RawResponse<Account>> {
        send(self.client, Method::GET, "/payments/v1/accounts/{id}", &params).await
    }

    pub async fn balance(
        &self,
        params: AccountBalanceParams,
    ) -> Result<RawResponse<AccountBalance>> {
        send(
            self.client,
            Method::GET,
            "/payments/v1/accounts/{id}/balance",
            &params,
        )
        .await
    }
}

#[derive(Clone, Copy)]
pub struct TransferService<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> TransferService<'a> {
    pub fn with_raw_response(&self) -> TransferServiceWithRawResponse<'a> {
        TransferServiceWithRawResponse {
            client: self.client,
        }
    }

    pub async fn create(&self, params: TransferCreateParams) -> Result<Transfer> {
        self.with_raw_response().create(params).await?.deserialize()
    }

    pub async fn retrieve(&self, params: TransferRetrieveParams) -> Result<Transfer> {
        self.with_raw_response().retrieve(params).await?.deserialize()
    }
}

#[derive(Clone, Copy)]
pub struct TransferServiceWithRawResponse<'a> {
    client: &'a dyn HttpExecutor,
}

impl<'a> TransferServiceWithRawResponse<'a> {
    pub async fn create(&self, params: TransferCreateParams) -> Result<RawResponse<Transfer>> {
        send(self.client, Method::POST, "/payments/v1/transfers", &params).await
    }

    pub async fn retrieve(
        &self,
        params: TransferRetrieveParams,
    ) -> Result<RawResponse<Transfer>> {
        send(self.client, Method::GET, "/payments/v1/transfers/{id}", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::testing::RecordingExecutor;
    use serde_json::json;

    #[test]
    fn test_transfer_create_moves_idempotency_key_to_headers() {
        let executor = RecordingExecutor::new(json!({"id": "tr_1"}), false);
        let payments = PaymentService::new(&executor);

        let mut params = TransferCreateParams::new();
        params.set_from_account_id("acct_a").unwrap();
        params.set_to_account_id("acct_b").unwrap();
        params.set_amount(2500).unwrap();
        params
            .set_idempotency_key(Some("idem-42".to_string()))
            .unwrap();

        let transfer = tokio_test::block_on(payments.transfers().create(params)).unwrap();
        assert_eq!(transfer.id().unwrap(), "tr_1");

        let request = executor.last_request();
        assert_eq!(
            request.header_pairs(),
            vec![("Idempotency-Key".to_string(), "idem-42".to_string())]
        );
        assert_eq!(
            request.body,
            Some(json!({"fromAccountId": "acct_a", "toAccountId": "acct_b", "amount": 2500}))
        );
    }

    #[test]
    fn test_balance_path() {
        let executor = RecordingExecutor::new(json!({}), false);
        let payments = PaymentService::new(&executor);

        let mut params = AccountBalanceParams::new();
        params.set_id("acct_9").unwrap();
        tokio_test::block_on(payments.accounts().with_raw_response().balance(params)).unwrap();

        let request = executor.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path().unwrap(), "/payments/v1/accounts/acct_9/balance");
        assert_eq!(request.body, None);
    }
}
