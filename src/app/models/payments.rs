use chrono::{DateTime, Utc};

crate::api_enum! {
    pub enum AccountType {
        Operating = "operating",
        Trust = "trust",
        Escrow = "escrow",
    }
}

crate::api_enum! {
    pub enum TransferStatus {
        Pending = "pending",
        Processing = "processing",
        Completed = "completed",
        Failed = "failed",
        Canceled = "canceled",
    }
}

crate::raw_model! {
    pub struct Account {
        required id: String = "id",
        required name: String = "name",
        required account_type: AccountType = "type",
        required currency: String = "currency",
        required created_at: DateTime<Utc> = "createdAt",
    }
}

crate::raw_model! {
    pub struct AccountCreateParams {
        required name: String = "name",
        required account_type: AccountType = "type",
        /// ISO 4217，伺服器預設為 USD
        optional currency: String = "currency",
    }
}

crate::raw_model! {
    pub struct AccountRetrieveParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct AccountBalanceParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    /// Amounts are in minor currency units.
    pub struct AccountBalance {
        required account_id: String = "accountId",
        required available: i64 = "available",
        required pending: i64 = "pending",
        required currency: String = "currency",
        required as_of: DateTime<Utc> = "asOf",
    }
}

crate::raw_model! {
    pub struct CardSource {
        required brand: String = "brand",
        required last4: String = "last4",
        required exp_month: i64 = "expMonth",
        required exp_year: i64 = "expYear",
    }
}

crate::raw_model! {
    pub struct BankAccountSource {
        required routing_number: String = "routingNumber",
        required account_last4: String = "accountLast4",
        optional bank_name: String = "bankName",
    }
}

crate::union_variants! {
    /// Funding source of a transfer: a card, a bank account or an opaque token.
    pub union PaymentSource {
        Card(CardSource),
        BankAccount(BankAccountSource),
        Token(String),
    }
}

crate::raw_model! {
    pub struct TransferCreateParams {
        required from_account_id: String = "fromAccountId",
        required to_account_id: String = "toAccountId",
        required amount: i64 = "amount",
        optional currency: String = "currency",
        optional_nullable memo: String = "memo",
        optional source: PaymentSource = "source",
        optional [header] idempotency_key: String = "Idempotency-Key",
    }
}

crate::raw_model! {
    pub struct TransferRetrieveParams {
        required [path] id: String = "id",
    }
}

crate::raw_model! {
    pub struct Transfer {
        required id: String = "id",
        required status: TransferStatus = "status",
        required amount: i64 = "amount",
        required currency: String = "currency",
        required from_account_id: String = "fromAccountId",
        required to_account_id: String = "toAccountId",
        optional_nullable memo: String = "memo",
        optional source: PaymentSource = "source",
        required created_at: DateTime<Utc> = "createdAt",
        optional_nullable completed_at: DateTime<Utc> = "completedAt",
    }
}
