use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Health,
    Utilities,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

/// Body of responses that only carry a confirmation.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum AccountType {
        Bank,
        Savings,
        Wallet,
    }

    /// Request body for creating an account.
    ///
    /// `account_type` is kept as text so an unknown type reaches the engine
    /// and is reported as such.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub id: i64,
        pub name: String,
        pub account_type: String,
        pub currency: Currency,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountUpdate {
        pub name: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: i64,
        pub name: String,
        pub account_type: AccountType,
        pub currency: Currency,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountListResponse {
        pub accounts: Vec<AccountView>,
        pub count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountResponse {
        pub account: AccountView,
    }

    /// Response to a create or an update.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountSaved {
        pub message: String,
        pub account: AccountView,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub id: i64,
        pub account_id: i64,
        pub date: NaiveDate,
        pub amount: f64,
        #[serde(default)]
        pub description: String,
        pub category: Category,
        #[serde(default)]
        pub transaction_type: TransactionType,
    }

    /// Request body for updating a transaction.
    ///
    /// When `transaction_type` is omitted the stored kind is kept.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub description: String,
        pub category: Category,
        pub transaction_type: Option<TransactionType>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        pub account_id: i64,
        pub date: NaiveDate,
        pub amount: f64,
        pub description: String,
        pub category: Category,
        pub transaction_type: TransactionType,
    }

    /// Query of the transaction list.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionListQuery {
        pub account_id: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
        pub count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionResponse {
        pub transaction: TransactionView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionSaved {
        pub message: String,
        pub transaction: TransactionView,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub id: i64,
        /// `YYYY-MM`, not validated.
        pub month: String,
        pub category: Category,
        pub limit_amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub limit_amount: f64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: i64,
        pub month: String,
        pub category: Category,
        pub limit_amount: f64,
    }

    /// Query of the budget list. At most one of the two may be set.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct BudgetListQuery {
        pub month: Option<String>,
        pub category: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetListResponse {
        pub budgets: Vec<BudgetView>,
        pub count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetResponse {
        pub budget: BudgetView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetSaved {
        pub message: String,
        pub budget: BudgetView,
    }
}

pub mod stats {
    use std::collections::BTreeMap;

    use super::*;

    /// Query of the analytics endpoints.
    ///
    /// Values are parsed by the server so that malformed input is reported
    /// in the JSON error body.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct AnalyticsQuery {
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub transaction_type: Option<String>,
        pub months_to_predict: Option<String>,
    }

    /// The filter that was applied, echoed back.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct FilterView {
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
        pub transaction_type: Option<TransactionType>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Statistics {
        pub count: usize,
        pub mean: f64,
        pub median: f64,
        pub std: Option<f64>,
        pub min: f64,
        pub max: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatisticsResponse {
        pub statistics: Statistics,
        pub filter: FilterView,
        pub transaction_count: usize,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct KindTotals {
        #[serde(rename = "Income")]
        pub income: f64,
        #[serde(rename = "Expense")]
        pub expense: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySummaryResponse {
        /// Keyed by category name.
        pub category_summary: BTreeMap<String, KindTotals>,
        pub filter: FilterView,
        pub transaction_count: usize,
    }

    /// One month of a forecast series.
    ///
    /// Serialized as `{"month": "2024-01", "expense": 120.0}`; predicted
    /// points use the `predicted_` prefix on the value key.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct MonthlyPoint {
        pub month: String,
        #[serde(flatten)]
        pub values: BTreeMap<String, f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Forecast {
        pub history: Vec<MonthlyPoint>,
        pub forecast: Vec<MonthlyPoint>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ForecastResponse {
        pub forecast: Forecast,
        pub filter: FilterView,
        pub months_to_predict: i64,
        pub transaction_count: usize,
    }
}
