//! Personal finance engine.
//!
//! Accounts, transactions and monthly budgets persisted through sea-orm, and
//! a few pure analytics over transactions. [`Engine`] bundles one manager per
//! entity kind over a shared database handle.

use sea_orm::DatabaseConnection;

pub use accounts::{Account, AccountType};
pub use budgets::Budget;
pub use categories::Category;
pub use currency::Currency;
pub use error::{EngineError, ResultEngine};
pub use managers::{
    AccountManager, BudgetManager, NewAccount, NewBudget, NewTransaction, TransactionManager,
};
pub use statistics::{
    AmountStatistics, KindTotals, MonthlyAmount, MonthlyForecast, YearMonth,
    monthly_amount_forecast_linear, transaction_amount_statistics, transaction_category_summary,
};
pub use store::{StoreError, TransactionFilter};
pub use transactions::{Transaction, TransactionKind};

pub mod accounts;
pub mod budgets;
mod categories;
mod currency;
mod error;
mod managers;
pub mod schema;
mod statistics;
pub mod store;
pub mod transactions;

#[derive(Clone, Debug)]
pub struct Engine {
    accounts: AccountManager,
    transactions: TransactionManager,
    budgets: BudgetManager,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn accounts(&self) -> &AccountManager {
        &self.accounts
    }

    pub fn transactions(&self) -> &TransactionManager {
        &self.transactions
    }

    pub fn budgets(&self) -> &BudgetManager {
        &self.budgets
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, creating missing tables first.
    pub async fn build(self) -> ResultEngine<Engine> {
        schema::bootstrap(&self.database).await?;
        Ok(Engine {
            accounts: AccountManager::new(self.database.clone()),
            transactions: TransactionManager::new(self.database.clone()),
            budgets: BudgetManager::new(self.database),
        })
    }
}
