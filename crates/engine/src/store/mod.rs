//! Persistence gateways, one per entity kind.
//!
//! Each store owns a handle to the database and maps entities to rows and
//! back. Every call is its own database transaction: there is no unit of work
//! spanning two calls.

use sea_orm::DbErr;
use thiserror::Error;

mod accounts;
mod budgets;
mod transactions;

pub use accounts::AccountStore;
pub use budgets::BudgetStore;
pub use transactions::{TransactionFilter, TransactionStore};

pub type ResultStore<T> = Result<T, StoreError>;

/// Errors raised by the stores.
///
/// `NotFound` is only raised by `update` and `delete`; reads return `None`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no row with id {0}")]
    NotFound(i64),
    #[error("{0}")]
    Corrupted(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Run a block inside a DB transaction, committing on success.
///
/// On error the transaction is dropped, which rolls it back.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;
