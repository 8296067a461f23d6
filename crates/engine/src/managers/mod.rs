//! Domain managers.
//!
//! A manager guards a store: identifiers must be free before a create and
//! present before a read, update or delete. Store-level "no row" signals are
//! turned into [`EngineError::KeyNotFound`] naming the entity.

use crate::{EngineError, store::StoreError};

mod accounts;
mod budgets;
mod transactions;

pub use accounts::{AccountManager, NewAccount};
pub use budgets::{BudgetManager, NewBudget};
pub use transactions::{NewTransaction, TransactionManager};

fn not_found(entity: &str, id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("{entity} {id}"))
}

fn duplicate(entity: &str, id: i64) -> EngineError {
    EngineError::DuplicateId(format!("{entity} {id}"))
}

/// Maps a store error, naming the entity when the row is missing.
fn store_error(entity: &'static str) -> impl Fn(StoreError) -> EngineError {
    move |err| match err {
        StoreError::NotFound(id) => not_found(entity, id),
        other => other.into(),
    }
}
