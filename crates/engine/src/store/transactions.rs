use chrono::NaiveDate;
use sea_orm::{QueryFilter, QueryOrder, Select, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, Transaction, TransactionKind, transactions};

use super::{ResultStore, StoreError, with_tx};

/// Filters for reading transactions.
///
/// Both bounds are inclusive. Unset fields do not filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn validate(&self) -> ResultEngine<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(EngineError::InvalidInput(
                "start_date must be before or equal to end_date".to_string(),
            ));
        }
        Ok(())
    }
}

trait ApplyTxFilters: QueryFilter + Sized {
    fn apply_tx_filters(self, filter: &TransactionFilter) -> Self;
}

impl<T> ApplyTxFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_tx_filters(mut self, filter: &TransactionFilter) -> Self {
        if let Some(start) = filter.start_date {
            self = self.filter(transactions::Column::Date.gte(start));
        }
        if let Some(end) = filter.end_date {
            self = self.filter(transactions::Column::Date.lte(end));
        }
        if let Some(kind) = filter.kind {
            self = self.filter(transactions::Column::TransactionType.eq(kind.as_str()));
        }
        self
    }
}

/// Newest first: date descending, then id descending.
fn newest_first(query: Select<transactions::Entity>) -> Select<transactions::Entity> {
    query
        .order_by_desc(transactions::Column::Date)
        .order_by_desc(transactions::Column::Id)
}

fn decode_all(models: Vec<transactions::Model>) -> ResultStore<Vec<Transaction>> {
    models.into_iter().map(Transaction::try_from).collect()
}

#[derive(Clone, Debug)]
pub struct TransactionStore {
    database: DatabaseConnection,
}

impl TransactionStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Inserts a new row. The account id is stored as given.
    pub async fn create(&self, tx: &Transaction) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            transactions::ActiveModel::from(tx).insert(&db_tx).await?;
            Ok(())
        })
    }

    pub async fn read(&self, transaction_id: i64) -> ResultStore<Option<Transaction>> {
        with_tx!(self, |db_tx| {
            transactions::Entity::find_by_id(transaction_id)
                .one(&db_tx)
                .await?
                .map(Transaction::try_from)
                .transpose()
        })
    }

    pub async fn read_all(&self) -> ResultStore<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            let models = newest_first(transactions::Entity::find())
                .all(&db_tx)
                .await?;
            decode_all(models)
        })
    }

    pub async fn read_by_account(&self, account_id: i64) -> ResultStore<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            let models = newest_first(
                transactions::Entity::find()
                    .filter(transactions::Column::AccountId.eq(account_id)),
            )
            .all(&db_tx)
            .await?;
            decode_all(models)
        })
    }

    pub async fn read_filtered(&self, filter: &TransactionFilter) -> ResultStore<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            let models = newest_first(transactions::Entity::find().apply_tx_filters(filter))
                .all(&db_tx)
                .await?;
            decode_all(models)
        })
    }

    /// Overwrites every column of the row with the same id.
    pub async fn update(&self, tx: &Transaction) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = transactions::Entity::update_many()
                .set(transactions::ActiveModel::from(tx))
                .filter(transactions::Column::Id.eq(tx.id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(tx.id));
            }
            Ok(())
        })
    }

    pub async fn delete(&self, transaction_id: i64) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = transactions::Entity::delete_by_id(transaction_id)
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(transaction_id));
            }
            Ok(())
        })
    }

    pub async fn exists(&self, transaction_id: i64) -> ResultStore<bool> {
        with_tx!(self, |db_tx| {
            let found = transactions::Entity::find_by_id(transaction_id)
                .one(&db_tx)
                .await?
                .is_some();
            Ok(found)
        })
    }
}
