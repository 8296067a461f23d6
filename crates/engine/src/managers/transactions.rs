use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    Category, ResultEngine, Transaction, TransactionKind,
    store::{TransactionFilter, TransactionStore},
};

use super::{duplicate, not_found, store_error};

const ENTITY: &str = "transaction";

/// Create a transaction.
///
/// The account id is recorded as given; it is not checked against existing
/// accounts.
#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub id: i64,
    pub account_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub kind: TransactionKind,
}

impl NewTransaction {
    /// An expense with an empty description.
    #[must_use]
    pub fn new(id: i64, account_id: i64, date: NaiveDate, amount: f64, category: Category) -> Self {
        Self {
            id,
            account_id,
            date,
            amount,
            description: String::new(),
            category,
            kind: TransactionKind::Expense,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Clone, Debug)]
pub struct TransactionManager {
    store: TransactionStore,
}

impl TransactionManager {
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            store: TransactionStore::new(database),
        }
    }

    pub async fn create_transaction(&self, cmd: NewTransaction) -> ResultEngine<Transaction> {
        if self.store.exists(cmd.id).await? {
            return Err(duplicate(ENTITY, cmd.id));
        }
        let tx = Transaction::new(
            cmd.id,
            cmd.account_id,
            cmd.date,
            cmd.amount,
            cmd.description,
            cmd.category,
            cmd.kind,
        );
        self.store.create(&tx).await?;
        Ok(tx)
    }

    /// Updates description and category, and the kind when one is given.
    ///
    /// Amount, date and account stay as they were.
    pub async fn modify_transaction(
        &self,
        transaction_id: i64,
        description: String,
        category: Category,
        kind: Option<TransactionKind>,
    ) -> ResultEngine<Transaction> {
        let mut tx = self.get_transaction_by_id(transaction_id).await?;
        tx.update_details(description, category, kind);
        self.store.update(&tx).await.map_err(store_error(ENTITY))?;
        Ok(tx)
    }

    pub async fn delete_transaction(&self, transaction_id: i64) -> ResultEngine<()> {
        self.store
            .delete(transaction_id)
            .await
            .map_err(store_error(ENTITY))
    }

    pub async fn get_transaction_by_id(&self, transaction_id: i64) -> ResultEngine<Transaction> {
        self.store
            .read(transaction_id)
            .await?
            .ok_or_else(|| not_found(ENTITY, transaction_id))
    }

    pub async fn get_all_transactions(&self) -> ResultEngine<Vec<Transaction>> {
        Ok(self.store.read_all().await?)
    }

    pub async fn get_transactions_by_account(
        &self,
        account_id: i64,
    ) -> ResultEngine<Vec<Transaction>> {
        Ok(self.store.read_by_account(account_id).await?)
    }

    /// Returns the transactions matching `filter`, newest first.
    ///
    /// Callers are expected to have run [`TransactionFilter::validate`].
    pub async fn get_filtered_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        Ok(self.store.read_filtered(filter).await?)
    }
}
