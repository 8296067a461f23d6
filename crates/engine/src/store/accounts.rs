use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{Account, accounts};

use super::{ResultStore, StoreError, with_tx};

#[derive(Clone, Debug)]
pub struct AccountStore {
    database: DatabaseConnection,
}

impl AccountStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Inserts a new row. A duplicate id surfaces as a database error.
    pub async fn create(&self, account: &Account) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            accounts::ActiveModel::from(account).insert(&db_tx).await?;
            Ok(())
        })
    }

    pub async fn read(&self, account_id: i64) -> ResultStore<Option<Account>> {
        with_tx!(self, |db_tx| {
            accounts::Entity::find_by_id(account_id)
                .one(&db_tx)
                .await?
                .map(Account::try_from)
                .transpose()
        })
    }

    /// Returns every account ordered by id.
    pub async fn read_all(&self) -> ResultStore<Vec<Account>> {
        with_tx!(self, |db_tx| {
            accounts::Entity::find()
                .order_by_asc(accounts::Column::Id)
                .all(&db_tx)
                .await?
                .into_iter()
                .map(Account::try_from)
                .collect::<ResultStore<Vec<_>>>()
        })
    }

    pub async fn update(&self, account: &Account) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = accounts::Entity::update_many()
                .set(accounts::ActiveModel::from(account))
                .filter(accounts::Column::Id.eq(account.id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(account.id));
            }
            Ok(())
        })
    }

    pub async fn delete(&self, account_id: i64) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = accounts::Entity::delete_by_id(account_id)
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(account_id));
            }
            Ok(())
        })
    }

    pub async fn exists(&self, account_id: i64) -> ResultStore<bool> {
        with_tx!(self, |db_tx| {
            let found = accounts::Entity::find_by_id(account_id)
                .one(&db_tx)
                .await?
                .is_some();
            Ok(found)
        })
    }
}
