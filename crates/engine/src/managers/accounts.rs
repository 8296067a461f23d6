use sea_orm::DatabaseConnection;

use crate::{Account, AccountType, Currency, ResultEngine, store::AccountStore};

use super::{duplicate, not_found, store_error};

const ENTITY: &str = "account";

/// Create an account.
#[derive(Clone, Debug)]
pub struct NewAccount {
    pub id: i64,
    pub name: String,
    /// Type tag as received; checked against [`AccountType`].
    pub account_type: String,
    pub currency: Currency,
}

impl NewAccount {
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        account_type: impl Into<String>,
        currency: Currency,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            account_type: account_type.into(),
            currency,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AccountManager {
    store: AccountStore,
}

impl AccountManager {
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            store: AccountStore::new(database),
        }
    }

    /// Persists a new account of the requested type.
    ///
    /// Fails with `DuplicateId` when the id is taken and with
    /// `UnsupportedAccountType` when the tag is not a known type.
    pub async fn create_account(&self, cmd: NewAccount) -> ResultEngine<Account> {
        if self.store.exists(cmd.id).await? {
            return Err(duplicate(ENTITY, cmd.id));
        }
        let account_type = AccountType::try_from(cmd.account_type.as_str())?;
        let account = Account::new(cmd.id, cmd.name, account_type, cmd.currency);
        self.store.create(&account).await?;
        Ok(account)
    }

    /// Renames an account. Type and currency never change.
    pub async fn modify_account(&self, account_id: i64, name: String) -> ResultEngine<Account> {
        let mut account = self.get_account_by_id(account_id).await?;
        account.rename(name);
        self.store
            .update(&account)
            .await
            .map_err(store_error(ENTITY))?;
        Ok(account)
    }

    /// Removes an account. Transactions pointing at it are left in place.
    pub async fn delete_account(&self, account_id: i64) -> ResultEngine<()> {
        self.store
            .delete(account_id)
            .await
            .map_err(store_error(ENTITY))
    }

    pub async fn get_account_by_id(&self, account_id: i64) -> ResultEngine<Account> {
        self.store
            .read(account_id)
            .await?
            .ok_or_else(|| not_found(ENTITY, account_id))
    }

    pub async fn get_all_accounts(&self) -> ResultEngine<Vec<Account>> {
        Ok(self.store.read_all().await?)
    }
}
