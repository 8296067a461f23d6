//! The module contains `Account` struct and its implementation.

use std::hash::{Hash, Hasher};

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError, store::StoreError};

/// Kind of account. All kinds share the same fields today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Bank,
    Savings,
    Wallet,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [AccountType::Bank, AccountType::Savings, AccountType::Wallet];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::Savings => "Savings",
            Self::Wallet => "Wallet",
        }
    }

    /// Decodes a tag read back from storage.
    ///
    /// Unknown tags decode as `Bank`, so a corrupted tag is not reported.
    pub fn from_stored(value: &str) -> Self {
        Self::try_from(value).unwrap_or(Self::Bank)
    }
}

impl core::fmt::Display for AccountType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AccountType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Bank" => Ok(Self::Bank),
            "Savings" => Ok(Self::Savings),
            "Wallet" => Ok(Self::Wallet),
            other => Err(EngineError::UnsupportedAccountType(format!(
                "{other} (use Bank, Savings or Wallet)"
            ))),
        }
    }
}

/// An account.
///
/// An account is a place where money is kept: a bank account, a savings
/// account or a physical wallet. Two accounts are the same account when they
/// share the id, whatever their other fields say.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
}

impl Account {
    pub fn new(id: i64, name: String, account_type: AccountType, currency: Currency) -> Self {
        Self {
            id,
            name,
            account_type,
            currency,
        }
    }

    pub fn bank(id: i64, name: String, currency: Currency) -> Self {
        Self::new(id, name, AccountType::Bank, currency)
    }

    pub fn savings(id: i64, name: String, currency: Currency) -> Self {
        Self::new(id, name, AccountType::Savings, currency)
    }

    pub fn wallet(id: i64, name: String, currency: Currency) -> Self {
        Self::new(id, name, AccountType::Wallet, currency)
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub account_type: String,
    pub currency: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Account> for ActiveModel {
    fn from(value: &Account) -> Self {
        Self {
            id: ActiveValue::Set(value.id),
            name: ActiveValue::Set(value.name.clone()),
            account_type: ActiveValue::Set(value.account_type.as_str().to_string()),
            currency: ActiveValue::Set(value.currency.code().to_string()),
        }
    }
}

impl TryFrom<Model> for Account {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let currency = Currency::try_from(model.currency.as_str())
            .map_err(|err| StoreError::Corrupted(format!("account {}: {err}", model.id)))?;

        Ok(Self::new(
            model.id,
            model.name,
            AccountType::from_stored(&model.account_type),
            currency,
        ))
    }
}
