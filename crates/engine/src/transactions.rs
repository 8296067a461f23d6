//! Transaction primitives.
//!
//! A `Transaction` records money moving in or out of an account on a given
//! day. The referenced account is not checked: a transaction may outlive the
//! account it points to.

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{Category, EngineError, store::StoreError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Lowercase name, used as key in forecast points.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidInput(format!(
                "invalid transaction type: {other} (valid: Income, Expense)"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub account_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    #[serde(rename = "transaction_type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        id: i64,
        account_id: i64,
        date: NaiveDate,
        amount: f64,
        description: String,
        category: Category,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id,
            account_id,
            date,
            amount,
            description,
            category,
            kind,
        }
    }

    /// Applies the mutable fields in one go. `kind` is kept when `None`.
    pub fn update_details(
        &mut self,
        description: String,
        category: Category,
        kind: Option<TransactionKind>,
    ) {
        self.description = description;
        self.category = category;
        if let Some(kind) = kind {
            self.kind = kind;
        }
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub account_id: i64,
    pub date: NaiveDate,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub transaction_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id),
            account_id: ActiveValue::Set(tx.account_id),
            date: ActiveValue::Set(tx.date),
            amount: ActiveValue::Set(tx.amount),
            description: ActiveValue::Set(tx.description.clone()),
            category: ActiveValue::Set(tx.category.as_str().to_string()),
            transaction_type: ActiveValue::Set(tx.kind.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = model.id;
        let corrupted = |err: EngineError| StoreError::Corrupted(format!("transaction {id}: {err}"));

        Ok(Self {
            id,
            account_id: model.account_id,
            date: model.date,
            amount: model.amount,
            description: model.description,
            category: Category::try_from(model.category.as_str()).map_err(corrupted)?,
            kind: TransactionKind::try_from(model.transaction_type.as_str()).map_err(corrupted)?,
        })
    }
}
