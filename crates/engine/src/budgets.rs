//! Monthly spending limits per category.

use std::hash::{Hash, Hasher};

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{Category, store::StoreError};

/// A budget.
///
/// `month` follows the `YYYY-MM` convention but is stored as given. Nothing
/// prevents two budgets for the same month and category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub month: String,
    pub category: Category,
    pub limit_amount: f64,
}

impl Budget {
    pub fn new(id: i64, month: String, category: Category, limit_amount: f64) -> Self {
        Self {
            id,
            month,
            category,
            limit_amount,
        }
    }

    pub fn set_limit(&mut self, limit_amount: f64) {
        self.limit_amount = limit_amount;
    }
}

impl PartialEq for Budget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Budget {}

impl Hash for Budget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub month: String,
    pub category: String,
    #[sea_orm(column_type = "Double")]
    pub limit_amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Budget> for ActiveModel {
    fn from(value: &Budget) -> Self {
        Self {
            id: ActiveValue::Set(value.id),
            month: ActiveValue::Set(value.month.clone()),
            category: ActiveValue::Set(value.category.as_str().to_string()),
            limit_amount: ActiveValue::Set(value.limit_amount),
        }
    }
}

impl TryFrom<Model> for Budget {
    type Error = StoreError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let category = Category::try_from(model.category.as_str())
            .map_err(|err| StoreError::Corrupted(format!("budget {}: {err}", model.id)))?;

        Ok(Self::new(model.id, model.month, category, model.limit_amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_limit_leaves_month_and_category() {
        let mut budget = Budget::new(3, String::from("2024-05"), Category::Health, 80.0);
        budget.set_limit(120.0);

        assert_eq!(budget.limit_amount, 120.0);
        assert_eq!(budget.month, "2024-05");
        assert_eq!(budget.category, Category::Health);
    }

    #[test]
    fn decode_reads_category_wire_name() {
        let budget = Budget::try_from(Model {
            id: 1,
            month: String::from("2024-01"),
            category: String::from("Utilities"),
            limit_amount: 60.0,
        })
        .unwrap();

        assert_eq!(budget.category, Category::Utilities);
    }
}
