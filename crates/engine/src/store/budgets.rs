use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{Budget, Category, budgets};

use super::{ResultStore, StoreError, with_tx};

fn decode_all(models: Vec<budgets::Model>) -> ResultStore<Vec<Budget>> {
    models.into_iter().map(Budget::try_from).collect()
}

#[derive(Clone, Debug)]
pub struct BudgetStore {
    database: DatabaseConnection,
}

impl BudgetStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    pub async fn create(&self, budget: &Budget) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            budgets::ActiveModel::from(budget).insert(&db_tx).await?;
            Ok(())
        })
    }

    pub async fn read(&self, budget_id: i64) -> ResultStore<Option<Budget>> {
        with_tx!(self, |db_tx| {
            budgets::Entity::find_by_id(budget_id)
                .one(&db_tx)
                .await?
                .map(Budget::try_from)
                .transpose()
        })
    }

    /// Returns every budget, latest month first, then id descending.
    pub async fn read_all(&self) -> ResultStore<Vec<Budget>> {
        with_tx!(self, |db_tx| {
            let models = budgets::Entity::find()
                .order_by_desc(budgets::Column::Month)
                .order_by_desc(budgets::Column::Id)
                .all(&db_tx)
                .await?;
            decode_all(models)
        })
    }

    pub async fn read_by_month(&self, month: &str) -> ResultStore<Vec<Budget>> {
        with_tx!(self, |db_tx| {
            let models = budgets::Entity::find()
                .filter(budgets::Column::Month.eq(month))
                .order_by_asc(budgets::Column::Category)
                .order_by_asc(budgets::Column::Id)
                .all(&db_tx)
                .await?;
            decode_all(models)
        })
    }

    pub async fn read_by_category(&self, category: Category) -> ResultStore<Vec<Budget>> {
        with_tx!(self, |db_tx| {
            let models = budgets::Entity::find()
                .filter(budgets::Column::Category.eq(category.as_str()))
                .order_by_desc(budgets::Column::Month)
                .order_by_desc(budgets::Column::Id)
                .all(&db_tx)
                .await?;
            decode_all(models)
        })
    }

    pub async fn update(&self, budget: &Budget) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = budgets::Entity::update_many()
                .set(budgets::ActiveModel::from(budget))
                .filter(budgets::Column::Id.eq(budget.id))
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(budget.id));
            }
            Ok(())
        })
    }

    pub async fn delete(&self, budget_id: i64) -> ResultStore<()> {
        with_tx!(self, |db_tx| {
            let result = budgets::Entity::delete_by_id(budget_id)
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::NotFound(budget_id));
            }
            Ok(())
        })
    }

    pub async fn exists(&self, budget_id: i64) -> ResultStore<bool> {
        with_tx!(self, |db_tx| {
            let found = budgets::Entity::find_by_id(budget_id)
                .one(&db_tx)
                .await?
                .is_some();
            Ok(found)
        })
    }
}
