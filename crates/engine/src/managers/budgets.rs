use sea_orm::DatabaseConnection;

use crate::{Budget, Category, ResultEngine, store::BudgetStore};

use super::{duplicate, not_found, store_error};

const ENTITY: &str = "budget";

/// Create a budget.
#[derive(Clone, Debug)]
pub struct NewBudget {
    pub id: i64,
    pub month: String,
    pub category: Category,
    pub limit_amount: f64,
}

impl NewBudget {
    #[must_use]
    pub fn new(id: i64, month: impl Into<String>, category: Category, limit_amount: f64) -> Self {
        Self {
            id,
            month: month.into(),
            category,
            limit_amount,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BudgetManager {
    store: BudgetStore,
}

impl BudgetManager {
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            store: BudgetStore::new(database),
        }
    }

    pub async fn create_budget(&self, cmd: NewBudget) -> ResultEngine<Budget> {
        if self.store.exists(cmd.id).await? {
            return Err(duplicate(ENTITY, cmd.id));
        }
        let budget = Budget::new(cmd.id, cmd.month, cmd.category, cmd.limit_amount);
        self.store.create(&budget).await?;
        Ok(budget)
    }

    /// Changes the limit. Month and category are fixed at creation.
    pub async fn modify_budget(&self, budget_id: i64, limit_amount: f64) -> ResultEngine<Budget> {
        let mut budget = self.get_budget_by_id(budget_id).await?;
        budget.set_limit(limit_amount);
        self.store
            .update(&budget)
            .await
            .map_err(store_error(ENTITY))?;
        Ok(budget)
    }

    pub async fn delete_budget(&self, budget_id: i64) -> ResultEngine<()> {
        self.store
            .delete(budget_id)
            .await
            .map_err(store_error(ENTITY))
    }

    pub async fn get_budget_by_id(&self, budget_id: i64) -> ResultEngine<Budget> {
        self.store
            .read(budget_id)
            .await?
            .ok_or_else(|| not_found(ENTITY, budget_id))
    }

    pub async fn get_all_budgets(&self) -> ResultEngine<Vec<Budget>> {
        Ok(self.store.read_all().await?)
    }

    pub async fn get_budgets_by_month(&self, month: &str) -> ResultEngine<Vec<Budget>> {
        Ok(self.store.read_by_month(month).await?)
    }

    pub async fn get_budgets_by_category(&self, category: Category) -> ResultEngine<Vec<Budget>> {
        Ok(self.store.read_by_category(category).await?)
    }
}
