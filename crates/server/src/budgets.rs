//! Budgets API endpoints

use api_types::{
    Message,
    budget::{
        BudgetListQuery, BudgetListResponse, BudgetNew, BudgetResponse, BudgetSaved, BudgetUpdate,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use engine::{Category, NewBudget};

use crate::{
    ServerError,
    server::ServerState,
    views::{budget_view, parse_category},
};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BudgetListQuery>,
) -> Result<Json<BudgetListResponse>, ServerError> {
    let budgets = state.engine.budgets();
    let found = match (query.month, query.category) {
        (None, None) => budgets.get_all_budgets().await?,
        (Some(month), None) => budgets.get_budgets_by_month(&month).await?,
        (None, Some(category)) => {
            let category = Category::try_from(category.as_str())
                .map_err(|err| ServerError::Generic(err.to_string()))?;
            budgets.get_budgets_by_category(category).await?
        }
        (Some(_), Some(_)) => {
            return Err(ServerError::Generic(
                "provide only one of month or category".to_string(),
            ));
        }
    };
    let budgets: Vec<_> = found.iter().map(budget_view).collect();

    Ok(Json(BudgetListResponse {
        count: budgets.len(),
        budgets,
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<BudgetResponse>, ServerError> {
    let budget = state.engine.budgets().get_budget_by_id(id).await?;
    Ok(Json(BudgetResponse {
        budget: budget_view(&budget),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetNew>,
) -> Result<(StatusCode, Json<BudgetSaved>), ServerError> {
    let budget = state
        .engine
        .budgets()
        .create_budget(NewBudget::new(
            payload.id,
            payload.month,
            parse_category(payload.category),
            payload.limit_amount,
        ))
        .await?;
    tracing::info!(id = budget.id, month = %budget.month, "budget created");

    Ok((
        StatusCode::CREATED,
        Json(BudgetSaved {
            message: "Budget created successfully".to_string(),
            budget: budget_view(&budget),
        }),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BudgetUpdate>,
) -> Result<Json<BudgetSaved>, ServerError> {
    let budget = state
        .engine
        .budgets()
        .modify_budget(id, payload.limit_amount)
        .await?;
    tracing::debug!(id, limit = budget.limit_amount, "budget updated");

    Ok(Json(BudgetSaved {
        message: "Budget updated successfully".to_string(),
        budget: budget_view(&budget),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ServerError> {
    state.engine.budgets().delete_budget(id).await?;
    tracing::info!(id, "budget deleted");

    Ok(Json(Message {
        message: "Budget deleted successfully".to_string(),
    }))
}
