//! Accounts API endpoints

use api_types::{
    Message,
    account::{AccountListResponse, AccountNew, AccountResponse, AccountSaved, AccountUpdate},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::NewAccount;

use crate::{
    ServerError,
    server::ServerState,
    views::{account_view, parse_currency},
};

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<AccountListResponse>, ServerError> {
    let accounts: Vec<_> = state
        .engine
        .accounts()
        .get_all_accounts()
        .await?
        .iter()
        .map(account_view)
        .collect();

    Ok(Json(AccountListResponse {
        count: accounts.len(),
        accounts,
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountResponse>, ServerError> {
    let account = state.engine.accounts().get_account_by_id(id).await?;
    Ok(Json(AccountResponse {
        account: account_view(&account),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<(StatusCode, Json<AccountSaved>), ServerError> {
    let account = state
        .engine
        .accounts()
        .create_account(NewAccount::new(
            payload.id,
            payload.name,
            payload.account_type,
            parse_currency(payload.currency),
        ))
        .await?;
    tracing::info!(id = account.id, "account created");

    Ok((
        StatusCode::CREATED,
        Json(AccountSaved {
            message: "Account created successfully".to_string(),
            account: account_view(&account),
        }),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AccountUpdate>,
) -> Result<Json<AccountSaved>, ServerError> {
    let account = state
        .engine
        .accounts()
        .modify_account(id, payload.name)
        .await?;
    tracing::debug!(id, "account renamed");

    Ok(Json(AccountSaved {
        message: "Account updated successfully".to_string(),
        account: account_view(&account),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ServerError> {
    state.engine.accounts().delete_account(id).await?;
    tracing::info!(id, "account deleted");

    Ok(Json(Message {
        message: "Account deleted successfully".to_string(),
    }))
}
