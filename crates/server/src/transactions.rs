//! Transactions API endpoints, including the analytics over them.

use api_types::{
    Message,
    stats::{
        AnalyticsQuery, CategorySummaryResponse, FilterView, ForecastResponse, StatisticsResponse,
    },
    transaction::{
        TransactionListQuery, TransactionListResponse, TransactionNew, TransactionResponse,
        TransactionSaved, TransactionUpdate,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use engine::{NewTransaction, TransactionFilter, TransactionKind};

use crate::{
    ServerError,
    server::ServerState,
    views::{
        category_summary_view, forecast_view, map_kind, parse_category, parse_kind,
        statistics_view, transaction_view,
    },
};

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ServerError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ServerError::Generic(format!("{field} must be a date formatted as YYYY-MM-DD"))
            })
        })
        .transpose()
}

fn parse_transaction_type(value: Option<&str>) -> Result<Option<TransactionKind>, ServerError> {
    value
        .map(|raw| {
            TransactionKind::try_from(raw).map_err(|err| ServerError::Generic(err.to_string()))
        })
        .transpose()
}

/// Build the filter from the query and reject an inverted range.
fn parse_filter(query: &AnalyticsQuery, with_kind: bool) -> Result<TransactionFilter, ServerError> {
    let filter = TransactionFilter {
        start_date: parse_date("start_date", query.start_date.as_deref())?,
        end_date: parse_date("end_date", query.end_date.as_deref())?,
        kind: if with_kind {
            parse_transaction_type(query.transaction_type.as_deref())?
        } else {
            None
        },
    };
    filter
        .validate()
        .map_err(|err| ServerError::Generic(err.to_string()))?;
    Ok(filter)
}

/// The forecast runs over one transaction type, so the filter must name it.
fn required_kind(filter: &TransactionFilter) -> Result<TransactionKind, ServerError> {
    match filter.kind {
        Some(kind) => Ok(kind),
        None => Err(ServerError::Generic(
            "transaction_type is required".to_string(),
        )),
    }
}

fn filter_view(filter: &TransactionFilter) -> FilterView {
    FilterView {
        start_date: filter.start_date,
        end_date: filter.end_date,
        transaction_type: filter.kind.map(map_kind),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let manager = state.engine.transactions();
    let found = match query.account_id {
        Some(raw) => {
            let account_id = raw
                .parse::<i64>()
                .map_err(|_| ServerError::Generic("account_id must be an integer".to_string()))?;
            manager.get_transactions_by_account(account_id).await?
        }
        None => manager.get_all_transactions().await?,
    };
    let transactions: Vec<_> = found.iter().map(transaction_view).collect();

    Ok(Json(TransactionListResponse {
        count: transactions.len(),
        transactions,
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionResponse>, ServerError> {
    let tx = state.engine.transactions().get_transaction_by_id(id).await?;
    Ok(Json(TransactionResponse {
        transaction: transaction_view(&tx),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionSaved>), ServerError> {
    let cmd = NewTransaction::new(
        payload.id,
        payload.account_id,
        payload.date,
        payload.amount,
        parse_category(payload.category),
    )
    .description(payload.description)
    .kind(parse_kind(payload.transaction_type));

    let tx = state.engine.transactions().create_transaction(cmd).await?;
    tracing::info!(id = tx.id, account_id = tx.account_id, "transaction created");

    Ok((
        StatusCode::CREATED,
        Json(TransactionSaved {
            message: "Transaction created successfully".to_string(),
            transaction: transaction_view(&tx),
        }),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TransactionUpdate>,
) -> Result<Json<TransactionSaved>, ServerError> {
    let tx = state
        .engine
        .transactions()
        .modify_transaction(
            id,
            payload.description,
            parse_category(payload.category),
            payload.transaction_type.map(parse_kind),
        )
        .await?;
    tracing::debug!(id, "transaction updated");

    Ok(Json(TransactionSaved {
        message: "Transaction updated successfully".to_string(),
        transaction: transaction_view(&tx),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ServerError> {
    state.engine.transactions().delete_transaction(id).await?;
    tracing::info!(id, "transaction deleted");

    Ok(Json(Message {
        message: "Transaction deleted successfully".to_string(),
    }))
}

/// Descriptive statistics of the amounts matching the filter.
pub async fn statistics(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<StatisticsResponse>, ServerError> {
    let filter = parse_filter(&query, true)?;
    let txs = state
        .engine
        .transactions()
        .get_filtered_transactions(&filter)
        .await?;
    let statistics = engine::transaction_amount_statistics(&txs)?;

    Ok(Json(StatisticsResponse {
        statistics: statistics_view(&statistics),
        filter: filter_view(&filter),
        transaction_count: txs.len(),
    }))
}

/// Income and expense totals per category. Only the date range applies.
pub async fn category_summary(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<CategorySummaryResponse>, ServerError> {
    let filter = parse_filter(&query, false)?;
    let txs = state
        .engine
        .transactions()
        .get_filtered_transactions(&filter)
        .await?;
    let summary = engine::transaction_category_summary(&txs);

    Ok(Json(CategorySummaryResponse {
        category_summary: category_summary_view(&summary),
        filter: filter_view(&filter),
        transaction_count: txs.len(),
    }))
}

/// Linear forecast of monthly totals for one transaction type.
pub async fn monthly_forecast(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<ForecastResponse>, ServerError> {
    let filter = parse_filter(&query, true)?;
    let kind = required_kind(&filter)?;
    let months_to_predict = query
        .months_to_predict
        .as_deref()
        .ok_or_else(|| ServerError::Generic("months_to_predict is required".to_string()))?
        .parse::<i64>()
        .map_err(|_| ServerError::Generic("months_to_predict must be an integer".to_string()))?;
    if months_to_predict <= 0 {
        return Err(ServerError::Generic(
            "months_to_predict must be > 0".to_string(),
        ));
    }

    let txs = state
        .engine
        .transactions()
        .get_filtered_transactions(&filter)
        .await?;
    let forecast = engine::monthly_amount_forecast_linear(&txs, kind, months_to_predict)?;
    tracing::debug!(
        months_to_predict,
        history = forecast.history.len(),
        "forecast computed"
    );

    Ok(Json(ForecastResponse {
        forecast: forecast_view(&forecast),
        filter: filter_view(&filter),
        months_to_predict,
        transaction_count: txs.len(),
    }))
}
