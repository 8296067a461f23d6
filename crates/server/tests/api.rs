use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use engine::Engine;

async fn app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    server::router(engine)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn seed_expenses(app: &Router) {
    let rows = [
        (1, "2024-01-15", 100.0, "Food", "Expense"),
        (2, "2024-02-15", 200.0, "Food", "Expense"),
        (3, "2024-03-15", 300.0, "Transport", "Expense"),
        (4, "2024-03-20", 1000.0, "Other", "Income"),
    ];
    for (id, date, amount, category, kind) in rows {
        let (status, _) = call(
            app,
            Method::POST,
            "/api/transactions",
            Some(json!({
                "id": id,
                "account_id": 1,
                "date": date,
                "amount": amount,
                "category": category,
                "transaction_type": kind,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn account_lifecycle() {
    let app = app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/accounts",
        Some(json!({"id": 1, "name": "Main", "account_type": "Bank", "currency": "USD"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["account"]["name"], "Main");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/accounts/1",
        Some(json!({"name": "Everyday"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["account"],
        json!({"id": 1, "name": "Everyday", "account_type": "Bank", "currency": "USD"})
    );

    let (status, body) = call(&app, Method::GET, "/api/accounts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, _) = call(&app, Method::DELETE, "/api/accounts/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, Method::GET, "/api/accounts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "account 1 not found");
}

#[tokio::test]
async fn account_errors_map_to_statuses() {
    let app = app().await;
    let account = json!({"id": 1, "name": "Main", "account_type": "Wallet", "currency": "EUR"});
    call(&app, Method::POST, "/api/accounts", Some(account.clone())).await;

    let (status, _) = call(&app, Method::POST, "/api/accounts", Some(account)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/accounts",
        Some(json!({"id": 2, "name": "Stocks", "account_type": "Brokerage", "currency": "USD"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Brokerage"));

    let (status, _) = call(&app, Method::DELETE, "/api/accounts/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transaction_defaults_and_partial_update() {
    let app = app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({
            "id": 7,
            "account_id": 3,
            "date": "2024-05-02",
            "amount": 42.5,
            "category": "Health",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["transaction"]["description"], "");
    assert_eq!(body["transaction"]["transaction_type"], "Expense");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/transactions/7",
        Some(json!({"description": "pharmacy", "category": "Other"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["transaction"],
        json!({
            "id": 7,
            "account_id": 3,
            "date": "2024-05-02",
            "amount": 42.5,
            "description": "pharmacy",
            "category": "Other",
            "transaction_type": "Expense",
        })
    );

    let (_, body) = call(&app, Method::GET, "/api/transactions?account_id=3", None).await;
    assert_eq!(body["count"], 1);
    let (status, _) = call(&app, Method::GET, "/api/transactions?account_id=x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn statistics_over_filtered_transactions() {
    let app = app().await;
    seed_expenses(&app).await;

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/transactions/statistics?transaction_type=Expense",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_count"], 3);
    assert_eq!(body["statistics"]["mean"], 200.0);
    assert_eq!(body["statistics"]["median"], 200.0);
    assert_eq!(body["statistics"]["min"], 100.0);
    assert_eq!(body["statistics"]["max"], 300.0);
    assert_eq!(body["filter"]["transaction_type"], "Expense");

    let (status, _) = call(
        &app,
        Method::GET,
        "/api/transactions/statistics?start_date=2030-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call(
        &app,
        Method::GET,
        "/api/transactions/statistics?start_date=2024-03-01&end_date=2024-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_summary_groups_by_kind() {
    let app = app().await;
    seed_expenses(&app).await;

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/transactions/category-summary?start_date=2024-02-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_count"], 3);
    assert_eq!(
        body["category_summary"],
        json!({
            "Food": {"Income": 0.0, "Expense": 200.0},
            "Other": {"Income": 1000.0, "Expense": 0.0},
            "Transport": {"Income": 0.0, "Expense": 300.0},
        })
    );
}

#[tokio::test]
async fn monthly_forecast_extends_trend() {
    let app = app().await;
    seed_expenses(&app).await;

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/transactions/monthly-forecast?transaction_type=Expense&months_to_predict=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["months_to_predict"], 1);
    assert_eq!(
        body["forecast"]["history"],
        json!([
            {"month": "2024-01", "expense": 100.0},
            {"month": "2024-02", "expense": 200.0},
            {"month": "2024-03", "expense": 300.0},
        ])
    );
    assert_eq!(body["forecast"]["forecast"][0]["month"], "2024-04");
    let predicted = body["forecast"]["forecast"][0]["predicted_expense"]
        .as_f64()
        .unwrap();
    assert!((predicted - 400.0).abs() < 1e-9);

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/transactions/monthly-forecast?transaction_type=Expense&months_to_predict=1201",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["months_to_predict"], 1201);
    let points = body["forecast"]["forecast"].as_array().unwrap();
    assert_eq!(points.len(), 1201);
    assert_eq!(points[1200]["month"], "2124-04");

    let (status, body) = call(
        &app,
        Method::GET,
        "/api/transactions/monthly-forecast?transaction_type=Income&months_to_predict=1201&start_date=2030-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forecast"], json!({"history": [], "forecast": []}));

    for uri in [
        "/api/transactions/monthly-forecast?months_to_predict=1",
        "/api/transactions/monthly-forecast?transaction_type=Expense",
        "/api/transactions/monthly-forecast?transaction_type=Expense&months_to_predict=0",
    ] {
        let (status, _) = call(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn budget_queries() {
    let app = app().await;
    let budgets = [
        (1, "2024-01", "Food", 300.0),
        (2, "2024-01", "Health", 50.0),
        (3, "2024-02", "Food", 280.0),
    ];
    for (id, month, category, limit) in budgets {
        let (status, _) = call(
            &app,
            Method::POST,
            "/api/budgets",
            Some(json!({"id": id, "month": month, "category": category, "limit_amount": limit})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = call(&app, Method::GET, "/api/budgets?month=2024-01", None).await;
    assert_eq!(body["count"], 2);
    let (_, body) = call(&app, Method::GET, "/api/budgets?category=Food", None).await;
    assert_eq!(body["budgets"][0]["id"], 3);
    let (status, _) = call(
        &app,
        Method::GET,
        "/api/budgets?month=2024-01&category=Food",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/budgets/2",
        Some(json!({"limit_amount": 75.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["budget"],
        json!({"id": 2, "month": "2024-01", "category": "Health", "limit_amount": 75.0})
    );
}
