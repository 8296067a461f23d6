//! Conversions between engine values and their wire form.

use std::collections::BTreeMap;

use api_types::{
    Category as ApiCategory, Currency as ApiCurrency, TransactionType,
    account::{AccountType as ApiAccountType, AccountView},
    budget::BudgetView,
    stats::{
        Forecast, KindTotals as ApiKindTotals, MonthlyPoint, Statistics as ApiStatistics,
    },
    transaction::TransactionView,
};
use engine::{
    Account, AccountType, AmountStatistics, Budget, Category, Currency, KindTotals,
    MonthlyForecast, Transaction, TransactionKind,
};

pub fn map_account_type(account_type: AccountType) -> ApiAccountType {
    match account_type {
        AccountType::Bank => ApiAccountType::Bank,
        AccountType::Savings => ApiAccountType::Savings,
        AccountType::Wallet => ApiAccountType::Wallet,
    }
}

pub fn map_currency(currency: Currency) -> ApiCurrency {
    match currency {
        Currency::Usd => ApiCurrency::Usd,
        Currency::Eur => ApiCurrency::Eur,
    }
}

pub fn parse_currency(currency: ApiCurrency) -> Currency {
    match currency {
        ApiCurrency::Usd => Currency::Usd,
        ApiCurrency::Eur => Currency::Eur,
    }
}

pub fn map_category(category: Category) -> ApiCategory {
    match category {
        Category::Food => ApiCategory::Food,
        Category::Transport => ApiCategory::Transport,
        Category::Entertainment => ApiCategory::Entertainment,
        Category::Health => ApiCategory::Health,
        Category::Utilities => ApiCategory::Utilities,
        Category::Other => ApiCategory::Other,
    }
}

pub fn parse_category(category: ApiCategory) -> Category {
    match category {
        ApiCategory::Food => Category::Food,
        ApiCategory::Transport => Category::Transport,
        ApiCategory::Entertainment => Category::Entertainment,
        ApiCategory::Health => Category::Health,
        ApiCategory::Utilities => Category::Utilities,
        ApiCategory::Other => Category::Other,
    }
}

pub fn map_kind(kind: TransactionKind) -> TransactionType {
    match kind {
        TransactionKind::Income => TransactionType::Income,
        TransactionKind::Expense => TransactionType::Expense,
    }
}

pub fn parse_kind(kind: TransactionType) -> TransactionKind {
    match kind {
        TransactionType::Income => TransactionKind::Income,
        TransactionType::Expense => TransactionKind::Expense,
    }
}

pub fn account_view(account: &Account) -> AccountView {
    AccountView {
        id: account.id,
        name: account.name.clone(),
        account_type: map_account_type(account.account_type),
        currency: map_currency(account.currency),
    }
}

pub fn transaction_view(tx: &Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        account_id: tx.account_id,
        date: tx.date,
        amount: tx.amount,
        description: tx.description.clone(),
        category: map_category(tx.category),
        transaction_type: map_kind(tx.kind),
    }
}

pub fn budget_view(budget: &Budget) -> BudgetView {
    BudgetView {
        id: budget.id,
        month: budget.month.clone(),
        category: map_category(budget.category),
        limit_amount: budget.limit_amount,
    }
}

pub fn statistics_view(stats: &AmountStatistics) -> ApiStatistics {
    ApiStatistics {
        count: stats.count,
        mean: stats.mean,
        median: stats.median,
        std: stats.std,
        min: stats.min,
        max: stats.max,
    }
}

pub fn category_summary_view(
    summary: &BTreeMap<Category, KindTotals>,
) -> BTreeMap<String, ApiKindTotals> {
    summary
        .iter()
        .map(|(category, totals)| {
            (
                category.as_str().to_string(),
                ApiKindTotals {
                    income: totals.income,
                    expense: totals.expense,
                },
            )
        })
        .collect()
}

/// History points are keyed by the kind label, predictions by
/// `predicted_<label>`.
pub fn forecast_view(forecast: &MonthlyForecast) -> Forecast {
    let label = forecast.kind.label();
    let predicted = format!("predicted_{label}");
    let points = |series: &[engine::MonthlyAmount], key: &str| -> Vec<MonthlyPoint> {
        series
            .iter()
            .map(|point| MonthlyPoint {
                month: point.month.to_string(),
                values: BTreeMap::from([(key.to_string(), point.amount)]),
            })
            .collect()
    };

    Forecast {
        history: points(&forecast.history, label),
        forecast: points(&forecast.forecast, &predicted),
    }
}
