//! Aggregate analytics over a set of transactions.
//!
//! Every function here is pure: callers read the transactions (usually through
//! [`crate::TransactionManager::get_filtered_transactions`]) and pass them in.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{Category, EngineError, ResultEngine, Transaction, TransactionKind};

/// Descriptive statistics of transaction amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation. `None` below two samples.
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

pub fn transaction_amount_statistics(
    transactions: &[Transaction],
) -> ResultEngine<AmountStatistics> {
    if transactions.is_empty() {
        return Err(EngineError::EmptyInput(
            "no transactions match the filter".to_string(),
        ));
    }

    let mut amounts: Vec<f64> = transactions.iter().map(|tx| tx.amount).collect();
    amounts.sort_by(f64::total_cmp);

    let count = amounts.len();
    let n = count as f64;
    let mean = amounts.iter().sum::<f64>() / n;
    let mid = count / 2;
    let median = if count % 2 == 0 {
        (amounts[mid - 1] + amounts[mid]) / 2.0
    } else {
        amounts[mid]
    };
    let std = (count > 1).then(|| {
        let squares: f64 = amounts.iter().map(|a| (a - mean).powi(2)).sum();
        (squares / (n - 1.0)).sqrt()
    });

    Ok(AmountStatistics {
        count,
        mean,
        median,
        std,
        min: amounts[0],
        max: amounts[count - 1],
    })
}

/// Income and expense totals of one category.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KindTotals {
    pub income: f64,
    pub expense: f64,
}

/// Sums amounts per category and kind.
///
/// Only categories present in `transactions` appear in the result.
pub fn transaction_category_summary(transactions: &[Transaction]) -> BTreeMap<Category, KindTotals> {
    let mut summary: BTreeMap<Category, KindTotals> = BTreeMap::new();
    for tx in transactions {
        let totals = summary.entry(tx.category).or_default();
        match tx.kind {
            TransactionKind::Income => totals.income += tx.amount,
            TransactionKind::Expense => totals.expense += tx.amount,
        }
    }
    summary
}

/// A calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    /// 1 to 12.
    pub month: u32,
}

impl YearMonth {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month `months` after this one.
    pub fn plus_months(self, months: i64) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + months;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The total of one month, observed or predicted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthlyAmount {
    pub month: YearMonth,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyForecast {
    /// Kind the amounts belong to.
    pub kind: TransactionKind,
    pub history: Vec<MonthlyAmount>,
    pub forecast: Vec<MonthlyAmount>,
}

/// Fits a straight line through the monthly totals and extends it.
///
/// The totals are indexed 0, 1, 2, ... in chronological order, skipping
/// months without transactions, and predicted at the following indices. The
/// labels of predicted months run on from the last observed month.
///
/// `transactions` is not filtered here: `kind` only labels the series.
pub fn monthly_amount_forecast_linear(
    transactions: &[Transaction],
    kind: TransactionKind,
    months_to_predict: i64,
) -> ResultEngine<MonthlyForecast> {
    if months_to_predict <= 0 {
        return Err(EngineError::InvalidInput(
            "months_to_predict must be > 0".to_string(),
        ));
    }

    let mut buckets: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for tx in transactions {
        *buckets.entry(YearMonth::from_date(tx.date)).or_default() += tx.amount;
    }
    let history: Vec<MonthlyAmount> = buckets
        .into_iter()
        .map(|(month, amount)| MonthlyAmount { month, amount })
        .collect();

    let Some(last) = history.last().map(|point| point.month) else {
        return Ok(MonthlyForecast {
            kind,
            history,
            forecast: Vec::new(),
        });
    };

    let totals: Vec<f64> = history.iter().map(|point| point.amount).collect();
    let (intercept, slope) = least_squares(&totals);
    let offset = history.len() as f64;
    let forecast = (1..=months_to_predict)
        .map(|step| MonthlyAmount {
            month: last.plus_months(step),
            amount: intercept + slope * (offset + (step - 1) as f64),
        })
        .collect();

    Ok(MonthlyForecast {
        kind,
        history,
        forecast,
    })
}

/// Ordinary least squares of `ys` against their indices.
///
/// Returns `(intercept, slope)`. The slope is 0 for a single point.
fn least_squares(ys: &[f64]) -> (f64, f64) {
    let n = ys.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }
    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    (mean_y - slope * mean_x, slope)
}
