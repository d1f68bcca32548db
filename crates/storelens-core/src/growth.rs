use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::warn;

use storelens_model::{AnalysisError, DivisionPolicy, Result, SaleRecord};

/// Revenue per calendar month for one store, in chronological order.
///
/// Keys are `(year, month)`; only months with at least one sale appear.
pub type MonthlySeries = BTreeMap<(i32, u32), f64>;

/// Sum `total_sale` into (store, calendar month) buckets.
pub fn monthly_revenue(records: &[SaleRecord]) -> BTreeMap<String, MonthlySeries> {
    let mut series: BTreeMap<String, MonthlySeries> = BTreeMap::new();
    for record in records {
        let month = (record.purchase_date.year(), record.purchase_date.month());
        *series
            .entry(record.store.clone())
            .or_default()
            .entry(month)
            .or_insert(0.0) += record.total_sale;
    }
    series
}

/// Growth rate per store: percentage change between the chronologically
/// first and last *populated* month.
///
/// Months with no sales are skipped, not filled; when a store's series has
/// calendar gaps a warning is emitted since the first-to-last comparison
/// then spans missing months. A store with a single populated month is an
/// error — growth is unknowable, never silently zero. A zero first-month
/// total is resolved by `policy`.
pub fn growth_rates(
    records: &[SaleRecord],
    policy: DivisionPolicy,
) -> Result<BTreeMap<String, f64>> {
    let mut rates = BTreeMap::new();
    for (store, series) in monthly_revenue(records) {
        if series.len() < 2 {
            return Err(AnalysisError::InsufficientHistory { store });
        }
        if has_calendar_gaps(&series) {
            warn!(
                store = %store,
                months = series.len(),
                "monthly series has calendar gaps; growth compares first and last populated months"
            );
        }
        // BTreeMap iteration is chronological for (year, month) keys.
        let first = *series.values().next().unwrap_or(&0.0);
        let last = *series.values().next_back().unwrap_or(&0.0);
        let rate = if first == 0.0 {
            policy.undefined(|| AnalysisError::ZeroBaseline {
                store: store.clone(),
            })?
        } else {
            (last - first) / first * 100.0
        };
        rates.insert(store, rate);
    }
    Ok(rates)
}

fn has_calendar_gaps(series: &MonthlySeries) -> bool {
    let months: Vec<(i32, u32)> = series.keys().copied().collect();
    months.windows(2).any(|pair| next_month(pair[0]) != pair[1])
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
