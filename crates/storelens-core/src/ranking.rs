use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use storelens_model::{
    AnalysisError, DivisionPolicy, NormalizedMetrics, RankingRow, RankingWeights, Result,
    StoreMetrics,
};

/// Merge growth into the metrics, normalize every column and rank the
/// stores by their weighted composite score, highest first.
///
/// Normalization is relative to the current batch: each column is rescaled
/// against its own min and max across the given stores, so the output is
/// not comparable across different store sets. Zero-range columns are
/// resolved by `policy`. The sort is stable, so score ties keep the
/// aggregation (first-appearance) order — an implementation detail, not a
/// contract.
pub fn rank_stores(
    metrics: &[StoreMetrics],
    growth: &BTreeMap<String, f64>,
    weights: &RankingWeights,
    policy: DivisionPolicy,
) -> Result<Vec<RankingRow>> {
    if metrics.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let growth_column: Vec<f64> = metrics
        .iter()
        .map(|m| {
            growth
                .get(&m.store)
                .copied()
                .ok_or_else(|| AnalysisError::UnknownStore {
                    store: m.store.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let revenue = normalize_column(metrics, |m| m.total_revenue, "total_revenue", policy)?;
    let avg_sale = normalize_column(metrics, |m| m.avg_sale, "avg_sale", policy)?;
    let avg_rating = normalize_column(metrics, |m| m.avg_rating, "avg_rating", policy)?;
    let five_star = normalize_column(metrics, |m| m.percent_five_star, "percent_five_star", policy)?;
    let shipping = normalize_column(
        metrics,
        |m| m.shipping_efficiency,
        "shipping_efficiency",
        policy,
    )?;
    let growth_norm = min_max_normalize(&growth_column, "growth_rate", policy)?;

    let mut rows: Vec<RankingRow> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let normalized = NormalizedMetrics {
                total_revenue: revenue[i],
                avg_sale: avg_sale[i],
                avg_rating: avg_rating[i],
                percent_five_star: five_star[i],
                shipping_efficiency: shipping[i],
                growth_rate: growth_norm[i],
            };
            RankingRow {
                store: m.store.clone(),
                metrics: m.clone(),
                growth_rate: growth_column[i],
                normalized,
                final_score: final_score(&normalized, weights),
            }
        })
        .collect();

    rows.sort_by(|a, b| descending_score(a.final_score, b.final_score));
    debug!(stores = rows.len(), "ranking computed");
    Ok(rows)
}

/// Weighted blend of the four normalized metric groups.
fn final_score(n: &NormalizedMetrics, w: &RankingWeights) -> f64 {
    w.revenue * (n.total_revenue + n.avg_sale) / 2.0
        + w.satisfaction * (n.avg_rating + n.percent_five_star) / 2.0
        + w.shipping * n.shipping_efficiency
        + w.growth * n.growth_rate
}

fn normalize_column(
    metrics: &[StoreMetrics],
    select: impl Fn(&StoreMetrics) -> f64,
    column: &'static str,
    policy: DivisionPolicy,
) -> Result<Vec<f64>> {
    let values: Vec<f64> = metrics.iter().map(select).collect();
    min_max_normalize(&values, column, policy)
}

/// Rescale a column to `[0, 1]` against its own min and max.
fn min_max_normalize(
    values: &[f64],
    column: &'static str,
    policy: DivisionPolicy,
) -> Result<Vec<f64>> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        // All stores tied: the rescale divides by zero.
        let fill = policy.undefined(|| AnalysisError::DegenerateColumn { column })?;
        return Ok(vec![fill; values.len()]);
    }
    Ok(values.iter().map(|value| (value - min) / range).collect())
}

/// Descending by score; NaN sorts last so poisoned rows sink to the bottom.
fn descending_score(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(store: &str, revenue: f64) -> StoreMetrics {
        StoreMetrics {
            store: store.to_string(),
            total_revenue: revenue,
            avg_sale: revenue / 10.0,
            avg_rating: 4.0,
            percent_five_star: 40.0,
            shipping_efficiency: 95.0,
        }
    }

    fn growth_of(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(store, rate)| ((*store).to_string(), *rate))
            .collect()
    }

    #[test]
    fn normalized_columns_span_zero_to_one() {
        let metrics = vec![metric("Store 1", 100.0), metric("Store 2", 300.0)];
        let growth = growth_of(&[("Store 1", 10.0), ("Store 2", 20.0)]);
        let rows = rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Zero,
        )
        .unwrap();

        let norms: Vec<f64> = rows.iter().map(|r| r.normalized.total_revenue).collect();
        assert!(norms.contains(&0.0));
        assert!(norms.contains(&1.0));
    }

    #[test]
    fn missing_growth_entry_is_an_error() {
        let metrics = vec![metric("Store 1", 100.0), metric("Store 2", 300.0)];
        let growth = growth_of(&[("Store 1", 10.0)]);
        let error = rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Zero,
        )
        .unwrap_err();
        assert!(matches!(
            error,
            AnalysisError::UnknownStore { store } if store == "Store 2"
        ));
    }

    #[test]
    fn degenerate_column_follows_the_policy() {
        // Identical stores: every column has zero range.
        let metrics = vec![metric("Store 1", 100.0), metric("Store 2", 100.0)];
        let growth = growth_of(&[("Store 1", 10.0), ("Store 2", 10.0)]);

        let reject = rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Reject,
        );
        assert!(matches!(reject, Err(AnalysisError::DegenerateColumn { .. })));

        let zeroed = rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Zero,
        )
        .unwrap();
        assert!(zeroed.iter().all(|row| row.final_score == 0.0));

        let nan = rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Propagate,
        )
        .unwrap();
        assert!(nan.iter().all(|row| row.final_score.is_nan()));
    }

    #[test]
    fn nan_scores_sort_last() {
        assert_eq!(descending_score(f64::NAN, 0.5), Ordering::Greater);
        assert_eq!(descending_score(0.5, f64::NAN), Ordering::Less);
        assert_eq!(descending_score(0.9, 0.5), Ordering::Less);
    }
}
