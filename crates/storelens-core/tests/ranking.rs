//! End-to-end tests over the metric -> growth -> ranking stages.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use storelens_core::{growth_rates, rank_stores, store_metrics};
use storelens_model::{DivisionPolicy, RankingWeights, SaleRecord};

fn sale(store: &str, year: i32, month: u32, total: f64, rating: u8) -> SaleRecord {
    SaleRecord {
        store: store.to_string(),
        purchase_date: NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
        price: total,
        shipping_cost: 0.0,
        rating,
        category: "Muebles".to_string(),
        installments: 1,
        product: "Mesa".to_string(),
        total_sale: total,
        shipping_percent: 2.0,
    }
}

/// Two stores identical in ratings, shipping and growth but with Store 1
/// doubling Store 2's revenue: the revenue term dominates and Store 1
/// ranks first with normalized revenue 1 against 0.
#[test]
fn higher_revenue_wins_when_everything_else_ties() {
    let mut records = Vec::new();
    // Store 1: 1,000,000 over two months; Store 2: 500,000 with the same
    // month-over-month shape, ratings and shipping.
    records.push(sale("Store 1", 2021, 1, 400_000.0, 4));
    records.push(sale("Store 1", 2021, 2, 600_000.0, 5));
    records.push(sale("Store 2", 2021, 1, 200_000.0, 4));
    records.push(sale("Store 2", 2021, 2, 300_000.0, 5));

    let metrics = store_metrics(&records).unwrap();
    let growth = growth_rates(&records, DivisionPolicy::Reject).unwrap();
    // Tied columns (ratings, shipping, growth) zero out under this policy;
    // only the revenue group differentiates.
    let rows = rank_stores(
        &metrics,
        &growth,
        &RankingWeights::default(),
        DivisionPolicy::Zero,
    )
    .unwrap();

    assert_eq!(rows[0].store, "Store 1");
    assert_eq!(rows[0].normalized.total_revenue, 1.0);
    assert_eq!(rows[1].normalized.total_revenue, 0.0);
    assert!(rows[0].final_score > rows[1].final_score);
}

#[test]
fn ranking_is_sorted_non_increasing() {
    let mut records = Vec::new();
    let revenues = [3_000.0, 9_000.0, 1_000.0, 5_000.0];
    let ratings = [3u8, 5, 2, 4];
    for (i, (&revenue, &rating)) in revenues.iter().zip(&ratings).enumerate() {
        let store = format!("Store {}", i + 1);
        records.push(sale(&store, 2021, 1, revenue, rating));
        records.push(sale(&store, 2021, 2, revenue * 1.5, rating));
    }

    let metrics = store_metrics(&records).unwrap();
    let growth = growth_rates(&records, DivisionPolicy::Reject).unwrap();
    let rows = rank_stores(
        &metrics,
        &growth,
        &RankingWeights::default(),
        DivisionPolicy::Zero,
    )
    .unwrap();

    assert_eq!(rows.len(), 4);
    for pair in rows.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[test]
fn scores_stay_within_the_unit_interval() {
    let mut records = Vec::new();
    for (i, revenue) in [800.0, 2_500.0, 4_000.0].iter().enumerate() {
        let store = format!("Store {}", i + 1);
        records.push(sale(&store, 2021, 1, *revenue, (i as u8 % 5) + 1));
        records.push(sale(&store, 2021, 3, revenue * 2.0, 5));
    }

    let metrics = store_metrics(&records).unwrap();
    let growth = growth_rates(&records, DivisionPolicy::Reject).unwrap();
    let rows = rank_stores(
        &metrics,
        &growth,
        &RankingWeights::default(),
        DivisionPolicy::Zero,
    )
    .unwrap();

    for row in &rows {
        assert!((0.0..=1.0).contains(&row.final_score), "{row:?}");
    }
}

#[test]
fn reruns_on_identical_input_are_identical() {
    let mut records = Vec::new();
    for (i, revenue) in [800.0, 2_500.0, 4_000.0, 1_200.0].iter().enumerate() {
        let store = format!("Store {}", i + 1);
        records.push(sale(&store, 2021, 1, *revenue, 4));
        records.push(sale(&store, 2021, 2, revenue * 1.1, 5));
    }

    let run = |records: &[SaleRecord]| -> Vec<(String, f64)> {
        let metrics = store_metrics(records).unwrap();
        let growth = growth_rates(records, DivisionPolicy::Reject).unwrap();
        rank_stores(
            &metrics,
            &growth,
            &RankingWeights::default(),
            DivisionPolicy::Zero,
        )
        .unwrap()
        .into_iter()
        .map(|row| (row.store, row.final_score))
        .collect()
    };

    assert_eq!(run(&records), run(&records));
}

#[test]
fn growth_join_matches_aggregation_output() {
    let records = vec![
        sale("Store 1", 2021, 1, 100.0, 4),
        sale("Store 1", 2021, 2, 150.0, 4),
        sale("Store 2", 2021, 1, 100.0, 4),
        sale("Store 2", 2021, 2, 300.0, 4),
    ];
    let metrics = store_metrics(&records).unwrap();
    let growth: BTreeMap<String, f64> = growth_rates(&records, DivisionPolicy::Reject).unwrap();

    assert_eq!(growth["Store 1"], 50.0);
    assert_eq!(growth["Store 2"], 200.0);

    let rows = rank_stores(
        &metrics,
        &growth,
        &RankingWeights::default(),
        DivisionPolicy::Zero,
    )
    .unwrap();
    let store2 = rows.iter().find(|r| r.store == "Store 2").unwrap();
    assert_eq!(store2.growth_rate, 200.0);
    assert_eq!(store2.normalized.growth_rate, 1.0);
}
