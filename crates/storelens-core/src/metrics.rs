use std::collections::BTreeMap;

use storelens_model::{AnalysisError, Result, SaleRecord, StoreMetrics};

#[derive(Debug, Default, Clone, Copy)]
struct StoreAccumulator {
    records: usize,
    revenue: f64,
    rating_sum: f64,
    five_star: usize,
    shipping_percent_sum: f64,
}

impl StoreAccumulator {
    fn push(&mut self, record: &SaleRecord) {
        self.records += 1;
        self.revenue += record.total_sale;
        self.rating_sum += f64::from(record.rating);
        if record.rating == 5 {
            self.five_star += 1;
        }
        self.shipping_percent_sum += record.shipping_percent;
    }

    fn into_metrics(self, store: String) -> StoreMetrics {
        // Every group holds at least the record that created it.
        let count = self.records as f64;
        StoreMetrics {
            store,
            total_revenue: self.revenue,
            avg_sale: self.revenue / count,
            avg_rating: self.rating_sum / count,
            percent_five_star: self.five_star as f64 / count * 100.0,
            shipping_efficiency: 100.0 - self.shipping_percent_sum / count,
        }
    }
}

/// Group records by store and compute the five base metrics per store.
///
/// Output order is the order in which stores first appear in the record
/// list, which makes the aggregation deterministic for a given input.
pub fn store_metrics(records: &[SaleRecord]) -> Result<Vec<StoreMetrics>> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let mut order: Vec<&str> = Vec::new();
    let mut groups: BTreeMap<&str, StoreAccumulator> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.store.as_str()).or_insert_with(|| {
            order.push(record.store.as_str());
            StoreAccumulator::default()
        });
        entry.push(record);
    }
    Ok(order
        .into_iter()
        .map(|store| groups[store].into_metrics(store.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(store: &str, total: f64, rating: u8, shipping_percent: f64) -> SaleRecord {
        SaleRecord {
            store: store.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            price: total,
            shipping_cost: 0.0,
            rating,
            category: "Muebles".to_string(),
            installments: 1,
            product: "Mesa".to_string(),
            total_sale: total,
            shipping_percent,
        }
    }

    #[test]
    fn computes_the_five_metrics_per_store() {
        let records = vec![
            record("Store 1", 100.0, 5, 4.0),
            record("Store 1", 300.0, 3, 6.0),
            record("Store 2", 50.0, 4, 10.0),
        ];
        let metrics = store_metrics(&records).unwrap();
        assert_eq!(metrics.len(), 2);

        let first = &metrics[0];
        assert_eq!(first.store, "Store 1");
        assert_eq!(first.total_revenue, 400.0);
        assert_eq!(first.avg_sale, 200.0);
        assert_eq!(first.avg_rating, 4.0);
        assert_eq!(first.percent_five_star, 50.0);
        assert_eq!(first.shipping_efficiency, 95.0);

        let second = &metrics[1];
        assert_eq!(second.store, "Store 2");
        assert_eq!(second.percent_five_star, 0.0);
        assert_eq!(second.shipping_efficiency, 90.0);
    }

    #[test]
    fn preserves_first_appearance_order() {
        let records = vec![
            record("Store 3", 10.0, 1, 0.0),
            record("Store 1", 10.0, 1, 0.0),
            record("Store 3", 10.0, 1, 0.0),
            record("Store 2", 10.0, 1, 0.0),
        ];
        let metrics = store_metrics(&records).unwrap();
        let stores: Vec<&str> = metrics.iter().map(|m| m.store.as_str()).collect();
        assert_eq!(stores, vec!["Store 3", "Store 1", "Store 2"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(store_metrics(&[]), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn percent_five_star_stays_in_range() {
        let records = vec![
            record("Store 1", 10.0, 5, 0.0),
            record("Store 1", 10.0, 5, 0.0),
        ];
        let metrics = store_metrics(&records).unwrap();
        assert_eq!(metrics[0].percent_five_star, 100.0);
    }
}
