//! Sale records and the derived per-store metric rows.

use chrono::NaiveDate;

/// One row as it appears in a store's CSV export.
///
/// Field names follow the source system's Spanish headers via serde
/// renames; the store label is not part of the file and is assigned by the
/// loader from the file's position in the input list.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawSale {
    #[serde(rename = "Fecha de Compra")]
    pub purchase_date: String,
    #[serde(rename = "Precio")]
    pub price: f64,
    #[serde(rename = "Costo de envío")]
    pub shipping_cost: f64,
    #[serde(rename = "Calificación")]
    pub rating: u8,
    #[serde(rename = "Categoría del Producto")]
    pub category: String,
    #[serde(rename = "Cantidad de cuotas")]
    pub installments: u32,
    #[serde(rename = "Producto", default)]
    pub product: String,
    #[serde(rename = "Vendedor", default)]
    pub seller: String,
    /// Assigned by the loader, never read from the file.
    #[serde(skip)]
    pub store: String,
}

/// A cleaned, immutable sale record with its derived columns.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SaleRecord {
    pub store: String,
    pub purchase_date: NaiveDate,
    pub price: f64,
    pub shipping_cost: f64,
    pub rating: u8,
    pub category: String,
    pub installments: u32,
    pub product: String,
    /// `price + shipping_cost`.
    pub total_sale: f64,
    /// `shipping_cost / price * 100`; zero-price handling is configurable.
    pub shipping_percent: f64,
}

/// Aggregated metrics for one store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StoreMetrics {
    pub store: String,
    /// Sum of `total_sale` over the store's records.
    pub total_revenue: f64,
    /// Mean of `total_sale`.
    pub avg_sale: f64,
    /// Mean rating on the 1-5 scale.
    pub avg_rating: f64,
    /// Share of five-star ratings, in percent.
    pub percent_five_star: f64,
    /// `100 - mean(shipping_percent)`.
    pub shipping_efficiency: f64,
}

/// Per-store metrics after column-wise min-max normalization.
///
/// Each field is that store's metric rescaled to `[0, 1]` against the
/// minimum and maximum observed across the current batch of stores. The
/// values are relative to the batch and meaningless across different
/// store sets.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NormalizedMetrics {
    pub total_revenue: f64,
    pub avg_sale: f64,
    pub avg_rating: f64,
    pub percent_five_star: f64,
    pub shipping_efficiency: f64,
    pub growth_rate: f64,
}

/// One row of the final ranking: raw metrics, their normalized values and
/// the weighted composite score.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankingRow {
    pub store: String,
    pub metrics: StoreMetrics,
    /// Growth rate in percent between the store's first and last
    /// populated month.
    pub growth_rate: f64,
    pub normalized: NormalizedMetrics,
    pub final_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_row_serializes_with_nested_metrics() {
        let row = RankingRow {
            store: "Store 1".to_string(),
            metrics: StoreMetrics {
                store: "Store 1".to_string(),
                total_revenue: 1000.0,
                avg_sale: 250.0,
                avg_rating: 4.5,
                percent_five_star: 50.0,
                shipping_efficiency: 95.0,
            },
            growth_rate: 20.0,
            normalized: NormalizedMetrics {
                total_revenue: 1.0,
                avg_sale: 1.0,
                avg_rating: 1.0,
                percent_five_star: 1.0,
                shipping_efficiency: 1.0,
                growth_rate: 1.0,
            },
            final_score: 1.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["store"], "Store 1");
        assert_eq!(json["metrics"]["total_revenue"], 1000.0);
        assert_eq!(json["normalized"]["growth_rate"], 1.0);
        assert_eq!(json["final_score"], 1.0);
    }
}
