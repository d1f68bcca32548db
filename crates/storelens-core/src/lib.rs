//! Core computations for storelens: per-store metric aggregation, monthly
//! growth rates and the composite ranking.
//!
//! The stages are pure functions over the cleaned record list and run in
//! this order:
//!
//! 1. [`store_metrics`] — group records by store and compute the five base
//!    metrics.
//! 2. [`growth_rates`] — bucket revenue by (store, calendar month) and take
//!    the first-to-last percentage change per store.
//! 3. [`rank_stores`] — join growth into the metrics, min-max normalize
//!    every column and blend the normalized columns into a single score.

#![deny(unsafe_code)]

mod growth;
mod metrics;
mod ranking;

pub use growth::{MonthlySeries, growth_rates, monthly_revenue};
pub use metrics::store_metrics;
pub use ranking::rank_stores;
