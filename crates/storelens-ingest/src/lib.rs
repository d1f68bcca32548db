//! CSV ingestion for the storelens pipeline.
//!
//! Two stages live here, in the order they run:
//!
//! 1. **Loader**: read one CSV per store, label every row with its store
//!    (`"Store {i}"` for the file at 1-based position `i`) and concatenate
//!    everything into a single record list.
//! 2. **Cleaner**: parse purchase dates, validate ratings and derive the
//!    `total_sale` and `shipping_percent` columns.
//!
//! Both stages are all-or-nothing: a missing file, a malformed row or an
//! unparseable date aborts the whole run.

#![deny(unsafe_code)]

mod clean;
mod loader;

pub use clean::clean_sales;
pub use loader::{load_sales, store_label};
