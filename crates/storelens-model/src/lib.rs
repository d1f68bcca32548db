//! Data model for the storelens sales analysis pipeline.
//!
//! Everything downstream (ingest, core computations, chart rendering, CLI)
//! speaks in terms of these types. The crate is deliberately free of I/O:
//! it defines records, per-store metrics, ranking rows, analysis options
//! and the error taxonomy shared across the workspace.

#![deny(unsafe_code)]

mod error;
mod options;
mod record;

pub use error::{AnalysisError, Result};
pub use options::{AnalysisOptions, DivisionPolicy, RankingWeights};
pub use record::{NormalizedMetrics, RankingRow, RawSale, SaleRecord, StoreMetrics};
