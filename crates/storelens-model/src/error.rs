use thiserror::Error;

/// Failure classes for the analysis pipeline.
///
/// Every failure is fatal for the run: the pipeline is a single-pass batch
/// with no retries and no partial-output recovery. Variants carry enough
/// context (file, store, column) to attribute the failure.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid purchase date {value:?}: expected DD/MM/YYYY")]
    InvalidDate { value: String },

    #[error("rating {value} is outside the 1-5 scale")]
    InvalidRating { value: u8 },

    #[error("price is zero: shipping percentage is undefined")]
    ZeroPrice,

    #[error("store {store:?} has fewer than two months of sales history")]
    InsufficientHistory { store: String },

    #[error("store {store:?} has zero revenue in its first month: growth rate is undefined")]
    ZeroBaseline { store: String },

    #[error("metric column {column:?} has zero range across stores: normalization is undefined")]
    DegenerateColumn { column: &'static str },

    #[error("no sale records to analyze")]
    EmptyInput,

    #[error("no growth rate available for store {store:?}")]
    UnknownStore { store: String },

    #[error("ranking weights sum to {sum}, expected 1.0")]
    InvalidWeights { sum: f64 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
