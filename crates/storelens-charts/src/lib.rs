//! Static chart rendering for the storelens pipeline.
//!
//! Seven independent renderers, each consuming the cleaned records (or a
//! metrics view), drawing one chart with the [`plotters`] bitmap backend
//! and writing one PNG under the output directory. Renderers read, never
//! mutate; file writes are not atomic, so a failure partway through
//! [`render_all`] leaves the earlier images on disk.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use storelens_model::SaleRecord;

mod category;
mod correlation;
mod ratings;
mod revenue;
mod scatter;
mod stats;
mod theme;
mod trend;

pub use category::sales_by_category;
pub use correlation::metric_correlation;
pub use ratings::rating_distribution;
pub use revenue::revenue_by_store;
pub use scatter::{rating_vs_revenue, rating_vs_revenue_scaled};
pub use stats::{pearson, quartiles};
pub use theme::ChartTheme;
pub use trend::sales_over_time;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// Render the full chart set into `output_dir`, creating it if needed.
///
/// Returns the written paths in render order. Existing images are
/// overwritten; a failure aborts the remaining charts but does not roll
/// back the ones already written.
pub fn render_all(
    records: &[SaleRecord],
    output_dir: &Path,
    theme: &ChartTheme,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let charts = [
        revenue_by_store(records, output_dir, theme)?,
        sales_by_category(records, output_dir, theme)?,
        rating_vs_revenue(records, output_dir, theme)?,
        rating_vs_revenue_scaled(records, output_dir, theme)?,
        sales_over_time(records, output_dir, theme)?,
        rating_distribution(records, output_dir, theme)?,
        metric_correlation(records, output_dir, theme)?,
    ];
    for path in &charts {
        info!(path = %path.display(), "chart written");
    }
    Ok(charts.into())
}
