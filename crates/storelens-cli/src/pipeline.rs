//! The analysis pipeline with explicit stages.
//!
//! Stages run strictly in order, each consuming the previous stage's
//! typed output:
//!
//! 1. **Load**: read and label the per-store CSV files
//! 2. **Clean**: parse dates, derive sale totals and shipping percentages
//! 3. **Aggregate**: per-store metrics and monthly growth rates
//! 4. **Rank**: normalize, blend and sort
//! 5. **Render**: write the chart set (optional)
//!
//! Everything is synchronous and single-pass; a failure at any stage
//! aborts the run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use storelens_charts::{ChartTheme, render_all};
use storelens_core::{growth_rates, rank_stores, store_metrics};
use storelens_ingest::{clean_sales, load_sales};
use storelens_model::{AnalysisOptions, RankingRow};

/// Inputs and switches for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Store CSV files in store-number order.
    pub inputs: Vec<PathBuf>,
    /// Directory receiving the rendered charts.
    pub output_dir: PathBuf,
    /// Render the chart set after ranking.
    pub render_charts: bool,
    pub options: AnalysisOptions,
}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Final ranking, highest score first.
    pub ranking: Vec<RankingRow>,
    /// Number of cleaned sale records.
    pub records: usize,
    /// Chart files written, in render order.
    pub charts: Vec<PathBuf>,
}

/// Run the whole pipeline per `config`.
pub fn run(config: &PipelineConfig) -> Result<AnalysisOutcome> {
    let start = Instant::now();

    let load_span = info_span!("load", files = config.inputs.len());
    let raw = load_span.in_scope(|| load_sales(&config.inputs))?;
    info!(records = raw.len(), "loaded input files");

    let policy = config.options.division_policy;
    let records = info_span!("clean")
        .in_scope(|| clean_sales(raw, policy))
        .context("clean sales records")?;

    let aggregate_span = info_span!("aggregate");
    let (metrics, growth) = aggregate_span.in_scope(|| {
        let metrics = store_metrics(&records)?;
        let growth = growth_rates(&records, policy)?;
        Ok::<_, storelens_model::AnalysisError>((metrics, growth))
    })?;
    info!(stores = metrics.len(), "aggregated store metrics");

    let ranking = info_span!("rank")
        .in_scope(|| rank_stores(&metrics, &growth, &config.options.weights, policy))
        .context("rank stores")?;

    let charts = if config.render_charts {
        let render_span = info_span!("render", output_dir = %config.output_dir.display());
        render_span
            .in_scope(|| render_all(&records, &config.output_dir, &ChartTheme::default()))
            .context("render charts")?
    } else {
        Vec::new()
    };

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        stores = ranking.len(),
        charts = charts.len(),
        "analysis complete"
    );
    Ok(AnalysisOutcome {
        ranking,
        records: records.len(),
        charts,
    })
}
