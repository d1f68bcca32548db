//! Subcommand implementations.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};

use storelens_cli::pipeline::{self, PipelineConfig};
use storelens_cli::summary::{print_ranking, print_summary};
use storelens_model::AnalysisOptions;

use crate::cli::{AnalyzeArgs, RankArgs};

/// Run the full analysis: metrics, ranking, optional charts and JSON export.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let config = PipelineConfig {
        inputs: args.inputs.clone(),
        output_dir: args.output_dir.clone(),
        render_charts: !args.no_charts,
        options: AnalysisOptions {
            division_policy: args.division_policy.into(),
            ..AnalysisOptions::default()
        },
    };
    let outcome = pipeline::run(&config)?;
    print_summary(&outcome);

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("create json export: {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &outcome.ranking)
            .context("serialize ranking to json")?;
        println!();
        println!("Ranking written to {}", path.display());
    }
    Ok(())
}

/// Compute and print the ranking without touching the filesystem beyond
/// the input files.
pub fn run_rank(args: &RankArgs) -> Result<()> {
    let config = PipelineConfig {
        inputs: args.inputs.clone(),
        output_dir: std::path::PathBuf::new(),
        render_charts: false,
        options: AnalysisOptions {
            division_policy: args.division_policy.into(),
            ..AnalysisOptions::default()
        },
    };
    let outcome = pipeline::run(&config)?;
    print_ranking(&outcome.ranking);
    Ok(())
}
