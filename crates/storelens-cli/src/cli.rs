//! CLI argument definitions for the storelens analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use storelens_model::DivisionPolicy;

#[derive(Parser)]
#[command(
    name = "storelens",
    version,
    about = "storelens - Rank retail stores from their sales exports",
    long_about = "Compute per-store sales metrics from CSV exports, rank the stores\n\
                  by a weighted composite score and render the exploratory chart set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis: metrics, ranking and the chart set.
    Analyze(AnalyzeArgs),

    /// Compute and print the store ranking without rendering charts.
    Rank(RankArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Store CSV files, one per store; the file at position N becomes "Store N".
    #[arg(value_name = "CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for rendered charts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "visualizations")]
    pub output_dir: PathBuf,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Write the ranking as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Behavior when a computation divides by zero (zero price, zero
    /// first-month revenue, zero-range metric column).
    #[arg(long = "division-policy", value_enum, default_value = "reject")]
    pub division_policy: DivisionPolicyArg,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Store CSV files, one per store; the file at position N becomes "Store N".
    #[arg(value_name = "CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Behavior when a computation divides by zero.
    #[arg(long = "division-policy", value_enum, default_value = "reject")]
    pub division_policy: DivisionPolicyArg,
}

/// CLI division policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DivisionPolicyArg {
    /// Abort the run with an error.
    Reject,
    /// Substitute zero for the undefined quotient.
    Zero,
    /// Let NaN flow through the computation.
    Propagate,
}

impl From<DivisionPolicyArg> for DivisionPolicy {
    fn from(arg: DivisionPolicyArg) -> Self {
        match arg {
            DivisionPolicyArg::Reject => Self::Reject,
            DivisionPolicyArg::Zero => Self::Zero,
            DivisionPolicyArg::Propagate => Self::Propagate,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
