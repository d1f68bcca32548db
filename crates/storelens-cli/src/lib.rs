//! CLI library components for the storelens sales analyzer.

pub mod logging;
pub mod pipeline;
pub mod summary;
