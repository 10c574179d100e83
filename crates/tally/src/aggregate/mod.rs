//! Department aggregation and overall assembly.

mod aggregator;
mod assembler;

pub use aggregator::{AggregatorConfig, DepartmentAggregator};
pub use assembler::AnalysisAssembler;
