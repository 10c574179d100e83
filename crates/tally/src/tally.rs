//! Main Tally struct and public API.

use std::path::Path;

use tracing::{info, warn};

use crate::aggregate::{AggregatorConfig, AnalysisAssembler, DepartmentAggregator};
use crate::error::{Result, TallyError};
use crate::input::{Parser, ParserConfig, RawRow, RowSource};
use crate::schema::{OverallAnalysis, RunStatistics};
use crate::survey::{NormalizerConfig, RowNormalizer};

/// Configuration for a Tally analysis.
#[derive(Debug, Clone, Default)]
pub struct TallyConfig {
    /// Parser configuration, used by [`Tally::analyze`].
    pub parser: ParserConfig,
    /// Row normalization settings.
    pub normalizer: NormalizerConfig,
    /// Aggregation settings.
    pub aggregator: AggregatorConfig,
}

impl TallyConfig {
    /// Set the answer text that marks a skipped question.
    pub fn with_no_answer_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.normalizer.no_answer_sentinel = sentinel.into();
        self
    }

    /// Set the department used when a row has none.
    pub fn with_unknown_department(mut self, department: impl Into<String>) -> Self {
        self.normalizer.unknown_department = department.into();
        self
    }

    /// Set how many distinct free-text answers are kept per question.
    pub fn with_text_sample_limit(mut self, limit: usize) -> Self {
        self.aggregator.text_sample_limit = limit;
        self
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }
}

/// The survey analysis engine.
///
/// Holds configuration only. Every call starts from empty aggregator state
/// and either returns a complete [`OverallAnalysis`] or an error.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    config: TallyConfig,
}

impl Tally {
    /// Create a new Tally instance with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Tally instance with custom configuration.
    pub fn with_config(config: TallyConfig) -> Self {
        Self { config }
    }

    /// Analyze a CSV/TSV survey export.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<OverallAnalysis> {
        let path = path.as_ref();
        info!(path = %path.display(), "analyzing survey file");

        let parser = Parser::with_config(self.config.parser.clone());
        let (rows, mut source) = parser.open(path)?;
        let mut analysis = self.run(rows)?;

        source.row_count = analysis.statistics.rows_read;
        analysis.source = Some(source);
        Ok(analysis)
    }

    /// Analyze rows from any row source.
    ///
    /// The first `Err` from the source aborts the run and is returned as is.
    pub fn analyze_rows<I>(&self, rows: I) -> Result<OverallAnalysis>
    where
        I: IntoIterator<Item = Result<RawRow>>,
    {
        self.run(rows.into_iter())
    }

    /// Analyze rows that are already in memory.
    pub fn analyze_records<I>(&self, rows: I) -> Result<OverallAnalysis>
    where
        I: IntoIterator<Item = RawRow>,
    {
        self.run(rows.into_iter().map(Ok::<RawRow, TallyError>))
    }

    fn run(&self, rows: impl RowSource) -> Result<OverallAnalysis> {
        let normalizer = RowNormalizer::with_config(self.config.normalizer.clone());
        let mut aggregator = DepartmentAggregator::with_config(self.config.aggregator.clone());
        let mut statistics = RunStatistics::default();

        for (idx, row) in rows.enumerate() {
            let row = row?;
            statistics.rows_read += 1;

            match normalizer.normalize(&row, idx + 1) {
                Ok(response) => aggregator.add(response),
                Err(e) if e.is_recoverable() => {
                    warn!(row = idx + 1, error = %e, "skipping row");
                    statistics.rows_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if statistics.rows_read == 0 {
            return Err(TallyError::EmptySource("No data rows found".to_string()));
        }
        statistics.responses = aggregator.response_count();

        let summaries = aggregator.finish();
        let analysis = AnalysisAssembler::new().assemble(summaries, statistics, None);

        info!(
            rows = statistics.rows_read,
            skipped = statistics.rows_skipped,
            departments = analysis.department_count,
            "analysis complete"
        );
        Ok(analysis)
    }
}
