//! Row sources: the raw row type and the CSV/TSV reader that yields it.

mod parser;
mod source;

pub use parser::{CsvRows, Parser, ParserConfig};
pub use source::{RawRow, RowSource, SourceMetadata};
