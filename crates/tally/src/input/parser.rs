//! CSV/TSV row reader with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{RawRow, SourceMetadata};
use crate::error::{Result, TallyError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration. The first record is always the header row, since
/// survey columns are identified by name.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

impl ParserConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

/// Reads survey exports into a lazy sequence of [`RawRow`]s.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Open a file and return its rows along with source metadata.
    ///
    /// The whole file is read up front for hashing; rows are decoded lazily,
    /// so a malformed record surfaces as an `Err` item mid-stream.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<(CsvRows, SourceMetadata)> {
        let path = path.as_ref();
        let unavailable = |source| TallyError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(unavailable)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(unavailable)?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };
        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let rows = self.rows_with_delimiter(contents, delimiter)?;
        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            rows.headers.len(),
        );

        Ok((rows, metadata))
    }

    /// Decode rows from in-memory bytes, auto-detecting the delimiter unless
    /// one is configured.
    pub fn rows_from_bytes(&self, bytes: impl Into<Vec<u8>>) -> Result<CsvRows> {
        let bytes = bytes.into();
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&bytes)?,
        };
        self.rows_with_delimiter(bytes, delimiter)
    }

    fn rows_with_delimiter(&self, bytes: Vec<u8>, delimiter: u8) -> Result<CsvRows> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(Cursor::new(bytes));

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(TallyError::EmptySource("No columns found".to_string()));
        }

        Ok(CsvRows {
            records: reader.into_records(),
            headers,
            max_rows: self.config.max_rows,
            yielded: 0,
        })
    }
}

/// Lazy iterator over the data rows of a delimited file.
pub struct CsvRows {
    records: csv::StringRecordsIntoIter<Cursor<Vec<u8>>>,
    headers: Vec<String>,
    max_rows: Option<usize>,
    yielded: usize,
}

impl CsvRows {
    /// Column headers. Cells past the last header get `column_N` names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for CsvRows {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_rows.is_some_and(|max| self.yielded >= max) {
            return None;
        }

        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        self.yielded += 1;

        // Short records leave trailing columns absent rather than empty.
        let row = record
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let column = self
                    .headers
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("column_{}", i + 1));
                (column, value.to_string())
            })
            .collect();

        Some(Ok(row))
    }
}

/// Detect the delimiter by counting candidates over the first few lines.
/// A delimiter that appears the same number of times on every line wins.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let lines: Vec<String> = BufReader::new(bytes)
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TallyError::EmptySource("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Tab gets a slight bonus as it rarely shows up inside free text
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, ignoring quoted sections.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut in_quotes = false;

    line.chars()
        .filter(|&ch| {
            if ch == '"' {
                in_quotes = !in_quotes;
            }
            ch == delim_char && !in_quotes
        })
        .count()
}
