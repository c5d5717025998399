//! Comma separated table reader
//!
//! Format rules:
//! - Lines are split on `'\n'`; the first line is the header.
//! - Fields are split on `','` with no quoting.
//! - A line holding a single empty field (blank line) is skipped.
//! - Every other line must have exactly as many fields as the header.
//! - Fields that parse as `i32` once surrounding whitespace is ignored become
//!   [`CsvValue::Int`]; the rest stay text, untrimmed.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::resources::ResourceLoader;

/// Field delimiter
const DELIMITER: char = ',';

/// Single table cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CsvValue {
    Int(i32),
    Text(String),
}

impl CsvValue {
    fn parse(field: &str) -> Self {
        // CRLF files leave '\r' on the last field
        field
            .trim()
            .parse::<i32>()
            .map_or_else(|_| CsvValue::Text(field.to_string()), CsvValue::Int)
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            CsvValue::Int(v) => Some(*v),
            CsvValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CsvValue::Int(_) => None,
            CsvValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CsvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvValue::Int(v) => write!(f, "{v}"),
            CsvValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One table row keyed by header name
pub type CsvRow = FxHashMap<String, CsvValue>;

/// Errors from loading or parsing a table
#[derive(Debug)]
pub enum CsvError {
    /// A value line does not have as many fields as the header
    MissingValues {
        /// 1-based line number in the resource
        line: usize,
        /// Header field count
        expected: usize,
        /// Field count found on the line
        found: usize,
    },
    /// No resource with this name exists
    ResourceNotFound { name: String },
    /// The resource exists but could not be read
    Io(std::io::Error),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::MissingValues {
                line,
                expected,
                found,
            } => write!(
                f,
                "Header columns don't match values in line {line} ({expected}/{found})"
            ),
            CsvError::ResourceNotFound { name } => write!(f, "Resource not found: {name}"),
            CsvError::Io(e) => write!(f, "Failed to read resource: {e}"),
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        CsvError::Io(e)
    }
}

/// Parse table text into rows.
///
/// Text with no value lines (zero or one line) yields no rows.
///
/// # Errors
/// [`CsvError::MissingValues`] on the first line whose field count differs
/// from the header's.
pub fn read_csv_str(text: &str) -> Result<Vec<CsvRow>, CsvError> {
    let lines: Vec<&str> = text.split('\n').collect();

    if lines.len() <= 1 {
        return Ok(Vec::new());
    }

    let header: Vec<&str> = lines[0].split(DELIMITER).collect();
    let mut rows = Vec::with_capacity(lines.len() - 1);

    for (i, line) in lines.iter().enumerate().skip(1) {
        let values: Vec<&str> = line.split(DELIMITER).collect();

        // Skip empty lines
        if values.len() == 1 && values[0].is_empty() {
            continue;
        }

        if values.len() != header.len() {
            return Err(CsvError::MissingValues {
                line: i + 1,
                expected: header.len(),
                found: values.len(),
            });
        }

        let row: CsvRow = header
            .iter()
            .zip(values)
            .map(|(key, value)| ((*key).to_string(), CsvValue::parse(value)))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = header.len(), "Parsed table");
    Ok(rows)
}

/// Load the resource `name` through `loader` and parse it.
///
/// # Errors
/// Any error of [`ResourceLoader::load_text`] or [`read_csv_str`].
pub fn read_csv_resource(
    loader: &impl ResourceLoader,
    name: &str,
) -> Result<Vec<CsvRow>, CsvError> {
    let text = loader.load_text(name)?;
    read_csv_str(&text)
}
