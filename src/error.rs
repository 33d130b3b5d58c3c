use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads rosters, normalizes them, or writes the derived reports.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a roster spreadsheet cannot be opened or parsed.
    #[error("failed to read roster {path}: {source}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Raised when a sheet does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when the configuration file is unreadable or incomplete.
    #[error("invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Raised when the user provides a path that does not exist.
    #[error("input not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the roster directory holds no spreadsheets.
    #[error("no roster files found in {0}")]
    EmptyInput(PathBuf),

    /// Raised when an expected roster column is absent.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// Raised when a row lacks the name parts needed to build its full name.
    #[error("row {row} has no value in column '{column}'")]
    MissingName { row: usize, column: String },

    /// Raised when a column does not match the row count of its table.
    #[error("column '{column}' has {actual} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
