use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV source has no data rows")]
    NoDataRows,

    #[error("row at line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("label count {labels} does not match column count {columns}")]
    LabelCountMismatch { labels: usize, columns: usize },

    #[error("column {index} has length {found}, expected {expected}")]
    ColumnLengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("row index {index} out of range for {rows} rows")]
    RowIndexOutOfRange { index: usize, rows: usize },

    #[error("invalid row range {from}..{to} for {rows} rows")]
    InvalidRowRange {
        from: usize,
        to: usize,
        rows: usize,
    },

    #[error("series '{0}' is not numeric")]
    NotNumeric(String),

    #[error("series '{0}' has no values to aggregate")]
    EmptySeries(String),

    #[error("no numeric columns to describe")]
    NoNumericColumns,
}

pub type Result<T> = std::result::Result<T, FrameError>;
