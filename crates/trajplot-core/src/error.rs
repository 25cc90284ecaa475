// File: crates/trajplot-core/src/error.rs
// Summary: Library error type and Result alias.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("invalid number at row {row}, column '{column}': {value:?}")]
    CellParse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row} has {got} fields, header has {expected}")]
    RowLength { row: usize, got: usize, expected: usize },

    #[error("{headers} header(s) but {columns} column(s)")]
    ColumnCount { headers: usize, columns: usize },

    #[error("column '{column}' has {got} values, expected {expected}")]
    ColumnLength { column: String, got: usize, expected: usize },

    #[error("render error: {0}")]
    Render(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("interactive display is not available in this build")]
    DisplayUnavailable,
}

impl From<toml::de::Error> for PlotError {
    fn from(err: toml::de::Error) -> Self {
        PlotError::Config(format!("TOML parse error: {}", err))
    }
}
