// File: crates/trajplot-core/src/table.rs
// Summary: Immutable columnar row set loaded from a trajectory CSV log.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::downsample::kept_indices;
use crate::error::{PlotError, Result};

const BOM: char = '\u{feff}';

/// Ordered rows of numeric values keyed by column name.
/// Contract: every column has exactly `len()` values.
#[derive(Clone, Debug, PartialEq)]
pub struct RowSet {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl RowSet {
    /// Build from headers and columns. Column lengths must agree.
    pub fn new(headers: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if headers.len() != columns.len() {
            return Err(PlotError::ColumnCount { headers: headers.len(), columns: columns.len() });
        }
        let n = columns.first().map_or(0, Vec::len);
        if let Some((i, c)) = columns.iter().enumerate().find(|(_, c)| c.len() != n) {
            return Err(PlotError::ColumnLength { column: headers[i].clone(), got: c.len(), expected: n });
        }
        Ok(Self { headers, columns })
    }

    /// Load a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|source| PlotError::Open { path: path.to_path_buf(), source })?;
        Self::from_csv(rdr)
    }

    /// Load CSV text from any reader (header row required).
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches(BOM).to_string())
            .collect();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = i + 1;
            if rec.len() != headers.len() {
                return Err(PlotError::RowLength { row, got: rec.len(), expected: headers.len() });
            }
            for (col, field) in rec.iter().enumerate() {
                columns[col].push(parse_cell(field).ok_or_else(|| PlotError::CellParse {
                    row,
                    column: headers[col].clone(),
                    value: field.to_string(),
                })?);
            }
        }
        Ok(Self { headers, columns })
    }

    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Values of column `name`, or `MissingColumn` when absent.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.index_of(name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| PlotError::MissingColumn(name.to_string()))
    }

    /// Paired `(x, y)` points from two columns.
    pub fn xy(&self, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
        let xs = self.column(x)?;
        let ys = self.column(y)?;
        Ok(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    /// Check that every name is present; the first missing one is reported.
    pub fn require(&self, names: &[&str]) -> Result<()> {
        match names.iter().find(|n| !self.has_column(n)) {
            Some(missing) => Err(PlotError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Every `stride`-th row (see [`crate::downsample`]); identity when `len() <= max_points`.
    pub fn downsample(&self, max_points: usize) -> Cow<'_, RowSet> {
        let n = self.len();
        if max_points == 0 || n <= max_points {
            return Cow::Borrowed(self);
        }
        let keep = kept_indices(n, max_points);
        log::info!(
            "Downsampling secondary data: keeping 1 of every {} rows",
            crate::downsample::sampling_stride(n, max_points)
        );
        let columns = self
            .columns
            .iter()
            .map(|c| keep.iter().map(|&i| c[i]).collect())
            .collect();
        Cow::Owned(RowSet { headers: self.headers.clone(), columns })
    }

    /// First `n` rows as display strings, one line per row.
    pub fn head(&self, n: usize) -> Vec<String> {
        (0..self.len().min(n))
            .map(|r| {
                self.columns
                    .iter()
                    .map(|c| format!("{:.6}", c[r]))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }

    /// Log the column list, row count and a preview of the first rows.
    pub fn log_summary(&self) {
        log::info!("Columns found: {:?}", self.headers);
        log::info!("Total rows: {}", self.len());
        log::debug!("First rows:\n{}\n{}", self.headers.join("  "), self.head(5).join("\n"));
    }
}

fn parse_cell(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}
