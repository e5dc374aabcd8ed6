use std::fmt;
use std::path::Path;

use super::convert::ColumnData;
use super::csv::CsvReader;
use super::display::render_grid;
use super::error::{FrameError, Result};
use super::series::Series;
use super::value::{DataType, Value};

/// An ordered collection of equally-long Series. Construction is atomic:
/// any failure yields an error and no dataframe. Every transformation
/// copies the relevant values into a brand-new frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataframe {
    columns: Vec<Series>,
}

impl Dataframe {
    pub(crate) fn from_series(columns: Vec<Series>) -> Self {
        Self { columns }
    }

    /// Build from typed column arrays. An empty label slice auto-labels
    /// the columns "0", "1", ... by position; otherwise one label per
    /// column is required. All columns must have the same length.
    pub fn from_columns<C: Into<ColumnData>>(labels: &[&str], columns: Vec<C>) -> Result<Self> {
        let columns: Vec<ColumnData> = columns.into_iter().map(Into::into).collect();

        if !labels.is_empty() && labels.len() != columns.len() {
            return Err(FrameError::LabelCountMismatch {
                labels: labels.len(),
                columns: columns.len(),
            });
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            for (index, column) in columns.iter().enumerate() {
                if column.len() != expected {
                    return Err(FrameError::ColumnLengthMismatch {
                        index,
                        expected,
                        found: column.len(),
                    });
                }
            }
        }

        let series = columns
            .into_iter()
            .enumerate()
            .map(|(i, column)| {
                let label = labels
                    .get(i)
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| i.to_string());
                Series::new(label, column.data_type(), column.into_values())
            })
            .collect();

        Ok(Self { columns: series })
    }

    /// Read a delimited text file; the first non-blank line supplies the
    /// column labels.
    pub fn from_csv(path: impl AsRef<Path>, delimiter: char) -> Result<Self> {
        CsvReader::new()
            .with_delimiter(delimiter)
            .read_file(path.as_ref())
    }

    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Series::len)
    }

    /// First column with the given label, if any.
    pub fn column(&self, label: &str) -> Option<&Series> {
        self.columns.iter().find(|s| s.name() == label)
    }

    /// The named columns, in the requested order; a label may be repeated.
    /// Duplicate labels in the frame resolve to the first match.
    pub fn select_columns(&self, labels: &[&str]) -> Result<Self> {
        let columns = labels
            .iter()
            .map(|label| {
                self.column(label)
                    .cloned()
                    .ok_or_else(|| FrameError::ColumnNotFound(label.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns })
    }

    /// The rows at the given 0-based indices, in the given order; indices
    /// may repeat and need not be monotonic.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self> {
        let rows = self.row_count();
        for &index in indices {
            if index >= rows {
                return Err(FrameError::RowIndexOutOfRange { index, rows });
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|series| {
                let values = indices
                    .iter()
                    .map(|&i| series.values()[i].clone())
                    .collect();
                Series::new(series.name(), series.dtype(), values)
            })
            .collect();
        Ok(Self { columns })
    }

    /// The half-open row range `from..to`.
    pub fn select_rows_range(&self, from: usize, to: usize) -> Result<Self> {
        let rows = self.row_count();
        if from >= to || to > rows {
            return Err(FrameError::InvalidRowRange { from, to, rows });
        }
        let indices: Vec<usize> = (from..to).collect();
        self.select_rows(&indices)
    }

    /// Keep the rows for which `predicate` holds on the named column,
    /// preserving their original relative order.
    pub fn filter_rows<P>(&self, label: &str, predicate: P) -> Result<Self>
    where
        P: Fn(&Value) -> bool,
    {
        let series = self
            .column(label)
            .ok_or_else(|| FrameError::ColumnNotFound(label.to_string()))?;

        let indices: Vec<usize> = series
            .values()
            .iter()
            .enumerate()
            .filter(|&(_, value)| predicate(value))
            .map(|(i, _)| i)
            .collect();
        self.select_rows(&indices)
    }

    /// First `n` rows (clamped to the row count).
    pub fn head(&self, n: usize) -> Self {
        self.take_rows(0, n.min(self.row_count()))
    }

    /// Last `n` rows (clamped to the row count).
    pub fn tail(&self, n: usize) -> Self {
        let rows = self.row_count();
        self.take_rows(rows.saturating_sub(n), rows)
    }

    fn take_rows(&self, from: usize, to: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|series| {
                let values = series.values()[from..to].to_vec();
                Series::new(series.name(), series.dtype(), values)
            })
            .collect();
        Self { columns }
    }

    /// Summary statistics for every numeric column: count, mean, std,
    /// median, min, max. The result is a new frame whose first column
    /// names the statistic.
    pub fn describe(&self) -> Result<Self> {
        let numeric: Vec<&Series> = self.columns.iter().filter(|s| s.is_numeric()).collect();
        if numeric.is_empty() {
            return Err(FrameError::NoNumericColumns);
        }

        let stat_labels = Series::new(
            "stat",
            DataType::String,
            ["count", "mean", "std", "median", "min", "max"]
                .iter()
                .map(|s| Value::String(s.to_string()))
                .collect(),
        );

        let mut columns = vec![stat_labels];
        for series in numeric {
            let stats = vec![
                Value::Double(series.count() as f64),
                Value::Double(series.mean()?),
                Value::Double(series.std()?),
                Value::Double(series.median()?),
                Value::Double(series.min()?.as_f64().unwrap_or(f64::NAN)),
                Value::Double(series.max()?.as_f64().unwrap_or(f64::NAN)),
            ];
            columns.push(Series::new(series.name(), DataType::Double, stats));
        }
        Ok(Self { columns })
    }
}

impl fmt::Display for Dataframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "Empty dataframe");
        }
        let labels = self.labels();
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|s| s.values().iter().map(Value::to_string).collect())
            .collect();
        write!(f, "{}", render_grid(&labels, &cells))
    }
}
