use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::convert::infer_column;
use super::dataframe::Dataframe;
use super::error::{FrameError, Result};
use super::series::Series;

/// Split one raw line into its fields. Fields are separated by `delimiter`
/// and trimmed; a field may be wrapped in double quotes, in which case it
/// can contain the delimiter, and a literal quote inside it is written as
/// `""`. A lone quote at the very end of the line is dropped.
pub fn parse_row(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            match chars.peek() {
                Some('"') => {
                    field.push('"');
                    chars.next();
                }
                Some(_) => in_quotes = !in_quotes,
                None => {}
            }
        } else if c == delimiter && !in_quotes {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }

    fields.push(field.trim().to_string());
    fields
}

pub struct CsvReader {
    delimiter: char,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn read_file(&self, path: &Path) -> Result<Dataframe> {
        let file = File::open(path)?;
        self.read_from_reader(BufReader::new(file))
    }

    /// Build a dataframe from any buffered source. The first non-blank
    /// line supplies the column labels; every other non-blank line is one
    /// data row. Each column is then type-inferred as a whole.
    pub fn read_from_reader<R: BufRead>(&self, reader: R) -> Result<Dataframe> {
        let mut labels: Option<Vec<String>> = None;
        let mut columns: Vec<Vec<String>> = Vec::new();

        for (line_num, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = parse_row(&line, self.delimiter);
            match &labels {
                None => {
                    columns = vec![Vec::new(); fields.len()];
                    labels = Some(fields);
                }
                Some(header) => {
                    if fields.len() != header.len() {
                        return Err(FrameError::RaggedRow {
                            line: line_num + 1,
                            expected: header.len(),
                            found: fields.len(),
                        });
                    }
                    for (column, field) in columns.iter_mut().zip(fields) {
                        column.push(field);
                    }
                }
            }
        }

        let labels = labels.ok_or(FrameError::NoDataRows)?;
        if columns.first().map_or(true, Vec::is_empty) {
            return Err(FrameError::NoDataRows);
        }

        let series = labels
            .into_iter()
            .zip(&columns)
            .map(|(label, raw)| {
                let (dtype, values) = infer_column(raw);
                Series::new(label, dtype, values)
            })
            .collect();

        Ok(Dataframe::from_series(series))
    }
}
