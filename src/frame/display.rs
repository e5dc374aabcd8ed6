const INDEX_WIDTH: usize = 5;

/// Render labels plus per-column stringified values as a boxed grid with a
/// row-index gutter. Callers decide how values are stringified (the
/// describe path formats statistics to 6 decimal places, everything else
/// uses plain `Display`).
pub fn render_grid(labels: &[&str], columns: &[Vec<String>]) -> String {
    let widths: Vec<usize> = labels
        .iter()
        .zip(columns)
        .map(|(label, column)| {
            let widest = column
                .iter()
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            widest.max(label.chars().count()) + 4
        })
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();

    out.push_str(&" ".repeat(INDEX_WIDTH + 1));
    out.push('╔');
    for (i, w) in widths.iter().enumerate() {
        out.push_str(&"═".repeat(*w));
        out.push(if i == widths.len() - 1 { '╗' } else { '╦' });
    }
    out.push('\n');

    out.push_str(&" ".repeat(INDEX_WIDTH + 1));
    out.push('║');
    for (label, w) in labels.iter().zip(&widths) {
        out.push_str(&format!(" {:<width$} ║", label, width = w - 2));
    }
    out.push('\n');

    out.push('╔');
    out.push_str(&"═".repeat(INDEX_WIDTH));
    out.push('╬');
    for (i, w) in widths.iter().enumerate() {
        out.push_str(&"═".repeat(*w));
        out.push(if i == widths.len() - 1 { '╣' } else { '╬' });
    }
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("║ {:>3} ║", row));
        for (column, w) in columns.iter().zip(&widths) {
            let cell = column.get(row).map(String::as_str).unwrap_or("");
            out.push_str(&format!(" {:<width$} ║", cell, width = w - 2));
        }
        out.push('\n');
    }

    out.push('╚');
    out.push_str(&"═".repeat(INDEX_WIDTH));
    out.push('╩');
    for (i, w) in widths.iter().enumerate() {
        out.push_str(&"═".repeat(*w));
        out.push(if i == widths.len() - 1 { '╝' } else { '╩' });
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::convert::ColumnData;
    use crate::frame::dataframe::Dataframe;

    #[test]
    fn test_grid_contains_labels_and_values() {
        let grid = render_grid(
            &["A", "B"],
            &[
                vec!["1".to_string(), "2".to_string()],
                vec!["a".to_string(), "b".to_string()],
            ],
        );
        for needle in ["A", "B", "1", "2", "a", "b", "╔", "╚", "║"] {
            assert!(grid.contains(needle), "missing {:?} in grid", needle);
        }
    }

    #[test]
    fn test_grid_row_indices() {
        let grid = render_grid(&["x"], &[vec!["v".to_string(), "w".to_string()]]);
        assert!(grid.contains("║   0 ║"));
        assert!(grid.contains("║   1 ║"));
    }

    #[test]
    fn test_dataframe_display_renders_nulls() {
        use crate::frame::csv::CsvReader;
        use std::io::Cursor;

        let df = CsvReader::new()
            .read_from_reader(Cursor::new("Name,Age\nAlice,30\nBob,"))
            .unwrap();
        let text = df.to_string();
        assert!(text.contains("Alice"));
        assert!(text.contains("null"));
        assert!(text.contains("Age"));
    }

    #[test]
    fn test_empty_dataframe_display() {
        let df = Dataframe::from_columns::<ColumnData>(&[], vec![]).unwrap();
        assert_eq!(df.to_string(), "Empty dataframe");
    }
}
