use super::value::{DataType, Value};

/// A source column for the typed-array constructor. Each variant maps a
/// native element kind to a definite column type, so no string parsing is
/// involved on this path.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Integer(Vec<i32>),
    Long(Vec<i64>),
    Double(Vec<f64>),
    Boolean(Vec<bool>),
    String(Vec<String>),
}

impl ColumnData {
    pub fn data_type(&self) -> DataType {
        match self {
            ColumnData::Integer(_) => DataType::Integer,
            ColumnData::Long(_) => DataType::Long,
            ColumnData::Double(_) => DataType::Double,
            ColumnData::Boolean(_) => DataType::Boolean,
            ColumnData::String(_) => DataType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Integer(v) => v.len(),
            ColumnData::Long(v) => v.len(),
            ColumnData::Double(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_values(self) -> Vec<Value> {
        match self {
            ColumnData::Integer(v) => v.into_iter().map(Value::Integer).collect(),
            ColumnData::Long(v) => v.into_iter().map(Value::Long).collect(),
            ColumnData::Double(v) => v.into_iter().map(Value::Double).collect(),
            ColumnData::Boolean(v) => v.into_iter().map(Value::Boolean).collect(),
            ColumnData::String(v) => v.into_iter().map(Value::String).collect(),
        }
    }
}

impl From<Vec<i32>> for ColumnData {
    fn from(v: Vec<i32>) -> Self {
        ColumnData::Integer(v)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(v: Vec<i64>) -> Self {
        ColumnData::Long(v)
    }
}

impl From<Vec<f32>> for ColumnData {
    fn from(v: Vec<f32>) -> Self {
        // Single-precision input widens to the only fractional column type.
        ColumnData::Double(v.into_iter().map(f64::from).collect())
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        ColumnData::Double(v)
    }
}

impl From<Vec<bool>> for ColumnData {
    fn from(v: Vec<bool>) -> Self {
        ColumnData::Boolean(v)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        ColumnData::String(v)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(v: Vec<&str>) -> Self {
        ColumnData::String(v.into_iter().map(str::to_string).collect())
    }
}

/// Classify one raw field on its own: the candidate type it would have if
/// the whole column agreed with it.
pub fn classify(value: &str) -> DataType {
    if value.is_empty() {
        return DataType::Null;
    }
    if value.parse::<i32>().is_ok() {
        return DataType::Integer;
    }
    if value.parse::<i64>().is_ok() {
        return DataType::Long;
    }
    if value.parse::<f64>().is_ok() {
        return DataType::Double;
    }
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return DataType::Boolean;
    }
    DataType::String
}

fn unify(current: DataType, candidate: DataType) -> DataType {
    match (current, candidate) {
        (DataType::Null, other) | (other, DataType::Null) => other,
        (DataType::Integer, DataType::Long) | (DataType::Long, DataType::Integer) => DataType::Long,
        (a, b) if a == b => a,
        _ => DataType::String,
    }
}

fn parse_as(value: &str, dtype: DataType) -> Value {
    if value.is_empty() {
        return Value::Null;
    }
    match dtype {
        DataType::Integer => value.parse::<i32>().map(Value::Integer).unwrap_or(Value::Null),
        DataType::Long => value.parse::<i64>().map(Value::Long).unwrap_or(Value::Null),
        DataType::Double => value.parse::<f64>().map(Value::Double).unwrap_or(Value::Null),
        DataType::Boolean => Value::Boolean(value.eq_ignore_ascii_case("true")),
        DataType::String | DataType::Null => Value::String(value.to_string()),
    }
}

/// Resolve one type for a whole column of raw fields and convert every
/// field to it. Integer/Long disagreement widens to Long; any other mix
/// collapses the column to String with the original fields kept verbatim.
/// Empty fields become Null whatever the resolved type; a column of only
/// empty fields resolves to String.
pub fn infer_column(raw: &[String]) -> (DataType, Vec<Value>) {
    let mut resolved = DataType::Null;
    for value in raw {
        resolved = unify(resolved, classify(value));
        if resolved == DataType::String {
            break;
        }
    }
    if resolved == DataType::Null {
        resolved = DataType::String;
    }

    let values = raw.iter().map(|s| parse_as(s, resolved)).collect();
    (resolved, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), DataType::Null);
        assert_eq!(classify("42"), DataType::Integer);
        assert_eq!(classify("-7"), DataType::Integer);
        assert_eq!(classify("99999999999"), DataType::Long);
        assert_eq!(classify("3.14"), DataType::Double);
        assert_eq!(classify("true"), DataType::Boolean);
        assert_eq!(classify("FALSE"), DataType::Boolean);
        assert_eq!(classify("hello"), DataType::String);
    }

    #[test]
    fn test_integer_boundary_becomes_long() {
        assert_eq!(classify("2147483647"), DataType::Integer);
        assert_eq!(classify("2147483648"), DataType::Long);
    }

    #[test]
    fn test_infer_homogeneous_integers() {
        let raw = vec!["123".to_string(), "456".to_string(), "789".to_string()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::Integer);
        assert_eq!(
            values,
            vec![Value::Integer(123), Value::Integer(456), Value::Integer(789)]
        );
    }

    #[test]
    fn test_infer_widens_integer_long_mix() {
        let raw = vec!["1".to_string(), "99999999999".to_string()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::Long);
        assert_eq!(values, vec![Value::Long(1), Value::Long(99999999999)]);
    }

    #[test]
    fn test_infer_mixed_collapses_to_string() {
        let raw = vec!["1".to_string(), "x".to_string()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::String);
        assert_eq!(
            values,
            vec![
                Value::String("1".to_string()),
                Value::String("x".to_string())
            ]
        );
    }

    #[test]
    fn test_infer_int_double_mix_collapses_to_string() {
        let raw = vec!["1".to_string(), "1.5".to_string()];
        let (dtype, _) = infer_column(&raw);
        assert_eq!(dtype, DataType::String);
    }

    #[test]
    fn test_empty_field_is_null_in_any_column() {
        let raw = vec!["1".to_string(), String::new()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::Integer);
        assert_eq!(values, vec![Value::Integer(1), Value::Null]);
    }

    #[test]
    fn test_all_empty_column_resolves_to_string() {
        let raw = vec![String::new(), String::new()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::String);
        assert_eq!(values, vec![Value::Null, Value::Null]);
    }

    #[test]
    fn test_infer_booleans() {
        let raw = vec!["true".to_string(), "false".to_string(), "TRUE".to_string()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::Boolean);
        assert_eq!(
            values,
            vec![
                Value::Boolean(true),
                Value::Boolean(false),
                Value::Boolean(true)
            ]
        );
    }

    #[test]
    fn test_infer_doubles() {
        let raw = vec!["3.14".to_string(), "2.718".to_string()];
        let (dtype, values) = infer_column(&raw);
        assert_eq!(dtype, DataType::Double);
        assert_eq!(values, vec![Value::Double(3.14), Value::Double(2.718)]);
    }

    #[test]
    fn test_column_data_conversions() {
        let col: ColumnData = vec![1i32, 2, 3].into();
        assert_eq!(col.data_type(), DataType::Integer);
        assert_eq!(col.len(), 3);
        assert_eq!(
            col.into_values(),
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );

        let col: ColumnData = vec![1.25f32, 1.5].into();
        assert_eq!(col.data_type(), DataType::Double);
        assert_eq!(col.into_values(), vec![Value::Double(1.25), Value::Double(1.5)]);

        let col: ColumnData = vec!["a", "b"].into();
        assert_eq!(col.data_type(), DataType::String);
    }
}
