use std::fmt;

use super::error::{FrameError, Result};
use super::value::{DataType, Value};

/// A named, homogeneously-typed column. The dtype is fixed at construction
/// so an empty or all-null column still has a definite type; every non-null
/// value carries that dtype.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    dtype: DataType,
    values: Vec<Value>,
}

impl Series {
    pub fn new(name: impl Into<String>, dtype: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    /// Same values under a new label.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dtype: self.dtype,
            values: self.values.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_numeric(&self) -> bool {
        self.dtype.is_numeric()
    }

    /// Number of non-null values; the base for every statistic.
    pub fn count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    fn numeric_values(&self) -> Result<Vec<f64>> {
        if !self.is_numeric() {
            return Err(FrameError::NotNumeric(self.name.clone()));
        }
        let nums: Vec<f64> = self.values.iter().filter_map(Value::as_f64).collect();
        if nums.is_empty() {
            return Err(FrameError::EmptySeries(self.name.clone()));
        }
        Ok(nums)
    }

    pub fn mean(&self) -> Result<f64> {
        let nums = self.numeric_values()?;
        Ok(nums.iter().sum::<f64>() / nums.len() as f64)
    }

    pub fn median(&self) -> Result<f64> {
        let mut nums = self.numeric_values()?;
        nums.sort_by(f64::total_cmp);
        let mid = nums.len() / 2;
        if nums.len() % 2 == 0 {
            Ok((nums[mid - 1] + nums[mid]) / 2.0)
        } else {
            Ok(nums[mid])
        }
    }

    /// Population standard deviation (divisor N, not N-1).
    pub fn std(&self) -> Result<f64> {
        let nums = self.numeric_values()?;
        let mean = nums.iter().sum::<f64>() / nums.len() as f64;
        let variance =
            nums.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / nums.len() as f64;
        Ok(variance.sqrt())
    }

    /// The element attaining the minimum. Strict comparison, so the first
    /// occurrence of the minimum wins ties.
    pub fn min(&self) -> Result<Value> {
        self.extreme(|candidate, best| candidate < best)
    }

    /// The element attaining the maximum; first occurrence wins ties.
    pub fn max(&self) -> Result<Value> {
        self.extreme(|candidate, best| candidate > best)
    }

    fn extreme<F: Fn(f64, f64) -> bool>(&self, replaces: F) -> Result<Value> {
        if !self.is_numeric() {
            return Err(FrameError::NotNumeric(self.name.clone()));
        }
        let mut best: Option<(f64, &Value)> = None;
        for value in &self.values {
            if let Some(num) = value.as_f64() {
                match best {
                    Some((best_num, _)) if !replaces(num, best_num) => {}
                    _ => best = Some((num, value)),
                }
            }
        }
        best.map(|(_, v)| v.clone())
            .ok_or_else(|| FrameError::EmptySeries(self.name.clone()))
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            writeln!(f, "{}\t{}", i, value)?;
        }
        writeln!(f, "Name: {}, dtype: {}", self.name, self.dtype)
    }
}
