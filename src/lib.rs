pub mod cli;
pub mod frame;

pub use frame::{ColumnData, CsvReader, DataType, Dataframe, FrameError, Series, Value};
