pub mod dto;
pub mod ordering;
pub mod period;

pub use dto::*;
pub use ordering::{chart_series, table_rows, SortField, SortState};
pub use period::{DateRange, DateRangeError};
