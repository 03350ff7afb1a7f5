pub mod report;
pub mod select;

pub use report::{RowRecord, RutRequest, TaxStatusReport};
pub use select::{row_date, select_most_recent};
