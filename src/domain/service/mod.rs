pub mod record_filter;

pub use record_filter::{filter_records, FilterCriteria};
