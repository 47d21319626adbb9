pub mod config;
pub mod http_sheets_query;

pub use crate::config::SheetsConfig;
pub use crate::http_sheets_query::HttpSheetsQuery;
