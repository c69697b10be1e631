mod gsheet;
mod postgre;
mod table;

pub use gsheet::GoogleSheets;
pub use postgre::{DatabasePool, WriteMode};
pub use table::Table;
