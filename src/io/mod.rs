pub mod summary;
pub mod table;

pub use summary::{write_json, write_summary, RunSummary};
pub use table::write_table;
