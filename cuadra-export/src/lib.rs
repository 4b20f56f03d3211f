//! cuadra-export: consumers of parsed statements (CSV files, per-holder
//! summaries).

pub mod report;
pub mod writer;

pub use report::{HolderSummary, summarize};
pub use writer::write_statement_csv;
