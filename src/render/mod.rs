//! Table output for the downstream plotting step.

pub mod table;

pub use table::write_csv;
