//! Log parsing for nccl-tests performance output.

pub mod parse;
pub mod row;
pub mod unit;

pub use parse::parse_log_file;
pub use row::{PerfRow, PerfTable};
