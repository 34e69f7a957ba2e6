/// A single result row from an nccl-tests performance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfRow {
    /// Message size in bytes, after applying any unit suffix.
    pub msg_bytes: u128,
    pub bus_bw_gbs: f64,
    pub avg_lat_us: f64,
}

/// Rows in input line order, plus the fixed column header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerfTable {
    pub rows: Vec<PerfRow>,
}

impl PerfTable {
    pub const HEADER: [&'static str; 3] = ["msg_bytes", "bus_bw_GBs", "avg_lat_us"];

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
