use crate::Result;
use crate::perflog::PerfTable;

use anyhow::Context;
use std::io;

/// Records end in CRLF, as RFC 4180 writers do.
pub fn builder() -> csv::WriterBuilder {
    let mut b = csv::WriterBuilder::new();
    b.terminator(csv::Terminator::CRLF);
    b
}

/// Write the header and one record per row to `wtr`, then flush.
pub fn write_table<W: io::Write>(wtr: &mut csv::Writer<W>, table: &PerfTable) -> Result<()> {
    wtr.write_record(PerfTable::HEADER)?;
    for row in &table.rows {
        wtr.write_record([
            row.msg_bytes.to_string(),
            format_float(row.bus_bw_gbs),
            format_float(row.avg_lat_us),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create or truncate `path` and write the table to it.
pub fn write_csv(table: &PerfTable, path: &str) -> Result<()> {
    let mut wtr = builder()
        .from_path(path)
        .with_context(|| format!("write table {}", path))?;
    write_table(&mut wtr, table).with_context(|| format!("write table {}", path))
}

/// Shortest round-trip form that always reads back as a float:
/// `291.0`, `2198.3`, `1e+16`, `1e-05`.
pub fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "nan".to_string()
        } else if v > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    // Debug already switches to exponent form outside [1e-4, 1e16) and keeps
    // a trailing ".0" on integral values.
    let s = format!("{:?}", v);
    match s.split_once('e') {
        None => s,
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}
