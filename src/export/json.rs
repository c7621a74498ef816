use std::io::Write;

use anyhow::{Context, Result};

use crate::core::ExtractionRecord;

/// Write the records as a pretty JSON array with a trailing newline.
pub fn write_records<W: Write>(w: &mut W, records: &[ExtractionRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, records).context("Failed to serialize JSON")?;
    writeln!(w).context("Failed to write JSON")?;
    Ok(())
}
