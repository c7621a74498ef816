use std::io::{self, Write};

use super::COLUMNS;
use crate::core::ExtractionRecord;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the header row followed by one row per record.
pub fn write_records<W: Write>(w: &mut W, records: &[ExtractionRecord], sep: char) -> io::Result<()> {
    write_row(w, COLUMNS, sep)?;
    for record in records {
        write_row(w, &record_row(record), sep)?;
    }
    Ok(())
}

fn record_row(record: &ExtractionRecord) -> [String; 7] {
    [
        record.file_path.clone(),
        record.line.to_string(),
        record.text.clone(),
        record.pattern.to_string(),
        record.source.to_string(),
        record.mixed.to_string(),
        record.full_line.clone(),
    ]
}
