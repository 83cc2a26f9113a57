use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Row;

/// Write rows as `x<TAB>y<TAB>label` lines, readable by the loader.
pub fn write_rows<W: Write>(writer: W, rows: &[Row]) -> Result<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    for (i, row) in rows.iter().enumerate() {
        out.serialize(row).with_context(|| format!("writing row {i}"))?;
    }
    out.flush().context("flushing rows")?;
    Ok(())
}

/// Create (or truncate) `path` and write `rows` to it.
pub fn save_file(path: &Path, rows: &[Row]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(BufWriter::new(file), rows)
        .with_context(|| format!("writing {}", path.display()))?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
