//! File sinks for rendered output, with transparent gzip compression.

use anyhow::Result;
use niffler::compression::Format;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Opens a buffered write sink for rendered records.
///
/// Paths ending in `.gz` are gzip-compressed on the way out, so a chain
/// can stream straight into e.g. `bin_042.fastq.gz`; any other path gets
/// a plain buffered writer.
pub fn open_sink(path: &Path) -> Result<Box<dyn Write>> {
    let file = File::create(path)?;
    let buffered: Box<dyn Write> = Box::new(BufWriter::new(file));

    let format = match path.extension() {
        Some(ext) if ext == "gz" => Format::Gzip,
        _ => Format::No,
    };

    let writer = niffler::get_writer(buffered, format, niffler::Level::Six)?;
    Ok(writer)
}
