//! Renders mapped reads back into FASTA, FASTQ, or header-only listings.
//!
//! Every emitted record starts with a header line carrying the group name,
//! the 11-character status tag, and the original sequence id, in that
//! order: `>{group};{tag}{id}` (the tag itself ends in `;`). FASTQ swaps
//! the `>` for `@` and adds the sequence, a lone `+` separator, and the
//! quality line.

use crate::classify::status_tag;
use crate::record::{ChainLink, MappedRead, ReadHandle, ReadStore};
use std::io::{self, Write};

/// Output shape for a rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    HeaderOnly,
    Fasta,
    Fastq,
}

impl Shape {
    fn select(header_only: bool, has_qual: bool) -> Self {
        if header_only {
            Shape::HeaderOnly
        } else if has_qual {
            Shape::Fastq
        } else {
            Shape::Fasta
        }
    }
}

/// Formats one record into a fresh block. Both renderer variants go
/// through here, which keeps their output byte-identical.
fn format_read(read: &MappedRead, group_name: &str, shape: Shape, paired_output: bool) -> String {
    let tag = status_tag(read.role, paired_output);
    match shape {
        Shape::HeaderOnly => format!(">{};{}{}\n", group_name, tag, read.seq_id),
        Shape::Fasta => format!(
            ">{};{}{}\n{}\n",
            group_name,
            tag,
            read.seq_id,
            read.seq.as_deref().unwrap_or("")
        ),
        Shape::Fastq => format!(
            "@{};{}{}\n{}\n+\n{}\n",
            group_name,
            tag,
            read.seq_id,
            read.seq.as_deref().unwrap_or(""),
            read.qual.as_deref().unwrap_or("")
        ),
    }
}

/// Writes one record to a stream and returns the number of bytes written.
///
/// The shape is header-only when requested, otherwise FASTQ when the read
/// carries quality data and FASTA when it does not.
pub fn render_read<W: Write>(
    read: &MappedRead,
    writer: &mut W,
    group_name: &str,
    header_only: bool,
    paired_output: bool,
) -> io::Result<usize> {
    let block = format_read(
        read,
        group_name,
        Shape::select(header_only, read.qual.is_some()),
        paired_output,
    );
    writer.write_all(block.as_bytes())?;
    Ok(block.len())
}

/// Appends one record to an in-memory buffer and returns the number of
/// characters appended. Agrees byte-for-byte with [`render_read`].
pub fn sprint_read(
    read: &MappedRead,
    buf: &mut String,
    group_name: &str,
    header_only: bool,
    paired_output: bool,
) -> usize {
    let block = format_read(
        read,
        group_name,
        Shape::select(header_only, read.qual.is_some()),
        paired_output,
    );
    buf.push_str(&block);
    block.len()
}

/// Renders an entire ingestion chain to a stream.
///
/// Group names are resolved per node through `group_names[read.group]`;
/// bounds are the caller's contract. When `headers_only` is false, the
/// FASTA-or-FASTQ decision is made once from the FIRST record's quality
/// presence and applied to the whole chain.
pub fn render_chain<W: Write>(
    store: &ReadStore,
    head: Option<ReadHandle>,
    writer: &mut W,
    group_names: &[String],
    headers_only: bool,
    paired_output: bool,
) -> io::Result<()> {
    let first_has_qual = head
        .and_then(|h| store.get(h))
        .map(|r| r.qual.is_some())
        .unwrap_or(false);
    let shape = Shape::select(headers_only, first_has_qual);

    for handle in store.iter_chain(head, ChainLink::Ingestion) {
        if let Some(read) = store.get(handle) {
            let group_name = &group_names[read.group as usize];
            let block = format_read(read, group_name, shape, paired_output);
            writer.write_all(block.as_bytes())?;
        }
    }

    Ok(())
}
