//! Output format emitters
//!
//! Render canonically ordered records as GFF3, GTF or BED lines.

pub mod bed;
pub mod gff;
pub mod gtf;

use crate::core::Record;
use std::io::{self, Write};

pub use bed::{format_bed, write_bed, BedLayout};
pub use gff::{format_gff3, write_gff3};
pub use gtf::{format_gtf, write_gtf, GtfLayout};

/// Write statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Lines written
    pub written: usize,
    /// Records filtered out by the output layout
    pub skipped: usize,
}

/// Write one line per record accepted by `format`, then flush
fn write_records<'a, I, W, F>(records: I, writer: &mut W, mut format: F) -> io::Result<WriteStats>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write + ?Sized,
    F: FnMut(&Record) -> Option<String>,
{
    let mut stats = WriteStats::default();
    for record in records {
        match format(record) {
            Some(line) => {
                writeln!(writer, "{}", line)?;
                stats.written += 1;
            }
            None => stats.skipped += 1,
        }
    }
    writer.flush()?;
    Ok(stats)
}
