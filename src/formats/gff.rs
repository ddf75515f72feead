//! GFF3 passthrough emitter
//!
//! Writes the nine original columns back out in their original order.

use crate::core::Record;
use crate::formats::{write_records, WriteStats};
use std::io::{self, Write};

/// Render a record as a GFF3 feature line
pub fn format_gff3(record: &Record) -> String {
    record.to_string()
}

/// Write records as GFF3 feature lines
pub fn write_gff3<'a, I, W>(records: I, writer: &mut W) -> io::Result<WriteStats>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write + ?Sized,
{
    write_records(records, writer, |r| Some(format_gff3(r)))
}
