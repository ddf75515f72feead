//! GTF emitter
//!
//! The legacy layout has eight columns and leaves out the feature type:
//! chromosome, source, start, end, score, strand, phase, attributes.
//! `WithFeatureType` keeps all nine GFF3 columns. Attributes are copied
//! verbatim in both layouts.

use crate::core::Record;
use crate::formats::{write_records, WriteStats};
use std::io::{self, Write};

/// GTF column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GtfLayout {
    /// Eight columns, no feature type
    #[default]
    Legacy,
    /// Nine columns including the feature type
    WithFeatureType,
}

/// Render a record as a GTF line
pub fn format_gtf(record: &Record, layout: GtfLayout) -> String {
    match layout {
        GtfLayout::Legacy => format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.chromosome,
            record.source,
            record.start,
            record.end,
            record.score,
            record.strand,
            record.phase,
            record.attributes
        ),
        GtfLayout::WithFeatureType => record.to_string(),
    }
}

/// Write records as GTF lines
pub fn write_gtf<'a, I, W>(records: I, writer: &mut W, layout: GtfLayout) -> io::Result<WriteStats>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write + ?Sized,
{
    write_records(records, writer, |r| Some(format_gtf(r, layout)))
}
