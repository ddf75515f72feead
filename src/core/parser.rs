//! GFF3 line parser
//!
//! Turns raw text lines into [`Record`]s. Blank lines and lines whose first
//! non-whitespace character is `#` are skipped. Every other line must have
//! exactly nine tab-separated columns; the first malformed line aborts the
//! whole parse.

use crate::core::error::{Gff3Error, ParseError, ParseResult};
use crate::core::{FeatureType, Record};
use memchr::memchr_iter;
use rayon::prelude::*;

/// Column indices of a GFF3 feature line
mod col {
    pub const SEQID: usize = 0;
    pub const SOURCE: usize = 1;
    pub const TYPE: usize = 2;
    pub const START: usize = 3;
    pub const END: usize = 4;
    pub const SCORE: usize = 5;
    pub const STRAND: usize = 6;
    pub const PHASE: usize = 7;
    pub const ATTRIBUTES: usize = 8;
}

/// Chunk size for parallel parsing
const CHUNK_SIZE: usize = 10000;

/// Check whether a line carries no feature (blank or comment/directive)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Split a line on tabs into at most `N` fields
///
/// Returns the fields and the total number of tab-separated fields found.
fn split_fields<const N: usize>(line: &str) -> ([&str; N], usize) {
    let mut fields = [""; N];
    let mut count = 0;
    let mut field_start = 0;
    for tab in memchr_iter(b'\t', line.as_bytes()) {
        if count < N {
            fields[count] = &line[field_start..tab];
        }
        count += 1;
        field_start = tab + 1;
    }
    if count < N {
        fields[count] = &line[field_start..];
    }
    (fields, count + 1)
}

fn parse_coordinate(value: &str, field: &'static str, line: usize) -> ParseResult<u64> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}

impl Record {
    /// Parse one feature line
    ///
    /// `line_number` is the 1-based position of the line in its input and
    /// is only used for error reporting. A trailing `\r` is removed.
    ///
    /// # Examples
    /// ```
    /// use fast_gff3::core::Record;
    /// let rec = Record::parse_line("chr1\t.\tgene\t10\t20\t.\t+\t.\tName=ABC1", 1).unwrap();
    /// assert_eq!(rec.chromosome, "chr1");
    /// assert_eq!(rec.gene_id(), "ABC1");
    /// ```
    pub fn parse_line(line: &str, line_number: usize) -> ParseResult<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (fields, found) = split_fields::<{ Record::FIELD_COUNT }>(line);
        if found != Record::FIELD_COUNT {
            return Err(ParseError::FieldCount {
                line: line_number,
                expected: Record::FIELD_COUNT,
                found,
            });
        }

        let chromosome = fields[col::SEQID];
        if chromosome.is_empty() {
            return Err(ParseError::EmptyChromosome { line: line_number });
        }

        Ok(Record {
            chromosome: chromosome.to_string(),
            source: fields[col::SOURCE].to_string(),
            feature_type: FeatureType::parse(fields[col::TYPE]),
            start: parse_coordinate(fields[col::START], "start", line_number)?,
            end: parse_coordinate(fields[col::END], "end", line_number)?,
            score: fields[col::SCORE].to_string(),
            strand: fields[col::STRAND].to_string(),
            phase: fields[col::PHASE].to_string(),
            attributes: fields[col::ATTRIBUTES].to_string(),
        })
    }
}

/// Parse a sequence of lines, preserving input order
pub fn parse_lines<I, S>(lines: I) -> ParseResult<Vec<Record>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if is_skippable(line) {
            continue;
        }
        records.push(Record::parse_line(line, idx + 1)?);
    }
    log::debug!("Parsed {} GFF3 records", records.len());
    Ok(records)
}

/// Parse lines with a rayon pool of `threads` workers
///
/// Output order, and the error reported for malformed input (the first bad
/// line in input order), are the same as for [`parse_lines`].
pub fn parse_lines_parallel<S>(lines: &[S], threads: usize) -> Result<Vec<Record>, Gff3Error>
where
    S: AsRef<str> + Sync,
{
    if threads <= 1 {
        return Ok(parse_lines(lines)?);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Gff3Error::ThreadPool(e.to_string()))?;

    let results: Vec<Option<ParseResult<Record>>> = pool.install(|| {
        lines
            .par_chunks(CHUNK_SIZE)
            .enumerate()
            .flat_map_iter(|(chunk_idx, chunk)| {
                chunk.iter().enumerate().map(move |(offset, line)| {
                    let line = line.as_ref();
                    if is_skippable(line) {
                        None
                    } else {
                        Some(Record::parse_line(line, chunk_idx * CHUNK_SIZE + offset + 1))
                    }
                })
            })
            .collect()
    });

    let mut records = Vec::with_capacity(results.len());
    for result in results.into_iter().flatten() {
        records.push(result?);
    }
    log::debug!("Parsed {} GFF3 records with {} threads", records.len(), threads);
    Ok(records)
}
