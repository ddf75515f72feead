//! FastGFF3 - GFF3 sorting, extraction and conversion
//!
//! Parses GFF3 annotation files into an in-memory record model and provides
//! canonical ordering, range extraction, gene-list extraction and BED / GTF
//! output.
//!
//! # Features
//!
//! - Natural chromosome ordering (`chr2` before `chr10`)
//! - Stable canonical sort by chromosome, start and feature type
//! - Gzip / bzip2 input, memory-mapped reading of large files
//! - Optional parallel parsing with rayon
//!
//! # Example
//!
//! ```
//! use fast_gff3::core::{canonical_sort, extract_genes, parse_lines, GeneList};
//! use fast_gff3::formats::{write_bed, BedLayout};
//!
//! let input = "\
//! chr2\t.\tgene\t50\t90\t.\t+\t.\tID=g2;Name=XYZ9
//! chr1\t.\tgene\t10\t40\t.\t-\t.\tID=g1;Name=ABC1
//! chr1\t.\tmRNA\t10\t40\t.\t-\t.\tID=t1;Name=ABC1.t1";
//!
//! let records = canonical_sort(parse_lines(input.lines())?);
//! let genes = extract_genes(&records, &GeneList::single("ABC1"));
//! assert_eq!(genes.len(), 2);
//!
//! let mut out = Vec::new();
//! write_bed(&records, &mut out, BedLayout::Gene)?;
//! assert_eq!(String::from_utf8(out)?, "chr1\t10\t40\tABC1\nchr2\t50\t90\tXYZ9\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    canonical_sort, extract_gene_id, extract_genes, extract_range, parse_lines, read_gff3_file,
    EmptyReason, Extraction, FeatureType, GeneList, GeneSource, Gff3Error, ParseError,
    RangeQuery, ReadOptions, Record,
};
pub use crate::formats::{bed, gff, gtf, BedLayout, GtfLayout, WriteStats};
