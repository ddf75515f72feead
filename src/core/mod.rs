//! Core GFF3 functionality
//!
//! This module contains the record model, the line parser, gene identifier
//! extraction, canonical ordering and the range / gene-list queries.

mod attributes;
mod error;
pub mod io;
mod natural;
mod parser;
mod query;
mod record;
mod sort;

pub use attributes::{attribute_value, extract_gene_id, ENUMERATED_SUFFIX};
pub use error::{GeneListError, Gff3Error, ParseError, ParseResult, Result};
pub use io::{
    default_output_path, read_gff3_file, read_gene_list, CompressionFormat, GeneSource,
    IoStrategy, ReadOptions, SmartReader, DEFAULT_BUFFER_SIZE, MMAP_THRESHOLD,
};
pub use natural::natural_cmp;
pub use parser::{is_skippable, parse_lines, parse_lines_parallel};
pub use query::{
    extract_genes, extract_range, EmptyReason, Extraction, GeneList, GeneMatchState, RangeQuery,
};
pub use record::{FeatureType, Record};
pub use sort::{canonical_sort, canonical_sort_refs, compare_records, is_canonically_sorted};
