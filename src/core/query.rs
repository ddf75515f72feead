//! Record queries
//!
//! Two filters over canonically sorted records:
//! - range extraction: chromosome substring match plus full containment
//! - gene-list extraction: gene-like records whose identifier is in a
//!   [`GeneList`], together with the child features that follow them

use crate::core::attributes::attribute_value;
use crate::core::sort::canonical_sort_refs;
use crate::core::{FeatureType, Record};
use std::collections::HashSet;
use std::fmt;

/// Genomic window for range extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    /// Chromosome text, matched as a substring of the record chromosome
    pub chromosome: String,
    /// Window start (inclusive)
    pub start: u64,
    /// Window end (inclusive)
    pub end: u64,
}

impl RangeQuery {
    pub fn new(chromosome: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            end,
        }
    }

    /// Check whether a record falls inside the window
    ///
    /// The chromosome test is a substring match, so `chr1` also selects
    /// `chr10` and `chr1_random`.
    pub fn contains(&self, record: &Record) -> bool {
        record.chromosome.contains(self.chromosome.as_str())
            && record.start >= self.start
            && record.end <= self.end
    }
}

/// Set of gene identifiers
///
/// Iteration yields identifiers in the order they were added, without
/// duplicates. Membership is a hash lookup.
#[derive(Debug, Clone, Default)]
pub struct GeneList {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl GeneList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding a single identifier
    pub fn single(id: impl Into<String>) -> Self {
        let mut list = Self::new();
        list.insert(id);
        list
    }

    /// Add an identifier; returns false if it was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.lookup.contains(&id) {
            return false;
        }
        self.lookup.insert(id.clone());
        self.ordered.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Identifiers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for GeneList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = GeneList::new();
        for id in iter {
            list.insert(id);
        }
        list
    }
}

/// Why an extraction produced no records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoRecordsInRange,
    NoGenesMatched,
}

impl EmptyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyReason::NoRecordsInRange => "No gff3 instances in this range.",
            EmptyReason::NoGenesMatched => "Gene list is empty or not provided.",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Matching records, in canonical order (never empty)
    Records(Vec<Record>),
    /// Nothing matched
    Empty(EmptyReason),
}

impl Extraction {
    fn from_records(records: Vec<Record>, reason: EmptyReason) -> Self {
        if records.is_empty() {
            Extraction::Empty(reason)
        } else {
            Extraction::Records(records)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Extraction::Records(records) => records.len(),
            Extraction::Empty(_) => 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            Extraction::Records(records) => records,
            Extraction::Empty(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Extraction::Records(records) => records,
            Extraction::Empty(_) => Vec::new(),
        }
    }
}

/// Keep records inside a genomic window
pub fn extract_range(records: &[Record], query: &RangeQuery) -> Extraction {
    let subset: Vec<Record> = records
        .iter()
        .filter(|r| query.contains(r))
        .cloned()
        .collect();
    log::debug!(
        "Range {}:{}-{} matched {} of {} records",
        query.chromosome,
        query.start,
        query.end,
        subset.len(),
        records.len()
    );
    Extraction::from_records(subset, EmptyReason::NoRecordsInRange)
}

/// Gene-list scan state
///
/// Only gene-like records move the state. Every other record inherits the
/// decision made for the closest preceding gene-like record, so the children
/// of a selected gene are selected with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneMatchState {
    /// Last gene-like record was not in the list (or none seen yet)
    #[default]
    Seeking,
    /// Last gene-like record was in the list
    Including,
}

impl GeneMatchState {
    /// Next state after a record of type `feature`
    ///
    /// `matched` is only consulted for gene-like records.
    pub fn transition(self, feature: &FeatureType, matched: bool) -> Self {
        if !feature.is_gene_like() {
            return self;
        }
        if matched {
            GeneMatchState::Including
        } else {
            GeneMatchState::Seeking
        }
    }

    pub fn is_including(&self) -> bool {
        matches!(self, GeneMatchState::Including)
    }
}

/// Keep genes from a list and the features that follow each of them
///
/// Records are scanned in order. Results are returned in canonical order.
pub fn extract_genes(records: &[Record], genes: &GeneList) -> Extraction {
    let mut state = GeneMatchState::default();
    let mut subset: Vec<&Record> = Vec::new();

    for record in records {
        let matched = record.feature_type.is_gene_like() && genes.contains(record.gene_id());
        if matched {
            log::debug!(
                "Matched {} at {}:{} (ID={})",
                record.gene_id(),
                record.chromosome,
                record.start,
                attribute_value(&record.attributes, "ID").unwrap_or(".")
            );
        }
        state = state.transition(&record.feature_type, matched);
        if state.is_including() {
            subset.push(record);
        }
    }

    log::debug!(
        "Gene list of {} identifiers matched {} of {} records",
        genes.len(),
        subset.len(),
        records.len()
    );
    canonical_sort_refs(&mut subset);
    let subset: Vec<Record> = subset.into_iter().cloned().collect();
    Extraction::from_records(subset, EmptyReason::NoGenesMatched)
}
