//! Canonical record ordering
//!
//! Records are ordered by (chromosome, start, feature-type rank):
//! 1. chromosome with natural ordering (`chr2` before `chr10`)
//! 2. start position
//! 3. feature-type rank (gene, pseudogene, mRNA, transcript, exon, CDS, ...),
//!    unknown types last
//!
//! The sort is stable: records with equal keys keep their input order.

use crate::core::natural::natural_cmp;
use crate::core::Record;
use std::cmp::Ordering;

/// Compare two records by the canonical key
pub fn compare_records(a: &Record, b: &Record) -> Ordering {
    natural_cmp(&a.chromosome, &b.chromosome)
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.feature_type.rank().cmp(&b.feature_type.rank()))
}

/// Sort records into canonical order
pub fn canonical_sort(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(compare_records);
    records
}

/// Sort borrowed records into canonical order
pub fn canonical_sort_refs(records: &mut [&Record]) {
    records.sort_by(|a, b| compare_records(a, b));
}

/// Check whether records are already in canonical order
pub fn is_canonically_sorted(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|w| compare_records(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureType;

    fn rec(chrom: &str, start: u64, feature: &str, id: &str) -> Record {
        Record {
            chromosome: chrom.to_string(),
            source: ".".to_string(),
            feature_type: FeatureType::parse(feature),
            start,
            end: start + 10,
            score: ".".to_string(),
            strand: "+".to_string(),
            phase: ".".to_string(),
            attributes: format!("ID={}", id),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.attributes.as_str()).collect()
    }

    #[test]
    fn test_natural_chromosome_order() {
        let records = vec![
            rec("chr10", 1, "gene", "a"),
            rec("chr2", 1, "gene", "b"),
            rec("chr1", 1, "gene", "c"),
        ];
        let sorted = canonical_sort(records);
        let chroms: Vec<_> = sorted.iter().map(|r| r.chromosome.as_str()).collect();
        assert_eq!(chroms, vec!["chr1", "chr2", "chr10"]);
    }

    #[test]
    fn test_start_then_rank() {
        let records = vec![
            rec("chr1", 500, "gene", "late"),
            rec("chr1", 100, "CDS", "cds"),
            rec("chr1", 100, "exon", "exon"),
            rec("chr1", 100, "mRNA", "mrna"),
            rec("chr1", 100, "gene", "gene"),
        ];
        let sorted = canonical_sort(records);
        assert_eq!(ids(&sorted), vec!["ID=gene", "ID=mrna", "ID=exon", "ID=cds", "ID=late"]);
    }

    #[test]
    fn test_unknown_type_ranks_last() {
        let records = vec![
            rec("chr1", 100, "novel_feature", "novel"),
            rec("chr1", 100, "CDS", "cds"),
            rec("chr1", 100, "stop_codon_read_through", "readthrough"),
        ];
        let sorted = canonical_sort(records);
        assert_eq!(ids(&sorted), vec!["ID=cds", "ID=readthrough", "ID=novel"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let records = vec![
            rec("chr1", 100, "exon", "first"),
            rec("chr1", 100, "exon", "second"),
            rec("chr1", 50, "gene", "gene"),
            rec("chr1", 100, "exon", "third"),
            rec("chr1", 100, "misc_feature", "u1"),
            rec("chr1", 100, "other_feature", "u2"),
        ];
        let sorted = canonical_sort(records);
        assert_eq!(
            ids(&sorted),
            vec!["ID=gene", "ID=first", "ID=second", "ID=third", "ID=u1", "ID=u2"]
        );
    }

    #[test]
    fn test_sort_refs_matches_owned() {
        let records = vec![
            rec("chr2", 5, "gene", "a"),
            rec("chr1", 9, "exon", "b"),
            rec("chr1", 9, "gene", "c"),
        ];
        let mut refs: Vec<&Record> = records.iter().collect();
        canonical_sort_refs(&mut refs);
        let sorted = canonical_sort(records.clone());
        assert!(refs.iter().copied().eq(sorted.iter()));
        assert!(is_canonically_sorted(&sorted));
        assert!(!is_canonically_sorted(&records));
    }
}
