//! Property-based tests for BED and GTF output
//!
//! **Feature: fast-gff3, BED / GTF conversion**

use fast_gff3::core::{FeatureType, Record};
use fast_gff3::formats::bed::{format_bed, write_bed, BedLayout};
use fast_gff3::formats::gtf::{format_gtf, GtfLayout};
use proptest::prelude::*;

/// Generate a feature type
fn arb_feature() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("gene".to_string()),
        Just("pseudogene".to_string()),
        Just("mRNA".to_string()),
        Just("exon".to_string()),
        Just("CDS".to_string()),
        Just("ncRNA_gene".to_string()),
    ]
}

/// Generate a strand field
fn arb_strand() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("+".to_string()),
        Just("-".to_string()),
        Just(".".to_string()),
    ]
}

/// Generate a record whose Name= value carries an optional suffix
fn arb_record() -> impl Strategy<Value = (Record, String)> {
    (
        (1u8..=22).prop_map(|n| format!("chr{}", n)),
        arb_feature(),
        1u64..1_000_000,
        1u64..10_000,
        arb_strand(),
        "[A-Z]{2,4}[0-9]{1,2}",
        prop_oneof![Just(""), Just("-00001"), Just(".t1"), Just(".t3")],
    )
        .prop_map(|(chrom, feature, start, len, strand, name, suffix)| {
            let record = Record {
                chromosome: chrom,
                source: "maker".to_string(),
                feature_type: FeatureType::parse(&feature),
                start,
                end: start + len,
                score: ".".to_string(),
                strand,
                phase: ".".to_string(),
                attributes: format!("ID=x1;Name={}{};Note=test", name, suffix),
            };
            (record, name)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: gene BED lines carry chrom, start, end, identifier
    #[test]
    fn prop_bed_gene_layout((record, name) in arb_record()) {
        match format_bed(&record, BedLayout::Gene) {
            Some(line) => {
                prop_assert_eq!(&record.feature_type, &FeatureType::Gene);
                let expected = format!("{}\t{}\t{}\t{}", record.chromosome, record.start, record.end, name);
                prop_assert_eq!(line, expected);
            }
            None => prop_assert_ne!(&record.feature_type, &FeatureType::Gene),
        }
    }

    /// Property: all-feature BED keeps every record with six columns
    #[test]
    fn prop_bed_all_features_layout((record, name) in arb_record()) {
        let line = format_bed(&record, BedLayout::AllFeatures).unwrap();
        let fields: Vec<&str> = line.split('\t').collect();
        prop_assert_eq!(fields.len(), 6);
        prop_assert_eq!(fields[0], record.chromosome.as_str());
        prop_assert_eq!(fields[3], name.as_str());
        prop_assert_eq!(fields[4], record.score.as_str());
        prop_assert_eq!(fields[5], record.strand.as_str());
    }

    /// Property: extracted-gene BED puts the identifier first
    #[test]
    fn prop_bed_extracted_gene_layout((record, name) in arb_record()) {
        match format_bed(&record, BedLayout::ExtractedGene) {
            Some(line) => {
                prop_assert!(record.feature_type.is_gene_like());
                let expected = format!(
                    "{}\t{}\t{}\t{}\t{}",
                    name, record.chromosome, record.start, record.end, record.strand
                );
                prop_assert_eq!(line, expected);
            }
            None => prop_assert!(!record.feature_type.is_gene_like()),
        }
    }

    /// Property: legacy GTF has eight columns and no feature type
    #[test]
    fn prop_gtf_legacy_layout((record, _name) in arb_record()) {
        let line = format_gtf(&record, GtfLayout::Legacy);
        let fields: Vec<&str> = line.split('\t').collect();
        prop_assert_eq!(fields.len(), 8);
        prop_assert_eq!(fields[1], "maker");
        prop_assert_eq!(fields[2], record.start.to_string());
        prop_assert_eq!(fields[7], record.attributes.as_str());
    }
}

#[test]
fn test_write_bed_skips_filtered_records() {
    let lines = [
        "chr1\tmaker\tgene\t100\t900\t.\t+\t.\tID=g1;Name=ABC1",
        "chr1\tmaker\tmRNA\t100\t900\t.\t+\t.\tID=t1;Name=ABC1.t1",
        "chr1\tmaker\texon\t100\t300\t.\t+\t.\tID=e1;Name=ABC1.t1",
    ];
    let records: Vec<Record> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| Record::parse_line(l, i + 1).unwrap())
        .collect();

    let mut out = Vec::new();
    let stats = write_bed(&records, &mut out, BedLayout::Transcript).unwrap();
    assert_eq!(stats.written, 1);
    assert_eq!(stats.skipped, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "chr1\t100\t900\t+\tABC1\n");
}
