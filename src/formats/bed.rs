//! BED emitter
//!
//! Several BED-like layouts are produced, each tied to the operation that
//! uses it. The name column is always the gene identifier derived from the
//! `Name=` attribute. Coordinates are written exactly as parsed (1-based);
//! no conversion to 0-based half-open is applied.

use crate::core::{FeatureType, Record};
use crate::formats::{write_records, WriteStats};
use std::io::{self, Write};

/// BED column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedLayout {
    /// `gene` records only: chromosome, start, end, identifier
    #[default]
    Gene,
    /// Every record: chromosome, start, end, identifier, score, strand
    AllFeatures,
    /// Gene-like records of a gene-list extraction:
    /// identifier, chromosome, start, end, strand
    ExtractedGene,
    /// mRNA records: chromosome, start, end, strand, identifier
    Transcript,
}

impl BedLayout {
    /// Check whether a record is written under this layout
    pub fn selects(&self, record: &Record) -> bool {
        match self {
            BedLayout::Gene => record.feature_type == FeatureType::Gene,
            BedLayout::AllFeatures => true,
            BedLayout::ExtractedGene => record.feature_type.is_gene_like(),
            BedLayout::Transcript => record.feature_type.is_mrna_like(),
        }
    }

    /// Number of columns written
    pub fn field_count(&self) -> usize {
        match self {
            BedLayout::Gene => 4,
            BedLayout::AllFeatures => 6,
            BedLayout::ExtractedGene | BedLayout::Transcript => 5,
        }
    }
}

/// Render a record under `layout`, or None if the layout skips it
pub fn format_bed(record: &Record, layout: BedLayout) -> Option<String> {
    if !layout.selects(record) {
        return None;
    }
    let id = record.gene_id();
    let line = match layout {
        BedLayout::Gene => format!(
            "{}\t{}\t{}\t{}",
            record.chromosome, record.start, record.end, id
        ),
        BedLayout::AllFeatures => format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.chromosome, record.start, record.end, id, record.score, record.strand
        ),
        BedLayout::ExtractedGene => format!(
            "{}\t{}\t{}\t{}\t{}",
            id, record.chromosome, record.start, record.end, record.strand
        ),
        BedLayout::Transcript => format!(
            "{}\t{}\t{}\t{}\t{}",
            record.chromosome, record.start, record.end, record.strand, id
        ),
    };
    Some(line)
}

/// Write records under `layout`
pub fn write_bed<'a, I, W>(records: I, writer: &mut W, layout: BedLayout) -> io::Result<WriteStats>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write + ?Sized,
{
    write_records(records, writer, |r| format_bed(r, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_lines;

    const INPUT: &str = "\
chr1\tmaker\tgene\t100\t900\t.\t+\t.\tID=g1;Name=ABC1
chr1\tmaker\tmRNA\t100\t900\t.\t+\t.\tID=t1;Parent=g1;Name=ABC1.t1
chr1\tmaker\texon\t100\t300\t7\t+\t.\tID=e1;Parent=t1;Name=ABC1.t1
chr1\tmaker\tpseudogene\t1000\t1500\t.\t-\t.\tID=p1;Name=PSG1-00001
chr1\tmaker\tCDS\t150\t300\t.\t+\t0\tID=c1;Parent=t1";

    fn bed(layout: BedLayout) -> Vec<String> {
        let records = parse_lines(INPUT.lines()).unwrap();
        records.iter().filter_map(|r| format_bed(r, layout)).collect()
    }

    #[test]
    fn test_gene_layout() {
        assert_eq!(bed(BedLayout::Gene), vec!["chr1\t100\t900\tABC1"]);
    }

    #[test]
    fn test_all_features_layout() {
        let lines = bed(BedLayout::AllFeatures);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "chr1\t100\t900\tABC1\t.\t+");
        assert_eq!(lines[2], "chr1\t100\t300\tABC1\t7\t+");
        assert_eq!(lines[3], "chr1\t1000\t1500\tPSG1\t.\t-");
        // No Name= key: identifier degrades to the attribute string
        assert_eq!(lines[4], "chr1\t150\t300\tID=c1;Parent=t1\t.\t+");
    }

    #[test]
    fn test_extracted_gene_layout() {
        assert_eq!(
            bed(BedLayout::ExtractedGene),
            vec!["ABC1\tchr1\t100\t900\t+", "PSG1\tchr1\t1000\t1500\t-"]
        );
    }

    #[test]
    fn test_transcript_layout() {
        assert_eq!(bed(BedLayout::Transcript), vec!["chr1\t100\t900\t+\tABC1"]);
    }

    #[test]
    fn test_field_counts() {
        for layout in [
            BedLayout::Gene,
            BedLayout::AllFeatures,
            BedLayout::ExtractedGene,
            BedLayout::Transcript,
        ] {
            for line in bed(layout) {
                assert_eq!(line.split('\t').count(), layout.field_count());
            }
        }
    }

    #[test]
    fn test_write_bed_stats() {
        let records = parse_lines(INPUT.lines()).unwrap();
        let mut out = Vec::new();
        let stats = write_bed(&records, &mut out, BedLayout::Gene).unwrap();
        assert_eq!(stats, WriteStats { written: 1, skipped: 4 });
        assert_eq!(String::from_utf8(out).unwrap(), "chr1\t100\t900\tABC1\n");
    }
}
