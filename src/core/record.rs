//! GFF3 record model
//!
//! One feature line, nine fixed columns:
//! seqid, source, type, start, end, score, strand, phase, attributes.
//! Coordinates are 1-based, closed interval [start, end].

use crate::core::attributes::extract_gene_id;
use std::fmt;

/// Feature type (GFF3 column 3)
///
/// Known types carry a fixed rank used by the canonical ordering.
/// Anything else is kept verbatim in `Other` and ranks after all known types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureType {
    Gene,
    Pseudogene,
    MRna,
    Transcript,
    Exon,
    Cds,
    NonCanonicalFivePrimeSpliceSite,
    NonCanonicalThreePrimeSpliceSite,
    StopCodonReadThrough,
    Other(String),
}

impl FeatureType {
    /// Rank of an unrecognised feature type
    pub const UNKNOWN_RANK: u32 = u32::MAX;

    /// Map column text to a feature type
    ///
    /// # Examples
    /// ```
    /// use fast_gff3::core::FeatureType;
    /// assert_eq!(FeatureType::parse("mRNA"), FeatureType::MRna);
    /// assert_eq!(FeatureType::parse("lnc_RNA"), FeatureType::Other("lnc_RNA".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "gene" => FeatureType::Gene,
            "pseudogene" => FeatureType::Pseudogene,
            "mRNA" => FeatureType::MRna,
            "transcript" => FeatureType::Transcript,
            "exon" => FeatureType::Exon,
            "CDS" => FeatureType::Cds,
            "non_canonical_five_prime_splice_site" => FeatureType::NonCanonicalFivePrimeSpliceSite,
            "non_canonical_three_prime_splice_site" => FeatureType::NonCanonicalThreePrimeSpliceSite,
            "stop_codon_read_through" => FeatureType::StopCodonReadThrough,
            other => FeatureType::Other(other.to_string()),
        }
    }

    /// Original column text
    pub fn as_str(&self) -> &str {
        match self {
            FeatureType::Gene => "gene",
            FeatureType::Pseudogene => "pseudogene",
            FeatureType::MRna => "mRNA",
            FeatureType::Transcript => "transcript",
            FeatureType::Exon => "exon",
            FeatureType::Cds => "CDS",
            FeatureType::NonCanonicalFivePrimeSpliceSite => "non_canonical_five_prime_splice_site",
            FeatureType::NonCanonicalThreePrimeSpliceSite => "non_canonical_three_prime_splice_site",
            FeatureType::StopCodonReadThrough => "stop_codon_read_through",
            FeatureType::Other(s) => s,
        }
    }

    /// Position in the canonical ordering table
    pub fn rank(&self) -> u32 {
        match self {
            FeatureType::Gene => 0,
            FeatureType::Pseudogene => 1,
            FeatureType::MRna => 2,
            FeatureType::Transcript => 3,
            FeatureType::Exon => 4,
            FeatureType::Cds => 5,
            FeatureType::NonCanonicalFivePrimeSpliceSite => 6,
            FeatureType::NonCanonicalThreePrimeSpliceSite => 7,
            FeatureType::StopCodonReadThrough => 8,
            FeatureType::Other(_) => Self::UNKNOWN_RANK,
        }
    }

    /// Loose gene rule: the type text contains "gene"
    ///
    /// Matches `gene` and `pseudogene` as well as unlisted types such as
    /// `ncRNA_gene`. Case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use fast_gff3::core::FeatureType;
    /// assert!(FeatureType::Pseudogene.is_gene_like());
    /// assert!(FeatureType::parse("ncRNA_gene").is_gene_like());
    /// assert!(!FeatureType::MRna.is_gene_like());
    /// ```
    pub fn is_gene_like(&self) -> bool {
        match self {
            FeatureType::Gene | FeatureType::Pseudogene => true,
            FeatureType::Other(s) => s.contains("gene"),
            _ => false,
        }
    }

    /// Loose transcript rule: the type text contains "mRNA"
    pub fn is_mrna_like(&self) -> bool {
        match self {
            FeatureType::MRna => true,
            FeatureType::Other(s) => s.contains("mRNA"),
            _ => false,
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One GFF3 feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Sequence name (chromosome / contig)
    pub chromosome: String,
    /// Annotation source
    pub source: String,
    /// Feature type
    pub feature_type: FeatureType,
    /// Start position (1-based)
    pub start: u64,
    /// End position (1-based, inclusive)
    pub end: u64,
    /// Score text, may be "."
    pub score: String,
    /// Strand text, normally one of "+", "-", "."
    pub strand: String,
    /// Phase text
    pub phase: String,
    /// Attribute column (`key=value;key=value`)
    pub attributes: String,
}

impl Record {
    /// Number of GFF3 columns
    pub const FIELD_COUNT: usize = 9;

    /// Gene identifier derived from the `Name=` attribute
    pub fn gene_id(&self) -> &str {
        extract_gene_id(&self.attributes)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chromosome,
            self.source,
            self.feature_type,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.phase,
            self.attributes
        )
    }
}
