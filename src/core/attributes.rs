//! Attribute column helpers
//!
//! The GFF3 attribute column is a `;`-separated list of `key=value` pairs.
//! Only the `Name=` value is interpreted; everything else passes through.

use memchr::memchr;

const NAME_KEY: &str = "Name=";

/// Enumerated transcript suffix stripped from identifiers
pub const ENUMERATED_SUFFIX: &str = "-00001";

/// Derive the gene identifier from an attribute string
///
/// Takes the text after the first `Name=` up to the next `;` (or the end),
/// then strips a trailing `-00001` and a trailing `.t<digits>` suffix.
/// Without a `Name=` key the attribute string is returned unchanged.
///
/// # Examples
/// ```
/// use fast_gff3::core::extract_gene_id;
/// assert_eq!(extract_gene_id("ID=gene1;Name=BRCA2-00001;biotype=protein_coding"), "BRCA2");
/// assert_eq!(extract_gene_id("ID=t1;Name=ABC1.t1"), "ABC1");
/// assert_eq!(extract_gene_id("ID=x1;biotype=lncRNA"), "ID=x1;biotype=lncRNA");
/// ```
pub fn extract_gene_id(attributes: &str) -> &str {
    let Some(pos) = attributes.find(NAME_KEY) else {
        return attributes;
    };
    let rest = &attributes[pos + NAME_KEY.len()..];
    let value = match memchr(b';', rest.as_bytes()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    let value = value.strip_suffix(ENUMERATED_SUFFIX).unwrap_or(value);
    strip_transcript_suffix(value)
}

/// Strip a trailing `.t<digits>` transcript suffix
fn strip_transcript_suffix(value: &str) -> &str {
    let digits = value.bytes().rev().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return value;
    }
    let head = &value[..value.len() - digits];
    head.strip_suffix(".t").unwrap_or(value)
}

/// Raw value of the first `key=value` pair whose key equals `key`
///
/// Surrounding whitespace around each pair is ignored.
pub fn attribute_value<'a>(attributes: &'a str, key: &str) -> Option<&'a str> {
    attributes
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}
