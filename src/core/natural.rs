//! Natural (numeric-aware) string ordering
//!
//! Names are split into alternating runs of ASCII digits and non-digits.
//! Digit runs compare by numeric value, other runs compare bytewise,
//! so `chr2 < chr10` and `scaffold_9 < scaffold_10`.

use std::cmp::Ordering;

/// One run of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Iterator over the digit / non-digit runs of a string
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = *self.rest.as_bytes().first()?;
        let is_digit = first.is_ascii_digit();
        let len = self
            .rest
            .bytes()
            .take_while(|b| b.is_ascii_digit() == is_digit)
            .count();
        // Digit boundaries are ASCII, so `len` is always a char boundary
        let (run, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(if is_digit { Chunk::Digits(run) } else { Chunk::Text(run) })
    }
}

fn chunks(s: &str) -> Chunks<'_> {
    Chunks { rest: s }
}

/// Compare two digit runs by value without parsing (no overflow)
///
/// Equal values fall back to the number of leading zeros, fewer first,
/// which keeps the ordering total ("01" and "1" are not equal).
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
        .then_with(|| a.len().cmp(&b.len()))
}

fn cmp_chunk(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => cmp_digits(x, y),
        (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
    }
}

/// Natural ordering of two names
///
/// # Examples
/// ```
/// use fast_gff3::core::natural_cmp;
/// use std::cmp::Ordering;
/// assert_eq!(natural_cmp("chr2", "chr10"), Ordering::Less);
/// assert_eq!(natural_cmp("chrX", "chr22"), Ordering::Greater);
/// assert_eq!(natural_cmp("chr1", "chr1"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a);
    let mut right = chunks(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match cmp_chunk(x, y) {
                Ordering::Equal => continue,
                ord => return ord,
            },
        }
    }
}
