//! I/O boundary helpers
//!
//! Opens GFF3 and gene-list inputs (plain, gzip or bzip2), reads them into
//! memory, and derives default output paths. Nothing in here interprets
//! records beyond handing lines to the parser.

use crate::core::error::{Gff3Error, GeneListError, Result};
use crate::core::parser::parse_lines_parallel;
use crate::core::query::GeneList;
use crate::core::Record;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Threshold for using memory mapping (100MB)
pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;

/// I/O strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoStrategy {
    /// Use buffered reading with configurable buffer size
    Buffered(usize),
    /// Use memory mapping for the entire file
    MemoryMapped,
    /// Memory-map large plain files, buffer everything else
    #[default]
    Auto,
}

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file extension, then magic bytes
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => return Ok(CompressionFormat::Gzip),
        Some("bz2") => return Ok(CompressionFormat::Bzip2),
        _ => {}
    }

    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    // BZ2 magic: "BZh" (0x42 0x5a 0x68)
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }
    Ok(CompressionFormat::Plain)
}

/// Input-side options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Parser worker threads (1 = sequential)
    pub threads: usize,
    /// How plain files are read
    pub io_strategy: IoStrategy,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            io_strategy: IoStrategy::Auto,
        }
    }
}

/// Memory-mapped file reader
pub struct MappedReader {
    mmap: Mmap,
    position: usize,
}

impl MappedReader {
    /// Create a new memory-mapped reader
    pub fn new(file: &File) -> io::Result<Self> {
        // SAFETY: We assume the file won't be modified while mapped
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self { mmap, position: 0 })
    }
}

impl Read for MappedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.mmap[self.position..];
        let to_read = std::cmp::min(buf.len(), remaining.len());
        buf[..to_read].copy_from_slice(&remaining[..to_read]);
        self.position += to_read;
        Ok(to_read)
    }
}

impl BufRead for MappedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(&self.mmap[self.position..])
    }

    fn consume(&mut self, amt: usize) {
        self.position = std::cmp::min(self.position + amt, self.mmap.len());
    }
}

/// A reader over a possibly compressed input file
pub enum SmartReader {
    /// Buffered plain file
    Buffered(BufReader<File>),
    /// Memory-mapped plain file
    Mapped(MappedReader),
    /// Gzip stream
    Gzip(BufReader<flate2::read::MultiGzDecoder<File>>),
    /// Bzip2 stream
    Bzip2(BufReader<bzip2::read::MultiBzDecoder<File>>),
}

impl SmartReader {
    /// Open a file, detecting compression and applying `strategy` to plain files
    pub fn open<P: AsRef<Path>>(path: P, strategy: IoStrategy) -> io::Result<Self> {
        let path = path.as_ref();
        let format = detect_compression(path)?;
        let file = File::open(path)?;

        match format {
            CompressionFormat::Gzip => Ok(SmartReader::Gzip(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                flate2::read::MultiGzDecoder::new(file),
            ))),
            CompressionFormat::Bzip2 => Ok(SmartReader::Bzip2(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                bzip2::read::MultiBzDecoder::new(file),
            ))),
            CompressionFormat::Plain => match strategy {
                IoStrategy::Buffered(buf_size) => {
                    Ok(SmartReader::Buffered(BufReader::with_capacity(buf_size, file)))
                }
                IoStrategy::MemoryMapped => Ok(SmartReader::Mapped(MappedReader::new(&file)?)),
                IoStrategy::Auto => {
                    if file.metadata()?.len() >= MMAP_THRESHOLD {
                        Ok(SmartReader::Mapped(MappedReader::new(&file)?))
                    } else {
                        Ok(SmartReader::Buffered(BufReader::with_capacity(
                            DEFAULT_BUFFER_SIZE,
                            file,
                        )))
                    }
                }
            },
        }
    }

    /// Open with default auto strategy
    pub fn open_auto<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::open(path, IoStrategy::Auto)
    }

    /// Check if using memory mapping
    pub fn is_mapped(&self) -> bool {
        matches!(self, SmartReader::Mapped(_))
    }

    /// Check if reading through a decompressor
    pub fn is_compressed(&self) -> bool {
        matches!(self, SmartReader::Gzip(_) | SmartReader::Bzip2(_))
    }
}

impl Read for SmartReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            SmartReader::Buffered(reader) => reader.read(buf),
            SmartReader::Mapped(reader) => reader.read(buf),
            SmartReader::Gzip(reader) => reader.read(buf),
            SmartReader::Bzip2(reader) => reader.read(buf),
        }
    }
}

impl BufRead for SmartReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            SmartReader::Buffered(reader) => reader.fill_buf(),
            SmartReader::Mapped(reader) => reader.fill_buf(),
            SmartReader::Gzip(reader) => reader.fill_buf(),
            SmartReader::Bzip2(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            SmartReader::Buffered(reader) => reader.consume(amt),
            SmartReader::Mapped(reader) => reader.consume(amt),
            SmartReader::Gzip(reader) => reader.consume(amt),
            SmartReader::Bzip2(reader) => reader.consume(amt),
        }
    }
}

/// Read every line of a reader, trailing `\n` / `\r\n` removed
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read and parse a GFF3 file
///
/// Parse failures are reported together with the file path.
pub fn read_gff3_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let reader = SmartReader::open(path, options.io_strategy)?;
    log::info!(
        "Reading {} ({})",
        path.display(),
        if reader.is_compressed() {
            "compressed"
        } else if reader.is_mapped() {
            "memory-mapped"
        } else {
            "buffered"
        }
    );
    let lines = read_lines(reader)?;
    parse_lines_parallel(&lines, options.threads).map_err(|e| match e {
        Gff3Error::Parse(source) => Gff3Error::Malformed {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Where a gene list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneSource {
    /// File with one identifier per line, or one column of a tab-separated table
    File { path: PathBuf, column: usize },
    /// A single identifier
    Literal(String),
}

impl GeneSource {
    /// Treat `value` as a file if such a file exists, else as an identifier
    pub fn from_arg(value: &str, column: usize) -> Self {
        let path = Path::new(value);
        if path.is_file() {
            GeneSource::File {
                path: path.to_path_buf(),
                column,
            }
        } else {
            GeneSource::Literal(value.to_string())
        }
    }

    /// Short label for output file names: file stem or the identifier itself
    pub fn label(&self) -> String {
        match self {
            GeneSource::File { path, .. } => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "genes".to_string()),
            GeneSource::Literal(id) => id.clone(),
        }
    }

    /// Load the gene list
    pub fn resolve(&self) -> std::result::Result<GeneList, GeneListError> {
        match self {
            GeneSource::File { path, column } => {
                let reader = SmartReader::open_auto(path)?;
                read_gene_list(reader, *column)
            }
            GeneSource::Literal(id) => Ok(GeneList::single(id.as_str())),
        }
    }
}

/// Read a gene list from a reader
///
/// Single-column lines contribute the whole line. Multi-column
/// (tab-separated) lines contribute the value at `column` (0-based).
/// Blank lines are ignored.
pub fn read_gene_list<R: BufRead>(
    reader: R,
    column: usize,
) -> std::result::Result<GeneList, GeneListError> {
    let mut list = GeneList::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        let id = if cols.len() == 1 {
            cols[0]
        } else {
            *cols.get(column).ok_or(GeneListError::ColumnOutOfRange {
                line: idx + 1,
                column,
                found: cols.len(),
            })?
        };
        list.insert(id);
    }
    log::debug!("Loaded {} gene identifiers", list.len());
    Ok(list)
}

/// Input path with compression and `.gff3` / `.gff` extensions removed
pub fn output_stem(input: &Path) -> PathBuf {
    let mut stem = input.to_path_buf();
    if matches!(stem.extension().and_then(|e| e.to_str()), Some("gz" | "bz2")) {
        stem.set_extension("");
    }
    if matches!(stem.extension().and_then(|e| e.to_str()), Some("gff3" | "gff")) {
        stem.set_extension("");
    }
    stem
}

/// Default output path: the input stem followed by `suffix`
///
/// # Examples
/// ```
/// use fast_gff3::core::io::default_output_path;
/// use std::path::Path;
/// assert_eq!(
///     default_output_path(Path::new("data/annot.gff3.gz"), ".sorted.gff3"),
///     Path::new("data/annot.sorted.gff3")
/// );
/// ```
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = output_stem(input);
    let mut name = stem.into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Create a buffered output file
pub fn create_writer<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::create(path)?))
}
