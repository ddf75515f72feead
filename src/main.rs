//! FastGFF3 CLI entry point
//!
//! Sort, subset and convert GFF3 annotation files.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fast_gff3::core::io::{create_writer, default_output_path};
use fast_gff3::core::{
    canonical_sort, extract_genes, extract_range, read_gff3_file, EmptyReason, Extraction, GeneSource,
    RangeQuery, ReadOptions, Record,
};
use fast_gff3::formats::{self, BedLayout, GtfLayout, WriteStats};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fast-gff3")]
#[command(about = "Sort, extract and convert GFF3 annotation files")]
#[command(version)]
#[command(author = "FastGFF3 Contributors")]
struct Cli {
    /// Number of parser threads
    #[arg(short = 't', long, global = true, default_value = "1")]
    threads: usize,

    #[command(subcommand)]
    command: Commands,
}

/// BED layout selectable from the command line
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum BedLayoutArg {
    /// gene records: chrom, start, end, name
    #[default]
    #[value(name = "gene")]
    Gene,
    /// every record: chrom, start, end, name, score, strand
    #[value(name = "all")]
    All,
    /// mRNA records: chrom, start, end, strand, name
    #[value(name = "transcript")]
    Transcript,
}

impl From<BedLayoutArg> for BedLayout {
    fn from(arg: BedLayoutArg) -> Self {
        match arg {
            BedLayoutArg::Gene => BedLayout::Gene,
            BedLayoutArg::All => BedLayout::AllFeatures,
            BedLayoutArg::Transcript => BedLayout::Transcript,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a GFF3 file into canonical order
    Sort {
        /// Input GFF3 file
        input: PathBuf,
        /// Output file (default: <input>.sorted.gff3)
        output: Option<PathBuf>,
    },
    /// Extract features fully contained in a genomic range
    Range {
        /// Input GFF3 file
        input: PathBuf,
        /// Chromosome (matched as a substring of the sequence name)
        #[arg(short = 'c', long = "chrom")]
        chromosome: String,
        /// Range start (1-based, inclusive)
        #[arg(short = 's', long)]
        start: u64,
        /// Range end (1-based, inclusive)
        #[arg(short = 'e', long)]
        end: u64,
        /// Output file (default: <input>_extracted_<start>_<end>.gff3)
        output: Option<PathBuf>,
    },
    /// Extract genes from a list together with their child features
    Genes {
        /// Input GFF3 file
        input: PathBuf,
        /// Gene list file, or a single gene identifier
        #[arg(short = 'l', long = "genes")]
        genes: String,
        /// Column holding the identifier in multi-column gene list files (0-based)
        #[arg(long, default_value = "0")]
        column: usize,
        /// Write gene coordinates as BED (name, chrom, start, end, strand)
        #[arg(long)]
        bed: bool,
        /// Output file (default: <input>_extracted_<list>.gff3 or .bed)
        output: Option<PathBuf>,
    },
    /// Convert GFF3 to GTF
    Gtf {
        /// Input GFF3 file
        input: PathBuf,
        /// Keep the feature type column (9 columns instead of 8)
        #[arg(long)]
        with_feature_type: bool,
        /// Output file (default: <input>.gtf)
        output: Option<PathBuf>,
    },
    /// Convert GFF3 to BED
    Bed {
        /// Input GFF3 file
        input: PathBuf,
        /// Output layout
        #[arg(long, value_enum, default_value = "gene")]
        layout: BedLayoutArg,
        /// Output file (default: <input>.bed)
        output: Option<PathBuf>,
    },
}

fn load_sorted(input: &Path, options: &ReadOptions) -> anyhow::Result<Vec<Record>> {
    let start = Instant::now();
    eprintln!("Loading GFF3 file: {:?}", input);

    let records = read_gff3_file(input, options)
        .with_context(|| format!("Failed to load GFF3 file {:?}", input))?;
    let sorted = canonical_sort(records);

    eprintln!("{} records loaded and sorted in {:.2}s", sorted.len(), start.elapsed().as_secs_f64());
    Ok(sorted)
}

fn write_output<F>(output: &Path, write: F) -> anyhow::Result<WriteStats>
where
    F: FnOnce(&mut dyn std::io::Write) -> std::io::Result<WriteStats>,
{
    let mut writer = create_writer(output)
        .with_context(|| format!("Failed to create output file {:?}", output))?;
    let stats = write(&mut writer).with_context(|| format!("Failed to write {:?}", output))?;
    Ok(stats)
}

fn report_empty(reason: &EmptyReason) {
    log::warn!("{}", reason);
    eprintln!("{}", reason);
}

fn print_stats(total: usize, stats: &WriteStats, start: Instant) {
    eprintln!("\n=== Statistics ===");
    eprintln!("Input records:   {}", total);
    eprintln!("Written:         {}", stats.written);
    eprintln!("Skipped:         {}", stats.skipped);
    eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();
    let options = ReadOptions {
        threads: cli.threads,
        ..ReadOptions::default()
    };

    match cli.command {
        Commands::Sort { input, output } => {
            let records = load_sorted(&input, &options)?;
            let output_path = output.unwrap_or_else(|| default_output_path(&input, ".sorted.gff3"));

            eprintln!("Writing sorted GFF3: {:?}", output_path);
            let stats = write_output(&output_path, |w| formats::write_gff3(&records, w))?;
            print_stats(records.len(), &stats, start);
        }

        Commands::Range { input, chromosome, start: range_start, end, output } => {
            let records = load_sorted(&input, &options)?;
            let query = RangeQuery::new(chromosome, range_start, end);

            match extract_range(&records, &query) {
                Extraction::Empty(reason) => report_empty(&reason),
                Extraction::Records(subset) => {
                    let suffix = format!("_extracted_{}_{}.gff3", range_start, end);
                    let output_path = output.unwrap_or_else(|| default_output_path(&input, &suffix));

                    eprintln!("Writing range {}:{}-{}: {:?}", query.chromosome, range_start, end, output_path);
                    let stats = write_output(&output_path, |w| formats::write_gff3(&subset, w))?;
                    print_stats(records.len(), &stats, start);
                }
            }
        }

        Commands::Genes { input, genes, column, bed, output } => {
            let source = GeneSource::from_arg(&genes, column);
            let gene_list = source
                .resolve()
                .with_context(|| format!("Failed to read gene list {:?}", genes))?;
            eprintln!("Gene list: {} identifiers", gene_list.len());

            let records = load_sorted(&input, &options)?;

            match extract_genes(&records, &gene_list) {
                Extraction::Empty(reason) => report_empty(&reason),
                Extraction::Records(subset) => {
                    let extension = if bed { "bed" } else { "gff3" };
                    let suffix = format!("_extracted_{}.{}", source.label(), extension);
                    let output_path = output.unwrap_or_else(|| default_output_path(&input, &suffix));

                    eprintln!("Writing extracted genes: {:?}", output_path);
                    let stats = if bed {
                        write_output(&output_path, |w| {
                            formats::write_bed(&subset, w, BedLayout::ExtractedGene)
                        })?
                    } else {
                        write_output(&output_path, |w| formats::write_gff3(&subset, w))?
                    };
                    print_stats(records.len(), &stats, start);
                }
            }
        }

        Commands::Gtf { input, with_feature_type, output } => {
            let records = load_sorted(&input, &options)?;
            let layout = if with_feature_type {
                GtfLayout::WithFeatureType
            } else {
                GtfLayout::Legacy
            };
            let output_path = output.unwrap_or_else(|| default_output_path(&input, ".gtf"));

            eprintln!("Converting GFF3 to GTF: {:?} -> {:?}", input, output_path);
            let stats = write_output(&output_path, |w| formats::write_gtf(&records, w, layout))?;
            print_stats(records.len(), &stats, start);
        }

        Commands::Bed { input, layout, output } => {
            let records = load_sorted(&input, &options)?;
            let output_path = output.unwrap_or_else(|| default_output_path(&input, ".bed"));

            eprintln!("Converting GFF3 to BED: {:?} -> {:?}", input, output_path);
            let stats = write_output(&output_path, |w| formats::write_bed(&records, w, layout.into()))?;
            print_stats(records.len(), &stats, start);
        }
    }

    Ok(())
}
