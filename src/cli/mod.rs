//! Command-line interface for genome-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: Enumerate assemblies, patches, species, or accessions
//! - **info**: Show detailed metadata for one assembly
//! - **chroms**: Query chromosome names, sizes, equivalence, or the full
//!   sequence table
//! - **accession**: Accession and patch reverse lookups
//!
//! ## Usage
//!
//! ```text
//! # What assemblies does the catalog know?
//! genome-catalog list assemblies
//!
//! # Assembly metadata, by either nomenclature
//! genome-catalog info hg38
//!
//! # Assembled chromosomes with RefSeq identifiers
//! genome-catalog chroms GRCh38 --provider refseq --roles assembled
//!
//! # Chromosome sizes over a length cutoff, as JSON
//! genome-catalog chroms hg38 --sizes --length ">133137821" --format json
//!
//! # Which assembly carries this accession?
//! genome-catalog accession lookup GCA_000001405.29
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::AssemblyCatalog;

pub mod accession;
pub mod chroms;
pub mod info;
pub mod list;

#[derive(Parser)]
#[command(name = "genome-catalog")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Query genome assembly metadata, patches, and chromosome naming")]
#[command(
    long_about = "genome-catalog answers naming and metadata questions about genome assemblies.\n\nIt resolves assembly names, UCSC names, accessions, and patch labels against an embedded catalog and provides:\n- Assembly metadata with patch and accession history\n- Chromosome names and sizes in your choice of nomenclature\n- Identifier equivalence tables across nomenclatures\n- Accession to assembly/patch reverse lookups"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a custom catalog snapshot (defaults to embedded)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate assemblies, patches, species, or accessions
    List(list::ListArgs),

    /// Show detailed metadata for one assembly
    Info(info::InfoArgs),

    /// Query chromosome names, sizes, or cross-nomenclature equivalence
    Chroms(chroms::ChromsArgs),

    /// Accession and patch reverse lookups
    Accession(accession::AccessionArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the catalog a command should query: a snapshot file when the
/// global `--catalog` flag names one, the embedded catalog otherwise.
pub(crate) fn load_catalog(path: Option<&Path>) -> anyhow::Result<AssemblyCatalog> {
    let catalog = match path {
        Some(path) => AssemblyCatalog::load_from_file(path)?,
        None => AssemblyCatalog::load_embedded()?,
    };
    Ok(catalog)
}
