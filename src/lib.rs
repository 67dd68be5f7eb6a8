//! # genome-catalog
//!
//! A read-only catalog of genome assembly metadata, patch releases, and
//! chromosome naming.
//!
//! The same genome goes by many names: "`GRCh38`" at NCBI, "hg38" at
//! UCSC, "`GCA_000001405.29`" at GenBank, and its chromosomes by "chr1",
//! "1", or "CM000663.2" depending on who you ask. `genome-catalog`
//! answers naming and metadata questions against an embedded snapshot of
//! assembly reports, resolving whichever nomenclature you hand it.
//!
//! ## Features
//!
//! - **Any-nomenclature resolution**: Canonical names, UCSC names,
//!   accessions, and patch labels all resolve to the same assembly
//! - **Latest-patch selection**: Assembly names denote the authoritative
//!   release; patch labels pin an exact one
//! - **Typed sequence filters**: Narrow by role, unit, and length
//!   without building query strings
//! - **Cross-nomenclature equivalence**: Map chromosome identifiers
//!   between naming schemes
//! - **Accession reverse lookups**: From an accession back to its
//!   assembly and patch
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_catalog::{AssemblyCatalog, Provider, SequenceFilter};
//!
//! // The embedded catalog, loaded once per process
//! let catalog = AssemblyCatalog::shared();
//!
//! // Metadata by UCSC name resolves the same assembly as "GRCh38"
//! let info = catalog.get_assembly_metadata("hg38").unwrap();
//! println!("{} latest patch: {}", info.assembly, info.patch);
//!
//! // Assembled chromosomes with their NCBI identifiers
//! let filter = SequenceFilter::new().with_roles(["assembled"]);
//! let sizes = catalog
//!     .get_chromosome_sizes("hg38", Some(Provider::Ncbi), &filter)
//!     .unwrap();
//!
//! for (name, length) in sizes {
//!     println!("{name}: {length}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, validation, and indexing
//! - [`core`]: Core data types for assemblies and sequences
//! - [`query`]: Resolution, version selection, filtering, and the public
//!   query operations
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod query;

// Re-export commonly used types for convenience
pub use catalog::store::{AssemblyCatalog, CatalogError};
pub use core::assembly::AssemblyRecord;
pub use core::sequence::SequenceEntry;
pub use core::types::{MetadataValue, Provider, UnknownProvider};
pub use query::accession::AssemblyNames;
pub use query::chrom::EquivalenceTable;
pub use query::filter::{LengthFilter, SequenceFilter};
pub use query::metadata::AssemblyMetadata;
pub use query::QueryError;
