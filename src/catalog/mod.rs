//! Assembly catalog storage and indexing.
//!
//! The catalog is a flat table of [`AssemblyRecord`]s (one per assembly
//! patch) with hash indexes over every resolvable column. An embedded
//! snapshot is compiled into the binary, but custom snapshots can also be
//! loaded from JSON files. Loading validates the table invariants -
//! duplicate patches, accessions, or a `latest` tag that disagrees with
//! version ordering are rejected, never silently repaired.
//!
//! ## Embedded Snapshot
//!
//! The default snapshot covers the assemblies the build pipeline tracks:
//!
//! - **GRCh38/hg38**: base release plus patches p13 and p14
//! - **GRCh37/hg19**: base release plus patch p13
//! - **T2T-CHM13/hs1**: v1.1 and v2.0
//! - **GRCm39/mm39**: single release
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_catalog::AssemblyCatalog;
//!
//! // The process-wide instance, loaded once on first access
//! let catalog = AssemblyCatalog::shared();
//!
//! for record in catalog.records() {
//!     println!("{} ({})", record.patch, record.species);
//! }
//! ```
//!
//! ## Custom Snapshots
//!
//! ```rust,no_run
//! use genome_catalog::AssemblyCatalog;
//! use std::path::Path;
//!
//! let catalog = AssemblyCatalog::load_from_file(Path::new("my_snapshot.json")).unwrap();
//! let json = catalog.to_json().unwrap();
//! ```
//!
//! [`AssemblyRecord`]: crate::core::assembly::AssemblyRecord

pub mod store;
