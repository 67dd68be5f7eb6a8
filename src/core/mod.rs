//! Core data types for the assembly catalog.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`AssemblyRecord`]: One (assembly, patch) release with its metadata
//! - [`SequenceEntry`]: One chromosome/scaffold row in a release's sequence table
//! - [`Provider`], [`MetadataValue`]: Nomenclature and report-field types
//!
//! ## Sequence Naming
//!
//! Every sequence carries up to four identifiers, one per nomenclature:
//!
//! | Provider | Chromosome 1 | Mitochondrial |
//! |----------|--------------|---------------|
//! | ucsc     | chr1         | chrM          |
//! | ncbi     | 1            | MT            |
//! | genbank  | CM000663.2   | J01415.2      |
//! | refseq   | `NC_000001.11` | `NC_012920.1` |
//!
//! Lookups use **exact names** in all nomenclatures - tokens are never
//! case-folded or prefix-normalized, mirroring the reference identifiers'
//! own case sensitivity.
//!
//! [`AssemblyRecord`]: assembly::AssemblyRecord
//! [`SequenceEntry`]: sequence::SequenceEntry
//! [`Provider`]: types::Provider
//! [`MetadataValue`]: types::MetadataValue

pub mod assembly;
pub mod sequence;
pub mod types;
