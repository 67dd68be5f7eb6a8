//! The query engine: identifier resolution, version selection, and
//! sequence filtering over the loaded catalog.
//!
//! Every public operation is a single resolve -> select-latest -> filter ->
//! project pipeline over the immutable [`AssemblyCatalog`]; there is no
//! session state between calls. The pieces:
//!
//! - [`resolver`]: classify a caller token by trying the nomenclature
//!   columns in fixed priority order
//! - [`version`]: order patch labels by trailing numeric version key and
//!   pick the authoritative release
//! - [`filter`]: typed role/unit/length predicates over a sequence table
//! - [`metadata`], [`chrom`], [`accession`]: the public operations,
//!   implemented as inherent methods on [`AssemblyCatalog`]
//!
//! Failures are deterministic caller errors, surfaced as [`QueryError`]
//! with a remediation hint; nothing is retried. Enumeration operations
//! (`list_*`) never fail - an unpopulated filter yields an empty result.
//!
//! [`AssemblyCatalog`]: crate::catalog::store::AssemblyCatalog

use thiserror::Error;

use crate::core::types::UnknownProvider;

pub mod accession;
pub mod chrom;
pub mod filter;
pub mod metadata;
pub mod resolver;
pub mod version;

/// A query that cannot be answered, with a hint toward valid input
#[derive(Error, Debug)]
pub enum QueryError {
    /// A required token was empty or absent; checked before any lookup
    #[error("no {what} provided! {hint}")]
    MissingArgument { what: &'static str, hint: String },

    /// The token matched none of the recognized columns
    #[error("'{token}' not in catalog! {hint}")]
    NotFound { token: String, hint: String },

    /// A nomenclature token outside the recognized enumeration
    #[error(transparent)]
    InvalidProvider(#[from] UnknownProvider),

    /// A length comparison that does not parse as `<op><integer>`
    #[error(
        "cannot parse length filter '{expression}': expected an integer \
         preceded by one of <, <=, >, >=, =="
    )]
    InvalidLengthFilter { expression: String },
}
