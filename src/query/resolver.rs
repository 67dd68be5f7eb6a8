//! Token classification against the catalog's nomenclature columns.
//!
//! A caller token arrives without a declared kind: "GRCh38" is a canonical
//! assembly name, "hg38" a UCSC name, "`GCA_000001405.29`" a GenBank
//! accession, "GRCh38.p14" a patch label. The resolver tries each column
//! in a fixed priority order and stops at the first hit; matching is
//! exact and case-sensitive throughout.

use crate::catalog::store::AssemblyCatalog;
use crate::core::assembly::AssemblyRecord;
use crate::query::QueryError;

/// A nomenclature column the resolver can match a token against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKey {
    /// Canonical NCBI assembly name (e.g., "GRCh38")
    Assembly,
    /// UCSC nomenclature name (e.g., "hg38")
    UcscName,
    /// Assembly-level GenBank accession (e.g., "`GCA_000001405.29`")
    Genbank,
    /// Assembly-level RefSeq accession (e.g., "`GCF_000001405.40`")
    Refseq,
    /// Patch label (e.g., "GRCh38.p14")
    Patch,
}

/// The full classification order: canonical name first, then UCSC name,
/// accessions, and finally patch labels
pub const FULL_PRIORITY: [ResolveKey; 5] = [
    ResolveKey::Assembly,
    ResolveKey::UcscName,
    ResolveKey::Genbank,
    ResolveKey::Refseq,
    ResolveKey::Patch,
];

/// A successfully classified token: which column matched, and every row it
/// denotes (several rows when the token names an assembly spanning patches)
#[derive(Debug)]
pub struct Resolution<'a> {
    pub key: ResolveKey,
    pub rows: Vec<&'a AssemblyRecord>,
}

/// Classify a token against all recognized columns.
///
/// # Errors
///
/// `MissingArgument` for an empty token (checked before any scan);
/// `NotFound` when no column matches, with the catalog's valid names in
/// the hint.
pub fn resolve<'a>(catalog: &'a AssemblyCatalog, token: &str) -> Result<Resolution<'a>, QueryError> {
    resolve_keys(catalog, token, &FULL_PRIORITY)
}

/// Classify a token against a restricted column set, in the given order.
///
/// Operations that only accept certain nomenclatures (chromosome queries
/// take assembly names, not accessions) pass the columns they recognize.
pub fn resolve_keys<'a>(
    catalog: &'a AssemblyCatalog,
    token: &str,
    keys: &[ResolveKey],
) -> Result<Resolution<'a>, QueryError> {
    if token.is_empty() {
        return Err(QueryError::MissingArgument {
            what: "assembly",
            hint: names_hint(catalog),
        });
    }

    for &key in keys {
        let rows: Vec<&AssemblyRecord> = match key {
            ResolveKey::Assembly => catalog.assembly_group(token),
            ResolveKey::UcscName => catalog.ucsc_group(token),
            ResolveKey::Genbank => catalog.by_genbank(token).into_iter().collect(),
            ResolveKey::Refseq => catalog.by_refseq(token).into_iter().collect(),
            ResolveKey::Patch => catalog.by_patch(token).into_iter().collect(),
        };
        if !rows.is_empty() {
            return Ok(Resolution { key, rows });
        }
    }

    Err(QueryError::NotFound {
        token: token.to_string(),
        hint: names_hint(catalog),
    })
}

/// Remediation hint enumerating the valid canonical and alternate names
pub(crate) fn names_hint(catalog: &AssemblyCatalog) -> String {
    format!(
        "Pick an assembly using the NCBI nomenclature from: {:?} or the UCSC nomenclature from: {:?}",
        catalog.assembly_names(),
        catalog.ucsc_names()
    )
}
