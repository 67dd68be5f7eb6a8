//! Accession reverse lookups.
//!
//! Unlike the name-scoped queries, these scan the accession columns
//! across the whole table: an accession pins down one (assembly, patch)
//! row wherever it lives. Empty tokens are rejected before any scan.

use serde::Serialize;

use crate::catalog::store::AssemblyCatalog;
use crate::core::assembly::AssemblyRecord;
use crate::query::QueryError;

/// The names an accession's assembly is known by
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyNames {
    pub assembly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucsc_name: Option<String>,
}

impl AssemblyCatalog {
    /// Patch labels carrying this assembly-level accession (GenBank or
    /// RefSeq).
    ///
    /// # Errors
    ///
    /// `MissingArgument` for an empty token, `NotFound` when no accession
    /// column matches.
    pub fn get_patch_for_accession(&self, accession: &str) -> Result<Vec<String>, QueryError> {
        let record = self.record_by_accession(accession)?;
        Ok(vec![record.patch.clone()])
    }

    /// The assembly (canonical and UCSC names) carrying this accession
    pub fn get_assembly_for_accession(
        &self,
        accession: &str,
    ) -> Result<AssemblyNames, QueryError> {
        let record = self.record_by_accession(accession)?;
        Ok(AssemblyNames {
            assembly: record.assembly.clone(),
            ucsc_name: record.ucsc_name.clone(),
        })
    }

    /// Assembly-level GenBank accession of one patch; `None` when the
    /// release was never submitted to GenBank.
    ///
    /// # Errors
    ///
    /// `MissingArgument` for an empty label, `NotFound` for an unknown
    /// one.
    pub fn get_genbank_accession(&self, patch: &str) -> Result<Option<String>, QueryError> {
        Ok(self.patch_record(patch)?.genbank.clone())
    }

    /// Assembly-level RefSeq accession of one patch; `None` when NCBI
    /// never annotated the release.
    pub fn get_refseq_accession(&self, patch: &str) -> Result<Option<String>, QueryError> {
        Ok(self.patch_record(patch)?.refseq.clone())
    }

    fn record_by_accession(&self, accession: &str) -> Result<&AssemblyRecord, QueryError> {
        if accession.is_empty() {
            return Err(QueryError::MissingArgument {
                what: "accession",
                hint: accessions_hint(self),
            });
        }
        self.by_genbank(accession)
            .or_else(|| self.by_refseq(accession))
            .ok_or_else(|| QueryError::NotFound {
                token: accession.to_string(),
                hint: accessions_hint(self),
            })
    }

    fn patch_record(&self, patch: &str) -> Result<&AssemblyRecord, QueryError> {
        if patch.is_empty() {
            return Err(QueryError::MissingArgument {
                what: "patch",
                hint: format!("Pick a patch from: {:?}", self.patch_names()),
            });
        }
        self.by_patch(patch).ok_or_else(|| QueryError::NotFound {
            token: patch.to_string(),
            hint: format!("Pick a patch from: {:?}", self.patch_names()),
        })
    }
}

fn accessions_hint(catalog: &AssemblyCatalog) -> String {
    let genbank: Vec<&str> = catalog
        .records()
        .iter()
        .filter_map(|r| r.genbank.as_deref())
        .collect();
    let refseq: Vec<&str> = catalog
        .records()
        .iter()
        .filter_map(|r| r.refseq.as_deref())
        .collect();
    format!("Pick a GenBank accession from: {genbank:?} or a RefSeq accession from: {refseq:?}")
}
