//! Assembly-level metadata and enumeration operations.
//!
//! `get_assembly_metadata` merges the authoritative release's report
//! fields with a group-level summary (synonyms, patch history, accession
//! history). The `list_*` operations are pure projections over the whole
//! table and never fail; an unknown assembly yields an empty Vec.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::store::AssemblyCatalog;
use crate::core::assembly::AssemblyRecord;
use crate::core::types::MetadataValue;
use crate::query::resolver::resolve;
use crate::query::version::select_latest;
use crate::query::QueryError;

/// Detailed information for one assembly, summarized across its patch
/// rows with the authoritative release's fields called out.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyMetadata {
    /// Canonical assembly name
    pub assembly: String,

    /// UCSC name, when UCSC adopted the assembly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucsc_name: Option<String>,

    pub species: String,
    pub common_name: String,

    /// Every name denoting this assembly (canonical plus UCSC)
    pub synonyms: Vec<String>,

    /// Patch label of the authoritative release
    pub patch: String,

    /// All patch labels of this assembly, in release order
    pub patches: Vec<String>,

    /// GenBank accessions across the patch history
    pub genbank_accessions: Vec<String>,

    /// RefSeq accessions across the patch history
    pub refseq_accessions: Vec<String>,

    /// Assembly-level accessions of the authoritative release
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genbank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refseq: Option<String>,

    /// Report fields of the authoritative release
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl AssemblyCatalog {
    /// Get detailed metadata for an assembly.
    ///
    /// The token may be a canonical name, UCSC name, accession, or patch
    /// label; whichever matches, the summary always covers the full patch
    /// history of the assembly it denotes, and the singular fields come
    /// from the authoritative release. Resolving "GRCh38", "hg38", and
    /// "`GCA_000001405.29`" therefore yields the same answer.
    ///
    /// # Errors
    ///
    /// `MissingArgument` for an empty token, `NotFound` for an
    /// unrecognized one.
    pub fn get_assembly_metadata(&self, token: &str) -> Result<AssemblyMetadata, QueryError> {
        let resolution = resolve(self, token)?;

        // Widen to the whole assembly group, whichever column matched
        let group = self.assembly_group(&resolution.rows[0].assembly);
        let latest = select_latest(&group).ok_or_else(|| QueryError::NotFound {
            token: token.to_string(),
            hint: crate::query::resolver::names_hint(self),
        })?;

        let mut synonyms = vec![latest.assembly.clone()];
        if let Some(ucsc) = &latest.ucsc_name {
            synonyms.push(ucsc.clone());
        }

        Ok(AssemblyMetadata {
            assembly: latest.assembly.clone(),
            ucsc_name: latest.ucsc_name.clone(),
            species: latest.species.clone(),
            common_name: latest.common_name.clone(),
            synonyms,
            patch: latest.patch.clone(),
            patches: group.iter().map(|r| r.patch.clone()).collect(),
            genbank_accessions: collect_accessions(&group, |r| r.genbank.as_deref()),
            refseq_accessions: collect_accessions(&group, |r| r.refseq.as_deref()),
            genbank: latest.genbank.clone(),
            refseq: latest.refseq.clone(),
            metadata: latest.metadata.clone(),
        })
    }

    /// Every name an assembly is known by: canonical names first, then
    /// UCSC names, deduplicated in snapshot order. Never fails.
    pub fn list_assemblies(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .assembly_names()
            .into_iter()
            .map(String::from)
            .collect();
        for ucsc in self.ucsc_names() {
            if !names.iter().any(|n| n == ucsc) {
                names.push(ucsc.to_string());
            }
        }
        names
    }

    /// Patch labels, optionally scoped to one assembly (canonical or UCSC
    /// name). An unknown assembly yields an empty Vec, never an error.
    pub fn list_patches(&self, assembly: Option<&str>) -> Vec<String> {
        let rows: Vec<&AssemblyRecord> = match assembly {
            Some(name) => {
                let group = self.assembly_group(name);
                if group.is_empty() {
                    self.ucsc_group(name)
                } else {
                    group
                }
            }
            None => self.records().iter().collect(),
        };
        rows.iter().map(|r| r.patch.clone()).collect()
    }

    /// Species names, deduplicated in snapshot order. Never fails.
    pub fn list_species(&self) -> Vec<String> {
        self.species_names().into_iter().map(String::from).collect()
    }

    /// Assembly-level accessions of one assembly across its patch
    /// history: GenBank accessions first, then RefSeq. An unknown
    /// assembly yields an empty Vec, never an error.
    pub fn list_accessions(&self, assembly: &str) -> Vec<String> {
        let group = {
            let by_name = self.assembly_group(assembly);
            if by_name.is_empty() {
                self.ucsc_group(assembly)
            } else {
                by_name
            }
        };
        let mut accessions = collect_accessions(&group, |r| r.genbank.as_deref());
        accessions.extend(collect_accessions(&group, |r| r.refseq.as_deref()));
        accessions
    }
}

fn collect_accessions<'a>(
    group: &[&'a AssemblyRecord],
    pick: impl Fn(&'a AssemblyRecord) -> Option<&'a str>,
) -> Vec<String> {
    group.iter().filter_map(|r| pick(r)).map(String::from).collect()
}
