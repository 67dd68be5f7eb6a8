//! Assembly records: one row per (assembly, patch) release.
//!
//! The catalog is a flat table of these records. Patch rows of the same
//! assembly share the `assembly`/`ucsc_name`/taxonomy columns and differ in
//! `patch`, accessions, metadata, and the nested sequence table. The
//! sequence table is embedded by value: queries always resolve to one
//! record before touching sequences, so there is no cross-record sequence
//! lookup to index for.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::sequence::SequenceEntry;
use crate::core::types::MetadataValue;

/// One (assembly, patch) release with its embedded sequence table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyRecord {
    /// Canonical release name (e.g., "`GRCh38`"); shared by all patch rows
    pub assembly: String,

    /// Patch label (e.g., "`GRCh38.p14`"); globally unique. The base
    /// release carries the bare assembly name.
    pub patch: String,

    /// UCSC nomenclature name (e.g., "hg38"); absent for assemblies UCSC
    /// never adopted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ucsc_name: Option<String>,

    /// Assembly-level GenBank accession (e.g., "`GCA_000001405.29`")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genbank: Option<String>,

    /// Assembly-level RefSeq accession (e.g., "`GCF_000001405.40`")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refseq: Option<String>,

    /// Species name (e.g., "`homo_sapiens`")
    pub species: String,

    /// Organism common name (e.g., "human")
    pub common_name: String,

    /// Authoritative-release tag: exactly one patch row per assembly
    /// carries `true`, stamped by the build pipeline
    #[serde(default)]
    pub latest: bool,

    /// Report fields and aggregate statistics for this release
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetadataValue>,

    /// Per-chromosome sequence table, in upstream report order
    pub sequences: Vec<SequenceEntry>,
}

impl AssemblyRecord {
    /// Assembly-level accessions present on this record, GenBank first
    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.genbank
            .as_deref()
            .into_iter()
            .chain(self.refseq.as_deref())
    }

    #[cfg(test)]
    pub fn new(
        assembly: impl Into<String>,
        patch: impl Into<String>,
        species: impl Into<String>,
        common_name: impl Into<String>,
    ) -> Self {
        Self {
            assembly: assembly.into(),
            patch: patch.into(),
            ucsc_name: None,
            genbank: None,
            refseq: None,
            species: species.into(),
            common_name: common_name.into(),
            latest: false,
            metadata: BTreeMap::new(),
            sequences: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessions_order_and_gaps() {
        let mut record = AssemblyRecord::new("GRCh38", "GRCh38.p14", "homo_sapiens", "human");
        record.genbank = Some("GCA_000001405.29".to_string());
        record.refseq = Some("GCF_000001405.40".to_string());

        let accessions: Vec<&str> = record.accessions().collect();
        assert_eq!(accessions, vec!["GCA_000001405.29", "GCF_000001405.40"]);

        record.refseq = None;
        let accessions: Vec<&str> = record.accessions().collect();
        assert_eq!(accessions, vec!["GCA_000001405.29"]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut record = AssemblyRecord::new("T2T-CHM13", "T2T-CHM13v2.0", "homo_sapiens", "human");
        record.ucsc_name = Some("hs1".to_string());
        record.latest = true;
        record
            .metadata
            .insert("taxid".to_string(), MetadataValue::Number(9606.0));

        let json = serde_json::to_string(&record).unwrap();
        let back: AssemblyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
