use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Provider;

/// One chromosome/scaffold row within an assembly's sequence table.
///
/// The build pipeline synthesizes `name` as `"chr" + ncbi` when the upstream
/// report carries no UCSC-style name, and drops `pseudo` roles entirely, so
/// both fields are always populated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceEntry {
    /// UCSC-style display name (e.g., "chr1", "`chrUn_KI270302v1`")
    pub name: String,

    /// NCBI sequence name, the resolution anchor (e.g., "1", "MT")
    pub ncbi: String,

    /// GenBank accession (e.g., "CM000663.2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genbank: Option<String>,

    /// RefSeq accession (e.g., "`NC_000001.11`")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refseq: Option<String>,

    /// Structural category: "assembled", "unlocalized", "unplaced",
    /// "alt-scaffold", "fix-patch", or "novel-patch"
    pub role: String,

    /// Assembly partition: "primary" or "non-nuclear"
    pub unit: String,

    /// Sequence length in base pairs
    pub length: u64,

    /// Sparse numeric statistics keyed by constructed names
    /// (e.g., "primary-total-length")
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<String, f64>,
}

impl SequenceEntry {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, ncbi: impl Into<String>, length: u64) -> Self {
        Self {
            name: name.into(),
            ncbi: ncbi.into(),
            genbank: None,
            refseq: None,
            role: "assembled".to_string(),
            unit: "primary".to_string(),
            length,
            stats: BTreeMap::new(),
        }
    }

    /// The identifier this sequence carries in the given nomenclature.
    ///
    /// `ucsc` and `ncbi` names are always present; accessions are optional
    /// and yield `None` when the upstream report left them blank.
    #[must_use]
    pub fn identifier(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Ucsc => Some(&self.name),
            Provider::Ncbi => Some(&self.ncbi),
            Provider::Genbank => self.genbank.as_deref(),
            Provider::Refseq => self.refseq.as_deref(),
        }
    }
}
