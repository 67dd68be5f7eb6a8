use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::core::assembly::AssemblyRecord;
use crate::query::version::select_latest;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable snapshot format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub assemblies: Vec<AssemblyRecord>,
}

/// The loaded assembly table with lookup indexes.
///
/// Immutable after load: every index points into `records`, queries only
/// ever read, and the shared instance can be handed out freely across
/// threads.
#[derive(Debug)]
pub struct AssemblyCatalog {
    /// All (assembly, patch) rows, in snapshot order
    records: Vec<AssemblyRecord>,

    /// Index: canonical assembly name -> patch rows, in snapshot order
    assembly_to_rows: HashMap<String, Vec<usize>>,

    /// Index: UCSC name -> patch rows of the one assembly carrying it
    ucsc_to_rows: HashMap<String, Vec<usize>>,

    /// Index: patch label -> its unique row
    patch_to_row: HashMap<String, usize>,

    /// Index: assembly-level GenBank accession -> its unique row
    genbank_to_row: HashMap<String, usize>,

    /// Index: assembly-level RefSeq accession -> its unique row
    refseq_to_row: HashMap<String, usize>,
}

static SHARED: OnceLock<AssemblyCatalog> = OnceLock::new();

impl AssemblyCatalog {
    /// The process-wide catalog, loaded from the embedded snapshot on
    /// first access and reused for the process lifetime.
    pub fn shared() -> &'static Self {
        // The embedded snapshot is validated by build.rs, so a load failure
        // here means the binary itself is broken.
        SHARED.get_or_init(|| {
            Self::load_embedded().expect("embedded catalog is validated at build time")
        })
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; build.rs re-runs when the file changes
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/assemblies.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog snapshot from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a catalog snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            eprintln!(
                "Warning: Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        Self::from_records(data.assemblies)
    }

    /// Build and validate a catalog from assembly records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` when the records violate the table
    /// invariants: duplicate patch labels or accessions, a UCSC name shared
    /// across assemblies or inconsistent within one, duplicate NCBI names
    /// within a sequence table, or a `latest` tag that is missing,
    /// duplicated, or inconsistent with version ordering.
    pub fn from_records(records: Vec<AssemblyRecord>) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            records: Vec::with_capacity(records.len()),
            assembly_to_rows: HashMap::new(),
            ucsc_to_rows: HashMap::new(),
            patch_to_row: HashMap::new(),
            genbank_to_row: HashMap::new(),
            refseq_to_row: HashMap::new(),
        };

        for record in records {
            catalog.add_record(record)?;
        }
        catalog.validate_groups()?;

        debug!(
            records = catalog.records.len(),
            assemblies = catalog.assembly_to_rows.len(),
            "loaded assembly catalog"
        );
        Ok(catalog)
    }

    fn add_record(&mut self, record: AssemblyRecord) -> Result<(), CatalogError> {
        let index = self.records.len();

        if self.patch_to_row.insert(record.patch.clone(), index).is_some() {
            return Err(CatalogError::Invalid(format!(
                "duplicate patch label '{}'",
                record.patch
            )));
        }

        if let Some(genbank) = &record.genbank {
            if self.genbank_to_row.insert(genbank.clone(), index).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate GenBank accession '{genbank}'"
                )));
            }
        }
        if let Some(refseq) = &record.refseq {
            if self.refseq_to_row.insert(refseq.clone(), index).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "duplicate RefSeq accession '{refseq}'"
                )));
            }
        }

        let mut ncbi_names = HashSet::new();
        for sequence in &record.sequences {
            if !ncbi_names.insert(sequence.ncbi.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "patch '{}' lists NCBI sequence name '{}' twice",
                    record.patch, sequence.ncbi
                )));
            }
        }

        self.assembly_to_rows
            .entry(record.assembly.clone())
            .or_default()
            .push(index);
        if let Some(ucsc) = &record.ucsc_name {
            self.ucsc_to_rows.entry(ucsc.clone()).or_default().push(index);
        }

        self.records.push(record);
        Ok(())
    }

    /// Group-level invariants: UCSC naming and the `latest` tag
    fn validate_groups(&self) -> Result<(), CatalogError> {
        for (assembly, rows) in &self.assembly_to_rows {
            let group: Vec<&AssemblyRecord> = rows.iter().map(|&i| &self.records[i]).collect();

            let ucsc_names: HashSet<Option<&str>> =
                group.iter().map(|r| r.ucsc_name.as_deref()).collect();
            if ucsc_names.len() > 1 {
                return Err(CatalogError::Invalid(format!(
                    "assembly '{assembly}' has inconsistent UCSC names across patches"
                )));
            }

            let tagged: Vec<&AssemblyRecord> =
                group.iter().filter(|r| r.latest).copied().collect();
            match tagged.as_slice() {
                [only] => {
                    // The stamped tag must agree with query-time selection
                    let selected = select_latest(&group)
                        .ok_or_else(|| CatalogError::Invalid("empty assembly group".into()))?;
                    if selected.patch != only.patch {
                        return Err(CatalogError::Invalid(format!(
                            "assembly '{assembly}' tags '{}' as latest but version \
                             ordering selects '{}'",
                            only.patch, selected.patch
                        )));
                    }
                }
                [] => {
                    return Err(CatalogError::Invalid(format!(
                        "assembly '{assembly}' has no patch tagged latest"
                    )));
                }
                _ => {
                    return Err(CatalogError::Invalid(format!(
                        "assembly '{assembly}' has multiple patches tagged latest"
                    )));
                }
            }
        }

        // A UCSC name denotes exactly one assembly
        for (ucsc, rows) in &self.ucsc_to_rows {
            let assemblies: HashSet<&str> = rows
                .iter()
                .map(|&i| self.records[i].assembly.as_str())
                .collect();
            if assemblies.len() > 1 {
                return Err(CatalogError::Invalid(format!(
                    "UCSC name '{ucsc}' is shared by multiple assemblies"
                )));
            }
        }

        Ok(())
    }

    /// All records, in snapshot order
    pub fn records(&self) -> &[AssemblyRecord] {
        &self.records
    }

    /// All patch rows of one assembly, in snapshot order
    pub fn assembly_group(&self, assembly: &str) -> Vec<&AssemblyRecord> {
        self.group(&self.assembly_to_rows, assembly)
    }

    /// All patch rows of the assembly carrying this UCSC name
    pub fn ucsc_group(&self, ucsc_name: &str) -> Vec<&AssemblyRecord> {
        self.group(&self.ucsc_to_rows, ucsc_name)
    }

    fn group(&self, index: &HashMap<String, Vec<usize>>, key: &str) -> Vec<&AssemblyRecord> {
        index
            .get(key)
            .map(|rows| rows.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Get the unique record carrying this patch label
    pub fn by_patch(&self, patch: &str) -> Option<&AssemblyRecord> {
        self.patch_to_row.get(patch).map(|&i| &self.records[i])
    }

    /// Get the unique record carrying this assembly-level GenBank accession
    pub fn by_genbank(&self, accession: &str) -> Option<&AssemblyRecord> {
        self.genbank_to_row.get(accession).map(|&i| &self.records[i])
    }

    /// Get the unique record carrying this assembly-level RefSeq accession
    pub fn by_refseq(&self, accession: &str) -> Option<&AssemblyRecord> {
        self.refseq_to_row.get(accession).map(|&i| &self.records[i])
    }

    /// Canonical assembly names, deduplicated in snapshot order
    pub fn assembly_names(&self) -> Vec<&str> {
        dedup_in_order(self.records.iter().map(|r| r.assembly.as_str()))
    }

    /// UCSC names, deduplicated in snapshot order
    pub fn ucsc_names(&self) -> Vec<&str> {
        dedup_in_order(self.records.iter().filter_map(|r| r.ucsc_name.as_deref()))
    }

    /// All patch labels, in snapshot order (unique by invariant)
    pub fn patch_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.patch.as_str()).collect()
    }

    /// Species names, deduplicated in snapshot order
    pub fn species_names(&self) -> Vec<&str> {
        dedup_in_order(self.records.iter().map(|r| r.species.as_str()))
    }

    /// Export the catalog to a JSON snapshot
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            assemblies: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of (assembly, patch) records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn dedup_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(assembly: &str, patch: &str, latest: bool) -> AssemblyRecord {
        let mut record = AssemblyRecord::new(assembly, patch, "homo_sapiens", "human");
        record.latest = latest;
        record
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.assembly_names().contains(&"GRCh38"));
        assert!(catalog.ucsc_names().contains(&"hg38"));
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let first = AssemblyCatalog::shared() as *const AssemblyCatalog;
        let second = AssemblyCatalog::shared() as *const AssemblyCatalog;
        assert_eq!(first, second);
    }

    #[test]
    fn test_assembly_group_in_snapshot_order() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let group = catalog.assembly_group("GRCh38");
        assert_eq!(group.len(), 3);
        assert_eq!(group[0].patch, "GRCh38");
        assert_eq!(group[2].patch, "GRCh38.p14");
    }

    #[test]
    fn test_ucsc_group_matches_assembly_group() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        assert_eq!(catalog.ucsc_group("hg38"), catalog.assembly_group("GRCh38"));
    }

    #[test]
    fn test_accession_lookups() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let by_genbank = catalog.by_genbank("GCA_000001405.29").unwrap();
        assert_eq!(by_genbank.patch, "GRCh38.p14");
        let by_refseq = catalog.by_refseq("GCF_000001405.40").unwrap();
        assert_eq!(by_refseq.patch, "GRCh38.p14");
        assert!(catalog.by_genbank("GCA_999999999.1").is_none());
    }

    #[test]
    fn test_rejects_duplicate_patch() {
        let records = vec![record("GRCh38", "GRCh38.p14", true), record("GRCh38", "GRCh38.p14", false)];
        let err = AssemblyCatalog::from_records(records).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_rejects_missing_latest() {
        let records = vec![record("GRCh38", "GRCh38.p13", false), record("GRCh38", "GRCh38.p14", false)];
        let err = AssemblyCatalog::from_records(records).unwrap_err();
        assert!(err.to_string().contains("no patch tagged latest"));
    }

    #[test]
    fn test_rejects_multiple_latest() {
        let records = vec![record("GRCh38", "GRCh38.p13", true), record("GRCh38", "GRCh38.p14", true)];
        let err = AssemblyCatalog::from_records(records).unwrap_err();
        assert!(err.to_string().contains("multiple patches tagged latest"));
    }

    #[test]
    fn test_rejects_latest_tag_inconsistent_with_version_order() {
        // p13 stamped latest, but p14 has the higher version key
        let records = vec![record("GRCh38", "GRCh38.p13", true), record("GRCh38", "GRCh38.p14", false)];
        let err = AssemblyCatalog::from_records(records).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_rejects_shared_ucsc_name() {
        let mut a = record("GRCh38", "GRCh38.p14", true);
        a.ucsc_name = Some("hg38".to_string());
        let mut b = record("GRCh37", "GRCh37.p13", true);
        b.ucsc_name = Some("hg38".to_string());
        let err = AssemblyCatalog::from_records(vec![a, b]).unwrap_err();
        assert!(err.to_string().contains("shared by multiple assemblies"));
    }

    #[test]
    fn test_rejects_duplicate_ncbi_within_sequences() {
        use crate::core::sequence::SequenceEntry;
        let mut a = record("GRCh38", "GRCh38.p14", true);
        a.sequences = vec![
            SequenceEntry::new("chr1", "1", 100),
            SequenceEntry::new("chr1_dup", "1", 200),
        ];
        let err = AssemblyCatalog::from_records(vec![a]).unwrap_err();
        assert!(err.to_string().contains("twice"));
    }

    #[test]
    fn test_to_json_round_trip() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();
        let reloaded = AssemblyCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), reloaded.len());
        assert_eq!(catalog.records(), reloaded.records());
    }

    #[test]
    fn test_save_and_load_file_round_trip() {
        let catalog = AssemblyCatalog::load_embedded().unwrap();
        let temp = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        std::fs::write(temp.path(), catalog.to_json().unwrap()).unwrap();

        let loaded = AssemblyCatalog::load_from_file(temp.path()).unwrap();
        assert_eq!(catalog.len(), loaded.len());
    }
}
