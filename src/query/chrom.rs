//! Chromosome name, size, equivalence, and sequence-table queries.
//!
//! These operations take an assembly token (canonical or UCSC name; the
//! sequence-table query also accepts a patch label), pick the
//! authoritative release, filter its sequence table, and project the
//! requested identifier columns. Single-column projections skip entries
//! that lack the requested accession, so names and sizes for the same
//! arguments always line up entry for entry.

use serde::Serialize;

use crate::catalog::store::AssemblyCatalog;
use crate::core::assembly::AssemblyRecord;
use crate::core::sequence::SequenceEntry;
use crate::core::types::{Provider, ALL_PROVIDERS};
use crate::query::filter::SequenceFilter;
use crate::query::resolver::{resolve_keys, ResolveKey};
use crate::query::version::select_latest;
use crate::query::QueryError;

/// A cross-nomenclature identifier table: one row per sequence, one
/// column per requested nomenclature, `None` where a nomenclature never
/// assigned an identifier.
#[derive(Debug, Clone, Serialize)]
pub struct EquivalenceTable {
    pub providers: Vec<Provider>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Columns chromosome queries resolve through: names only, not accessions
const NAME_KEYS: [ResolveKey; 2] = [ResolveKey::Assembly, ResolveKey::UcscName];

/// The sequence-table query additionally accepts a patch label
const TABLE_KEYS: [ResolveKey; 3] =
    [ResolveKey::Assembly, ResolveKey::UcscName, ResolveKey::Patch];

impl AssemblyCatalog {
    /// Chromosome names of an assembly's authoritative release, in the
    /// requested nomenclature (UCSC when unspecified).
    ///
    /// Entries the nomenclature never named are skipped.
    ///
    /// # Errors
    ///
    /// `MissingArgument`, `NotFound` for the token; the filter itself
    /// cannot fail (zero matches is an empty Vec).
    pub fn get_chromosome_names(
        &self,
        token: &str,
        provider: Option<Provider>,
        filter: &SequenceFilter,
    ) -> Result<Vec<String>, QueryError> {
        let provider = provider.unwrap_or(Provider::Ucsc);
        let record = self.latest_by_name(token)?;
        Ok(filter
            .apply(&record.sequences)
            .into_iter()
            .filter_map(|entry| entry.identifier(provider))
            .map(String::from)
            .collect())
    }

    /// Chromosome (name, length) pairs, keyed by the same nomenclature
    /// and skipping the same unnamed entries as [`get_chromosome_names`].
    ///
    /// [`get_chromosome_names`]: Self::get_chromosome_names
    pub fn get_chromosome_sizes(
        &self,
        token: &str,
        provider: Option<Provider>,
        filter: &SequenceFilter,
    ) -> Result<Vec<(String, u64)>, QueryError> {
        let provider = provider.unwrap_or(Provider::Ucsc);
        let record = self.latest_by_name(token)?;
        Ok(filter
            .apply(&record.sequences)
            .into_iter()
            .filter_map(|entry| {
                entry
                    .identifier(provider)
                    .map(|name| (name.to_string(), entry.length))
            })
            .collect())
    }

    /// Identifier equivalence across nomenclatures, one row per filtered
    /// sequence. Unlike the single-column projections, rows are kept even
    /// when a column has no identifier; the hole is `None`.
    pub fn get_chromosome_equivalence(
        &self,
        token: &str,
        providers: Option<&[Provider]>,
        filter: &SequenceFilter,
    ) -> Result<EquivalenceTable, QueryError> {
        let providers: Vec<Provider> = match providers {
            Some(requested) => requested.to_vec(),
            None => ALL_PROVIDERS.to_vec(),
        };
        let record = self.latest_by_name(token)?;
        let rows = filter
            .apply(&record.sequences)
            .into_iter()
            .map(|entry| {
                providers
                    .iter()
                    .map(|&p| entry.identifier(p).map(String::from))
                    .collect()
            })
            .collect();
        Ok(EquivalenceTable { providers, rows })
    }

    /// The full filtered sequence table of one release.
    ///
    /// Accepts patch labels in addition to assembly names; a patch label
    /// denotes exactly that release, bypassing latest-selection.
    pub fn get_sequence_table(
        &self,
        token: &str,
        filter: &SequenceFilter,
    ) -> Result<Vec<SequenceEntry>, QueryError> {
        let resolution = resolve_keys(self, token, &TABLE_KEYS)?;
        let record = match resolution.key {
            ResolveKey::Patch => resolution.rows[0],
            _ => pick_latest(&resolution.rows, token, self)?,
        };
        Ok(filter
            .apply(&record.sequences)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Resolve a name token and pick the authoritative release
    fn latest_by_name(&self, token: &str) -> Result<&AssemblyRecord, QueryError> {
        let resolution = resolve_keys(self, token, &NAME_KEYS)?;
        pick_latest(&resolution.rows, token, self)
    }
}

fn pick_latest<'a>(
    rows: &[&'a AssemblyRecord],
    token: &str,
    catalog: &AssemblyCatalog,
) -> Result<&'a AssemblyRecord, QueryError> {
    select_latest(rows).ok_or_else(|| QueryError::NotFound {
        token: token.to_string(),
        hint: crate::query::resolver::names_hint(catalog),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static AssemblyCatalog {
        AssemblyCatalog::shared()
    }

    fn assembled() -> SequenceFilter {
        SequenceFilter::new().with_roles(["assembled"])
    }

    #[test]
    fn test_assembled_chromosome_count() {
        let names = catalog()
            .get_chromosome_names("GRCh38", None, &assembled())
            .unwrap();
        assert_eq!(names.len(), 25);
        assert!(names.contains(&"chr1".to_string()));
        assert!(names.contains(&"chrM".to_string()));
    }

    #[test]
    fn test_non_nuclear_filter_via_ucsc_token() {
        let filter = assembled().with_units(["non-nuclear"]);
        let names = catalog().get_chromosome_names("hg38", None, &filter).unwrap();
        assert_eq!(names, vec!["chrM"]);
    }

    #[test]
    fn test_length_filter_count() {
        let filter = assembled().with_length(">133137821".parse().unwrap());
        let names = catalog().get_chromosome_names("GRCh38", None, &filter).unwrap();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_unknown_role_is_empty_not_error() {
        let filter = SequenceFilter::new().with_roles(["no_such_role"]);
        let names = catalog().get_chromosome_names("GRCh38", None, &filter).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_provider_projection() {
        let catalog = catalog();
        let filter = assembled().with_units(["non-nuclear"]);

        let ncbi = catalog
            .get_chromosome_names("GRCh38", Some(Provider::Ncbi), &filter)
            .unwrap();
        assert_eq!(ncbi, vec!["MT"]);

        let genbank = catalog
            .get_chromosome_names("GRCh38", Some(Provider::Genbank), &filter)
            .unwrap();
        assert_eq!(genbank, vec!["J01415.2"]);
    }

    #[test]
    fn test_names_and_sizes_line_up() {
        let catalog = catalog();
        for provider in [None, Some(Provider::Ncbi), Some(Provider::Refseq)] {
            let names = catalog
                .get_chromosome_names("GRCh38", provider, &assembled())
                .unwrap();
            let sizes = catalog
                .get_chromosome_sizes("GRCh38", provider, &assembled())
                .unwrap();
            assert_eq!(names.len(), sizes.len());
            for (name, (size_name, _)) in names.iter().zip(&sizes) {
                assert_eq!(name, size_name);
            }
        }
    }

    #[test]
    fn test_sizes_values() {
        let filter = assembled().with_units(["non-nuclear"]);
        let sizes = catalog().get_chromosome_sizes("GRCh38", None, &filter).unwrap();
        assert_eq!(sizes, vec![("chrM".to_string(), 16_569)]);
    }

    #[test]
    fn test_accession_tokens_are_rejected_for_chromosome_queries() {
        let err = catalog()
            .get_chromosome_names("GCA_000001405.29", None, &SequenceFilter::new())
            .unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn test_equivalence_default_providers() {
        let table = catalog()
            .get_chromosome_equivalence("GRCh38", None, &assembled())
            .unwrap();
        assert_eq!(
            table.providers,
            vec![Provider::Ucsc, Provider::Ncbi, Provider::Genbank, Provider::Refseq]
        );
        assert_eq!(table.rows.len(), 25);
        let chr1 = &table.rows[0];
        assert_eq!(chr1[0].as_deref(), Some("chr1"));
        assert_eq!(chr1[1].as_deref(), Some("1"));
    }

    #[test]
    fn test_equivalence_keeps_rows_with_holes() {
        // A release whose sequences were never annotated by RefSeq still
        // rows up in the equivalence table, with None in that column
        let mut record = AssemblyRecord::new("AsmX", "AsmX.p1", "test_species", "test");
        record.latest = true;
        record.sequences = vec![SequenceEntry::new("chr1", "1", 1000)];
        let catalog = AssemblyCatalog::from_records(vec![record]).unwrap();

        let table = catalog
            .get_chromosome_equivalence(
                "AsmX",
                Some(&[Provider::Ucsc, Provider::Refseq]),
                &SequenceFilter::new(),
            )
            .unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0].as_deref(), Some("chr1"));
        assert_eq!(table.rows[0][1], None);

        // The single-column projection skips the same entry instead
        let names = catalog
            .get_chromosome_names("AsmX", Some(Provider::Refseq), &SequenceFilter::new())
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_sequence_table_selects_latest_for_names() {
        let table = catalog()
            .get_sequence_table("hs1", &SequenceFilter::new())
            .unwrap();
        // v2.0 added chrY
        assert!(table.iter().any(|e| e.name == "chrY"));
    }

    #[test]
    fn test_sequence_table_patch_label_bypasses_latest() {
        let table = catalog()
            .get_sequence_table("T2T-CHM13v1.1", &SequenceFilter::new())
            .unwrap();
        assert!(!table.iter().any(|e| e.name == "chrY"));
        assert_eq!(table.len(), 24);
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let catalog = catalog();
        let first = catalog.get_chromosome_names("GRCh38", None, &assembled()).unwrap();
        let second = catalog.get_chromosome_names("GRCh38", None, &assembled()).unwrap();
        assert_eq!(first, second);
    }
}
