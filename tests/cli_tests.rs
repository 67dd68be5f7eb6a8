//! End-to-end tests of the genome-catalog binary.
//!
//! Each test invokes the compiled binary against the embedded catalog
//! and checks output and exit status, covering every subcommand plus the
//! error paths a caller is most likely to hit.

use assert_cmd::Command;
use predicates::prelude::*;

fn genome_catalog() -> Command {
    Command::cargo_bin("genome-catalog").expect("binary should build")
}

#[test]
fn test_list_assemblies_includes_both_nomenclatures() {
    genome_catalog()
        .args(["list", "assemblies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GRCh38"))
        .stdout(predicate::str::contains("hg38"));
}

#[test]
fn test_list_patches_scoped_to_assembly() {
    genome_catalog()
        .args(["list", "patches", "GRCh38"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GRCh38.p14"))
        .stdout(predicate::str::contains("GRCh38.p13"));
}

#[test]
fn test_list_patches_unknown_assembly_is_empty_success() {
    genome_catalog()
        .args(["list", "patches", "NotAnAssembly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patches (0)"));
}

#[test]
fn test_list_accessions_json() {
    genome_catalog()
        .args(["list", "accessions", "GRCh38", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GCA_000001405.29"))
        .stdout(predicate::str::contains("GCF_000001405.40"));
}

#[test]
fn test_info_by_ucsc_name() {
    genome_catalog()
        .args(["info", "hg38"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GRCh38"))
        .stdout(predicate::str::contains("GRCh38.p14"))
        .stdout(predicate::str::contains("homo_sapiens"));
}

#[test]
fn test_info_json_has_metadata_fields() {
    genome_catalog()
        .args(["info", "GRCh38", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assembly\": \"GRCh38\""))
        .stdout(predicate::str::contains("\"patches\""))
        .stdout(predicate::str::contains("\"synonyms\""));
}

#[test]
fn test_info_unknown_assembly_fails_with_hint() {
    genome_catalog()
        .args(["info", "NotAnAssembly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in catalog"))
        .stderr(predicate::str::contains("GRCh38"));
}

#[test]
fn test_chroms_assembled_names() {
    genome_catalog()
        .args(["chroms", "GRCh38", "--roles", "assembled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1\n"))
        .stdout(predicate::str::contains("chrM\n"));
}

#[test]
fn test_chroms_provider_projection() {
    genome_catalog()
        .args([
            "chroms", "hg38", "--provider", "ncbi", "--roles", "assembled", "--units",
            "non-nuclear",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("MT\n"));
}

#[test]
fn test_chroms_invalid_provider_fails() {
    genome_catalog()
        .args(["chroms", "GRCh38", "--provider", "ensembl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid provider"));
}

#[test]
fn test_chroms_sizes_with_length_filter() {
    genome_catalog()
        .args([
            "chroms", "GRCh38", "--sizes", "--roles", "assembled", "--length", ">133137821",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("chr1"))
        .stdout(predicate::str::contains("248956422"))
        .stdout(predicate::str::contains("chrM").not());
}

#[test]
fn test_chroms_malformed_length_filter_fails() {
    genome_catalog()
        .args(["chroms", "GRCh38", "--length", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse length filter"));
}

#[test]
fn test_chroms_equivalence_table() {
    genome_catalog()
        .args([
            "chroms", "GRCh38", "--eq", "--provider", "ucsc,genbank", "--units", "non-nuclear",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("chrM"))
        .stdout(predicate::str::contains("J01415.2"));
}

#[test]
fn test_chroms_table_accepts_patch_label() {
    genome_catalog()
        .args(["chroms", "T2T-CHM13v1.1", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chrX"))
        .stdout(predicate::str::contains("chrY").not());
}

#[test]
fn test_accession_lookup() {
    genome_catalog()
        .args(["accession", "lookup", "GCA_000001405.29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GRCh38"))
        .stdout(predicate::str::contains("hg38"))
        .stdout(predicate::str::contains("GRCh38.p14"));
}

#[test]
fn test_accession_lookup_unknown_fails() {
    genome_catalog()
        .args(["accession", "lookup", "GCA_999999999.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in catalog"));
}

#[test]
fn test_accession_genbank_and_refseq_of_patch() {
    genome_catalog()
        .args(["accession", "genbank", "GRCh38.p13"])
        .assert()
        .success()
        .stdout(predicate::str::diff("GCA_000001405.28\n"));

    genome_catalog()
        .args(["accession", "refseq", "T2T-CHM13v1.1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("(none)\n"));
}

#[test]
fn test_custom_catalog_file() {
    // Export-shaped snapshot with a single minimal assembly
    let snapshot = r#"{
        "version": "1.0.0",
        "created_at": "2026-01-01T00:00:00Z",
        "assemblies": [
            {
                "assembly": "TestAsm1",
                "patch": "TestAsm1.p1",
                "ucsc_name": "test1",
                "genbank": "GCA_000000001.1",
                "species": "test_species",
                "common_name": "test",
                "latest": true,
                "sequences": [
                    {"name": "chr1", "ncbi": "1", "role": "assembled",
                     "unit": "primary", "length": 1000}
                ]
            }
        ]
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, snapshot).unwrap();

    genome_catalog()
        .args(["list", "assemblies", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("TestAsm1"))
        .stdout(predicate::str::contains("GRCh38").not());
}

#[test]
fn test_invalid_catalog_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "not json").unwrap();

    genome_catalog()
        .args(["list", "assemblies", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}
