use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/assemblies.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let assemblies = catalog.get("assemblies").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'assemblies' field\n\
             The catalog must have a top-level 'assemblies' array.\n"
        );
    });

    let records = assemblies.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'assemblies' must be an array\n\
             Got: {assemblies}\n"
        );
    });

    let total_sequences = validate_records(records);

    println!(
        "cargo:warning=Validated catalog: {} assembly records, {total_sequences} total sequences",
        records.len()
    );
}

fn validate_records(records: &[serde_json::Value]) -> usize {
    let mut total_sequences = 0;

    for (i, record) in records.iter().enumerate() {
        let patch = record
            .get("patch")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_record_fields(record, patch, i);
        total_sequences += validate_record_sequences(record, patch);
    }

    total_sequences
}

fn validate_record_fields(record: &serde_json::Value, patch: &str, index: usize) {
    for field in ["assembly", "patch", "species", "common_name", "sequences"] {
        assert!(
            record.get(field).is_some(),
            "\n\nCATALOG BUILD ERROR: Record '{patch}' (index {index}) missing '{field}' field\n"
        );
    }
}

fn validate_record_sequences(record: &serde_json::Value, patch: &str) -> usize {
    if let Some(sequences) = record.get("sequences").and_then(|s| s.as_array()) {
        for (j, sequence) in sequences.iter().enumerate() {
            validate_sequence_fields(sequence, patch, j);
        }
        sequences.len()
    } else {
        0
    }
}

fn validate_sequence_fields(sequence: &serde_json::Value, patch: &str, index: usize) {
    let name = sequence
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");

    for field in ["name", "ncbi", "role", "unit"] {
        assert!(
            sequence.get(field).is_some(),
            "\n\nCATALOG BUILD ERROR: Record '{patch}' sequence {index} missing '{field}' field\n"
        );
    }

    let length = sequence.get("length");
    assert!(
        length.is_some(),
        "\n\nCATALOG BUILD ERROR: Record '{patch}' sequence '{name}' (index {index}) missing 'length' field\n"
    );

    // Validate length is positive
    if let Some(len) = length.and_then(serde_json::Value::as_u64) {
        assert!(
            len > 0,
            "\n\nCATALOG BUILD ERROR: Record '{patch}' sequence '{name}' has zero length\n\
             Sequences must have length > 0.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/assemblies.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
