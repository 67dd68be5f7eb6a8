use std::path::Path;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    /// Assembly name, UCSC name, accession, or patch label
    #[arg(required = true)]
    pub assembly: String,
}

pub fn run(
    args: InfoArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    if verbose {
        eprintln!("Loaded catalog with {} records", catalog.len());
    }

    let info = catalog.get_assembly_metadata(&args.assembly)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Text => {
            println!("{} ({})", info.assembly, info.common_name);
            if let Some(ucsc) = &info.ucsc_name {
                println!("  UCSC name:   {ucsc}");
            }
            println!("  Species:     {}", info.species);
            println!("  Latest:      {}", info.patch);
            if let Some(genbank) = &info.genbank {
                println!("  GenBank:     {genbank}");
            }
            if let Some(refseq) = &info.refseq {
                println!("  RefSeq:      {refseq}");
            }
            println!("  Patches:     {}", info.patches.join(", "));
            if !info.metadata.is_empty() {
                println!("  Metadata:");
                for (key, value) in &info.metadata {
                    println!("    {key}: {value}");
                }
            }
        }
    }

    Ok(())
}
