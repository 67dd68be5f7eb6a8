use std::path::Path;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct AccessionArgs {
    #[command(subcommand)]
    pub command: AccessionCommands,
}

#[derive(Subcommand)]
pub enum AccessionCommands {
    /// Find the assembly and patches carrying an accession
    Lookup {
        /// Assembly-level GenBank or RefSeq accession
        #[arg(required = true)]
        accession: String,
    },

    /// GenBank accession of one patch
    Genbank {
        /// Patch label (e.g., "GRCh38.p14")
        #[arg(required = true)]
        patch: String,
    },

    /// RefSeq accession of one patch
    Refseq {
        /// Patch label (e.g., "GRCh38.p14")
        #[arg(required = true)]
        patch: String,
    },
}

pub fn run(
    args: AccessionArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    if verbose {
        eprintln!("Loaded catalog with {} records", catalog.len());
    }

    match args.command {
        AccessionCommands::Lookup { accession } => {
            let names = catalog.get_assembly_for_accession(&accession)?;
            let patches = catalog.get_patch_for_accession(&accession)?;
            match format {
                OutputFormat::Json => {
                    let out = serde_json::json!({
                        "assembly": names.assembly,
                        "ucsc_name": names.ucsc_name,
                        "patches": patches,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Text => {
                    println!("Assembly:  {}", names.assembly);
                    if let Some(ucsc) = &names.ucsc_name {
                        println!("UCSC name: {ucsc}");
                    }
                    println!("Patches:   {}", patches.join(", "));
                }
            }
        }
        AccessionCommands::Genbank { patch } => {
            let accession = catalog.get_genbank_accession(&patch)?;
            print_optional_accession(&accession, format)?;
        }
        AccessionCommands::Refseq { patch } => {
            let accession = catalog.get_refseq_accession(&patch)?;
            print_optional_accession(&accession, format)?;
        }
    }

    Ok(())
}

fn print_optional_accession(
    accession: &Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(accession)?),
        OutputFormat::Text => match accession {
            Some(accession) => println!("{accession}"),
            None => println!("(none)"),
        },
    }
    Ok(())
}
