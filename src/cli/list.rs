use std::path::Path;

use clap::{Args, Subcommand};

use crate::cli::{load_catalog, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommands,
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List assembly names, canonical and UCSC
    Assemblies,

    /// List patch labels, optionally scoped to one assembly
    Patches {
        /// Assembly to scope to (canonical or UCSC name)
        assembly: Option<String>,
    },

    /// List species
    Species,

    /// List assembly-level accessions of one assembly
    Accessions {
        /// Assembly (canonical or UCSC name)
        #[arg(required = true)]
        assembly: String,
    },
}

pub fn run(
    args: ListArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    if verbose {
        eprintln!("Loaded catalog with {} records", catalog.len());
    }

    let (heading, values) = match args.command {
        ListCommands::Assemblies => ("Assemblies", catalog.list_assemblies()),
        ListCommands::Patches { assembly } => ("Patches", catalog.list_patches(assembly.as_deref())),
        ListCommands::Species => ("Species", catalog.list_species()),
        ListCommands::Accessions { assembly } => ("Accessions", catalog.list_accessions(&assembly)),
    };

    match format {
        OutputFormat::Text => {
            println!("{} ({})\n", heading, values.len());
            for value in &values {
                println!("  {value}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&values)?);
        }
    }

    Ok(())
}
