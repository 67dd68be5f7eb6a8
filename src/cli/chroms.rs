use std::path::Path;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::Provider;
use crate::query::filter::{LengthFilter, SequenceFilter};

#[derive(Args)]
pub struct ChromsArgs {
    /// Assembly (canonical or UCSC name; patch label with --table)
    #[arg(required = true)]
    pub assembly: String,

    /// Nomenclature for identifiers: ucsc, ncbi, genbank, or refseq.
    /// Repeat or comma-separate for --eq
    #[arg(short, long, value_delimiter = ',')]
    pub provider: Vec<String>,

    /// Keep only these sequence roles (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub roles: Vec<String>,

    /// Keep only these assembly units (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub units: Vec<String>,

    /// Length condition, e.g. '>1000000' or '<=50000'
    #[arg(long)]
    pub length: Option<String>,

    /// Print (name, length) pairs instead of names
    #[arg(long, conflicts_with_all = ["eq", "table"])]
    pub sizes: bool,

    /// Print the identifier equivalence table across nomenclatures
    #[arg(long, conflicts_with_all = ["sizes", "table"])]
    pub eq: bool,

    /// Print the full sequence table
    #[arg(long, conflicts_with_all = ["sizes", "eq"])]
    pub table: bool,
}

pub fn run(
    args: ChromsArgs,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;
    if verbose {
        eprintln!("Loaded catalog with {} records", catalog.len());
    }

    let mut filter = SequenceFilter::new();
    if !args.roles.is_empty() {
        filter = filter.with_roles(args.roles.clone());
    }
    if !args.units.is_empty() {
        filter = filter.with_units(args.units.clone());
    }
    if let Some(length) = &args.length {
        filter = filter.with_length(length.parse::<LengthFilter>()?);
    }

    let providers = args
        .provider
        .iter()
        .map(|p| Provider::parse(p))
        .collect::<Result<Vec<_>, _>>()?;

    if args.eq {
        run_equivalence(&catalog, &args.assembly, &providers, &filter, format)
    } else if args.table {
        run_table(&catalog, &args.assembly, &filter, format)
    } else if args.sizes {
        run_sizes(&catalog, &args.assembly, providers.first().copied(), &filter, format)
    } else {
        run_names(&catalog, &args.assembly, providers.first().copied(), &filter, format)
    }
}

fn run_names(
    catalog: &crate::catalog::store::AssemblyCatalog,
    assembly: &str,
    provider: Option<Provider>,
    filter: &SequenceFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let names = catalog.get_chromosome_names(assembly, provider, filter)?;
    match format {
        OutputFormat::Text => {
            for name in &names {
                println!("{name}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
    }
    Ok(())
}

fn run_sizes(
    catalog: &crate::catalog::store::AssemblyCatalog,
    assembly: &str,
    provider: Option<Provider>,
    filter: &SequenceFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let sizes = catalog.get_chromosome_sizes(assembly, provider, filter)?;
    match format {
        OutputFormat::Text => {
            let name_width = sizes.iter().map(|(n, _)| n.len()).max().unwrap_or(4);
            for (name, length) in &sizes {
                println!("{name:<name_width$}  {length}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sizes)?),
    }
    Ok(())
}

fn run_equivalence(
    catalog: &crate::catalog::store::AssemblyCatalog,
    assembly: &str,
    providers: &[Provider],
    filter: &SequenceFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let requested = if providers.is_empty() {
        None
    } else {
        Some(providers)
    };
    let table = catalog.get_chromosome_equivalence(assembly, requested, filter)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Text => {
            // Column widths sized to content, header included
            let widths: Vec<usize> = table
                .providers
                .iter()
                .enumerate()
                .map(|(col, provider)| {
                    table
                        .rows
                        .iter()
                        .map(|row| row[col].as_deref().unwrap_or("-").len())
                        .max()
                        .unwrap_or(0)
                        .max(provider.to_string().len())
                })
                .collect();

            let header: Vec<String> = table
                .providers
                .iter()
                .zip(&widths)
                .map(|(p, w)| format!("{:<width$}", p.to_string(), width = *w))
                .collect();
            println!("{}", header.join("  "));

            for row in &table.rows {
                let cells: Vec<String> = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| format!("{:<width$}", cell.as_deref().unwrap_or("-"), width = *w))
                    .collect();
                println!("{}", cells.join("  "));
            }
        }
    }
    Ok(())
}

fn run_table(
    catalog: &crate::catalog::store::AssemblyCatalog,
    assembly: &str,
    filter: &SequenceFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let table = catalog.get_sequence_table(assembly, filter)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        OutputFormat::Text => {
            let name_width = table.iter().map(|e| e.name.len()).max().unwrap_or(4).max(4);
            let ncbi_width = table.iter().map(|e| e.ncbi.len()).max().unwrap_or(4).max(4);
            let role_width = table.iter().map(|e| e.role.len()).max().unwrap_or(4).max(4);
            println!(
                "{:<name_width$}  {:<ncbi_width$}  {:<role_width$}  {:>12}  unit",
                "name", "ncbi", "role", "length"
            );
            for entry in &table {
                println!(
                    "{:<name_width$}  {:<ncbi_width$}  {:<role_width$}  {:>12}  {}",
                    entry.name, entry.ncbi, entry.role, entry.length, entry.unit
                );
            }
        }
    }
    Ok(())
}
