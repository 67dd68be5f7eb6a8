use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod query;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("genome_catalog=debug,info")
    } else {
        EnvFilter::new("genome_catalog=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let catalog_path = cli.catalog.as_deref();

    match cli.command {
        cli::Commands::List(args) => {
            cli::list::run(args, catalog_path, cli.format, cli.verbose)?;
        }
        cli::Commands::Info(args) => {
            cli::info::run(args, catalog_path, cli.format, cli.verbose)?;
        }
        cli::Commands::Chroms(args) => {
            cli::chroms::run(args, catalog_path, cli.format, cli.verbose)?;
        }
        cli::Commands::Accession(args) => {
            cli::accession::run(args, catalog_path, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
