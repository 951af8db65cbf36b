mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hocr_lib::{Client, PageCache, PageEventResolver, RegattaConfig, ResultsFetcher};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "hocr")]
#[command(about = "Historical Head of the Charles results from RegattaCentral")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Regatta configuration TOML (overrides HOCR_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RegattaCentral base URL (overrides HOCR_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Finishing-order times for one event in one year
    Times(commands::times::TimesArgs),
    /// Winner and cutoff times for one event across years
    History(commands::history::HistoryArgs),
    /// Qualifying cutoff per event and year, grouped by category
    Qualifying(commands::qualifying::QualifyingArgs),
    /// List configured regattas and events
    Events,
}

fn load_config(path: Option<PathBuf>) -> Result<RegattaConfig> {
    let path = path.or_else(|| std::env::var_os("HOCR_CONFIG").map(PathBuf::from));
    match path {
        Some(path) => RegattaConfig::from_file(&path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(RegattaConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hocr_lib=info".parse()?)
                .add_directive("hocr_cli=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let config = load_config(cli.config)?;

    let client = match cli.base_url.or_else(|| std::env::var("HOCR_BASE_URL").ok()) {
        Some(url) => Client::with_base_url(&url),
        None => Client::new(),
    };
    tracing::debug!(
        "Using {} for {} years, {} events",
        client.base_url(),
        config.years.len(),
        config.events().len()
    );

    let cache = PageCache::new();
    let resolver = PageEventResolver::new(&client, &config, &cache);
    let fetcher = ResultsFetcher::new(&client, &config, resolver);

    match &cli.command {
        Commands::Times(args) => commands::times::run(args, &fetcher, &format).await?,
        Commands::History(args) => {
            commands::history::run(args, &fetcher, &config, &format).await?
        }
        Commands::Qualifying(args) => {
            commands::qualifying::run(args, &fetcher, &config, &format).await?
        }
        Commands::Events => commands::events::run(&config, &format)?,
    }

    Ok(())
}
