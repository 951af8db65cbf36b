use anyhow::Result;
use clap::Args;
use hocr_lib::ResultsSource;

use crate::output::{build_finish_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct TimesArgs {
    /// Regatta year (e.g. 2023)
    #[arg(long)]
    pub year: i32,

    /// Event display name, exactly as listed (e.g. "Men's Club Eights")
    #[arg(long)]
    pub event: String,
}

pub async fn run(
    args: &TimesArgs,
    source: &impl ResultsSource,
    format: &OutputFormat,
) -> Result<()> {
    let times = source.fetch(args.year, &args.event).await?;

    eprintln!("{} {}: {} finishers", args.year, args.event, times.len());

    print_rows(&build_finish_rows(&times), format)
}
