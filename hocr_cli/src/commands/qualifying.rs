use anyhow::{bail, Result};
use clap::Args;
use hocr_lib::{check_fraction, collect_histories, EventCategory, FetchOutcome, RegattaConfig, ResultsSource};

use crate::output::{build_qualifying_rows, print_rows, report_missing, OutputFormat};

#[derive(Args)]
pub struct QualifyingArgs {
    /// Fraction of the field that qualifies
    #[arg(long, default_value = "0.5")]
    pub fraction: f64,

    /// Only this category (e.g. "Women's Fours")
    #[arg(long)]
    pub category: Option<String>,
}

pub async fn run(
    args: &QualifyingArgs,
    source: &impl ResultsSource,
    config: &RegattaConfig,
    format: &OutputFormat,
) -> Result<()> {
    check_fraction(args.fraction)?;

    let categories: Vec<&EventCategory> = match &args.category {
        Some(name) => match config.category(name) {
            Some(category) => vec![category],
            None => bail!("Unknown category: {}", name),
        },
        None => config.categories.iter().collect(),
    };

    let total: usize = categories.iter().map(|c| c.events.len()).sum();
    let pb = super::fetch_progress(total * config.years.len());

    let mut rows = Vec::new();
    for category in categories {
        let histories = collect_histories(
            source,
            &config.years,
            category.events.as_slice(),
            |year: i32, event: &str, _: &FetchOutcome| {
                pb.set_message(format!("{} {}", event, year));
                pb.inc(1);
            },
        )
        .await;

        for history in &histories {
            report_missing(history);
            let summaries = history.summarize(&[args.fraction])?;
            rows.extend(build_qualifying_rows(
                &category.name,
                history,
                &summaries,
                args.fraction,
            ));
        }
    }
    pb.finish_and_clear();

    print_rows(&rows, format)
}
