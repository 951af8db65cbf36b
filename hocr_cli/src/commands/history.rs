use anyhow::Result;
use clap::Args;
use hocr_lib::{check_fraction, collect_event_history, FetchOutcome, RegattaConfig, ResultsSource};

use crate::output::{
    build_history_grid, build_history_json, print_grid, print_json, report_missing, OutputFormat,
};

#[derive(Args)]
pub struct HistoryArgs {
    /// Event display name, exactly as listed (e.g. "Men's Club Eights")
    #[arg(long)]
    pub event: String,

    /// Cutoff fraction of the field, repeatable (default: 0.1 and 0.5)
    #[arg(long = "fraction")]
    pub fractions: Vec<f64>,

    /// Restrict to these years, repeatable (default: all configured years)
    #[arg(long = "year")]
    pub years: Vec<i32>,
}

pub async fn run(
    args: &HistoryArgs,
    source: &impl ResultsSource,
    config: &RegattaConfig,
    format: &OutputFormat,
) -> Result<()> {
    let fractions = if args.fractions.is_empty() {
        vec![0.1, 0.5]
    } else {
        args.fractions.clone()
    };
    for &fraction in &fractions {
        check_fraction(fraction)?;
    }
    let years = if args.years.is_empty() {
        config.years.clone()
    } else {
        args.years.clone()
    };

    let pb = super::fetch_progress(years.len());
    pb.set_message(args.event.clone());
    let history = collect_event_history(
        source,
        &years,
        &args.event,
        &mut |_: i32, _: &str, _: &FetchOutcome| pb.inc(1),
    )
    .await;
    pb.finish_and_clear();

    report_missing(&history);
    let summaries = history.summarize(&fractions)?;

    match format {
        OutputFormat::Json => print_json(&build_history_json(&history, &summaries)),
        _ => print_grid(&build_history_grid(&summaries, &fractions), format)?,
    }

    Ok(())
}
