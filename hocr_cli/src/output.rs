use anyhow::Result;
use hocr_lib::{EventHistory, RegattaConfig, Time, YearSummary};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// A time as both raw seconds and `M:SS.sss`, for JSON output.
#[derive(Serialize, Debug, PartialEq)]
pub struct TimeJson {
    pub seconds: Time,
    pub formatted: String,
}

impl From<Time> for TimeJson {
    fn from(time: Time) -> Self {
        Self {
            seconds: time,
            formatted: time.to_string(),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct FinishRow {
    #[tabled(rename = "Place")]
    #[serde(rename = "Place")]
    place: usize,
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "Seconds")]
    #[serde(rename = "Seconds")]
    seconds: String,
}

#[derive(Tabled, Serialize)]
pub struct QualifyingRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    event: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Finishers")]
    #[serde(rename = "Finishers")]
    finishers: usize,
    #[tabled(rename = "Cutoff")]
    #[serde(rename = "Cutoff")]
    cutoff: String,
}

#[derive(Tabled, Serialize)]
pub struct RegattaRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Regatta ID")]
    #[serde(rename = "Regatta ID")]
    regatta_id: u32,
    #[tabled(rename = "Tracked")]
    #[serde(rename = "Tracked")]
    tracked: String,
}

#[derive(Tabled, Serialize)]
pub struct EventRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    event: String,
}

/// Summary series for one event, in JSON form.
#[derive(Serialize)]
pub struct HistoryJson<'a> {
    pub event: &'a str,
    pub years: Vec<YearSummaryJson>,
    pub missing: &'a [hocr_lib::MissingYear],
}

#[derive(Serialize)]
pub struct YearSummaryJson {
    pub year: i32,
    pub field_size: usize,
    pub winner: TimeJson,
    pub cutoffs: Vec<CutoffJson>,
}

#[derive(Serialize)]
pub struct CutoffJson {
    pub fraction: f64,
    pub time: TimeJson,
}

// -- Row builders --

pub fn build_finish_rows(times: &[Time]) -> Vec<FinishRow> {
    times
        .iter()
        .enumerate()
        .map(|(i, t)| FinishRow {
            place: i + 1,
            time: t.to_string(),
            seconds: format_seconds(*t),
        })
        .collect()
}

/// Header and cells for a per-year summary grid with one column per fraction.
pub fn build_history_grid(summaries: &[YearSummary], fractions: &[f64]) -> Vec<Vec<String>> {
    let mut header = vec![
        "Year".to_string(),
        "Finishers".to_string(),
        "Winner".to_string(),
    ];
    header.extend(fractions.iter().map(|f| fraction_label(*f)));

    let mut grid = vec![header];
    for summary in summaries {
        let mut row = vec![
            summary.year.to_string(),
            summary.field_size.to_string(),
            summary.winner.to_string(),
        ];
        row.extend(
            fractions
                .iter()
                .map(|f| summary.cutoff(*f).map(|t| t.to_string()).unwrap_or_default()),
        );
        grid.push(row);
    }
    grid
}

pub fn build_history_json<'a>(history: &'a EventHistory, summaries: &[YearSummary]) -> HistoryJson<'a> {
    HistoryJson {
        event: &history.event,
        years: summaries
            .iter()
            .map(|s| YearSummaryJson {
                year: s.year,
                field_size: s.field_size,
                winner: s.winner.into(),
                cutoffs: s
                    .cutoffs
                    .iter()
                    .map(|c| CutoffJson {
                        fraction: c.fraction,
                        time: c.time.into(),
                    })
                    .collect(),
            })
            .collect(),
        missing: &history.missing,
    }
}

pub fn build_qualifying_rows(
    category: &str,
    history: &EventHistory,
    summaries: &[YearSummary],
    fraction: f64,
) -> Vec<QualifyingRow> {
    summaries
        .iter()
        .map(|s| QualifyingRow {
            category: category.to_string(),
            event: history.event.clone(),
            year: s.year,
            finishers: s.field_size,
            cutoff: s.cutoff(fraction).map(|t| t.to_string()).unwrap_or_default(),
        })
        .collect()
}

pub fn build_regatta_rows(config: &RegattaConfig) -> Vec<RegattaRow> {
    config
        .regatta_ids
        .iter()
        .map(|(&year, &regatta_id)| RegattaRow {
            year,
            regatta_id,
            tracked: if config.years.contains(&year) { "yes" } else { "no" }.to_string(),
        })
        .collect()
}

pub fn build_event_rows(config: &RegattaConfig) -> Vec<EventRow> {
    config
        .categories
        .iter()
        .flat_map(|c| {
            c.events.iter().map(|e| EventRow {
                category: c.name.clone(),
                event: e.clone(),
            })
        })
        .collect()
}

// -- Output --

/// Prints typed rows in the requested format.
pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

/// Prints a header-first string grid in any non-JSON format.
pub fn print_grid(grid: &[Vec<String>], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in grid {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        _ => {
            let mut builder = Builder::default();
            for row in grid {
                builder.push_record(row.iter().cloned());
            }
            let mut table = builder.build();
            if *format == OutputFormat::Markdown {
                table.with(Style::markdown());
            }
            println!("{}", table);
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Lists the years an event has no data for on stderr.
pub fn report_missing(history: &EventHistory) {
    for missing in &history.missing {
        eprintln!("{} {}: no data ({})", history.event, missing.year, missing.reason);
    }
}

fn format_seconds(time: Time) -> String {
    if time.is_undefined() {
        "nan".to_string()
    } else {
        format!("{:.3}", time.as_secs())
    }
}

fn fraction_label(fraction: f64) -> String {
    format!("Top {}%", (fraction * 1000.0).round() / 10.0)
}
