//! Builds per-year time series for events across the configured years.
//!
//! Each (year, event) pair is fetched on its own. A failure for one pair is
//! recorded as a missing year and the run carries on: event names drift
//! between years, so partial series are normal.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::HocrError;
use crate::fetcher::ResultsSource;
use crate::stats::{self, YearSummary};
use crate::time::Time;

/// A year that contributed no data, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingYear {
    pub year: i32,
    pub reason: String,
}

/// One event's finish-ordered times keyed by year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventHistory {
    pub event: String,
    pub series: BTreeMap<i32, Vec<Time>>,
    pub missing: Vec<MissingYear>,
}

impl EventHistory {
    pub fn new(event: &str) -> Self {
        Self {
            event: event.to_string(),
            ..Default::default()
        }
    }

    /// Winner and cutoff series for the years with data.
    pub fn summarize(&self, fractions: &[f64]) -> Result<Vec<YearSummary>, HocrError> {
        stats::summarize(&self.series, fractions)
    }
}

/// What happened to one (year, event) fetch, reported to progress observers.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded { finishers: usize },
    Missing { reason: String },
}

/// Fetches `event` for every year, in order.
pub async fn collect_event_history<S, F>(
    source: &S,
    years: &[i32],
    event: &str,
    on_progress: &mut F,
) -> EventHistory
where
    S: ResultsSource,
    F: FnMut(i32, &str, &FetchOutcome),
{
    let mut history = EventHistory::new(event);
    for &year in years {
        let outcome = match source.fetch(year, event).await {
            Ok(times) => {
                let finishers = times.len();
                history.series.insert(year, times);
                FetchOutcome::Loaded { finishers }
            }
            Err(e) => {
                tracing::warn!("No data for {} in {}: {}", event, year, e);
                let reason = e.to_string();
                history.missing.push(MissingYear {
                    year,
                    reason: reason.clone(),
                });
                FetchOutcome::Missing { reason }
            }
        };
        on_progress(year, event, &outcome);
    }
    history
}

/// One history per event, fetched event by event.
pub async fn collect_histories<S, E, F>(
    source: &S,
    years: &[i32],
    events: &[E],
    mut on_progress: F,
) -> Vec<EventHistory>
where
    S: ResultsSource,
    E: AsRef<str>,
    F: FnMut(i32, &str, &FetchOutcome),
{
    let mut histories = Vec::with_capacity(events.len());
    for event in events {
        histories.push(collect_event_history(source, years, event.as_ref(), &mut on_progress).await);
    }
    histories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Serves `year - 2000` finishers per year, failing the listed years.
    struct FakeSource {
        failing: Vec<i32>,
        calls: RefCell<Vec<(i32, String)>>,
    }

    impl FakeSource {
        fn new(failing: &[i32]) -> Self {
            Self {
                failing: failing.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ResultsSource for FakeSource {
        async fn fetch(&self, year: i32, event: &str) -> Result<Vec<Time>, HocrError> {
            self.calls.borrow_mut().push((year, event.to_string()));
            if self.failing.contains(&year) {
                return Err(HocrError::ResultsUnavailable {
                    year,
                    event: event.to_string(),
                });
            }
            Ok((0..(year - 2000))
                .map(|i| Time::from_secs(1000.0 + i as f64))
                .collect())
        }
    }

    #[tokio::test]
    async fn failed_year_is_omitted_not_fatal() {
        let source = FakeSource::new(&[2013]);
        let mut seen = Vec::new();
        let history = collect_event_history(
            &source,
            &[2012, 2013, 2014],
            "Men's Club Eights",
            &mut |year: i32, _event: &str, outcome: &FetchOutcome| seen.push((year, outcome.clone())),
        )
        .await;

        assert_eq!(history.series.keys().copied().collect::<Vec<_>>(), vec![2012, 2014]);
        assert_eq!(history.series[&2012].len(), 12);
        assert_eq!(history.series[&2014].len(), 14);
        assert_eq!(history.missing.len(), 1);
        assert_eq!(history.missing[0].year, 2013);
        assert!(history.missing[0].reason.contains("No results available"));
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1].1, FetchOutcome::Missing {
            reason: "No results available for Men's Club Eights in 2013".to_string()
        });
    }

    #[tokio::test]
    async fn histories_fetch_event_then_year() {
        let source = FakeSource::new(&[]);
        let histories = collect_histories(
            &source,
            &[2012, 2013],
            ["A", "B"].as_slice(),
            |_: i32, _: &str, _: &FetchOutcome| {},
        )
        .await;

        assert_eq!(histories.len(), 2);
        assert_eq!(histories[0].event, "A");
        assert_eq!(histories[1].event, "B");
        assert_eq!(
            *source.calls.borrow(),
            vec![
                (2012, "A".to_string()),
                (2013, "A".to_string()),
                (2012, "B".to_string()),
                (2013, "B".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn all_years_failing_gives_empty_series() {
        let source = FakeSource::new(&[2021, 2022]);
        let history = collect_event_history(
            &source,
            &[2021, 2022],
            "Women's Club Fours",
            &mut |_: i32, _: &str, _: &FetchOutcome| {},
        )
        .await;
        assert!(history.series.is_empty());
        assert_eq!(history.missing.len(), 2);
        assert!(history.summarize(&[0.5]).unwrap().is_empty());
    }

    #[tokio::test]
    async fn summarize_history() {
        let source = FakeSource::new(&[]);
        let history = collect_event_history(
            &source,
            &[2012],
            "Men's Club Eights",
            &mut |_: i32, _: &str, _: &FetchOutcome| {},
        )
        .await;
        let summary = history.summarize(&[0.5]).unwrap();
        assert_eq!(summary[0].winner, Time::from_secs(1000.0));
        assert_eq!(summary[0].cutoff(0.5), Some(Time::from_secs(1005.0)));
    }
}
