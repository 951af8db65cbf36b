//! Fetches one event's results for one year as finish-ordered times.

use regattacentral_api::{Client, RaceResultsQuery};

use crate::config::RegattaConfig;
use crate::error::HocrError;
use crate::finish_order::finishing_times;
use crate::resolver::EventResolver;
use crate::time::Time;

/// Anything that can produce finish-ordered times for a (year, event) pair.
#[allow(async_fn_in_trait)]
pub trait ResultsSource {
    async fn fetch(&self, year: i32, event: &str) -> Result<Vec<Time>, HocrError>;
}

/// Resolves the event id, then pulls the results JSON for the first race.
pub struct ResultsFetcher<'a, R> {
    client: &'a Client,
    config: &'a RegattaConfig,
    resolver: R,
}

impl<'a, R: EventResolver> ResultsFetcher<'a, R> {
    pub fn new(client: &'a Client, config: &'a RegattaConfig, resolver: R) -> Self {
        Self {
            client,
            config,
            resolver,
        }
    }
}

impl<R: EventResolver> ResultsSource for ResultsFetcher<'_, R> {
    /// Fails with [`HocrError::ResultsUnavailable`] when the payload has no
    /// races, the first race has no results, or that result list is empty.
    async fn fetch(&self, year: i32, event: &str) -> Result<Vec<Time>, HocrError> {
        let job_id = self.config.regatta_id(year)?;
        let event_id = self.resolver.resolve_event_id(year, event).await?;
        let resp = self
            .client
            .get_race_results(&RaceResultsQuery::new(job_id, &event_id))
            .await?;

        let unavailable = || HocrError::ResultsUnavailable {
            year,
            event: event.to_string(),
        };
        let records = resp
            .first_race_results()
            .filter(|records| !records.is_empty())
            .ok_or_else(unavailable)?;

        let times = finishing_times(records)?;
        tracing::debug!("{} {}: {} finishers", year, event, times.len());
        Ok(times)
    }
}
