//! Event id lookup from the RegattaCentral results-listing page.
//!
//! The listing page has one link per event. The link's text is the event's
//! display name and its target carries the `event_id` query parameter.

use regattacentral_api::{Client, ResultsPageQuery};
use scraper::{Html, Selector};
use url::Url;

use crate::cache::PageCache;
use crate::config::RegattaConfig;
use crate::error::HocrError;

/// Resolves an event display name to its RegattaCentral `event_id` for a year.
#[allow(async_fn_in_trait)]
pub trait EventResolver {
    async fn resolve_event_id(&self, year: i32, event: &str) -> Result<String, HocrError>;
}

/// Finds the `event_id` behind the first link whose text is exactly `event`.
///
/// Relative link targets are resolved against `base`. A link without an
/// `href`, or whose target has no non-empty `event_id`, counts as not found.
pub fn find_event_id(html: &str, event: &str, base: &Url) -> Result<String, HocrError> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a").map_err(|e| HocrError::Html(e.to_string()))?;

    let not_found = || HocrError::EventNotFound {
        event: event.to_string(),
    };

    let link = document
        .select(&anchors)
        .find(|a| a.text().collect::<String>() == event)
        .ok_or_else(not_found)?;

    let href = link.value().attr("href").ok_or_else(|| {
        tracing::warn!("Link for {} has no target", event);
        not_found()
    })?;
    let target = base.join(href).map_err(|e| {
        tracing::warn!("Unparseable link target for {}: {} ({})", event, href, e);
        not_found()
    })?;

    target
        .query_pairs()
        .find(|(key, value)| key == "event_id" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            tracing::warn!("Link for {} has no event_id: {}", event, target);
            not_found()
        })
}

/// Resolver backed by the live listing page, memoized per year in a [`PageCache`].
pub struct PageEventResolver<'a> {
    client: &'a Client,
    config: &'a RegattaConfig,
    cache: &'a PageCache,
}

impl<'a> PageEventResolver<'a> {
    pub fn new(client: &'a Client, config: &'a RegattaConfig, cache: &'a PageCache) -> Self {
        Self {
            client,
            config,
            cache,
        }
    }

    async fn results_page(&self, year: i32) -> Result<String, HocrError> {
        if let Some(page) = self.cache.get(year) {
            tracing::debug!("Results page for {} served from cache", year);
            return Ok(page);
        }
        let job_id = self.config.regatta_id(year)?;
        tracing::debug!("Fetching results page for {} (job_id {})", year, job_id);
        let page = self
            .client
            .get_results_page(&ResultsPageQuery::new(job_id))
            .await?;
        self.cache.set(year, page.clone());
        Ok(page)
    }
}

impl EventResolver for PageEventResolver<'_> {
    async fn resolve_event_id(&self, year: i32, event: &str) -> Result<String, HocrError> {
        let page = self.results_page(year).await?;
        let base = Url::parse(self.client.base_url()).map_err(|e| HocrError::Html(e.to_string()))?;
        let event_id = find_event_id(&page, event, &base)?;
        tracing::debug!("Resolved {} {} to event_id {}", year, event, event_id);
        Ok(event_id)
    }
}
