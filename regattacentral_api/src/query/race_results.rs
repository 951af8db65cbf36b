use url::Url;

use super::{common::QueryCommon, Query};

/// Method selector the results servlet expects for race results.
pub const RESULTS_METHOD: &str = "getResults";

/// Query for the JSON race results of one event within a regatta instance.
#[derive(Clone, Debug, Default)]
pub struct RaceResultsQuery {
    pub common: QueryCommon,
    pub event_id: String,
}

impl RaceResultsQuery {
    pub fn new(job_id: u32, event_id: &str) -> Self {
        Self::default().with_job_id(job_id).with_event_id(event_id)
    }

    pub fn with_event_id(mut self, event_id: &str) -> Self {
        self.event_id = event_id.to_string();
        self
    }
}

impl Query for RaceResultsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("Method", RESULTS_METHOD);
        let mut url = self.common.add_to_url(&url);
        url.query_pairs_mut()
            .append_pair("event_id", self.event_id.as_str());
        url
    }
}
