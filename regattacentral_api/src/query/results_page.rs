use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the HTML results-listing page of one regatta instance.
#[derive(Clone, Debug, Default)]
pub struct ResultsPageQuery {
    pub common: QueryCommon,
}

impl ResultsPageQuery {
    pub fn new(job_id: u32) -> Self {
        Self::default().with_job_id(job_id)
    }
}

impl Query for ResultsPageQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
