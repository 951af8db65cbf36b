//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// the shared regatta instance selector.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Selects the regatta instance (RegattaCentral `job_id`).
    fn with_job_id(mut self, job_id: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().job_id = job_id;
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryCommon {
    /// Regatta instance identifier. One per year of the regatta.
    pub job_id: u32,
}

impl QueryCommon {
    /// Appends the regatta instance parameter to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("job_id", &self.job_id.to_string());
        url
    }
}
