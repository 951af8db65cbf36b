mod common;
pub use self::common::{Query, QueryCommon};

mod results_page;
pub use self::results_page::ResultsPageQuery;

mod race_results;
pub use self::race_results::{RaceResultsQuery, RESULTS_METHOD};
