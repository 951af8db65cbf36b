use serde::{Deserialize, Serialize};

/// Body of the `DisplayRacesResults` servlet response.
///
/// Every level is optional so that a missing piece surfaces as a domain
/// error downstream instead of a decode failure of the whole body.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RaceResults {
    #[serde(default)]
    pub races: Option<Vec<Race>>,
}

impl RaceResults {
    /// Result records of the first race, if the payload has any.
    pub fn first_race_results(&self) -> Option<&[ResultRecord]> {
        self.races
            .as_ref()?
            .first()?
            .results
            .as_deref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Race {
    #[serde(default)]
    pub results: Option<Vec<ResultRecord>>,
}

/// One crew's outcome in a race.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default)]
    pub finish_place: Option<u32>,
    #[serde(default)]
    pub adjusted_time_string: Option<String>,
}
