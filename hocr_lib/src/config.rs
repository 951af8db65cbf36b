//! Regatta years, RegattaCentral instance ids, and tracked events.
//!
//! The built-in table covers the Head of the Charles since 2012, the first
//! year results were posted to RegattaCentral. A TOML file can replace it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HocrError;

/// Earliest year with structured results.
pub const FIRST_RESULTS_YEAR: i32 = 2012;

/// A display group of related events, e.g. club and masters eights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCategory {
    pub name: String,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegattaConfig {
    /// Years to aggregate, in order.
    pub years: Vec<i32>,
    /// RegattaCentral `job_id` for each year's regatta.
    pub regatta_ids: BTreeMap<i32, u32>,
    pub categories: Vec<EventCategory>,
}

/// On-disk form. TOML table keys are strings, so years are parsed after.
#[derive(Deserialize)]
struct ConfigFile {
    years: Vec<i32>,
    regatta_ids: BTreeMap<String, u32>,
    #[serde(default)]
    categories: Vec<EventCategory>,
}

impl TryFrom<ConfigFile> for RegattaConfig {
    type Error = HocrError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let regatta_ids = file
            .regatta_ids
            .into_iter()
            .map(|(year, id)| {
                year.trim()
                    .parse::<i32>()
                    .map(|year| (year, id))
                    .map_err(|_| HocrError::Config(format!("invalid year key {:?}", year)))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            years: file.years,
            regatta_ids,
            categories: file.categories,
        })
    }
}

impl Default for RegattaConfig {
    fn default() -> Self {
        let regatta_ids = BTreeMap::from([
            (2012, 2327),
            (2013, 3016),
            (2014, 3644),
            (2015, 4215),
            (2016, 4699),
            (2017, 4977),
            (2018, 5656),
            (2019, 6141),
            (2021, 6143),
            (2022, 6144),
            (2023, 8392),
            (2024, 8995),
        ]);
        // 2020 was cancelled.
        let years = vec![
            2012, 2013, 2014, 2015, 2016, 2017, 2018, 2019, 2021, 2022, 2023,
        ];
        let categories = vec![
            category("Men's Eights", &["Men's Club Eights", "Men's Master Eights [40+]"]),
            category("Men's Fours", &["Men's Club Fours", "Men's Master Fours [40+]"]),
            category("Women's Eights", &["Women's Club Eights", "Women's Master Eights [40+]"]),
            category("Women's Fours", &["Women's Club Fours", "Women's Master Fours [40+]"]),
        ];
        Self {
            years,
            regatta_ids,
            categories,
        }
    }
}

fn category(name: &str, events: &[&str]) -> EventCategory {
    EventCategory {
        name: name.to_string(),
        events: events.iter().map(|e| e.to_string()).collect(),
    }
}

impl RegattaConfig {
    /// Parses and validates a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, HocrError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| HocrError::Config(e.to_string()))?;
        let config = RegattaConfig::try_from(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, HocrError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| HocrError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Every listed year must be at least [`FIRST_RESULTS_YEAR`] and have an id.
    pub fn validate(&self) -> Result<(), HocrError> {
        if self.years.is_empty() {
            return Err(HocrError::Config("no years configured".into()));
        }
        for &year in &self.years {
            if year < FIRST_RESULTS_YEAR {
                return Err(HocrError::Config(format!(
                    "year {} predates structured results ({})",
                    year, FIRST_RESULTS_YEAR
                )));
            }
            if !self.regatta_ids.contains_key(&year) {
                return Err(HocrError::Config(format!(
                    "year {} has no regatta id",
                    year
                )));
            }
        }
        Ok(())
    }

    /// RegattaCentral instance id for `year`.
    pub fn regatta_id(&self, year: i32) -> Result<u32, HocrError> {
        self.regatta_ids
            .get(&year)
            .copied()
            .ok_or(HocrError::UnsupportedYear(year))
    }

    /// Category by name, case-insensitive.
    pub fn category(&self, name: &str) -> Option<&EventCategory> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// All event names across categories, in category order.
    pub fn events(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.events.iter().map(String::as_str))
            .collect()
    }
}
