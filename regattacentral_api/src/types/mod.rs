mod race;
pub use self::race::{Race, RaceResults, ResultRecord};
