//! Turns raw result records into adjusted times in finishing order.

use regattacentral_api::types::ResultRecord;

use crate::error::HocrError;
use crate::time::Time;

/// Adjusted finishing times, ordered by finishing place.
///
/// Ordering follows place, not time: adjusted times can disagree with place
/// when starts are staggered. Records sharing a place keep their input order.
/// A time string that does not parse becomes [`Time::UNDEFINED`]; a record
/// missing its place or its time string is rejected outright.
pub fn finishing_times(results: &[ResultRecord]) -> Result<Vec<Time>, HocrError> {
    let mut placed = Vec::with_capacity(results.len());
    for (index, record) in results.iter().enumerate() {
        let place = record.finish_place.ok_or(HocrError::MalformedResult {
            index,
            field: "finishPlace",
        })?;
        let time = record
            .adjusted_time_string
            .as_deref()
            .ok_or(HocrError::MalformedResult {
                index,
                field: "adjustedTimeString",
            })?;
        placed.push((place, time));
    }

    placed.sort_by_key(|(place, _)| *place);
    Ok(placed.into_iter().map(|(_, time)| Time::parse(time)).collect())
}
