//! Order statistics over finish-ordered time sequences.
//!
//! Sequences are trusted to be in finishing order and are never re-sorted:
//! adjusted times can diverge from placement under staggered starts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::HocrError;
use crate::time::Time;

/// Winning time: the first finisher's time.
pub fn winner(times: &[Time]) -> Result<Time, HocrError> {
    times.first().copied().ok_or(HocrError::EmptyResults)
}

/// Slowest time among the fastest `fraction` of finishers.
///
/// The boundary index is `floor(fraction * N) - 1`, clamped into `[0, N - 1]`:
/// with 100 finishers, `0.1` selects the 10th finisher and `1.0` the last.
/// Fractions small enough to select nobody fall back to the winner.
pub fn percentile_cutoff(times: &[Time], fraction: f64) -> Result<Time, HocrError> {
    check_fraction(fraction)?;
    if times.is_empty() {
        return Err(HocrError::EmptyResults);
    }
    Ok(times[cutoff_index(times.len(), fraction)])
}

/// Rejects fractions outside `[0, 1]`, NaN included.
pub fn check_fraction(fraction: f64) -> Result<(), HocrError> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(())
    } else {
        Err(HocrError::InvalidFraction(fraction))
    }
}

/// Absorbs products like `0.57 * 100 = 56.99999999999999` before flooring.
const SNAP: f64 = 1e-9;

fn cutoff_index(len: usize, fraction: f64) -> usize {
    let count = (fraction * len as f64 + SNAP).floor() as usize;
    count.saturating_sub(1).min(len - 1)
}

/// A percentile cutoff time for one fraction of the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cutoff {
    pub fraction: f64,
    pub time: Time,
}

/// Summary statistics for one year of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub field_size: usize,
    pub winner: Time,
    pub cutoffs: Vec<Cutoff>,
}

impl YearSummary {
    /// Cutoff time for `fraction`, if it was computed.
    pub fn cutoff(&self, fraction: f64) -> Option<Time> {
        self.cutoffs
            .iter()
            .find(|c| c.fraction == fraction)
            .map(|c| c.time)
    }
}

/// Winner and cutoff series across years, in year order.
///
/// All fractions are validated before any year is summarized.
pub fn summarize(
    series: &BTreeMap<i32, Vec<Time>>,
    fractions: &[f64],
) -> Result<Vec<YearSummary>, HocrError> {
    for &fraction in fractions {
        check_fraction(fraction)?;
    }
    series
        .iter()
        .map(|(&year, times)| {
            let cutoffs = fractions
                .iter()
                .map(|&fraction| {
                    Ok(Cutoff {
                        fraction,
                        time: percentile_cutoff(times, fraction)?,
                    })
                })
                .collect::<Result<Vec<_>, HocrError>>()?;
            Ok(YearSummary {
                year,
                field_size: times.len(),
                winner: winner(times)?,
                cutoffs,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(n: usize) -> Vec<Time> {
        (0..n).map(|i| Time::from_secs(900.0 + i as f64)).collect()
    }

    #[test]
    fn winner_is_first_element() {
        let times = vec![Time::from_secs(370.0), Time::from_secs(365.0)];
        assert_eq!(winner(&times).unwrap(), Time::from_secs(370.0));
    }

    #[test]
    fn winner_of_empty_fails() {
        assert!(matches!(winner(&[]), Err(HocrError::EmptyResults)));
    }

    #[test]
    fn tenth_percentile_of_hundred() {
        let times = ascending(100);
        assert_eq!(percentile_cutoff(&times, 0.1).unwrap(), times[9]);
        assert_eq!(percentile_cutoff(&times, 0.5).unwrap(), times[49]);
    }

    #[test]
    fn inexact_products_floor_to_intended_count() {
        let times = ascending(100);
        assert_eq!(percentile_cutoff(&times, 0.57).unwrap(), times[56]);
        assert_eq!(percentile_cutoff(&times, 0.29).unwrap(), times[28]);
        assert_eq!(percentile_cutoff(&times, 0.3).unwrap(), times[29]);
    }

    #[test]
    fn full_fraction_is_last() {
        let times = ascending(100);
        assert_eq!(percentile_cutoff(&times, 1.0).unwrap(), times[99]);
        let short = ascending(3);
        assert_eq!(percentile_cutoff(&short, 1.0).unwrap(), short[2]);
    }

    #[test]
    fn tiny_fractions_clamp_to_winner() {
        let times = ascending(5);
        assert_eq!(percentile_cutoff(&times, 0.0).unwrap(), times[0]);
        assert_eq!(percentile_cutoff(&times, 0.1).unwrap(), times[0]);
        assert_eq!(percentile_cutoff(&ascending(1), 0.5).unwrap(), Time::from_secs(900.0));
    }

    #[test]
    fn cutoff_does_not_resort() {
        let times = vec![
            Time::from_secs(370.0),
            Time::from_secs(365.0),
            Time::from_secs(380.0),
            Time::from_secs(375.0),
        ];
        assert_eq!(percentile_cutoff(&times, 0.5).unwrap(), Time::from_secs(365.0));
    }

    #[test]
    fn cutoff_of_empty_fails() {
        assert!(matches!(
            percentile_cutoff(&[], 0.5),
            Err(HocrError::EmptyResults)
        ));
    }

    #[test]
    fn cutoff_rejects_out_of_range_fraction() {
        let times = ascending(10);
        for fraction in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                percentile_cutoff(&times, fraction),
                Err(HocrError::InvalidFraction(_))
            ));
        }
    }

    #[test]
    fn summarize_builds_year_series() {
        let mut series = BTreeMap::new();
        series.insert(2019, ascending(10));
        series.insert(2012, ascending(20));

        let summaries = summarize(&series, &[0.1, 0.5]).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].year, 2012);
        assert_eq!(summaries[0].field_size, 20);
        assert_eq!(summaries[0].winner, Time::from_secs(900.0));
        assert_eq!(summaries[0].cutoff(0.1), Some(Time::from_secs(901.0)));
        assert_eq!(summaries[1].cutoff(0.5), Some(Time::from_secs(904.0)));
        assert_eq!(summaries[1].cutoff(0.25), None);
    }

    #[test]
    fn summarize_rejects_bad_fraction_even_without_years() {
        let series = BTreeMap::new();
        assert!(matches!(
            summarize(&series, &[2.0]),
            Err(HocrError::InvalidFraction(_))
        ));
    }
}
