//! Finish times as seconds, with `M:SS.sss` parsing and display.

use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::Serialize;

/// An elapsed time in seconds.
///
/// NaN is the undefined time: it is what unparseable strings produce, and
/// any arithmetic involving it yields undefined again. Displays as
/// `M:SS.sss`, or `nan` when undefined. Serializes as plain seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Time(f64);

impl Time {
    /// The undefined time.
    pub const UNDEFINED: Time = Time(f64::NAN);

    pub const fn from_secs(secs: f64) -> Self {
        Time(secs)
    }

    /// Parses `"<minutes>:<seconds>"`, e.g. `"14:21.350"`.
    ///
    /// Minutes must be an integer and seconds a real number. Anything else,
    /// including a missing colon, yields [`Time::UNDEFINED`].
    pub fn parse(s: &str) -> Self {
        let Some((mins, secs)) = s.split_once(':') else {
            return Self::UNDEFINED;
        };
        let (Ok(mins), Ok(secs)) = (mins.trim().parse::<i64>(), secs.trim().parse::<f64>()) else {
            return Self::UNDEFINED;
        };
        Time(60.0 * mins as f64 + secs)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }

    pub fn is_undefined(self) -> bool {
        self.0.is_nan()
    }

    /// Whole minutes, floored. Zero for the undefined time.
    pub fn mins(self) -> i64 {
        if !self.0.is_finite() {
            return 0;
        }
        ((self.0 - self.secs()) / 60.0).round() as i64
    }

    /// Seconds past the whole minute, in `[0, 60)`.
    pub fn secs(self) -> f64 {
        self.0.rem_euclid(60.0)
    }

    /// `floor(self / rhs)`.
    pub fn floor_div(self, rhs: f64) -> Time {
        Time((self.0 / rhs).floor())
    }

}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        if self.0.is_infinite() {
            return write!(f, "{}", self.0);
        }
        let rounded = Time((self.0 * 1000.0).round() / 1000.0);
        write!(f, "{}:{:06.3}", rounded.mins(), rounded.secs())
    }
}

impl From<f64> for Time {
    fn from(secs: f64) -> Self {
        Time(secs)
    }
}

impl From<&str> for Time {
    fn from(s: &str) -> Self {
        Time::parse(s)
    }
}

impl From<Time> for f64 {
    fn from(t: Time) -> Self {
        t.0
    }
}

impl FromStr for Time {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Time::parse(s))
    }
}

macro_rules! impl_time_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Time {
            type Output = Time;

            fn $method(self, rhs: f64) -> Time {
                Time(self.0 $op rhs)
            }
        }

        impl $trait<Time> for Time {
            type Output = Time;

            fn $method(self, rhs: Time) -> Time {
                Time(self.0 $op rhs.0)
            }
        }
    };
}

impl_time_op!(Add, add, +);
impl_time_op!(Sub, sub, -);
impl_time_op!(Mul, mul, *);
impl_time_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn parse_minutes_and_seconds() {
        let t = Time::parse("12:05.400");
        assert!((t.as_secs() - 725.4).abs() < EPSILON);
        assert_eq!(t.mins(), 12);
        assert!((t.secs() - 5.4).abs() < EPSILON);
    }

    #[test]
    fn parse_short_fraction() {
        assert!((Time::parse("5:59.2").as_secs() - 359.2).abs() < EPSILON);
        assert!((Time::parse("6:01.0").as_secs() - 361.0).abs() < EPSILON);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert!((Time::parse(" 6 : 01.5 ").as_secs() - 361.5).abs() < EPSILON);
    }

    #[test]
    fn parse_failures_are_undefined() {
        for s in ["garbage", "", "DNF", "725.4", "12:", ":05.4", "1.5:00", "1:2:3", "a:05.0"] {
            assert!(Time::parse(s).is_undefined(), "expected undefined for {s:?}");
        }
    }

    #[test]
    fn display_formats_zero_padded_seconds() {
        assert_eq!(Time::from_secs(725.4).to_string(), "12:05.400");
        assert_eq!(Time::from_secs(0.0).to_string(), "0:00.000");
        assert_eq!(Time::from_secs(59.5).to_string(), "0:59.500");
        assert_eq!(Time::from_secs(3600.25).to_string(), "60:00.250");
    }

    #[test]
    fn display_undefined_is_nan() {
        assert_eq!(Time::UNDEFINED.to_string(), "nan");
        assert_eq!(Time::parse("garbage").to_string(), "nan");
    }

    #[test]
    fn arithmetic_with_plain_numbers() {
        let t = Time::from_secs(600.0);
        assert_eq!(t + 1.5, Time::from_secs(601.5));
        assert_eq!(t - 60.0, Time::from_secs(540.0));
        assert_eq!(t * 2.0, Time::from_secs(1200.0));
        assert_eq!(t / 4.0, Time::from_secs(150.0));
        assert_eq!(Time::from_secs(601.5).floor_div(60.0), Time::from_secs(10.0));
    }

    #[test]
    fn arithmetic_between_times_uses_seconds() {
        let a = Time::from_secs(10.0);
        let b = Time::from_secs(2.5);
        assert_eq!(a + b, Time::from_secs(12.5));
        assert_eq!(a / b, Time::from_secs(4.0));
    }

    #[test]
    fn undefined_propagates_through_arithmetic() {
        let u = Time::UNDEFINED;
        assert!((u + 1.0).is_undefined());
        assert!((u - 1.0).is_undefined());
        assert!((u * 2.0).is_undefined());
        assert!((u / 2.0).is_undefined());
        assert!(u.floor_div(60.0).is_undefined());
        assert!((Time::from_secs(5.0) + u).is_undefined());
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Time::from(359.2), Time::from_secs(359.2));
        assert_eq!(Time::from("6:01.0"), Time::from_secs(361.0));
        assert_eq!("6:01.0".parse::<Time>(), Ok(Time::from_secs(361.0)));
        assert_eq!(f64::from(Time::from_secs(3.0)), 3.0);
    }

    #[test]
    fn display_carries_rounded_seconds_into_minutes() {
        assert_eq!(Time::from_secs(119.9996).to_string(), "2:00.000");
        assert_eq!(Time::from_secs(59.9999).to_string(), "1:00.000");
        assert_eq!(Time::from_secs(119.9994).to_string(), "1:59.999");
    }

    #[test]
    fn serializes_as_seconds() {
        assert_eq!(serde_json::to_string(&Time::from_secs(361.5)).unwrap(), "361.5");
        assert_eq!(serde_json::to_string(&Time::UNDEFINED).unwrap(), "null");
    }

    proptest! {
        #[test]
        fn mins_and_secs_recompose(mins in 0u32..200, millis in 0u32..60_000) {
            let s = format!("{}:{:02}.{:03}", mins, millis / 1000, millis % 1000);
            let t = Time::parse(&s);
            let expected = 60.0 * mins as f64 + millis as f64 / 1000.0;
            prop_assert!((t.as_secs() - expected).abs() < EPSILON);
            prop_assert!((60.0 * t.mins() as f64 + t.secs() - t.as_secs()).abs() < EPSILON);
            prop_assert!(t.secs() >= 0.0 && t.secs() < 60.0);
        }

        #[test]
        fn display_round_trips_canonical_strings(mins in 0u32..200, millis in 0u32..60_000) {
            let s = format!("{}:{:02}.{:03}", mins, millis / 1000, millis % 1000);
            prop_assert_eq!(Time::parse(&s).to_string(), s);
        }
    }
}
