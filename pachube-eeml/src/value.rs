//! Scalar readings and timestamps as they appear in EEML text

use std::fmt;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::{EemlError, Result};

/// A reading, bound or coordinate
///
/// Integers and floats keep their own textual form, so `10` and `10.0`
/// serialize differently. Text passes through untouched, which is what a
/// reading scraped off a serial line looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Integral value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Pre-formatted value
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => fmt_float(*v, f),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

// Integral values keep a trailing ".0". Magnitudes outside [1e-4, 1e16) use
// a signed exponent of at least two digits.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str("nan")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "inf" } else { "-inf" })
    } else if v != 0.0 && (v.abs() < 1e-4 || v.abs() >= 1e16) {
        let sci = format!("{:e}", v);
        let (mantissa, exponent) = sci.split_once('e').ok_or(fmt::Error)?;
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
    } else if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Int(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// A point in time, written as ISO-8601 with a numeric offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Wrap an existing date-time
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }

    /// The current time in UTC
    pub fn now_utc() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse an RFC 3339 timestamp such as `2007-05-04T18:13:51Z`
    pub fn parse(text: &str) -> Result<Self> {
        OffsetDateTime::parse(text, &Rfc3339)
            .map(Self)
            .map_err(|e| EemlError::validation("at", format!("'{}' is not a timestamp: {}", text, e)))
    }

    /// The wrapped date-time
    pub fn as_offset_date_time(&self) -> OffsetDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = if self.0.microsecond() == 0 {
            self.0.format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
            ))
        } else {
            self.0.format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
            ))
        }
        .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

/// The `updated` attribute of an environment
///
/// Either a real timestamp or date, or a string the caller already formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum Updated {
    /// Full timestamp
    Timestamp(Timestamp),
    /// Calendar date only
    Date(Date),
    /// Emitted verbatim
    Raw(String),
}

impl fmt::Display for Updated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updated::Timestamp(ts) => fmt::Display::fmt(ts, f),
            Updated::Date(date) => {
                let formatted = date
                    .format(format_description!("[year]-[month]-[day]"))
                    .map_err(|_| fmt::Error)?;
                f.write_str(&formatted)
            }
            Updated::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<Timestamp> for Updated {
    fn from(ts: Timestamp) -> Self {
        Updated::Timestamp(ts)
    }
}

impl From<OffsetDateTime> for Updated {
    fn from(at: OffsetDateTime) -> Self {
        Updated::Timestamp(Timestamp(at))
    }
}

impl From<Date> for Updated {
    fn from(date: Date) -> Self {
        Updated::Date(date)
    }
}

impl From<&str> for Updated {
    fn from(raw: &str) -> Self {
        Updated::Raw(raw.to_string())
    }
}

impl From<String> for Updated {
    fn from(raw: String) -> Self {
        Updated::Raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_scalar_text_forms() {
        assert_eq!(Scalar::from(10).to_string(), "10");
        assert_eq!(Scalar::from(-1).to_string(), "-1");
        assert_eq!(Scalar::from(10.0).to_string(), "10.0");
        assert_eq!(Scalar::from(48.0).to_string(), "48.0");
        assert_eq!(Scalar::from(32.4).to_string(), "32.4");
        assert_eq!(Scalar::from(0.2).to_string(), "0.2");
        assert_eq!(Scalar::from(-0.5).to_string(), "-0.5");
        assert_eq!(Scalar::from("23.5").to_string(), "23.5");
    }

    #[test]
    fn test_scalar_exponent_form() {
        assert_eq!(Scalar::from(1e16).to_string(), "1e+16");
        assert_eq!(Scalar::from(-2.5e20).to_string(), "-2.5e+20");
        assert_eq!(Scalar::from(1e-5).to_string(), "1e-05");
        assert_eq!(Scalar::from(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Scalar::from(1e-100).to_string(), "1e-100");
        assert_eq!(Scalar::from(9999999999999998.0).to_string(), "9999999999999998.0");
        assert_eq!(Scalar::from(0.0001).to_string(), "0.0001");
        assert_eq!(Scalar::from(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_scalar_non_finite() {
        assert_eq!(Scalar::from(f64::NAN).to_string(), "nan");
        assert_eq!(Scalar::from(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::from(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_timestamp_utc() {
        let ts = Timestamp::new(datetime!(2007-05-04 18:13:51 UTC));
        assert_eq!(ts.to_string(), "2007-05-04T18:13:51+00:00");
    }

    #[test]
    fn test_timestamp_offset_and_micros() {
        let ts = Timestamp::new(datetime!(2012-09-12 11:00:00.25 -05:30));
        assert_eq!(ts.to_string(), "2012-09-12T11:00:00.250000-05:30");
    }

    #[test]
    fn test_timestamp_parse() {
        let ts = Timestamp::parse("2007-05-04T18:13:51Z").unwrap();
        assert_eq!(ts.to_string(), "2007-05-04T18:13:51+00:00");
        assert!(Timestamp::parse("foobar").unwrap_err().is_validation());
    }

    #[test]
    fn test_updated_forms() {
        assert_eq!(Updated::from(date!(2007 - 05 - 04)).to_string(), "2007-05-04");
        assert_eq!(
            Updated::from("2007-05-04T18:13:51.0Z").to_string(),
            "2007-05-04T18:13:51.0Z"
        );
        assert_eq!(
            Updated::from(datetime!(2007-05-04 18:13:51 UTC)).to_string(),
            "2007-05-04T18:13:51+00:00"
        );
    }
}
