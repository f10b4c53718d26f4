//! Calendar dates on the wire.
//!
//! Dates are written as `YYYY-MM-DD`. On read, full RFC 3339 timestamps are
//! accepted as well and reduced to the calendar date in the local time zone,
//! which is how a browser date picker value round-trips through JSON.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub(super) fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let raw = String::deserialize(deserializer)?;

    parse(&raw).map_err(D::Error::custom)
}

/// Parse a wire date, reading timestamps in the system time zone.
pub(crate) fn parse(raw: &str) -> Result<Date, jiff::Error> {
    parse_in(raw, &TimeZone::system())
}

/// Parse a wire date, reading timestamps in `zone`.
pub(crate) fn parse_in(raw: &str, zone: &TimeZone) -> Result<Date, jiff::Error> {
    let raw = raw.trim();

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(zone.clone()).date());
    }

    raw.parse::<Date>()
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_plain_dates() -> TestResult {
        assert_eq!(parse("2024-06-01")?, date(2024, 6, 1));
        assert_eq!(parse(" 2024-06-01 ")?, date(2024, 6, 1));

        Ok(())
    }

    #[test]
    fn parses_midday_timestamps_to_the_same_day() -> TestResult {
        assert_eq!(
            parse_in("2024-06-01T12:00:00Z", &TimeZone::UTC)?,
            date(2024, 6, 1)
        );
        assert_eq!(
            parse_in("2024-06-01T12:00:00.000Z", &TimeZone::fixed(tz::offset(2)))?,
            date(2024, 6, 1)
        );

        Ok(())
    }

    #[test]
    fn timestamps_take_the_date_of_the_given_zone() -> TestResult {
        // New York observes UTC-4 in June.
        let new_york = TimeZone::fixed(tz::offset(-4));
        let kiritimati = TimeZone::fixed(tz::offset(14));

        assert_eq!(
            parse_in("2024-06-01T00:00:00Z", &new_york)?,
            date(2024, 5, 31)
        );
        assert_eq!(
            parse_in("2024-06-01T12:00:00Z", &kiritimati)?,
            date(2024, 6, 2)
        );

        Ok(())
    }

    #[test]
    fn plain_dates_ignore_the_zone() -> TestResult {
        let new_york = TimeZone::fixed(tz::offset(-4));

        assert_eq!(parse_in("2024-06-01", &new_york)?, date(2024, 6, 1));

        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("first of june").is_err());
        assert!(parse("2024-13-01").is_err());
    }
}
