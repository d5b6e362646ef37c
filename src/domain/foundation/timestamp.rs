//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Months, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a new timestamp on the same calendar date and time of day,
    /// `years` later.
    ///
    /// Calendar arithmetic, not a fixed duration: Feb 29 lands on Feb 28 when
    /// the target year is not a leap year. Saturates at the largest
    /// representable instant.
    pub fn add_years(&self, years: u32) -> Self {
        let shifted = self
            .0
            .checked_add_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self(shifted)
    }

    /// ISO-8601 UTC with millisecond precision, e.g. `2024-01-15T10:00:00.000Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn add_years_keeps_date_and_time_of_day() {
        let joined = at("2024-01-15T10:00:00Z");
        assert_eq!(joined.add_years(5), at("2029-01-15T10:00:00Z"));
    }

    #[test]
    fn add_years_is_not_a_fixed_duration() {
        // 2024 and 2028 are leap years, so five years span 1827 days here
        let joined = at("2024-01-15T10:00:00Z");
        let expires = joined.add_years(5);
        let days = expires
            .as_datetime()
            .signed_duration_since(*joined.as_datetime())
            .num_days();
        assert_eq!(days, 1827);
    }

    #[test]
    fn add_years_clamps_leap_day() {
        let joined = at("2024-02-29T08:30:00Z");
        let expires = joined.add_years(5);
        assert_eq!(expires.as_datetime().year(), 2029);
        assert_eq!(expires.as_datetime().month(), 2);
        assert_eq!(expires.as_datetime().day(), 28);
    }

    #[test]
    fn add_years_saturates_instead_of_overflowing() {
        let ts = Timestamp::from_datetime(DateTime::<Utc>::MAX_UTC);
        assert_eq!(ts.add_years(5), ts);
    }

    #[test]
    fn iso8601_uses_millis_and_zulu() {
        let ts = at("2024-01-15T10:00:00.123456Z");
        assert_eq!(ts.to_iso8601(), "2024-01-15T10:00:00.123Z");
        assert_eq!(ts.to_string(), "2024-01-15T10:00:00.123Z");
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = at("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_ordering_works() {
        let ts1 = at("2024-01-15T10:30:00Z");
        let ts2 = ts1.add_years(1);

        assert!(ts1 < ts2);
    }
}
