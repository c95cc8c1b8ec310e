use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Reads the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn serializes_as_rfc3339() {
        let datetime = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let timestamp = Timestamp::from_datetime(datetime);

        let json = serde_json::to_string(&timestamp).unwrap();

        assert_eq!(json, "\"2024-05-01T12:30:00Z\"");
    }

    #[rstest]
    fn orders_chronologically() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());

        assert!(earlier < later);
    }

    #[rstest]
    fn display_is_human_readable() {
        let timestamp =
            Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 1, 8, 5, 9).unwrap());

        assert_eq!(timestamp.to_string(), "2024-05-01 08:05:09 UTC");
    }
}
