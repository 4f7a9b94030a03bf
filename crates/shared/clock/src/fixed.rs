use chrono::{DateTime, Duration, Utc};
use fincast_core::Timestamp;
use fincast_ports::Clock;

/// Clock frozen at a single instant
///
/// Every call to `now` returns the same timestamp, which makes results that
/// embed the evaluation time reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }

    /// Parse an RFC 3339 timestamp, e.g. `2024-06-30T12:00:00Z`
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        let at = DateTime::parse_from_rfc3339(rfc3339)?.with_timezone(&Utc);
        Ok(Self::new(at))
    }

    /// A new clock frozen `by` later than this one
    pub fn advanced(&self, by: Duration) -> Self {
        Self::new(self.at + by)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}
