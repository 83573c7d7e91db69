//! Clock adapters.

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::ports::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }

    /// Parses an RFC 3339 instant such as `2024-03-20T09:00:00Z`.
    pub fn at(rfc3339: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(rfc3339.parse()?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock::at("2024-04-01T23:30:00Z").unwrap();
        assert_eq!(clock.today().to_string(), "2024-04-01");
    }

    #[test]
    fn fixed_clock_rejects_garbage() {
        assert!(FixedClock::at("yesterday").is_err());
    }
}
