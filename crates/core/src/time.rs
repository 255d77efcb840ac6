//! Time window value object for order queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive `[start, end]` window over order creation timestamps.
///
/// An inverted window (`end < start`) is representable and simply matches
/// nothing; callers that want to reject it must do so at the edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether `at` falls inside the window, bounds included.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 15, h, 0, 0).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::new(at(9), at(17));
        assert!(range.contains(at(9)));
        assert!(range.contains(at(12)));
        assert!(range.contains(at(17)));
        assert!(!range.contains(at(8)));
        assert!(!range.contains(at(18)));
    }

    #[test]
    fn inverted_window_matches_nothing() {
        let range = DateRange::new(at(17), at(9));
        assert!(!range.contains(at(12)));
        assert!(!range.contains(at(17)));
    }
}
