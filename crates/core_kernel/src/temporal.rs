//! Temporal helpers shared by the presentation-facing crates
//!
//! Age-in-days calculations take the reference instant explicitly so the
//! derivations stay deterministic under test; UI callers pass `Utc::now()`.

use chrono::{DateTime, Utc};

/// Whole days elapsed between `then` and `as_of`.
///
/// Returns 0 when `then` is in the future relative to `as_of`.
pub fn days_since(then: DateTime<Utc>, as_of: DateTime<Utc>) -> i64 {
    (as_of - then).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_since() {
        assert_eq!(days_since(at(2026, 1, 10), at(2026, 1, 14)), 4);
    }

    #[test]
    fn test_days_since_future_is_zero() {
        assert_eq!(days_since(at(2026, 2, 1), at(2026, 1, 14)), 0);
    }

    #[test]
    fn test_partial_day_rounds_down() {
        let then = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
        let as_of = Utc.with_ymd_and_hms(2026, 1, 12, 6, 0, 0).unwrap();
        assert_eq!(days_since(then, as_of), 1);
    }
}
