//! # Time Utilities
//!
//! Clock helpers built on chrono.

use chrono::Utc;

/// Milliseconds since the Unix epoch.
///
/// Used as the default token id for fresh mints.
pub fn now_millis() -> u128 {
    Utc::now().timestamp_millis().max(0) as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
        assert!(a > 1_600_000_000_000);
    }
}
