//! Page time arithmetic
//!
//! All timestamps are page time: the `Duration` elapsed since the page runtime
//! was created. Callers pass `now` explicitly so every calculation is
//! reproducible.

use std::time::Duration;

/// Fraction of `duration` elapsed since `start`, clamped to [0, 1]
///
/// Zero-length spans are complete as soon as they start.
#[inline]
pub fn progress(start: Duration, duration: Duration, now: Duration) -> f64 {
    if now < start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now - start;
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Duration, duration: Duration, now: Duration) -> bool {
    now >= start + duration
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Apply a signed millisecond offset to a timestamp, saturating at zero
#[inline]
pub fn offset_by(base: Duration, offset_ms: i64) -> Duration {
    if offset_ms >= 0 {
        base + Duration::from_millis(offset_ms as u64)
    } else {
        base.saturating_sub(Duration::from_millis(offset_ms.unsigned_abs()))
    }
}

/// Whole milliseconds of a timestamp, for logs and events
#[inline]
pub fn as_millis(at: Duration) -> u64 {
    at.as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(ms(100), ms(200), ms(50)), 0.0);
        assert_eq!(progress(ms(100), ms(200), ms(200)), 0.5);
        assert_eq!(progress(ms(100), ms(200), ms(900)), 1.0);
        assert_eq!(progress(ms(100), Duration::ZERO, ms(100)), 1.0);
    }

    #[test]
    fn test_is_complete() {
        assert!(!is_complete(ms(0), ms(300), ms(299)));
        assert!(is_complete(ms(0), ms(300), ms(300)));
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(50.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_offset_by_saturates() {
        assert_eq!(offset_by(ms(500), 200), ms(700));
        assert_eq!(offset_by(ms(500), -200), ms(300));
        assert_eq!(offset_by(ms(100), -600), ms(0));
    }
}
