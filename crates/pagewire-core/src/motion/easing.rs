//! Easing curves
//!
//! Every curve maps progress in [0, 1] onto eased progress in [0, 1]; input
//! outside the range is clamped first.

pub use crate::config::EasingType;

pub trait EasingTypeExt {
    /// Eased progress for raw progress `t`
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // Holds the start value until the very end
            EasingType::None if t < 1.0 => 0.0,
            EasingType::None => 1.0,
            EasingType::Linear => t,
            EasingType::Cubic => out_pow(t, 3),
            EasingType::Quintic => out_pow(t, 5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
            EasingType::InOut => in_out_pow(t, 3),
            EasingType::Power1InOut => in_out_pow(t, 2),
        }
    }
}

/// 1 - (1 - t)^n
#[inline]
fn out_pow(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// Accelerates through the first half and mirrors it in the second
#[inline]
fn in_out_pow(t: f64, n: i32) -> f64 {
    let half = 2.0_f64.powi(n - 1);
    if t < 0.5 {
        half * t.powi(n)
    } else {
        1.0 - (2.0 - 2.0 * t).powi(n) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 7] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::InOut,
        EasingType::Power1InOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            // t=0 should give 0 (None included, it only jumps at the end)
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_out_is_symmetric() {
        for easing in [EasingType::InOut, EasingType::Power1InOut] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-9);
            let a = easing.apply(0.2);
            let b = easing.apply(0.8);
            assert!((a + b - 1.0).abs() < 1e-9, "{:?}", easing);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
