//! Range math for control values
//!
//! Hardware samples arrive as 0-127 but application parameters have
//! arbitrary ranges. Absolute controls map the full sample range onto
//! the parameter range; relative controls step and clamp.

/// Sample floor sent by most controls (button up, knob at zero).
pub const SAMPLE_MIN: f64 = 0.0;
/// Sample ceiling sent by most controls (button down, knob at full).
pub const SAMPLE_MAX: f64 = 127.0;

/// Normalize `v` into [0, 1] relative to `[lower, upper]`.
///
/// Values outside the bounds extrapolate; callers that need saturation
/// combine this with [`clamp`].
pub fn normalize(lower: f64, upper: f64, v: f64) -> f64 {
    (v - lower) / (upper - lower)
}

/// Clamp `v` into `[min, max]`. Identity for in-range input.
pub fn clamp(min: f64, max: f64, v: f64) -> f64 {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Map a raw 0-127 sample onto `[min, max]`.
pub fn sample_to_range(sample: u8, min: f64, max: f64) -> f64 {
    min + normalize(SAMPLE_MIN, SAMPLE_MAX, sample as f64) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_full_sample_range() {
        for v in 0..=127u8 {
            let n = normalize(0.0, 127.0, v as f64);
            assert!((n - v as f64 / 127.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn normalize_endpoints() {
        assert_eq!(normalize(-10.0, 30.0, -10.0), 0.0);
        assert_eq!(normalize(-10.0, 30.0, 30.0), 1.0);
    }

    #[test]
    fn normalize_is_monotonic() {
        let mut prev = normalize(0.0, 127.0, 0.0);
        for v in 1..=127 {
            let n = normalize(0.0, 127.0, v as f64);
            assert!(n > prev);
            prev = n;
        }
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp(-2.0, 2.0, 3.5), 2.0);
        assert_eq!(clamp(-2.0, 2.0, -7.0), -2.0);
    }

    #[test]
    fn clamp_is_identity_in_range() {
        for v in [-2.0, -0.5, 0.0, 1.99, 2.0] {
            assert_eq!(clamp(-2.0, 2.0, v), v);
            // idempotent
            assert_eq!(clamp(-2.0, 2.0, clamp(-2.0, 2.0, v)), v);
        }
    }

    #[test]
    fn sample_maps_onto_target_range() {
        assert_eq!(sample_to_range(0, -100.0, 100.0), -100.0);
        assert_eq!(sample_to_range(127, -100.0, 100.0), 100.0);
        assert!(sample_to_range(64, -100.0, 100.0).abs() < 1.0);
    }
}
