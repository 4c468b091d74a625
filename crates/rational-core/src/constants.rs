/// Rational-method numerical constants and input bounds.
///
/// Centralises all fixed values used by the basin model and the flood
/// generator. Units are US customary throughout: acres, inches, minutes.

// -- Unit conversion --

/// Rational-method conversion factor from acre·in/hr to ft³/s.
///
/// The exact value is 43560 / 12 / 3600 = 1.00833…; the published rational
/// formula Q = k·C·i·A uses the rounded 1.008.
pub const K_RATIONAL: f64 = 1.008;

// -- Flood generator contract --

/// Minimum number of points a rainfall curve needs for interpolation.
pub const MIN_RAIN_POINTS: usize = 2;

/// Largest number of intervals a single flood computation may span.
///
/// Each step is one sample of four `f64` columns, so this caps a flood table
/// at roughly 320 MB.
pub const MAX_STEPS: usize = 10_000_000;

// -- Parameter bounds --

/// Closed interval (min, max) a parameter must lie in.
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Returns `true` if `value` is finite and inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

/// Runoff coefficient [-].
pub const C_BOUNDS: Bounds = Bounds { min: 0.0, max: 1.0 };

/// Drainage area [acres].
pub const AREA_BOUNDS: Bounds = Bounds {
    min: 0.0,
    max: f64::MAX,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_rational_close_to_exact_conversion() {
        let exact = 43560.0 / 12.0 / 3600.0;
        assert!((K_RATIONAL - exact).abs() < 1e-3);
    }

    #[test]
    fn bounds_reject_nan_and_infinity() {
        assert!(!C_BOUNDS.contains(f64::NAN));
        assert!(!AREA_BOUNDS.contains(f64::INFINITY));
        assert!(C_BOUNDS.contains(0.0));
        assert!(C_BOUNDS.contains(1.0));
        assert!(!C_BOUNDS.contains(1.0001));
    }
}
