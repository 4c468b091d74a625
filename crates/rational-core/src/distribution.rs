//! Piecewise curves over time.
//!
//! A `Distribution` holds ordered (time, value) pairs. The same container is
//! used for rainfall accumulation curves going in and runoff hydrographs
//! coming out, so hydrographs from several basins can be handed to a routing
//! component as-is.

use crate::error::{Error, Result};
use crate::interp;

/// Validated (time, value) curve with non-decreasing time.
///
/// Stored column-wise; both columns always have the same non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Distribution {
    /// Create a new curve with validation.
    ///
    /// Validates:
    /// - at least one point
    /// - no NaN or infinite times or values
    /// - times are non-decreasing
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        let (times, values) = points.into_iter().unzip();
        Self::from_columns(times, values)
    }

    /// Create a curve from separate time and value columns.
    pub fn from_columns(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.is_empty() {
            return Err(Error::EmptyCurve);
        }
        if times.len() != values.len() {
            return Err(Error::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(Error::NonFinite { name: "time", index });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFinite { name: "value", index });
        }
        if let Some(index) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::UnorderedCurve { index: index + 1 });
        }
        Ok(Self { times, values })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false` for a constructed curve; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate the (time, value) pairs in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Copy the curve out as (time, value) pairs.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points().collect()
    }

    pub fn first(&self) -> (f64, f64) {
        (self.times[0], self.values[0])
    }

    pub fn last(&self) -> (f64, f64) {
        let n = self.len() - 1;
        (self.times[n], self.values[n])
    }

    /// Time of the final point.
    pub fn duration(&self) -> f64 {
        self.last().0
    }

    /// Linear interpolation at `time`, flat outside the curve's time domain.
    pub fn interpolate(&self, time: f64) -> f64 {
        interp::linear_flat(&self.times, &self.values, time)
    }

    /// Copy of the curve with every value multiplied by `factor`.
    ///
    /// Used to scale a dimensionless rainfall pattern to an event depth.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() {
            return Err(Error::InvalidParameter {
                name: "factor",
                value: factor,
                reason: "must be finite",
            });
        }
        Ok(Self {
            times: self.times.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
        })
    }

    /// Point with the largest value; the earliest one on ties.
    pub fn peak(&self) -> (f64, f64) {
        self.points()
            .fold(self.first(), |best, p| if p.1 > best.1 { p } else { best })
    }

    /// Trapezoidal integral of value over time.
    ///
    /// For a hydrograph in ft³/s over minutes, multiply by 60 for ft³.
    pub fn volume(&self) -> f64 {
        self.times
            .windows(2)
            .zip(self.values.windows(2))
            .map(|(t, v)| 0.5 * (v[0] + v[1]) * (t[1] - t[0]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> Distribution {
        Distribution::new(vec![(0.0, 0.0), (10.0, 1.0), (20.0, 3.0), (40.0, 4.0)]).unwrap()
    }

    // -- Construction --

    #[test]
    fn valid_curve() {
        let d = curve();
        assert_eq!(d.len(), 4);
        assert!(!d.is_empty());
        assert_eq!(d.first(), (0.0, 0.0));
        assert_eq!(d.last(), (40.0, 4.0));
        assert_eq!(d.duration(), 40.0);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Distribution::new(vec![]), Err(Error::EmptyCurve));
    }

    #[test]
    fn rejects_decreasing_time() {
        let d = Distribution::new(vec![(0.0, 0.0), (10.0, 1.0), (5.0, 2.0)]);
        assert_eq!(d, Err(Error::UnorderedCurve { index: 2 }));
    }

    #[test]
    fn accepts_repeated_time() {
        assert!(Distribution::new(vec![(0.0, 0.0), (10.0, 1.0), (10.0, 2.0)]).is_ok());
    }

    #[test]
    fn rejects_nan() {
        let d = Distribution::new(vec![(0.0, 0.0), (f64::NAN, 1.0)]);
        assert_eq!(d, Err(Error::NonFinite { name: "time", index: 1 }));
        let d = Distribution::new(vec![(0.0, f64::INFINITY), (1.0, 1.0)]);
        assert_eq!(d, Err(Error::NonFinite { name: "value", index: 0 }));
    }

    #[test]
    fn rejects_mismatched_columns() {
        assert!(Distribution::from_columns(vec![0.0, 1.0], vec![0.0]).is_err());
    }

    // -- Interpolation --

    #[test]
    fn interpolates_inside_domain() {
        assert_relative_eq!(curve().interpolate(15.0), 2.0);
    }

    #[test]
    fn flat_beyond_last_point() {
        let d = curve();
        assert_eq!(d.interpolate(57.0), d.last().1);
    }

    // -- Summaries --

    #[test]
    fn scaled_multiplies_values_only() {
        let d = curve().scaled(2.5).unwrap();
        assert_eq!(d.times(), curve().times());
        assert_eq!(d.values(), &[0.0, 2.5, 7.5, 10.0]);
        assert!(curve().scaled(f64::NAN).is_err());
    }

    #[test]
    fn peak_picks_first_maximum() {
        let d = Distribution::new(vec![(0.0, 1.0), (1.0, 5.0), (2.0, 5.0), (3.0, 2.0)]).unwrap();
        assert_eq!(d.peak(), (1.0, 5.0));
    }

    #[test]
    fn trapezoidal_volume() {
        // 0.5*(0+1)*10 + 0.5*(1+3)*10 + 0.5*(3+4)*20
        assert_relative_eq!(curve().volume(), 5.0 + 20.0 + 70.0);
    }

    #[test]
    fn single_point_has_zero_volume() {
        let d = Distribution::new(vec![(3.0, 9.0)]).unwrap();
        assert_eq!(d.volume(), 0.0);
        assert_eq!(d.peak(), (3.0, 9.0));
    }
}
