/// A watershed draining to a single outlet, with rational-method hydrology.
///
/// - `tc`: time of concentration [minutes], fixed at construction
/// - area and runoff coefficient live in an embedded `AreaModel`
use crate::area::{AreaModel, Shape};
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::flood::{FloodData, FloodSeries, ZeroTimePolicy};
use crate::traits::Drainage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basin {
    tc: f64,
    area: AreaModel,
}

impl Basin {
    /// Create a new Basin, returning an error if any value is out of bounds.
    pub fn new(tc: f64, area: f64, c: f64) -> Result<Self> {
        if !(tc.is_finite() && tc > 0.0) {
            return Err(Error::InvalidParameter {
                name: "tc",
                value: tc,
                reason: "must be finite and positive",
            });
        }
        Ok(Self {
            tc,
            area: AreaModel::new(area, c)?,
        })
    }

    /// Create a Basin and fold `shapes` in immediately.
    ///
    /// An empty `shapes` slice is skipped rather than rejected.
    pub fn with_shapes(tc: f64, area: f64, c: f64, shapes: &[Shape]) -> Result<Self> {
        let mut basin = Self::new(tc, area, c)?;
        if !shapes.is_empty() {
            basin.add_shapes(shapes)?;
        }
        Ok(basin)
    }

    /// Time of concentration [minutes].
    pub fn tc(&self) -> f64 {
        self.tc
    }

    pub fn area_model(&self) -> &AreaModel {
        &self.area
    }

    /// Add sub-areas, re-weighting the composite runoff coefficient.
    pub fn add_shapes(&mut self, shapes: &[Shape]) -> Result<()> {
        self.area.merge(shapes)
    }

    /// Lazily generate `(time, flow)` pairs of runoff from `rain`.
    ///
    /// `rain` is a cumulative rainfall curve; samples are taken every
    /// `interval` from time zero through the first multiple of `interval`
    /// at or past the curve's last time. The t = 0 sample is zero flow.
    pub fn flood_data<'a>(&self, rain: &'a Distribution, interval: f64) -> Result<FloodData<'a>> {
        self.flood_data_with(rain, interval, ZeroTimePolicy::default())
    }

    /// As `flood_data`, with an explicit policy for the t = 0 sample.
    pub fn flood_data_with<'a>(
        &self,
        rain: &'a Distribution,
        interval: f64,
        policy: ZeroTimePolicy,
    ) -> Result<FloodData<'a>> {
        FloodData::new(rain, interval, self.runoff_area(), policy)
    }

    /// Composite hydrograph of runoff flow generated from `rain`.
    pub fn flood_hydrograph(&self, rain: &Distribution, interval: f64) -> Result<Distribution> {
        self.flood_hydrograph_with(rain, interval, ZeroTimePolicy::default())
    }

    /// As `flood_hydrograph`, with an explicit policy for the t = 0 sample.
    pub fn flood_hydrograph_with(
        &self,
        rain: &Distribution,
        interval: f64,
        policy: ZeroTimePolicy,
    ) -> Result<Distribution> {
        let pairs: Vec<(f64, f64)> = self.flood_data_with(rain, interval, policy)?.collect();
        Distribution::new(pairs)
    }

    /// Every intermediate quantity of the flood computation, column-wise.
    pub fn flood_table(&self, rain: &Distribution, interval: f64) -> Result<FloodSeries> {
        self.flood_table_with(rain, interval, ZeroTimePolicy::default())
    }

    /// As `flood_table`, with an explicit policy for the t = 0 sample.
    pub fn flood_table_with(
        &self,
        rain: &Distribution,
        interval: f64,
        policy: ZeroTimePolicy,
    ) -> Result<FloodSeries> {
        Ok(self.flood_data_with(rain, interval, policy)?.into_series())
    }
}

impl Drainage for Basin {
    fn area(&self) -> f64 {
        self.area.area()
    }

    fn runoff_coefficient(&self) -> f64 {
        self.area.runoff_coefficient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::K_RATIONAL;
    use approx::assert_relative_eq;

    fn rain() -> Distribution {
        Distribution::new(vec![
            (0.0, 0.0),
            (10.0, 0.4),
            (20.0, 1.1),
            (40.0, 1.8),
            (57.0, 2.0),
        ])
        .unwrap()
    }

    // -- Construction --

    #[test]
    fn rejects_non_positive_tc() {
        assert!(Basin::new(0.0, 10.0, 0.5).is_err());
        assert!(Basin::new(-3.0, 10.0, 0.5).is_err());
        assert!(Basin::new(f64::NAN, 10.0, 0.5).is_err());
    }

    #[test]
    fn rejects_bad_area_or_c() {
        assert!(Basin::new(10.0, -1.0, 0.5).is_err());
        assert!(Basin::new(10.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn construction_shapes_are_merged() {
        let b = Basin::with_shapes(10.0, 10.0, 0.5, &[Shape::new(10.0, 0.3)]).unwrap();
        assert_relative_eq!(b.area(), 20.0);
        assert_relative_eq!(b.runoff_coefficient(), 0.4);
        assert_eq!(b.tc(), 10.0);
    }

    #[test]
    fn empty_construction_shapes_are_skipped() {
        let b = Basin::with_shapes(10.0, 3.0, 0.7, &[]).unwrap();
        assert_eq!(b, Basin::new(10.0, 3.0, 0.7).unwrap());
    }

    #[test]
    fn add_shapes_after_construction() {
        let mut b = Basin::new(15.0, 10.0, 0.5).unwrap();
        b.add_shapes(&[Shape::new(10.0, 0.3)]).unwrap();
        assert_relative_eq!(b.area(), 20.0);
        assert_relative_eq!(b.runoff_coefficient(), 0.4);
        assert_relative_eq!(b.runoff_area(), 8.0);
        assert_eq!(b.tc(), 15.0);
    }

    // -- Flood generation --

    #[test]
    fn hydrograph_has_uniform_steps_through_covering_multiple() {
        let b = Basin::new(10.0, 100.0, 0.5).unwrap();
        let h = b.flood_hydrograph(&rain(), 10.0).unwrap();
        assert_eq!(h.len(), 7);
        for (i, t) in h.times().iter().enumerate() {
            assert_relative_eq!(*t, i as f64 * 10.0);
        }
        assert_eq!(h.first(), (0.0, 0.0));
    }

    #[test]
    fn hydrograph_matches_flood_data() {
        let b = Basin::new(10.0, 12.0, 0.6).unwrap();
        let r = rain();
        let pairs: Vec<_> = b.flood_data(&r, 5.0).unwrap().collect();
        let h = b.flood_hydrograph(&r, 5.0).unwrap();
        assert_eq!(h.to_pairs(), pairs);
    }

    #[test]
    fn flow_values_follow_rational_formula() {
        let b = Basin::new(10.0, 100.0, 0.5).unwrap();
        let h = b.flood_hydrograph(&rain(), 10.0).unwrap();
        // t = 20: R = 1.1
        assert_relative_eq!(h.values()[2], 1.1 / 20.0 * 50.0 * K_RATIONAL, epsilon = 1e-12);
        // t = 60, past the curve: R stays 2.0
        assert_relative_eq!(h.values()[6], 2.0 / 60.0 * 50.0 * K_RATIONAL, epsilon = 1e-12);
    }

    #[test]
    fn doubling_c_doubles_every_flow() {
        let r = rain();
        let half = Basin::new(10.0, 100.0, 0.5).unwrap().flood_hydrograph(&r, 5.0).unwrap();
        let full = Basin::new(10.0, 100.0, 1.0).unwrap().flood_hydrograph(&r, 5.0).unwrap();
        for (h, f) in half.values().iter().zip(full.values()) {
            assert_relative_eq!(2.0 * h, *f, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_area_basin_has_zero_flow() {
        let b = Basin::new(10.0, 0.0, 0.8).unwrap();
        let h = b.flood_hydrograph(&rain(), 7.0).unwrap();
        assert!(h.values().iter().all(|q| *q == 0.0));
    }

    #[test]
    fn omit_policy_starts_at_first_interval() {
        let b = Basin::new(10.0, 5.0, 0.9).unwrap();
        let h = b
            .flood_hydrograph_with(&rain(), 10.0, ZeroTimePolicy::Omit)
            .unwrap();
        assert_eq!(h.len(), 6);
        assert_eq!(h.first().0, 10.0);
    }

    #[test]
    fn table_flow_matches_hydrograph() {
        let b = Basin::new(10.0, 42.0, 0.35).unwrap();
        let r = rain();
        let table = b.flood_table(&r, 4.0).unwrap();
        let h = b.flood_hydrograph(&r, 4.0).unwrap();
        assert_eq!(table.time, h.times());
        assert_eq!(table.flow, h.values());
        assert_eq!(table.len(), h.len());
    }

    #[test]
    fn invalid_rain_is_rejected_before_sampling() {
        let b = Basin::new(10.0, 1.0, 0.5).unwrap();
        let single = Distribution::new(vec![(0.0, 1.0)]).unwrap();
        assert!(b.flood_data(&single, 5.0).is_err());
        assert!(b.flood_hydrograph(&rain(), 0.0).is_err());
        assert!(b.flood_table(&rain(), -1.0).is_err());
    }

    #[test]
    fn entry_points_agree_on_rejection() {
        let b = Basin::new(10.0, 1.0, 0.5).unwrap();
        let at_zero = Distribution::new(vec![(-5.0, 0.0), (0.0, 1.0)]).unwrap();
        let omit = ZeroTimePolicy::Omit;
        let data = b.flood_data_with(&at_zero, 5.0, omit).map(|d| d.len());
        let hydro = b.flood_hydrograph_with(&at_zero, 5.0, omit).map(|h| h.len());
        let table = b.flood_table_with(&at_zero, 5.0, omit).map(|t| t.len());
        assert!(matches!(data, Err(Error::InvalidParameter { name: "duration", .. })));
        assert_eq!(hydro, data);
        assert_eq!(table, data);
    }

    #[test]
    fn huge_basin_is_rejected_not_infinite() {
        let b = Basin::new(10.0, f64::MAX, 1.0).unwrap();
        let r = Distribution::new(vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert!(b.flood_data(&r, 0.5).is_err());
        assert!(b.flood_hydrograph(&r, 0.5).is_err());
    }

    #[test]
    fn tiny_interval_is_rejected_not_allocated() {
        let b = Basin::new(10.0, 1.0, 0.5).unwrap();
        let r = Distribution::new(vec![(0.0, 0.0), (1e300, 1.0)]).unwrap();
        assert!(matches!(
            b.flood_table(&r, 1e-10),
            Err(Error::InvalidParameter { name: "interval", .. })
        ));
    }

    #[test]
    fn generation_does_not_mutate_basin() {
        let b = Basin::new(10.0, 20.0, 0.45).unwrap();
        let before = b;
        let _ = b.flood_hydrograph(&rain(), 5.0).unwrap();
        assert_eq!(b, before);
    }
}
