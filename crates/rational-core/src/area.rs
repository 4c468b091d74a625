/// Area/runoff-coefficient bookkeeping.
///
/// - `area`: contributing drainage area [acres]
/// - `c`: composite runoff coefficient [-], area-weighted over every
///   sub-area merged in
use serde::Deserialize;

use crate::constants::{AREA_BOUNDS, C_BOUNDS};
use crate::error::{Error, Result};
use crate::traits::Drainage;

/// A sub-area with its own runoff coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Shape {
    pub area: f64,
    pub c: f64,
}

impl Shape {
    pub fn new(area: f64, c: f64) -> Self {
        Self { area, c }
    }

    fn validate(&self) -> Result<()> {
        check_area(self.area)?;
        check_c(self.c)
    }
}

impl From<(f64, f64)> for Shape {
    fn from((area, c): (f64, f64)) -> Self {
        Self { area, c }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaModel {
    area: f64,
    c: f64,
}

impl AreaModel {
    /// Create a new model, returning an error if area or c is out of bounds.
    pub fn new(area: f64, c: f64) -> Result<Self> {
        check_area(area)?;
        check_c(c)?;
        Ok(Self { area, c })
    }

    /// Fold sub-areas into the aggregate.
    ///
    /// The resulting `c` is the area-weighted mean of the current coefficient
    /// and every shape's coefficient; `area` becomes the sum of all areas.
    /// Shapes are validated before anything is mutated, so a rejected merge
    /// leaves the model unchanged.
    pub fn merge(&mut self, shapes: &[Shape]) -> Result<()> {
        for shape in shapes {
            shape.validate()?;
        }

        let shapes_area: f64 = shapes.iter().map(|s| s.area).sum();
        if shapes_area <= 0.0 {
            return Err(Error::ZeroShapeArea);
        }
        let shapes_c = shapes.iter().map(|s| s.area * s.c).sum::<f64>() / shapes_area;

        let total_area = self.area + shapes_area;
        if !total_area.is_finite() {
            return Err(Error::InvalidParameter {
                name: "area",
                value: total_area,
                reason: "merged area overflows",
            });
        }

        // Weighted mean of values in [0, 1]; clamp away rounding drift.
        let c = (self.area * self.c + shapes_area * shapes_c) / total_area;
        self.c = c.clamp(C_BOUNDS.min, C_BOUNDS.max);
        self.area = total_area;

        log::debug!(
            "merged {} shape(s): +{} ac at c={:.4} -> area={} ac, c={:.4}",
            shapes.len(),
            shapes_area,
            shapes_c,
            self.area,
            self.c
        );
        Ok(())
    }
}

impl Drainage for AreaModel {
    fn area(&self) -> f64 {
        self.area
    }

    fn runoff_coefficient(&self) -> f64 {
        self.c
    }
}

fn check_area(area: f64) -> Result<()> {
    if AREA_BOUNDS.contains(area) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "area",
            value: area,
            reason: "must be finite and non-negative",
        })
    }
}

fn check_c(c: f64) -> Result<()> {
    if C_BOUNDS.contains(c) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "c",
            value: c,
            reason: "must be in [0, 1]",
        })
    }
}
