/// Rational-method flood generator.
///
/// Resamples a cumulative rainfall curve at a fixed interval and turns each
/// sample into a runoff flow:
///
/// ```text
/// i = R(t) / t            average intensity since the start of the storm
/// Q = i · A · C · K       K = K_RATIONAL
/// ```
///
/// Flows come out in ft³/s when rainfall is in inches, time in hours and
/// area in acres. The `interval` is always expressed in the rainfall curve's
/// own time unit.
use std::iter::FusedIterator;
use std::str::FromStr;

use rational_macros::Series;
use serde::Deserialize;

use crate::constants::{K_RATIONAL, MAX_STEPS, MIN_RAIN_POINTS};
use crate::distribution::Distribution;
use crate::error::{Error, Result};
use crate::interp;

/// What to emit for the t = 0 sample, where R(t) / t is undefined.
///
/// Parsed from `"zero-flow"` (or `"zero_flow"`) and `"omit"`; config files,
/// command-line flags and the Python keyword all go through [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ZeroTimePolicy {
    /// Emit `(0, 0.0)`: no time has passed, so no runoff has arrived.
    #[default]
    ZeroFlow,
    /// Start the output at the first positive sample time.
    Omit,
}

impl ZeroTimePolicy {
    /// Canonical name, as accepted by `from_str`.
    pub fn name(self) -> &'static str {
        match self {
            ZeroTimePolicy::ZeroFlow => "zero-flow",
            ZeroTimePolicy::Omit => "omit",
        }
    }
}

impl FromStr for ZeroTimePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero-flow" | "zero_flow" => Ok(ZeroTimePolicy::ZeroFlow),
            "omit" => Ok(ZeroTimePolicy::Omit),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for ZeroTimePolicy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// One resampled step of a flood computation.
#[derive(Debug, Clone, Copy, PartialEq, Series)]
#[series(name = "FloodSeries")]
pub struct FloodSample {
    /// Sample time, in the rainfall curve's unit.
    pub time: f64,
    /// Interpolated cumulative rainfall at `time`.
    pub rainfall: f64,
    /// Average rainfall intensity from time zero to `time`.
    pub intensity: f64,
    /// Runoff flow.
    pub flow: f64,
}

/// Lazy `(time, flow)` sequence produced by `Basin::flood_data`.
///
/// Borrows the rainfall curve; each call to `next` does one binary search.
/// A clone continues from the same step independently of the original.
#[derive(Debug, Clone)]
pub struct FloodData<'a> {
    rain: &'a Distribution,
    interval: f64,
    /// area · c · K, folded once.
    scale: f64,
    next_step: usize,
    end_step: usize,
}

impl<'a> FloodData<'a> {
    /// Validate inputs and set up the sampling range.
    ///
    /// `runoff_area` is `area * c` of the draining basin.
    pub fn new(
        rain: &'a Distribution,
        interval: f64,
        runoff_area: f64,
        policy: ZeroTimePolicy,
    ) -> Result<Self> {
        if rain.len() < MIN_RAIN_POINTS {
            return Err(Error::TooFewPoints {
                required: MIN_RAIN_POINTS,
                actual: rain.len(),
            });
        }
        if !(interval.is_finite() && interval > 0.0) {
            return Err(Error::InvalidParameter {
                name: "interval",
                value: interval,
                reason: "must be finite and positive",
            });
        }
        let duration = rain.duration();
        if duration < 0.0 {
            return Err(Error::InvalidParameter {
                name: "duration",
                value: duration,
                reason: "rainfall curve must end at or after time zero",
            });
        }

        let span = (duration / interval).ceil();
        if !(span.is_finite() && span <= MAX_STEPS as f64) {
            return Err(Error::InvalidParameter {
                name: "interval",
                value: interval,
                reason: "too small for the rainfall duration",
            });
        }
        let steps = span as usize;

        let first_step = match policy {
            ZeroTimePolicy::ZeroFlow => 0,
            ZeroTimePolicy::Omit => 1,
        };
        if first_step > steps {
            return Err(Error::InvalidParameter {
                name: "duration",
                value: duration,
                reason: "omit policy needs a rainfall curve extending past time zero",
            });
        }

        let scale = runoff_area * K_RATIONAL;
        if !scale.is_finite() {
            return Err(Error::InvalidParameter {
                name: "runoff_area",
                value: runoff_area,
                reason: "flow scale overflows",
            });
        }
        // Interpolated depths never exceed the largest |R|, and t >= interval
        // after the first sample, so this bounds every intensity and flow.
        let max_depth = rain.values().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let peak_bound = max_depth / interval * scale;
        if !peak_bound.is_finite() {
            return Err(Error::InvalidParameter {
                name: "rainfall",
                value: max_depth,
                reason: "flow overflows at this interval",
            });
        }

        log::debug!(
            "flood data: duration={duration}, interval={interval}, steps={steps}, policy={policy:?}"
        );

        Ok(Self {
            rain,
            interval,
            scale,
            next_step: first_step,
            end_step: steps.saturating_add(1),
        })
    }

    /// Number of whole intervals needed to cover the rainfall curve.
    pub fn steps(&self) -> usize {
        self.end_step - 1
    }

    /// Compute the sample at `step` without advancing.
    fn sample(&self, step: usize) -> FloodSample {
        let time = step as f64 * self.interval;
        let rainfall = interp::linear_flat(self.rain.times(), self.rain.values(), time);
        let intensity = if step == 0 { 0.0 } else { rainfall / time };
        let flow = intensity * self.scale;

        log::trace!("t={time} r={rainfall} i={intensity} q={flow}");

        FloodSample {
            time,
            rainfall,
            intensity,
            flow,
        }
    }

    /// Advance and return the full sample rather than just `(time, flow)`.
    pub fn next_sample(&mut self) -> Option<FloodSample> {
        if self.next_step >= self.end_step {
            return None;
        }
        let sample = self.sample(self.next_step);
        self.next_step += 1;
        Some(sample)
    }

    /// Drain the remaining steps into a column-oriented table.
    pub fn into_series(mut self) -> FloodSeries {
        let mut series = FloodSeries::with_capacity(self.len());
        while let Some(sample) = self.next_sample() {
            series.push(&sample);
        }
        series
    }
}

impl Iterator for FloodData<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().map(|s| (s.time, s.flow))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end_step.saturating_sub(self.next_step);
        (n, Some(n))
    }
}

impl ExactSizeIterator for FloodData<'_> {}

impl FusedIterator for FloodData<'_> {}
