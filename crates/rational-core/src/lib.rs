//! rational-core — rational-method basin hydrology in Rust.
//!
//! Computes the runoff hydrograph a drainage basin produces for a rainfall
//! event. A `Basin` carries a time of concentration plus an area-weighted
//! runoff coefficient; `Basin::flood_data` resamples a cumulative rainfall
//! curve and applies Q = k·C·i·A at each step.
//!
//! ```
//! use rational_core::{Basin, Distribution, Drainage, Shape};
//!
//! let mut basin = Basin::new(15.0, 10.0, 0.5).unwrap();
//! basin.add_shapes(&[Shape::new(10.0, 0.3)]).unwrap();
//! assert!((basin.runoff_coefficient() - 0.4).abs() < 1e-12);
//!
//! let rain = Distribution::new(vec![(0.0, 0.0), (0.5, 1.2), (1.0, 1.6)]).unwrap();
//! let hydrograph = basin.flood_hydrograph(&rain, 0.25).unwrap();
//! assert_eq!(hydrograph.len(), 5);
//! ```
pub mod area;
pub mod basin;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod flood;
pub mod interp;
pub mod traits;

pub use area::{AreaModel, Shape};
pub use basin::Basin;
pub use constants::K_RATIONAL;
pub use distribution::Distribution;
pub use error::{Error, Result};
pub use flood::{FloodData, FloodSample, FloodSeries, ZeroTimePolicy};
pub use traits::Drainage;
