/// Run configuration loader - parses a basin/rainfall TOML file.
///
/// Keeps basin geometry and storm data out of the command line, so a
/// catchment can be re-run with a different interval or policy by flag.
use serde::Deserialize;
use std::fs;
use std::path::Path;

use rational_core::{Basin, Distribution, Shape, ZeroTimePolicy};

use crate::error::{CliError, Result};

/// `[basin]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BasinConfig {
    /// Time of concentration [minutes].
    pub tc: f64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// `[rainfall]` section: cumulative rainfall as `[time, depth]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct RainfallConfig {
    pub points: Vec<(f64, f64)>,
    /// Multiplier applied to every depth, e.g. to scale a unit pattern.
    pub scale: Option<f64>,
}

/// `[flood]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct FloodConfig {
    pub interval: f64,
    #[serde(default)]
    pub policy: ZeroTimePolicy,
}

/// Root configuration structure for TOML parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub basin: BasinConfig,
    pub rainfall: RainfallConfig,
    pub flood: FloodConfig,
}

impl RunConfig {
    /// Build the basin, folding in any configured shapes.
    pub fn basin(&self) -> Result<Basin> {
        let b = &self.basin;
        Ok(Basin::with_shapes(b.tc, b.area, b.c, &b.shapes)?)
    }

    /// Build the rainfall curve, scaled if `scale` is set.
    pub fn rain(&self) -> Result<Distribution> {
        let rain = Distribution::new(self.rainfall.points.clone())?;
        match self.rainfall.scale {
            Some(factor) => Ok(rain.scaled(factor)?),
            None => Ok(rain),
        }
    }
}

/// Parse a run configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<RunConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load a run configuration from `path`.
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded config from {}", path.display());
    parse_config(&contents)
}
