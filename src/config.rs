//! Configuration of a block, its chart, and the fluid it carries, stored as toml.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::chart::{Chart, ChartError};
use crate::eos::{EosError, IdealGas};
use crate::geometry::{BlockGrid, GridError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid chart: {0}")]
    Chart(#[from] ChartError),
    #[error("invalid block: {0}")]
    Grid(#[from] GridError),
    #[error("invalid fluid: {0}")]
    Eos(#[from] EosError),
}

/// Deserialize data from a toml file.
pub fn import_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let string = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&string)?)
}

/// Serialize data to a toml file.
pub fn export_toml<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let string = toml::to_string_pretty(value)?;
    std::fs::write(path, string)?;
    Ok(())
}

/// Parameters of the snake chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Amplitude `a` of the sinusoidal shear. Any finite value.
    pub amplitude: f64,
    /// Wavenumber `k`. Must be finite and positive.
    pub wavenumber: f64,
}

impl ChartConfig {
    pub fn build(&self) -> Result<Chart, ChartError> {
        Chart::new(self.amplitude, self.wavenumber)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        let chart = Chart::default();
        Self {
            amplitude: chart.amplitude(),
            wavenumber: chart.wavenumber(),
        }
    }
}

/// A uniformly spaced mesh block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Active cells along each axis.
    pub cells: [usize; 3],
    /// Ghost cells on each side of every axis with more than one cell.
    pub ghost: usize,
    pub lower: [f64; 3],
    pub upper: [f64; 3],
}

impl BlockConfig {
    pub fn build(&self) -> Result<BlockGrid, GridError> {
        BlockGrid::uniform(self.cells, self.ghost, self.lower, self.upper)
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            cells: [64, 1, 1],
            ghost: 2,
            lower: [0.0; 3],
            upper: [1.0; 3],
        }
    }
}

/// Whether the fluid carries a magnetic field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Physics {
    #[default]
    Hydro,
    Magnetohydro,
}

impl Physics {
    pub fn is_magnetic(self) -> bool {
        matches!(self, Physics::Magnetohydro)
    }

    /// Number of primitive/conserved channels.
    pub fn num_channels(self) -> usize {
        match self {
            Physics::Hydro => crate::variables::NHYDRO,
            Physics::Magnetohydro => crate::variables::NMHD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FluidConfig {
    /// Adiabatic index.
    pub gamma: f64,
    #[serde(default)]
    pub physics: Physics,
}

impl FluidConfig {
    pub fn build(&self) -> Result<IdealGas, EosError> {
        IdealGas::new(self.gamma)
    }
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            gamma: 4.0 / 3.0,
            physics: Physics::Hydro,
        }
    }
}

/// Full configuration of a single block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub block: BlockConfig,
    #[serde(default)]
    pub fluid: FluidConfig,
}

impl Config {
    pub fn import(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = import_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn export(&self, path: &Path) -> Result<(), ConfigError> {
        export_toml(path, self)
    }

    /// Checks every section, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.build()?;
        self.block.build()?;
        self.fluid.build()?;
        Ok(())
    }
}
