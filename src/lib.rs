//! Geometry engine for relativistic (magneto)hydrodynamics on flat spacetime expressed in
//! a sinusoidally sheared "snake" chart.
//!
//! A finite volume solver hands each mesh block to [`Coordinates`](coordinates::Coordinates),
//! which precomputes the metric along x1 and provides cell volumes, face areas, metric
//! components, frame transformations for interface Riemann problems, and the geometric
//! momentum source.

#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]

pub mod chart;
pub mod config;
pub mod coordinates;
pub mod eos;
pub mod geometry;
pub mod image;
pub mod variables;

/// Provides the types used by most consumers of the geometry engine.
pub mod prelude {
    pub use crate::chart::{Chart, MetricPair};
    pub use crate::config::{Config, Physics};
    pub use crate::coordinates::{Coordinates, Direction, DomainError, NormalField, Tetrad};
    pub use crate::eos::{EquationOfState, IdealGas};
    pub use crate::geometry::{BlockGrid, IndexSpace, IndexWindow};
    pub use crate::image::Image;
}
