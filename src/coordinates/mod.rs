//! Geometry of a mesh block in the snake chart.
//!
//! [`Coordinates`] owns the coordinate arrays of a block together with every geometric
//! quantity derived from them. Since the metric only varies along x1, all precomputed
//! data is stored in one dimensional arrays indexed by the x1 cell index `i`, covering
//! ghost cells as well. The flux solver calls into this module once per sweep
//! direction and row of cells to obtain volumes, areas, metric components, and the
//! transformations into and out of the locally flat frame its Riemann solver works in.

use thiserror::Error;

use crate::chart::{Chart, MetricPair};
use crate::config::{Config, ConfigError, Physics};
use crate::geometry::BlockGrid;

mod frame;
mod metric;
mod source;
mod volume;

pub use frame::{Direction, NormalField, Tetrad};
pub use metric::four_velocity;

/// Error raised when a state cannot be interpreted in the chart.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("superluminal velocity at cell {index:?}: bracket {bracket:.4e} is not negative")]
    Superluminal { index: [usize; 3], bracket: f64 },
}

/// One dimensional geometric data along x1, computed once per block.
#[derive(Clone, Debug)]
struct Geometry {
    /// Effective width of each cell along x1.
    cell_width: Box<[f64]>,
    /// Connection coefficient sourcing x1 momentum.
    source_coeff: Box<[f64]>,
    /// Metric at cell centres.
    metric_cell: Box<[MetricPair]>,
    /// Metric on the faces seen by each sweep direction. x1 faces sit at `x1f[i]` and
    /// carry one more entry than there are cells; x2 and x3 faces share the cell centre
    /// value.
    metric_face: [Box<[MetricPair]>; 3],
    /// `β` on x1 faces, one entry per face.
    trans_face1: Box<[f64]>,
    /// `(α, β)` on x2 faces.
    trans_face2: Box<[[f64; 2]]>,
    /// `β` on x3 faces.
    trans_face3: Box<[f64]>,
}

impl Geometry {
    fn new(grid: &BlockGrid, chart: &Chart) -> Self {
        let n = grid.axis(0).total();

        let mut cell_width = Vec::with_capacity(n);
        let mut source_coeff = Vec::with_capacity(n);
        let mut metric_cell = Vec::with_capacity(n);
        let mut metric_face1 = Vec::with_capacity(n + 1);
        let mut trans_face1 = Vec::with_capacity(n + 1);
        let mut trans_face2 = Vec::with_capacity(n);
        let mut trans_face3 = Vec::with_capacity(n);

        for i in 0..n {
            let x_c = grid.x1v(i);
            let x_m = grid.x1f(i);
            let x_p = grid.x1f(i + 1);

            let center = chart.metric_pair(x_c);
            let face = chart.metric_pair(x_m);

            cell_width.push(chart.width(x_m, x_p));
            source_coeff.push(chart.source_coefficient(x_m, x_p));

            metric_cell.push(center);
            metric_face1.push(face);

            trans_face1.push(face.beta);
            trans_face2.push([center.alpha(), center.beta]);
            trans_face3.push(center.beta);
        }

        // Rightmost face, swept whenever x1 carries no ghost padding.
        let last = chart.metric_pair(grid.x1f(n));
        metric_face1.push(last);
        trans_face1.push(last.beta);

        let metric_cell: Box<[MetricPair]> = metric_cell.into_boxed_slice();

        Self {
            cell_width: cell_width.into_boxed_slice(),
            source_coeff: source_coeff.into_boxed_slice(),
            metric_face: [
                metric_face1.into_boxed_slice(),
                metric_cell.clone(),
                metric_cell.clone(),
            ],
            metric_cell,
            trans_face1: trans_face1.into_boxed_slice(),
            trans_face2: trans_face2.into_boxed_slice(),
            trans_face3: trans_face3.into_boxed_slice(),
        }
    }
}

/// The coordinate system of a single mesh block.
#[derive(Clone, Debug)]
pub struct Coordinates {
    grid: BlockGrid,
    chart: Chart,
    physics: Physics,
    geometry: Geometry,
}

impl Coordinates {
    /// Takes ownership of a block's coordinate arrays and precomputes its geometry.
    pub fn new(grid: BlockGrid, chart: Chart, physics: Physics) -> Self {
        let geometry = Geometry::new(&grid, &chart);

        log::debug!(
            "Precomputed snake geometry for {} x1 cells (a = {}, k = {})",
            geometry.cell_width.len(),
            chart.amplitude(),
            chart.wavenumber()
        );

        Self {
            grid,
            chart,
            physics,
            geometry,
        }
    }

    /// Builds the block, chart, and physics described by a configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let chart = config.chart.build()?;
        let grid = config.block.build()?;
        Ok(Self::new(grid, chart, config.fluid.physics))
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn physics(&self) -> Physics {
        self.physics
    }

    /// Metric at the centre of x1 cell `i`.
    pub fn cell_metric_pair(&self, i: usize) -> MetricPair {
        self.geometry.metric_cell[i]
    }

    /// Metric on the interface `i` crossed by a sweep in `direction`.
    pub fn face_metric_pair(&self, direction: Direction, i: usize) -> MetricPair {
        self.geometry.metric_face[direction.axis()][i]
    }

    /// Connection coefficient of x1 cell `i`.
    pub fn source_coefficient(&self, i: usize) -> f64 {
        self.geometry.source_coeff[i]
    }

    /// Range of x1 indices on which interface data is computed for a sweep in `direction`.
    /// x1 sweeps include the face to the right of the last active cell.
    pub fn face_range(&self, direction: Direction) -> std::ops::RangeInclusive<usize> {
        match direction {
            Direction::X1 => self.grid.is()..=self.grid.ie() + 1,
            Direction::X2 | Direction::X3 => self.grid.is()..=self.grid.ie(),
        }
    }
}
