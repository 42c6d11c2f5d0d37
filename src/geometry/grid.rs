use std::array;

use thiserror::Error;

use super::{IndexSpace, IndexWindow};

/// Error raised while constructing the coordinate arrays of a block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("axis {0} has no cells")]
    NoCells(usize),
    #[error("axis {axis} has bounds [{lower}, {upper}] which are not increasing")]
    InvertedBounds { axis: usize, lower: f64, upper: f64 },
    #[error("axis {axis} expects {expected} face coordinates, found {found}")]
    FaceCount {
        axis: usize,
        expected: usize,
        found: usize,
    },
    #[error("face coordinates along axis {axis} are not strictly increasing at face {face}")]
    NonMonotonic { axis: usize, face: usize },
}

/// Coordinate arrays of a block along a single axis.
///
/// Faces are indexed so that cell `i` is bounded by faces `i` and `i + 1`. Ghost cells
/// occupy the first and last `ghost` slots.
#[derive(Clone, Debug, PartialEq)]
pub struct GridAxis {
    active: usize,
    ghost: usize,
    faces: Box<[f64]>,
    centers: Box<[f64]>,
    face_widths: Box<[f64]>,
}

impl GridAxis {
    fn from_faces(
        axis: usize,
        active: usize,
        ghost: usize,
        faces: Vec<f64>,
    ) -> Result<Self, GridError> {
        if active == 0 {
            return Err(GridError::NoCells(axis));
        }

        let total = active + 2 * ghost;

        if faces.len() != total + 1 {
            return Err(GridError::FaceCount {
                axis,
                expected: total + 1,
                found: faces.len(),
            });
        }

        for face in 0..total {
            if !(faces[face + 1] > faces[face]) {
                return Err(GridError::NonMonotonic { axis, face });
            }
        }

        let centers: Box<[f64]> = (0..total)
            .map(|i| 0.5 * (faces[i] + faces[i + 1]))
            .collect();
        let face_widths: Box<[f64]> = (0..total).map(|i| faces[i + 1] - faces[i]).collect();

        Ok(Self {
            active,
            ghost,
            faces: faces.into_boxed_slice(),
            centers,
            face_widths,
        })
    }

    /// Number of active (non-ghost) cells.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of cells including ghosts.
    pub fn total(&self) -> usize {
        self.active + 2 * self.ghost
    }

    /// First active cell.
    pub fn start(&self) -> usize {
        self.ghost
    }

    /// Last active cell (inclusive).
    pub fn end(&self) -> usize {
        self.ghost + self.active - 1
    }
}

/// The coordinate arrays of a single mesh block (x1f, x1v, dx1f, ... in three
/// directions). Axes with a single active cell carry no ghost padding.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockGrid {
    axes: [GridAxis; 3],
}

impl BlockGrid {
    /// Builds a uniformly spaced block covering `[lower, upper]` along each axis, with the
    /// face spacing continued into the ghost region.
    pub fn uniform(
        cells: [usize; 3],
        ghost: usize,
        lower: [f64; 3],
        upper: [f64; 3],
    ) -> Result<Self, GridError> {
        let mut faces: [Vec<f64>; 3] = Default::default();

        for axis in 0..3 {
            if cells[axis] == 0 {
                return Err(GridError::NoCells(axis));
            }

            if !(upper[axis] > lower[axis]) {
                return Err(GridError::InvertedBounds {
                    axis,
                    lower: lower[axis],
                    upper: upper[axis],
                });
            }

            let padding = Self::padding(cells[axis], ghost);
            let spacing = (upper[axis] - lower[axis]) / cells[axis] as f64;

            faces[axis] = (0..=cells[axis] + 2 * padding)
                .map(|face| lower[axis] + (face as f64 - padding as f64) * spacing)
                .collect();
        }

        Self::from_faces(cells, ghost, faces)
    }

    /// Builds a block from explicit face coordinates, which must include the ghost region.
    pub fn from_faces(
        cells: [usize; 3],
        ghost: usize,
        faces: [Vec<f64>; 3],
    ) -> Result<Self, GridError> {
        let [f1, f2, f3] = faces;

        let axes = [
            GridAxis::from_faces(0, cells[0], Self::padding(cells[0], ghost), f1)?,
            GridAxis::from_faces(1, cells[1], Self::padding(cells[1], ghost), f2)?,
            GridAxis::from_faces(2, cells[2], Self::padding(cells[2], ghost), f3)?,
        ];

        Ok(Self { axes })
    }

    fn padding(cells: usize, ghost: usize) -> usize {
        if cells > 1 {
            ghost
        } else {
            0
        }
    }

    pub fn axis(&self, axis: usize) -> &GridAxis {
        &self.axes[axis]
    }

    /// Cell counts along each axis, including ghosts.
    pub fn total(&self) -> [usize; 3] {
        array::from_fn(|axis| self.axes[axis].total())
    }

    /// Index space of every cell, ghosts included, ordered `[i, j, k]`.
    pub fn index_space(&self) -> IndexSpace<3> {
        IndexSpace::new(self.total())
    }

    /// Window of active cells, ordered `[i, j, k]`.
    pub fn active_window(&self) -> IndexWindow<3> {
        IndexWindow::inclusive(
            array::from_fn(|axis| self.axes[axis].start()),
            array::from_fn(|axis| self.axes[axis].end()),
        )
    }

    pub fn is(&self) -> usize {
        self.axes[0].start()
    }

    pub fn ie(&self) -> usize {
        self.axes[0].end()
    }

    pub fn js(&self) -> usize {
        self.axes[1].start()
    }

    pub fn je(&self) -> usize {
        self.axes[1].end()
    }

    pub fn ks(&self) -> usize {
        self.axes[2].start()
    }

    pub fn ke(&self) -> usize {
        self.axes[2].end()
    }

    pub fn x1f(&self, i: usize) -> f64 {
        self.axes[0].faces[i]
    }

    pub fn x1v(&self, i: usize) -> f64 {
        self.axes[0].centers[i]
    }

    pub fn dx1f(&self, i: usize) -> f64 {
        self.axes[0].face_widths[i]
    }

    pub fn dx2f(&self, j: usize) -> f64 {
        self.axes[1].face_widths[j]
    }

    pub fn dx3f(&self, k: usize) -> f64 {
        self.axes[2].face_widths[k]
    }
}
