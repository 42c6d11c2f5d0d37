//! Mesh block coordinate arrays and index spaces used to address block data.

#![allow(clippy::needless_range_loop)]

mod grid;
mod index;

pub use grid::{BlockGrid, GridAxis, GridError};
pub use index::{CartesianIter, IndexSpace, IndexWindow};
