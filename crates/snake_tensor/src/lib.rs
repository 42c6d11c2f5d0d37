//! Fixed-dimension tensor algebra used by the `snake` geometry engine.
//!
//! Tensors here are small and stored inline (`[f64; N]`, `[[f64; N]; N]`), which is all
//! a four dimensional spacetime metric, its inverse, and a local frame ever need.

#![allow(clippy::needless_range_loop)]

mod indices;
mod metric;
mod tensor;

pub use indices::{Gen, Sym, TensorIndex};
pub use metric::Metric;
pub use tensor::{Matrix, Space, Vector};
