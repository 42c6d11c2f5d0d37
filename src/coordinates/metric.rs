use std::ops::RangeInclusive;

use snake_tensor::{Matrix, Metric, Vector};

use super::{Coordinates, Direction, DomainError};
use crate::chart::MetricPair;
use crate::image::Image;
use crate::variables::{I00, I11, I12, I22, I33, NMETRIC};

impl MetricPair {
    /// Independent covariant components, ordered `[g00, g11, g12, g22, g33]`.
    pub fn covariant(&self) -> [f64; NMETRIC] {
        [-1.0, self.alpha_sq, -self.beta, 1.0, 1.0]
    }

    /// Independent contravariant components, ordered like [`Self::covariant`].
    ///
    /// The spatial block has unit determinant since `α² = 1 + β²`, so the inverse is exact.
    pub fn contravariant(&self) -> [f64; NMETRIC] {
        [-1.0, 1.0, self.beta, self.alpha_sq, 1.0]
    }

    /// Full spacetime metric in chart coordinates.
    pub fn spacetime(&self) -> Metric<4> {
        Metric::new(expand(self.covariant()), expand(self.contravariant()))
    }
}

fn expand([c00, c11, c12, c22, c33]: [f64; NMETRIC]) -> Matrix<4> {
    Matrix::from([
        [c00, 0.0, 0.0, 0.0],
        [0.0, c11, c12, 0.0],
        [0.0, c12, c22, 0.0],
        [0.0, 0.0, 0.0, c33],
    ])
}

/// Normalizes the coordinate velocity `v` of cell `index` into a four-velocity,
/// `u⁰ = sqrt(-1 / gₐᵦ vᵃ vᵝ)` with `v⁰ = 1`.
pub fn four_velocity(
    metric: &Metric<4>,
    [v1, v2, v3]: [f64; 3],
    index: [usize; 3],
) -> Result<Vector<4>, DomainError> {
    let v = Vector::new([1.0, v1, v2, v3]);
    let bracket = metric.dot(&v, &v);

    if !(bracket < 0.0) || !bracket.is_finite() {
        log::error!(
            "Velocity ({v1:e}, {v2:e}, {v3:e}) at cell {index:?} is not timelike: {bracket:e}"
        );
        return Err(DomainError::Superluminal { index, bracket });
    }

    Ok(v * (-1.0 / bracket).sqrt())
}

impl Coordinates {
    /// Fills the metric and inverse metric at every x1 cell centre, ghosts included.
    /// Both images must carry [`NMETRIC`] channels and span the full x1 extent of the
    /// block. The values are independent of `j` and `k`.
    pub fn cell_metric(&self, g: &mut Image, g_inv: &mut Image) {
        let n = self.grid.axis(0).total();
        fill_metric(&self.geometry.metric_cell, 0..=n - 1, g, g_inv);
    }

    /// Fills the metric and inverse metric on the interfaces swept in `direction`.
    pub fn face_metric(&self, direction: Direction, g: &mut Image, g_inv: &mut Image) {
        fill_metric(
            &self.geometry.metric_face[direction.axis()],
            self.face_range(direction),
            g,
            g_inv,
        );
    }
}

fn fill_metric(
    pairs: &[MetricPair],
    range: RangeInclusive<usize>,
    g: &mut Image,
    g_inv: &mut Image,
) {
    const CHANNELS: [usize; NMETRIC] = [I00, I11, I12, I22, I33];

    assert!(g.num_channels() >= NMETRIC && g_inv.num_channels() >= NMETRIC);
    assert!(g.len() > *range.end() && g_inv.len() > *range.end());

    for i in range {
        g.scatter(CHANNELS, i, pairs[i].covariant());
        g_inv.scatter(CHANNELS, i, pairs[i].contravariant());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::config::Physics;
    use crate::geometry::BlockGrid;

    fn read(image: &Image, i: usize) -> Matrix<4> {
        expand(image.gather([I00, I11, I12, I22, I33], i))
    }

    #[test]
    fn inverse_everywhere() {
        let grid = BlockGrid::uniform([16, 1, 1], 2, [-7.0, 0.0, 0.0], [9.0, 1.0, 1.0]).unwrap();
        let coords = Coordinates::new(grid, Chart::default(), Physics::Hydro);
        let n = coords.grid().axis(0).total();

        let mut g = Image::new(NMETRIC, n);
        let mut g_inv = Image::new(NMETRIC, n);

        coords.cell_metric(&mut g, &mut g_inv);
        for i in 0..n {
            let product = read(&g, i) * read(&g_inv, i);
            assert!(product.max_difference(&Matrix::identity()) < 1e-12);
            assert!(g.channel(I11)[i] >= 1.0);
            assert_eq!(g.channel(I00)[i], -1.0);
        }

        for direction in Direction::ALL {
            let mut g = Image::new(NMETRIC, n);
            let mut g_inv = Image::new(NMETRIC, n);
            coords.face_metric(direction, &mut g, &mut g_inv);

            for i in coords.face_range(direction) {
                let product = read(&g, i) * read(&g_inv, i);
                assert!(product.max_difference(&Matrix::identity()) < 1e-12);
                assert_eq!(g.channel(I33)[i], 1.0);
            }
        }
    }

    #[test]
    fn face_locations() {
        let grid = BlockGrid::uniform([4, 1, 1], 2, [0.0; 3], [2.0, 1.0, 1.0]).unwrap();
        let coords = Coordinates::new(grid, Chart::default(), Physics::Hydro);
        let chart = *coords.chart();
        let n = coords.grid().axis(0).total();

        let mut g = Image::new(NMETRIC, n);
        let mut g_inv = Image::new(NMETRIC, n);

        coords.face_metric(Direction::X1, &mut g, &mut g_inv);
        for i in coords.face_range(Direction::X1) {
            let x = coords.grid().x1f(i);
            assert_eq!(g.channel(I11)[i], chart.alpha_sq(x));
            assert_eq!(g.channel(I12)[i], -chart.beta(x));
            assert_eq!(g_inv.channel(I12)[i], chart.beta(x));
            assert_eq!(g_inv.channel(I22)[i], chart.alpha_sq(x));
        }
        // Ghost entries are left alone.
        assert_eq!(g.channel(I11)[0], 0.0);

        coords.face_metric(Direction::X3, &mut g, &mut g_inv);
        for i in coords.face_range(Direction::X3) {
            let x = coords.grid().x1v(i);
            assert_eq!(g.channel(I11)[i], chart.alpha_sq(x));
        }
    }

    #[test]
    fn unpadded_faces() {
        let grid = BlockGrid::uniform([8, 1, 1], 0, [0.0; 3], [4.0, 1.0, 1.0]).unwrap();
        let coords = Coordinates::new(grid, Chart::default(), Physics::Hydro);
        let n = coords.grid().axis(0).total() + 1;

        let mut g = Image::new(NMETRIC, n);
        let mut g_inv = Image::new(NMETRIC, n);
        coords.face_metric(Direction::X1, &mut g, &mut g_inv);

        let x = coords.grid().x1f(8);
        assert_eq!(g.channel(I11)[8], coords.chart().alpha_sq(x));
        assert_eq!(g_inv.channel(I12)[8], coords.chart().beta(x));
        assert!((read(&g, 8) * read(&g_inv, 8)).max_difference(&Matrix::identity()) < 1e-12);
    }

    #[test]
    fn normalization() {
        let metric = Chart::default().metric_pair(0.0).spacetime();
        assert!(metric.inverse_residual() < 1e-14);

        let rest = four_velocity(&metric, [0.0; 3], [0; 3]).unwrap();
        assert_eq!(rest, Vector::new([1.0, 0.0, 0.0, 0.0]));

        let u = four_velocity(&metric, [0.3, 0.1, -0.2], [0; 3]).unwrap();
        assert!((metric.dot(&u, &u) + 1.0).abs() < 1e-14);

        // α² v1² = 2 alone exceeds light speed.
        assert!(matches!(
            four_velocity(&metric, [1.0, 0.0, 0.0], [3, 1, 2]),
            Err(DomainError::Superluminal { index: [3, 1, 2], .. })
        ));
        assert!(four_velocity(&metric, [f64::NAN, 0.0, 0.0], [0; 3]).is_err());
    }
}
