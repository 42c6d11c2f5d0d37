#[cfg(feature = "parallel")]
use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use super::{four_velocity, Coordinates, DomainError};
use crate::eos::EquationOfState;
use crate::image::Image;
use crate::variables::{IDN, IEN, IM1, IVX, IVY, IVZ};

impl Coordinates {
    /// Adds the geometric source terms of a step of length `dt` to the conserved state.
    ///
    /// The only non-vanishing term acts on x1 momentum,
    /// `m₁ += dt · (β(x₋) - β(x₊)) / Δx · ρh u¹ u₂`, and is applied on active cells only.
    /// `prim` and `cons` span the whole block, ghosts included. Every cell is checked
    /// before any update, so `cons` is untouched when an error is returned.
    pub fn coordinate_source_terms<E: EquationOfState + Sync>(
        &self,
        dt: f64,
        prim: &Image,
        cons: &mut Image,
        eos: &E,
    ) -> Result<(), DomainError> {
        let space = self.grid.index_space();
        let [n1, n2, _] = space.size();

        assert_eq!(prim.len(), space.index_count());
        assert_eq!(cons.len(), space.index_count());
        assert!(prim.num_channels() > IEN && cons.num_channels() > IM1);

        let (is, ie) = (self.grid.is(), self.grid.ie());
        let (js, je) = (self.grid.js(), self.grid.je());
        let (ks, ke) = (self.grid.ks(), self.grid.ke());

        let row = |(r, delta): (usize, &mut [f64])| -> Result<(), DomainError> {
            let (j, k) = (r % n2, r / n2);
            if j < js || j > je || k < ks || k > ke {
                return Ok(());
            }

            for i in is..=ie {
                let offset = space.linear_from_cartesian([i, j, k]);
                let [rho, v1, v2, v3, pgas] = prim.gather([IDN, IVX, IVY, IVZ, IEN], offset);

                let metric = self.geometry.metric_cell[i].spacetime();
                let u = four_velocity(&metric, [v1, v2, v3], [i, j, k])?;
                let u_2 = metric.lower(u)[2];

                let stress = eos.enthalpy_density(rho, pgas) * u[1] * u_2;
                delta[i] = dt * self.geometry.source_coeff[i] * stress;
            }

            Ok(())
        };

        let mut increments = vec![0.0; space.index_count()];

        #[cfg(feature = "parallel")]
        increments.par_chunks_mut(n1).enumerate().try_for_each(row)?;

        #[cfg(not(feature = "parallel"))]
        increments.chunks_mut(n1).enumerate().try_for_each(row)?;

        for (momentum, delta) in cons.channel_mut(IM1).iter_mut().zip(&increments) {
            *momentum += delta;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Chart;
    use crate::config::Physics;
    use crate::eos::IdealGas;
    use crate::geometry::BlockGrid;
    use crate::variables::{IM2, IM3, NHYDRO};

    fn block(chart: Chart) -> Coordinates {
        let grid = BlockGrid::uniform([8, 4, 1], 2, [-3.0, 0.0, 0.0], [5.0, 1.0, 1.0]).unwrap();
        Coordinates::new(grid, chart, Physics::Hydro)
    }

    fn states(coords: &Coordinates) -> (Image, Image) {
        let len = coords.grid().index_space().index_count();
        let mut prim = Image::new(NHYDRO, len);
        prim.fill(&[1.2, 0.3, -0.1, 0.05, 0.8]);
        let mut cons = Image::new(NHYDRO, len);
        cons.fill(&[1.0, 0.5, 0.25, -0.5, 2.0]);
        (prim, cons)
    }

    #[test]
    fn flat_chart_has_no_source() {
        let coords = block(Chart::new(0.0, 0.1).unwrap());
        let eos = IdealGas::new(5.0 / 3.0).unwrap();
        let (prim, mut cons) = states(&coords);
        let before = cons.clone();

        coords
            .coordinate_source_terms(0.1, &prim, &mut cons, &eos)
            .unwrap();
        assert_eq!(cons, before);
    }

    #[test]
    fn static_fluid_has_no_source() {
        let grid = BlockGrid::uniform([4, 1, 1], 2, [-0.5, 0.0, 0.0], [0.5, 1.0, 1.0]).unwrap();
        let coords = Coordinates::new(grid, Chart::default(), Physics::Hydro);
        let eos = IdealGas::new(4.0 / 3.0).unwrap();

        let len = coords.grid().index_space().index_count();
        let mut prim = Image::new(NHYDRO, len);
        prim.fill(&[1.0, 0.0, 0.0, 0.0, 1.0]);
        let mut cons = Image::new(NHYDRO, len);

        coords
            .coordinate_source_terms(0.5, &prim, &mut cons, &eos)
            .unwrap();
        assert!(cons.storage().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn momentum_source() {
        let coords = block(Chart::default());
        let eos = IdealGas::new(5.0 / 3.0).unwrap();
        let (prim, mut cons) = states(&coords);
        let before = cons.clone();
        let dt = 0.01;

        coords
            .coordinate_source_terms(dt, &prim, &mut cons, &eos)
            .unwrap();

        let grid = coords.grid();
        let space = grid.index_space();
        let [rho, v1, v2, v3, pgas] = [1.2, 0.3, -0.1, 0.05, 0.8];

        for [i, j, k] in space.iter() {
            let offset = space.linear_from_cartesian([i, j, k]);
            let active = grid.active_window().contains([i, j, k]);

            let expected = if active {
                let pair = coords.cell_metric_pair(i);
                let (g11, g12) = (pair.alpha_sq, -pair.beta);
                let bracket =
                    -1.0 + g11 * v1 * v1 + 2.0 * g12 * v1 * v2 + v2 * v2 + v3 * v3;
                let u0 = (-1.0 / bracket).sqrt();
                let (u1, u2) = (u0 * v1, u0 * v2);
                let w = rho + 5.0 / 2.0 * pgas;
                let t = w * u1 * (g12 * u1 + u2);
                0.5 + dt * coords.source_coefficient(i) * t
            } else {
                0.5
            };

            assert!((cons.channel(IM1)[offset] - expected).abs() < 1e-14);

            for channel in [IDN, IM2, IM3, IEN] {
                assert_eq!(cons.channel(channel)[offset], before.channel(channel)[offset]);
            }
        }
    }

    #[test]
    fn superluminal_cells_fail() {
        let coords = block(Chart::default());
        let eos = IdealGas::new(5.0 / 3.0).unwrap();
        let (mut prim, mut cons) = states(&coords);
        let before = cons.clone();

        let space = coords.grid().index_space();
        prim.channel_mut(IVX)[space.linear_from_cartesian([5, 3, 0])] = 1.5;
        // Ghost cells are never read.
        prim.channel_mut(IVX)[space.linear_from_cartesian([0, 0, 0])] = 10.0;

        assert!(matches!(
            coords.coordinate_source_terms(0.1, &prim, &mut cons, &eos),
            Err(DomainError::Superluminal { index: [5, 3, 0], .. })
        ));
        // Rows ahead of the failing one must not have been updated either.
        assert_eq!(cons, before);
    }
}
