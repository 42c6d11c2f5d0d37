//! Transformations between the chart and the locally flat frame of an interface.
//!
//! For a sweep in direction `d` the local frame is orthonormal, with its `x` axis along
//! the interface normal. Local `(x, y, z)` components occupy the velocity (or momentum)
//! slots of axes `(d, d + 1, d + 2)` taken cyclically, so a flat space Riemann solver can
//! always treat the normal slot as "x".

use snake_tensor::{Matrix, Metric, Vector};

use super::{four_velocity, Coordinates, DomainError};
use crate::image::Image;
use crate::variables::{IBY, IBZ, IDN, IEN, IM1, IM2, IM3, MOMENTUM, VELOCITY};

/// Axis normal to the interfaces of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    X1,
    X2,
    X3,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::X1, Direction::X2, Direction::X3];

    /// Zero based index of the normal axis.
    pub fn axis(self) -> usize {
        match self {
            Direction::X1 => 0,
            Direction::X2 => 1,
            Direction::X3 => 2,
        }
    }

    /// Global axes which map onto local `x`, `y`, and `z`.
    pub fn permutation(self) -> [usize; 3] {
        let axis = self.axis();
        [axis, (axis + 1) % 3, (axis + 2) % 3]
    }
}

/// An orthonormal frame at an interface.
///
/// `forward` maps contravariant chart components onto local ones, `(uᵗ, uˣ, uʸ, uᶻ) =
/// forward · (u⁰, u¹, u², u³)`. `inverse` maps back; its columns are the local basis
/// vectors expressed in the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrad {
    forward: Matrix<4>,
    inverse: Matrix<4>,
}

impl Tetrad {
    /// Frame on an x1 interface with shear `β`.
    pub fn x1(beta: f64) -> Self {
        Self {
            forward: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, -beta, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
            inverse: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, beta, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        }
    }

    /// Frame on an x2 interface.
    pub fn x2(alpha: f64, beta: f64) -> Self {
        Self {
            forward: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0 / alpha, 0.0],
                [0.0, 0.0, 0.0, 1.0],
                [0.0, alpha, -beta / alpha, 0.0],
            ]),
            inverse: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, beta / alpha, 0.0, 1.0 / alpha],
                [0.0, alpha, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ]),
        }
    }

    /// Frame on an x3 interface.
    pub fn x3(beta: f64) -> Self {
        Self {
            forward: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, -beta, 1.0, 0.0],
            ]),
            inverse: Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, beta, 1.0],
                [0.0, 1.0, 0.0, 0.0],
            ]),
        }
    }
}

/// Normal magnetic field of a row of interfaces. The field is continuous across an
/// interface, so it is stored once rather than per side.
#[derive(Debug)]
pub struct NormalField<'a> {
    /// Chart component `Bᵈ`, indexed by x1 interface.
    pub global: &'a [f64],
    /// Receives the local normal component, averaged over both sides.
    pub local: &'a mut [f64],
}

/// Rewrites the primitive state at entry `i` in the local frame. Returns the local
/// normal field when `normal` is given.
fn state_to_local(
    metric: &Metric<4>,
    tetrad: &Tetrad,
    permutation: [usize; 3],
    state: &mut Image,
    i: usize,
    normal: Option<f64>,
    index: [usize; 3],
) -> Result<Option<f64>, DomainError> {
    let [d, t1, t2] = permutation;

    let u = four_velocity(metric, state.gather(VELOCITY, i), index)?;
    let u_local = tetrad.forward * u;

    state.scatter(
        [VELOCITY[d], VELOCITY[t1], VELOCITY[t2]],
        i,
        [
            u_local[1] / u_local[0],
            u_local[2] / u_local[0],
            u_local[3] / u_local[0],
        ],
    );

    let Some(bn) = normal else {
        return Ok(None);
    };

    let mut field = Vector::<4>::zeros();
    field[d + 1] = bn;
    field[t1 + 1] = state.channel(IBY)[i];
    field[t2 + 1] = state.channel(IBZ)[i];

    // Comoving field bᵘ from the lab frame field Bⁱ.
    let b0 = metric.dot(&field, &u);
    let mut b = Vector::<4>::zeros();
    b[0] = b0;
    for m in 1..4 {
        b[m] = (field[m] + b0 * u[m]) / u[0];
    }

    let b_local = tetrad.forward * b;
    let lab = |a: usize| u_local[0] * b_local[a] - u_local[a] * b_local[0];

    state.scatter([IBY, IBZ], i, [lab(2), lab(3)]);

    Ok(Some(lab(1)))
}

impl Coordinates {
    /// Frame at interface `i` of a sweep in `direction`.
    pub fn tetrad(&self, direction: Direction, i: usize) -> Tetrad {
        match direction {
            Direction::X1 => Tetrad::x1(self.geometry.trans_face1[i]),
            Direction::X2 => {
                let [alpha, beta] = self.geometry.trans_face2[i];
                Tetrad::x2(alpha, beta)
            }
            Direction::X3 => Tetrad::x3(self.geometry.trans_face3[i]),
        }
    }

    /// Transforms reconstructed left and right primitive states on the row `(k, j)` of
    /// interfaces into the local frame of each interface.
    ///
    /// Both images are indexed by x1 interface. On input their velocity slots hold chart
    /// velocities, and for magnetized fluids [`IBY`]/[`IBZ`] hold the chart field along
    /// axes `d + 1` and `d + 2`. On output the velocity slots of axes `(d, d + 1, d + 2)`
    /// hold the local `(x, y, z)` velocity and [`IBY`]/[`IBZ`] the local `y` and `z` field.
    /// Density and pressure are invariant.
    ///
    /// Fails if a state is not timelike, in which case the row is left partially
    /// transformed.
    pub fn prim_to_local(
        &self,
        direction: Direction,
        k: usize,
        j: usize,
        left: &mut Image,
        right: &mut Image,
        mut normal: Option<NormalField<'_>>,
    ) -> Result<(), DomainError> {
        let range = self.face_range(direction);
        let channels = self.physics.num_channels();

        assert!(left.num_channels() >= channels && right.num_channels() >= channels);
        assert!(left.len() > *range.end() && right.len() > *range.end());

        assert_eq!(
            normal.is_some(),
            self.physics.is_magnetic(),
            "a normal field is passed exactly for magnetized sweeps"
        );

        if let Some(field) = &normal {
            assert!(field.global.len() > *range.end() && field.local.len() > *range.end());
        }

        let permutation = direction.permutation();

        for i in range {
            let metric = self.face_metric_pair(direction, i).spacetime();
            let tetrad = self.tetrad(direction, i);
            let bn = normal.as_ref().map(|field| field.global[i]);

            let l = state_to_local(&metric, &tetrad, permutation, left, i, bn, [i, j, k])?;
            let r = state_to_local(&metric, &tetrad, permutation, right, i, bn, [i, j, k])?;

            if let (Some(field), Some(l), Some(r)) = (normal.as_mut(), l, r) {
                field.local[i] = 0.5 * (l + r);
            }
        }

        Ok(())
    }

    /// Transforms local frame fluxes through the interfaces of a sweep in `direction` back
    /// into the chart, in place.
    ///
    /// On input [`IDN`] holds the mass flux, [`IEN`] the energy flux `Tˣᵗ`, and the
    /// momentum slots of axes `(d, d + 1, d + 2)` hold `Tˣˣ`, `Tˣʸ`, `Tˣᶻ`. On output
    /// [`IDN`] holds `Dᵈ`, [`IEN`] holds `Tᵈ₀`, and [`IM1`]..[`IM3`] hold `Tᵈ₁`..`Tᵈ₃`.
    /// For magnetized fluids the local field fluxes in [`IBY`]/[`IBZ`] become the chart
    /// fluxes `Fᵐᵈ` of axes `d + 1` and `d + 2`.
    pub fn flux_to_global(&self, direction: Direction, flux: &mut Image) {
        let range = self.face_range(direction);

        assert!(flux.num_channels() >= self.physics.num_channels());
        assert!(flux.len() > *range.end());

        let [d, t1, t2] = direction.permutation();

        for i in range {
            let metric = self.face_metric_pair(direction, i).spacetime();
            let tetrad = self.tetrad(direction, i);
            let inverse = tetrad.inverse;
            // Chart normal component of the local x axis.
            let normal = inverse[[d + 1, 1]];

            let [mass, energy, txx, txy, txz] =
                flux.gather([IDN, IEN, MOMENTUM[d], MOMENTUM[t1], MOMENTUM[t2]], i);

            let stress = (inverse * Vector::new([energy, txx, txy, txz])) * normal;
            let stress = metric.lower(stress);

            flux.scatter(
                [IDN, IEN, IM1, IM2, IM3],
                i,
                [
                    normal * mass,
                    stress[0],
                    stress[1],
                    stress[2],
                    stress[3],
                ],
            );

            if self.physics.is_magnetic() {
                let [fy, fz] = flux.gather([IBY, IBZ], i);
                let field =
                    |m: usize| normal * (inverse[[m + 1, 2]] * fy + inverse[[m + 1, 3]] * fz);
                flux.scatter([IBY, IBZ], i, [field(t1), field(t2)]);
            }
        }
    }
}
