use crate::{Matrix, Space, Vector};

/// A metric gₐᵦ together with its inverse gᵃᵝ, evaluated at a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric<const N: usize> {
    g: Matrix<N>,
    ginv: Matrix<N>,
}

impl<const N: usize> Metric<N> {
    /// Pairs a metric with an inverse that is already known in closed form.
    pub fn new(g: Matrix<N>, ginv: Matrix<N>) -> Self {
        debug_assert!(g.is_symmetric(0.0));
        debug_assert!(ginv.is_symmetric(0.0));
        Self { g, ginv }
    }

    /// Covariant components gₐᵦ.
    pub fn value(&self) -> &Matrix<N> {
        &self.g
    }

    /// Lowers the index of a vector, `vₐ = gₐᵦ vᵝ`.
    pub fn lower(&self, vector: Vector<N>) -> Vector<N> {
        self.g * vector
    }

    /// Inner product `gₐᵦ uᵃ vᵝ`.
    pub fn dot(&self, u: &Vector<N>, v: &Vector<N>) -> f64 {
        Space::<N>.sum(|[a, b]| self.g[[a, b]] * u[a] * v[b])
    }

    /// Largest deviation of `gₐᵦ gᵝᶜ` from the identity.
    pub fn inverse_residual(&self) -> f64 {
        (self.g * self.ginv).max_difference(&Matrix::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_with_known_inverse() {
        let g = Matrix::from([
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, -1.0, 0.0],
            [0.0, -1.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let ginv = Matrix::from([
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let metric = Metric::new(g, ginv);
        assert!(metric.inverse_residual() < 1e-14);

        let u = Vector::new([1.5, 0.3, -0.2, 0.1]);
        let lowered = metric.lower(u);
        let distance = |a: Vector<4>, b: Vector<4>| Space::<4>.sum(|[m]| (a[m] - b[m]).abs());
        assert!(distance(lowered, Vector::new([-1.5, 0.8, -0.5, 0.1])) < 1e-14);
        assert!(distance(ginv * lowered, u) < 1e-14);

        let contracted = Space::<4>.sum(|[a]| lowered[a] * u[a]);
        assert!((metric.dot(&u, &u) - contracted).abs() < 1e-14);

        let skewed = Metric::new(g, Matrix::identity());
        assert!(skewed.inverse_residual() > 0.5);
    }

    #[test]
    fn minkowski() {
        let eta = Matrix::diagonal([-1.0, 1.0, 1.0, 1.0]);
        let metric = Metric::new(eta, eta);
        assert_eq!(metric.inverse_residual(), 0.0);

        let t = Vector::new([1.0, 0.0, 0.0, 0.0]);
        assert_eq!(metric.dot(&t, &t), -1.0);
    }
}
