use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::{Gen, Sym, TensorIndex};

/// Helper for summing over tensor indices in `N` dimensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Space<const N: usize>;

impl<const N: usize> Space<N> {
    /// Sums `f` over every index of rank `R`.
    pub fn sum<const R: usize>(&self, f: impl Fn([usize; R]) -> f64) -> f64 {
        let mut result = 0.0;
        <Gen as TensorIndex<N, R>>::for_each_index(|index| result += f(index));
        result
    }
}

/// A rank one tensor with inline storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

impl<const N: usize> Vector<N> {
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    pub const fn zeros() -> Self {
        Self([0.0; N])
    }

    pub fn from_fn(f: impl Fn([usize; 1]) -> f64) -> Self {
        Self(std::array::from_fn(|i| f([i])))
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(value: [f64; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|[i]| self.0[i] + rhs.0[i])
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|[i]| self.0[i] - rhs.0[i])
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_fn(|[i]| self.0[i] * rhs)
    }
}

/// A rank two tensor with inline, row major storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const N: usize>([[f64; N]; N]);

impl<const N: usize> Matrix<N> {
    pub fn identity() -> Self {
        Self::from_fn(|[i, j]| if i == j { 1.0 } else { 0.0 })
    }

    pub fn from_fn(f: impl Fn([usize; 2]) -> f64) -> Self {
        Self(std::array::from_fn(|i| std::array::from_fn(|j| f([i, j]))))
    }

    /// Builds a diagonal matrix.
    pub fn diagonal(values: [f64; N]) -> Self {
        Self::from_fn(|[i, j]| if i == j { values[i] } else { 0.0 })
    }

    pub fn column(&self, col: usize) -> Vector<N> {
        Vector::from_fn(|[i]| self.0[i][col])
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|[i, j]| self.0[j][i])
    }

    /// Checks whether `Mᵢⱼ = Mⱼᵢ` to within `tolerance`.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let mut result = true;
        <Sym as TensorIndex<N, 2>>::for_each_index(|[i, j]| {
            result &= (self.0[i][j] - self.0[j][i]).abs() <= tolerance;
        });
        result
    }

    /// Largest absolute difference between two matrices.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut result = 0.0f64;
        <Gen as TensorIndex<N, 2>>::for_each_index(|[i, j]| {
            result = result.max((self.0[i][j] - other.0[i][j]).abs());
        });
        result
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    fn from(value: [[f64; N]; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> Index<[usize; 2]> for Matrix<N> {
    type Output = f64;

    fn index(&self, [i, j]: [usize; 2]) -> &f64 {
        &self.0[i][j]
    }
}

impl<const N: usize> IndexMut<[usize; 2]> for Matrix<N> {
    fn index_mut(&mut self, [i, j]: [usize; 2]) -> &mut f64 {
        &mut self.0[i][j]
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let s = Space::<N>;
        Self::from_fn(|[i, j]| s.sum(|[m]| self.0[i][m] * rhs.0[m][j]))
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        let s = Space::<N>;
        Vector::from_fn(|[i]| s.sum(|[m]| self.0[i][m] * rhs.0[m]))
    }
}

impl<const N: usize> Mul<Vector<N>> for &Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        *self * rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);

        assert_eq!(a * b, Matrix::from([[2.0, 1.0], [4.0, 3.0]]));
        assert_eq!(a * Vector::new([1.0, 1.0]), Vector::new([3.0, 7.0]));
        assert_eq!(a.transpose()[[0, 1]], 3.0);
        assert_eq!(a.column(1), Vector::new([2.0, 4.0]));

        let s = Space::<3>;
        assert_eq!(s.sum(|[i, j]| (i * j) as f64), 9.0);
    }
}
