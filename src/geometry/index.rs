use std::array;

/// A dense `N` dimensional index space, with the first axis varying fastest. Used to
/// address cell data of a mesh block stored in an [`Image`](crate::image::Image).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpace<const N: usize> {
    size: [usize; N],
}

impl<const N: usize> IndexSpace<N> {
    pub const fn new(size: [usize; N]) -> Self {
        Self { size }
    }

    /// Total number of indices in the space.
    pub fn index_count(&self) -> usize {
        self.size.iter().product()
    }

    pub fn size(self) -> [usize; N] {
        self.size
    }

    /// Converts a cartesian index into a linear offset.
    pub fn linear_from_cartesian(self, cartesian: [usize; N]) -> usize {
        let mut result = 0;
        let mut stride = 1;

        for axis in 0..N {
            debug_assert!(cartesian[axis] < self.size[axis]);
            result += stride * cartesian[axis];
            stride *= self.size[axis];
        }

        result
    }

    pub const fn iter(self) -> CartesianIter<N> {
        CartesianIter {
            size: self.size,
            cursor: [0; N],
        }
    }
}

impl<const N: usize> IntoIterator for IndexSpace<N> {
    type IntoIter = CartesianIter<N>;
    type Item = [usize; N];

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A rectangular subset of an index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexWindow<const N: usize> {
    /// Lowest index contained in the window.
    pub origin: [usize; N],
    /// Extent of the window along each axis.
    pub size: [usize; N],
}

impl<const N: usize> IndexWindow<N> {
    /// Builds a window from inclusive lower and upper bounds.
    pub fn inclusive(lower: [usize; N], upper: [usize; N]) -> Self {
        Self {
            origin: lower,
            size: array::from_fn(|axis| upper[axis] + 1 - lower[axis]),
        }
    }

    pub fn contains(&self, index: [usize; N]) -> bool {
        (0..N).all(|axis| {
            index[axis] >= self.origin[axis] && index[axis] < self.origin[axis] + self.size[axis]
        })
    }
}

/// Iterates the cartesian indices of an [`IndexSpace`].
#[derive(Debug, Clone)]
pub struct CartesianIter<const N: usize> {
    size: [usize; N],
    cursor: [usize; N],
}

impl<const N: usize> Iterator for CartesianIter<N> {
    type Item = [usize; N];

    fn next(&mut self) -> Option<Self::Item> {
        if N == 0 || self.size.contains(&0) || self.cursor[N - 1] == self.size[N - 1] {
            return None;
        }

        let result = self.cursor;

        for axis in 0..N {
            self.cursor[axis] += 1;

            // The last axis is left past the end to mark exhaustion.
            if self.cursor[axis] == self.size[axis] && axis < N - 1 {
                self.cursor[axis] = 0;
                continue;
            }

            break;
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_iteration() {
        let space = IndexSpace::new([3, 2]);
        let mut indices = space.iter();

        assert_eq!(indices.next(), Some([0, 0]));
        assert_eq!(indices.next(), Some([1, 0]));
        assert_eq!(indices.next(), Some([2, 0]));
        assert_eq!(indices.next(), Some([0, 1]));
        assert_eq!(indices.next(), Some([1, 1]));
        assert_eq!(indices.next(), Some([2, 1]));
        assert_eq!(indices.next(), None);

        assert_eq!(IndexSpace::new([0, 10]).iter().next(), None);

        let space = IndexSpace::new([2, 3, 4]);
        for (i, index) in space.iter().enumerate() {
            assert_eq!(i, space.linear_from_cartesian(index));
        }
        assert_eq!(space.iter().count(), space.index_count());
    }

    #[test]
    fn windows() {
        let window = IndexWindow::inclusive([2, 1, 0], [4, 1, 0]);
        assert_eq!(window.size, [3, 1, 1]);
        assert!(window.contains([3, 1, 0]));
        assert!(!window.contains([5, 1, 0]));
        assert!(!window.contains([3, 0, 0]));

        let space = IndexSpace::new([6, 3, 1]);
        let inside = space.into_iter().filter(|&index| window.contains(index)).collect::<Vec<_>>();
        assert_eq!(inside, vec![[2, 1, 0], [3, 1, 0], [4, 1, 0]]);
    }
}
