/// Describes how the unique components of a rank `R` tensor in `N` dimensions are laid out.
pub trait TensorIndex<const N: usize, const R: usize> {
    /// Calls `f` once for every unique index, in storage order.
    fn for_each_index(f: impl FnMut([usize; R]));
}

/// Tensor with no symmetries, Tₐᵦ...
pub struct Gen;

impl<const N: usize, const R: usize> TensorIndex<N, R> for Gen {
    fn for_each_index(mut f: impl FnMut([usize; R])) {
        if R == 0 {
            f([0; R]);
            return;
        }

        if N == 0 {
            return;
        }

        let mut cursor = [0; R];

        f(cursor);

        'l: loop {
            for slot in (0..R).rev() {
                cursor[slot] += 1;

                if cursor[slot] < N {
                    f(cursor);
                    continue 'l;
                }

                cursor[slot] = 0;
            }

            break;
        }
    }
}

/// Symmetric rank two tensor T₍ₐᵦ₎. Only indices with `row >= col` are visited.
pub struct Sym;

impl<const N: usize> TensorIndex<N, 2> for Sym {
    fn for_each_index(mut f: impl FnMut([usize; 2])) {
        for row in 0..N {
            for col in 0..=row {
                f([row, col]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit<T: TensorIndex<N, R>, const N: usize, const R: usize>() -> Vec<[usize; R]> {
        let mut visited = Vec::new();
        T::for_each_index(|index| visited.push(index));
        visited
    }

    #[test]
    fn general_iteration() {
        assert_eq!(visit::<Gen, 2, 2>(), vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
        assert_eq!(visit::<Gen, 4, 3>().len(), 64);
        assert_eq!(visit::<Gen, 4, 0>(), vec![[]]);
        assert!(visit::<Gen, 0, 2>().is_empty());
    }

    #[test]
    fn symmetric_iteration() {
        let indices = visit::<Sym, 4, 2>();
        assert_eq!(indices.len(), 10);
        assert_eq!(indices[0], [0, 0]);
        assert_eq!(indices[1], [1, 0]);
        assert_eq!(indices[2], [1, 1]);
        assert_eq!(indices[9], [3, 3]);
        assert!(indices.iter().all(|[row, col]| col <= row));
    }
}
