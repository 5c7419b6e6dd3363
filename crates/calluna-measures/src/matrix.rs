//! Symmetric pairwise distance matrix.

use crate::measure::MeasureDistance;

/// Distances for all unique pairs of a series collection.
///
/// Stored as a lower-triangular flat vector of `n*(n-1)/2` entries at
/// `data[i*(i-1)/2 + j]` for `i > j`. Access is symmetric and the diagonal
/// is always zero.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<MeasureDistance>,
}

impl DistanceMatrix {
    pub(crate) fn from_raw(n: usize, data: Vec<MeasureDistance>) -> Self {
        debug_assert_eq!(data.len(), n * n.saturating_sub(1) / 2);
        Self { n, data }
    }

    /// Return the number of series in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the matrix covers no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Return the distance between series `i` and series `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()` or `j >= len()`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> MeasureDistance {
        assert!(i < self.n, "row index {i} out of bounds for {} series", self.n);
        assert!(j < self.n, "column index {j} out of bounds for {} series", self.n);
        if i == j {
            return MeasureDistance::new(0.0);
        }
        let (row, col) = if i > j { (i, j) } else { (j, i) };
        self.data[row * (row - 1) / 2 + col]
    }

    /// Return all distances from series `i` to every series, including itself.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<MeasureDistance> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }

    /// Iterate over unique pairs `(i, j, distance)` with `i > j`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, MeasureDistance)> + '_ {
        (1..self.n).flat_map(move |i| (0..i).map(move |j| (i, j, self.data[i * (i - 1) / 2 + j])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_3() -> DistanceMatrix {
        // Pairs in layout order: (1,0), (2,0), (2,1)
        DistanceMatrix::from_raw(
            3,
            vec![
                MeasureDistance::new(1.0),
                MeasureDistance::new(2.0),
                MeasureDistance::new(3.0),
            ],
        )
    }

    #[test]
    fn diagonal_is_zero() {
        let m = matrix_3();
        for i in 0..3 {
            assert_eq!(m.get(i, i).value(), 0.0);
        }
    }

    #[test]
    fn symmetric_access() {
        let m = matrix_3();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j).value(), m.get(j, i).value());
            }
        }
    }

    #[test]
    fn layout_order() {
        let m = matrix_3();
        assert_eq!(m.get(1, 0).value(), 1.0);
        assert_eq!(m.get(2, 0).value(), 2.0);
        assert_eq!(m.get(2, 1).value(), 3.0);
    }

    #[test]
    fn row_includes_diagonal() {
        let m = matrix_3();
        let row1: Vec<f64> = m.row(1).iter().map(|d| d.value()).collect();
        assert_eq!(row1, vec![1.0, 0.0, 3.0]);
    }

    #[test]
    fn iter_covers_lower_triangle() {
        let m = matrix_3();
        let pairs: Vec<_> = m.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (1, 0, MeasureDistance::new(1.0)));
        assert_eq!(pairs[2], (2, 1, MeasureDistance::new(3.0)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_panics_out_of_bounds() {
        matrix_3().get(3, 0);
    }

    #[test]
    fn empty_and_singleton_matrices() {
        let empty = DistanceMatrix::from_raw(0, Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);

        let single = DistanceMatrix::from_raw(1, Vec::new());
        assert_eq!(single.len(), 1);
        assert_eq!(single.get(0, 0).value(), 0.0);
    }
}
