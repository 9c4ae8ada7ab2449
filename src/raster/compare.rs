use std::fmt::{Display, Formatter};

use crate::errors::{RasterError, Result};
use crate::raster::{Grid, PixelValue};

/// Outcome of a cell-by-cell comparison of two grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridComparison {
    pub match_count: usize,
    pub total_count: usize,
    /// Share of identical cells in percent, rounded to two decimals.
    pub match_percentage: f64,
}

/// Count the cells holding the same value in `a` and `b`.
///
/// Values are compared with `==`, so floating point grids only match on
/// bit-for-bit equal values (and never on `NaN`).
pub fn compare_grids<T: PixelValue>(a: &Grid<T>, b: &Grid<T>) -> Result<GridComparison> {
    if a.shape() != b.shape() {
        return Err(RasterError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    if a.is_empty() {
        return Err(RasterError::EmptyInput("grids have no cells"));
    }

    let match_count = a
        .data()
        .iter()
        .zip(b.data())
        .filter(|(x, y)| x == y)
        .count();
    let total_count = a.len();
    let share = match_count as f64 / total_count as f64;
    let match_percentage = (share * 100.0 * 100.0).round() / 100.0;

    Ok(GridComparison {
        match_count,
        total_count,
        match_percentage,
    })
}

impl Display for GridComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}% of pixels are identical ({}/{} pixels)",
            self.match_percentage, self.match_count, self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_grids() {
        let a = Grid::new((4, 3), (0..12).collect::<Vec<i32>>()).unwrap();
        let c = compare_grids(&a, &a.clone()).unwrap();
        assert_eq!(c.match_count, 12);
        assert_eq!(c.total_count, 12);
        assert_eq!(c.match_percentage, 100.0);
        assert_eq!(c.to_string(), "100.0% of pixels are identical (12/12 pixels)");
    }

    #[test]
    fn whole_percentages_keep_a_decimal() {
        let a = Grid::new((2, 1), vec![1.5f32, 2.5]).unwrap();
        let b = Grid::new((2, 1), vec![1.5f32, 0.0]).unwrap();
        let c = compare_grids(&a, &b).unwrap();
        assert_eq!(c.to_string(), "50.0% of pixels are identical (1/2 pixels)");
    }

    #[test]
    fn partial_match_is_rounded() {
        let a = Grid::new((3, 1), vec![1u8, 2, 3]).unwrap();
        let b = Grid::new((3, 1), vec![1u8, 0, 0]).unwrap();
        let c = compare_grids(&a, &b).unwrap();
        assert_eq!(c.match_count, 1);
        assert_eq!(c.match_percentage, 33.33);
        assert_eq!(c.to_string(), "33.33% of pixels are identical (1/3 pixels)");
    }

    #[test]
    fn shapes_must_agree() {
        let a = Grid::filled((2, 3), 0.0f32);
        let b = Grid::filled((3, 2), 0.0f32);
        assert!(matches!(
            compare_grids(&a, &b),
            Err(RasterError::ShapeMismatch {
                left: (2, 3),
                right: (3, 2)
            })
        ));
    }

    #[test]
    fn nan_never_matches() {
        let a = Grid::filled((2, 2), f64::NAN);
        let c = compare_grids(&a, &a).unwrap();
        assert_eq!(c.match_count, 0);
        assert_eq!(c.match_percentage, 0.0);
    }
}
