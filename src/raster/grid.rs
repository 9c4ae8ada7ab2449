use crate::errors::{RasterError, Result};
use crate::raster::PixelValue;

#[cfg(feature = "array")]
use ndarray::Array2;

/// A 2-D grid of pixel values backed by its `shape` (cols, rows) and a row-major `Vec<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: (usize, usize),
    data: Vec<T>,
}

impl<T: PixelValue> Grid<T> {
    /// Construct a new grid from `shape` (`(cols, rows)`) and row-major `data`.
    ///
    /// Fails with [`RasterError::InvalidInput`] if `shape.0 * shape.1 != data.len()`.
    pub fn new(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let cells = shape.0.checked_mul(shape.1);
        if cells != Some(data.len()) {
            return Err(RasterError::InvalidInput(format!(
                "shape {:?} does not match length {}",
                shape,
                data.len()
            )));
        }
        Ok(Grid { shape, data })
    }

    /// A grid of `shape` where every cell holds `value`.
    pub fn filled(shape: (usize, usize), value: T) -> Self {
        Grid {
            shape,
            data: vec![value; shape.0 * shape.1],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn cols(&self) -> usize {
        self.shape.0
    }

    pub fn rows(&self) -> usize {
        self.shape.1
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Value at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.shape.0 || y >= self.shape.1 {
            return None;
        }
        self.data.get(y * self.shape.0 + x).copied()
    }

    #[cfg(feature = "array")]
    /// Convert `self` into an [`ndarray::Array2`].
    pub fn to_array(self) -> Result<Array2<T>> {
        // Array2 shape is (rows, cols) and Grid shape is (cols in x-axis, rows in y-axis)
        Ok(Array2::from_shape_vec((self.shape.1, self.shape.0), self.data)?)
    }
}

#[cfg(feature = "array")]
impl<T: PixelValue> TryFrom<Grid<T>> for Array2<T> {
    type Error = RasterError;

    fn try_from(value: Grid<T>) -> Result<Self> {
        value.to_array()
    }
}

#[cfg(feature = "array")]
impl<T: PixelValue> From<Array2<T>> for Grid<T> {
    fn from(value: Array2<T>) -> Self {
        let (rows, cols) = value.dim();
        let data = value.as_standard_layout().iter().copied().collect::<Vec<T>>();
        Grid {
            shape: (cols, rows),
            data,
        }
    }
}
