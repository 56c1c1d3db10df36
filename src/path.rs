//! Immutable N×D point sequences.
//!
//! A [`Path`] is the input to every selection routine. It is stored
//! row-major in a single buffer; row `i` is the `i`-th point.

use std::fmt;

use crate::error::PathError;
use crate::utils::euclidean;

/// Ordered sequence of `len` points in `dim`-dimensional space.
///
/// Invariants enforced at construction:
/// - `len >= 1` and `dim >= 1`,
/// - every coordinate is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    len: usize,
    dim: usize,
    data: Vec<f64>,
}

impl Path {
    /// Build a path from a row-major buffer of `len * dim` values.
    pub fn new(len: usize, dim: usize, data: Vec<f64>) -> Result<Self, PathError> {
        if len == 0 {
            return Err(PathError::Empty);
        }
        if dim == 0 {
            return Err(PathError::ZeroDimension);
        }
        let expected = len * dim;
        if data.len() != expected {
            return Err(PathError::ShapeMismatch {
                len,
                dim,
                expected,
                actual: data.len(),
            });
        }
        // Costs must never collide with the NaN sentinel of the cache.
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(PathError::NonFinite {
                row: pos / dim,
                col: pos % dim,
            });
        }
        Ok(Self { len, dim, data })
    }

    /// Build a path from a slice of rows. All rows must have the same width.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, PathError> {
        let first = rows.first().ok_or(PathError::Empty)?;
        let dim = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * dim);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dim {
                return Err(PathError::RaggedRow {
                    row,
                    expected: dim,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Self::new(rows.len(), dim, data)
    }

    /// Build a one-dimensional path, one point per value.
    pub fn from_values(values: &[f64]) -> Result<Self, PathError> {
        Self::new(values.len(), 1, values.to_vec())
    }

    /// Number of points N.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a path holds at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of coordinates per point D.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`.
    ///
    /// # Panics
    /// Panics if `i >= len`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.len, "row {i} out of range for path of length {}", self.len);
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over the points in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.dim)
    }

    /// Euclidean length of the step from point `i` to point `i + 1`.
    ///
    /// # Panics
    /// Panics if `i + 1 >= len`.
    #[inline]
    pub fn step_length(&self, i: usize) -> f64 {
        euclidean(self.row(i + 1), self.row(i))
    }

    /// Raw row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Prints the path transposed: one line per coordinate, one column per point.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..self.dim {
            write!(f, "[")?;
            for (i, row) in self.rows().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", row[col])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
