//! Dense row-major tables backing the memoization cache.
//!
//! A `Table<T>` is a fixed `rows x cols` grid stored in one buffer.
//! Indexing is bounds-checked against the logical shape, not just the
//! buffer length, so `(r, c)` with `c >= cols` never aliases the next row.

/// Fixed-shape grid of `T`.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Table<T> {
    /// Create a table with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Read cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell lies outside the table.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.offset(row, col)]
    }

    /// Overwrite cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if the cell lies outside the table.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn zero_sized_table_is_empty() {
        let t = Table::filled(0, 5, 0u8);
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
    }

    #[test]
    fn get_set_round_trip_respects_shape() {
        let mut t = Table::filled(2, 3, -1i32);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);
        assert_eq!(t.len(), 6);
        t.set(1, 2, 7);
        t.set(0, 0, 3);
        assert_eq!(t.get(1, 2), 7);
        assert_eq!(t.get(0, 0), 3);
        assert_eq!(t.get(0, 2), -1);
        assert_eq!(t.iter().filter(|&&v| v >= 0).count(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn column_overflow_does_not_alias_next_row() {
        let t = Table::filled(2, 3, 0u8);
        let _ = t.get(0, 3);
    }
}
