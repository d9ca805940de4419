use std::cell::Cell;
use std::fmt;
use std::io::BufRead;

use crate::error::VectorError;
use crate::io::read_u64_line;
use crate::lifecycle::MATRIX_COUNT;

/// Row-major `rows x cols` grid of `u64`.
///
/// Shares the vector's soft-fail indexing: out-of-range reads return 0,
/// out-of-range writes are dropped, and both set `error_code` to -1.
#[derive(Debug)]
pub struct MatrixULong {
    data: Vec<u64>,
    rows: usize,
    cols: usize,
    error_code: Cell<i32>,
}

impl MatrixULong {
    /// A 1x1 zero matrix.
    pub fn new() -> Self {
        Self::from_raw(vec![0], 1, 1)
    }

    pub fn with_shape(rows: usize, cols: usize) -> Result<Self, VectorError> {
        Self::filled(rows, cols, 0)
    }

    pub fn filled(rows: usize, cols: usize, value: u64) -> Result<Self, VectorError> {
        if rows == 0 || cols == 0 {
            return Err(VectorError::InvalidArgument(format!(
                "matrix shape ({}, {}) must have positive dimensions",
                rows, cols
            )));
        }
        let len = rows.checked_mul(cols).ok_or_else(|| {
            VectorError::InvalidArgument(format!(
                "matrix shape ({}, {}) exceeds the addressable size",
                rows, cols
            ))
        })?;
        Ok(Self::from_raw(vec![value; len], rows, cols))
    }

    fn from_raw(data: Vec<u64>, rows: usize, cols: usize) -> Self {
        MATRIX_COUNT.acquire();
        Self {
            data,
            rows,
            cols,
            error_code: Cell::new(0),
        }
    }

    pub fn live_count() -> usize {
        MATRIX_COUNT.get()
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    pub fn error_code(&self) -> i32 {
        self.error_code.get()
    }

    pub fn set_error_code(&self, code: i32) {
        self.error_code.set(code);
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Flat index `k` maps to `(k / cols, k % cols)`.
    #[inline]
    fn flat_offset(&self, k: usize) -> Option<usize> {
        self.offset(k / self.cols, k % self.cols)
    }

    fn read_at(&self, offset: Option<usize>) -> u64 {
        match offset {
            Some(i) => {
                self.error_code.set(0);
                self.data[i]
            }
            None => {
                self.error_code.set(-1);
                0
            }
        }
    }

    fn write_at(&mut self, offset: Option<usize>, value: u64) {
        match offset {
            Some(i) => {
                self.data[i] = value;
                self.error_code.set(0);
            }
            None => self.error_code.set(-1),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.read_at(self.offset(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        let offset = self.offset(row, col);
        self.write_at(offset, value);
    }

    pub fn get_flat(&self, k: usize) -> u64 {
        self.read_at(self.flat_offset(k))
    }

    pub fn set_flat(&mut self, k: usize, value: u64) {
        let offset = self.flat_offset(k);
        self.write_at(offset, value);
    }

    /// Elements of `row`, or `None` past the last row.
    pub fn row_slice(&self, row: usize) -> Option<&[u64]> {
        let start = self.offset(row, 0)?;
        Some(&self.data[start..start + self.cols])
    }

    pub fn assign(&mut self, value: u64) {
        self.data.fill(value);
        self.error_code.set(0);
    }

    /// Fill the matrix row by row, one line per element. Malformed lines
    /// store 0 and set `error_code` to -1 without stopping.
    pub fn read_elements<R: BufRead>(&mut self, reader: &mut R) -> std::io::Result<()> {
        let cols = self.cols;
        for (k, slot) in self.data.iter_mut().enumerate() {
            let parsed = read_u64_line(reader)?;
            if parsed.is_malformed() {
                log::warn!("invalid input for element [{},{}], storing 0", k / cols, k % cols);
                self.error_code.set(-1);
            }
            *slot = parsed.value();
        }
        Ok(())
    }
}

impl Default for MatrixULong {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MatrixULong {
    fn clone(&self) -> Self {
        let copy = Self::from_raw(self.data.clone(), self.rows, self.cols);
        copy.error_code.set(self.error_code.get());
        copy
    }
}

impl Drop for MatrixULong {
    fn drop(&mut self) {
        log::debug!("matrix of shape ({}, {}) released", self.rows, self.cols);
        MATRIX_COUNT.release();
    }
}

impl PartialEq for MatrixULong {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl Eq for MatrixULong {}

impl fmt::Display for MatrixULong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
