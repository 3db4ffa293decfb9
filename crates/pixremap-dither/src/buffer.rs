//! Rolling error buffer
//!
//! Holds `rows` padded rows of working values. Image row `y` lives in
//! slot `y % rows`; once row `y` is finished its slot is reloaded with
//! row `y + rows`. Columns are shifted right by `pad` so taps that
//! reach past either image edge land in the padding and are dropped
//! with it.

use crate::gamma::GammaTable;

/// Ring of padded signed rows used while diffusing one plane.
#[derive(Debug, Clone)]
pub struct ErrorBuffer {
    cells: Vec<i16>,
    rows: usize,
    stride: usize,
    pad: usize,
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer for an image `width` samples wide.
    pub fn new(width: usize, rows: usize, pad: usize) -> Self {
        let rows = rows.max(1);
        let stride = width + 2 * pad;
        ErrorBuffer {
            cells: vec![0; stride * rows],
            rows,
            stride,
            pad,
            width,
        }
    }

    /// Number of rows in the ring.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn slot(&self, y: usize) -> &[i16] {
        let start = (y % self.rows) * self.stride;
        &self.cells[start..start + self.stride]
    }

    #[inline]
    fn slot_mut(&mut self, y: usize) -> &mut [i16] {
        let start = (y % self.rows) * self.stride;
        &mut self.cells[start..start + self.stride]
    }

    /// Fill the slot for image row `y` from `plane`.
    ///
    /// Padding is zeroed. When `y` is past the last row the whole slot is
    /// zero.
    pub fn load_row(&mut self, y: usize, plane: &[u8], height: usize, table: &GammaTable) {
        let (pad, width) = (self.pad, self.width);
        let row = self.slot_mut(y);
        row.fill(0);
        if y >= height {
            return;
        }
        let src = &plane[y * width..(y + 1) * width];
        for (cell, &v) in row[pad..pad + width].iter_mut().zip(src) {
            *cell = table[v as usize];
        }
    }

    /// Working value at image column `x` of row `y`.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> i16 {
        self.slot(y)[x + self.pad]
    }

    /// Add `amount` at column `x` (may be negative) of row `y`.
    ///
    /// The sum saturates at the `i16` range. Columns beyond the padded
    /// row are ignored.
    #[inline]
    pub fn add(&mut self, y: usize, x: isize, amount: i16) {
        let tx = x + self.pad as isize;
        if tx < 0 || tx as usize >= self.stride {
            return;
        }
        let cell = &mut self.slot_mut(y)[tx as usize];
        *cell = cell.saturating_add(amount);
    }
}
