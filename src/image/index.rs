//! Owned per-pixel index plane: parent pointers, tree hierarchies and final
//! segment labels all share this layout.
//!
//! Entries are flat pixel indices (`y * w + x`). The identity plane, where
//! every pixel stores its own index, is the starting state of the parent
//! field and the fixed point the flattener converges to for root pixels.

use serde::Serialize;

/// Owned per-pixel `usize` buffer in row-major layout (stride == width).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexMap {
    /// Width in pixels
    pub w: usize,
    /// Height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, entries are flat pixel indices
    pub data: Vec<usize>,
}

impl IndexMap {
    /// Construct a plane where every pixel holds its own flat index.
    pub fn identity(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: (0..w * h).collect(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the entry at (x, y).
    pub fn get(&self, x: usize, y: usize) -> usize {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the entry at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: usize) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}
