// src/model/pack.rs
//! Row packing of sibling boxes.
//!
//! Boxes are consumed in the order given (largest first by convention) and
//! laid left to right in rows of `ceil(sqrt(n))` boxes. Each row starts below
//! the deepest box of the previous row, so boxes never overlap. Positions are
//! box centers measured from the top-left corner of the bounding area.

use crate::types::{Position, Size};

#[derive(Debug, Clone)]
pub struct RowPacker {
    per_row: usize,
    placed: usize,
    cursor_x: f64,
    row_y: f64,
    row_depth: f64,
    bounds: Size,
}

impl RowPacker {
    /// Creates a packer sized for `count` boxes.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            per_row: row_capacity(count),
            placed: 0,
            cursor_x: 0.0,
            row_y: 0.0,
            row_depth: 0.0,
            bounds: Size::default(),
        }
    }

    /// Places the next box and returns its center.
    pub fn next_position(&mut self, size: Size) -> Position {
        if self.placed > 0 && self.placed % self.per_row == 0 {
            self.row_y += self.row_depth;
            self.cursor_x = 0.0;
            self.row_depth = 0.0;
        }

        let center = Position {
            x: self.cursor_x + size.width / 2.0,
            y: self.row_y + size.depth / 2.0,
        };

        self.cursor_x += size.width;
        self.row_depth = self.row_depth.max(size.depth);
        self.bounds.width = self.bounds.width.max(self.cursor_x);
        self.bounds.depth = self.bounds.depth.max(self.row_y + self.row_depth);
        self.placed += 1;
        center
    }

    /// Smallest area enclosing every box placed so far.
    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }
}

/// Packs `sizes` in order, returning each box's center and the enclosing size.
#[must_use]
pub fn pack(sizes: &[Size]) -> (Vec<Position>, Size) {
    let mut packer = RowPacker::new(sizes.len());
    let positions = sizes.iter().map(|s| packer.next_position(*s)).collect();
    (positions, packer.bounds())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn row_capacity(count: usize) -> usize {
    ((count as f64).sqrt().ceil() as usize).max(1)
}
