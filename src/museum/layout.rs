//! Slide geometry.

use crate::common::inches;
use crate::ooxml::pptx::Rect;

/// Cover subtitle box.
pub fn cover_text() -> Rect {
    Rect::new(inches(1.0), inches(2.2), inches(8.0), inches(1.0))
}

/// Body text of the history and clothing slides.
pub fn content_body() -> Rect {
    Rect::new(inches(0.5), inches(1.9), inches(9.0), inches(3.0))
}

/// Instruction text of the video slide.
pub fn video_instructions() -> Rect {
    Rect::new(inches(0.5), inches(1.9), inches(9.0), inches(1.2))
}

pub fn video_button() -> Rect {
    Rect::new(inches(2.5), inches(3.0), inches(4.0), inches(0.8))
}

/// "Inicio" button in the top-right corner.
pub fn home_button() -> Rect {
    Rect::new(inches(8.0), inches(0.2), inches(1.2), inches(0.5))
}

/// Row-major grid of equally sized menu buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGrid {
    /// Top-left corner of the first cell, in inches
    pub origin: (f64, f64),
    /// Cell width and height, in inches
    pub cell: (f64, f64),
    /// Horizontal and vertical gap between cells, in inches
    pub gap: (f64, f64),
    pub columns: usize,
}

impl MenuGrid {
    /// Row and column of the `index`-th button.
    pub fn position(&self, index: usize) -> (usize, usize) {
        let columns = self.columns.max(1);
        (index / columns, index % columns)
    }

    pub fn cell(&self, index: usize) -> Rect {
        let (row, col) = self.position(index);
        let left = self.origin.0 + col as f64 * (self.cell.0 + self.gap.0);
        let top = self.origin.1 + row as f64 * (self.cell.1 + self.gap.1);
        Rect::new(inches(left), inches(top), inches(self.cell.0), inches(self.cell.1))
    }
}

impl Default for MenuGrid {
    fn default() -> Self {
        Self {
            origin: (0.5, 2.0),
            cell: (3.0, 0.7),
            gap: (0.4, 0.3),
            columns: 2,
        }
    }
}
