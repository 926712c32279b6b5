//! Vertical placement of crossings in a braid diagram.
//!
//! Every crossing occupies one row of height 2. In the extended style each
//! crossing gets its own row. In the compact style crossings share a row as
//! long as they touch disjoint strand positions; a crossing that touches a
//! position already used on the current row opens the next row.

use std::str::FromStr;

use crate::error::BraidError;
use crate::generator::Generator;

/// Height of one row of crossings, in diagram units.
pub const ROW_HEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawStyle {
    /// Independent crossings drawn side by side.
    #[default]
    Compact,
    /// One crossing per row.
    Extended,
}

impl FromStr for DrawStyle {
    type Err = BraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comp" | "compact" => Ok(DrawStyle::Compact),
            "ext" | "extended" => Ok(DrawStyle::Extended),
            other => Err(BraidError::InvalidConfig(format!(
                "unknown style {:?} (expected \"comp\" or \"ext\")",
                other
            ))),
        }
    }
}

/// Row assignment for each crossing of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<usize>,
    row_count: usize,
}

impl Layout {
    pub fn new(word: &[Generator], style: DrawStyle) -> Self {
        let rows: Vec<usize> = match style {
            DrawStyle::Extended => (0..word.len()).collect(),
            DrawStyle::Compact => {
                let mut row = 0;
                let mut occupied: Vec<usize> = Vec::new();
                word.iter()
                    .map(|g| {
                        let (a, b) = (g.position(), g.upper_position());
                        if occupied.contains(&a) || occupied.contains(&b) {
                            occupied.clear();
                            row += 1;
                        }
                        occupied.push(a);
                        occupied.push(b);
                        row
                    })
                    .collect()
            }
        };
        let row_count = rows.last().map_or(0, |&r| r + 1);
        Self { rows, row_count }
    }

    /// Row index of crossing `k` (0 is the top row).
    pub fn row(&self, k: usize) -> usize {
        self.rows[k]
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Distance from the top of row `row` to the top of the diagram.
    pub fn row_offset(row: usize) -> f64 {
        row as f64 * ROW_HEIGHT
    }

    /// Total depth of the diagram.
    pub fn height(&self) -> f64 {
        Self::row_offset(self.row_count)
    }

    /// Depth the diagram is drawn at: never less than one row, so that an
    /// empty word still shows its strands.
    pub fn drawn_depth(&self) -> f64 {
        self.height().max(ROW_HEIGHT)
    }
}
