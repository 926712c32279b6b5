//! Strand polylines for a braid diagram.
//!
//! Positions sit at x = 1..=n and the diagram grows downward from y = 0.
//! A crossing at (1-based) position `i` and row offset `y` moves one strand
//! from x = i to x = i + 1 and the other back, along two quadratic halves:
//!
//!   rightward: (0.5t² + i, -t - y), then (-0.5t² + 1 + i, t - 2 - y) reversed
//!   leftward:  (-0.5t² + 1 + i, -t - y), then (0.5t² + i, t - 2 - y) reversed
//!
//! The strand passing under loses the `gap_size` samples nearest the middle
//! of each half, which splits its polyline into separate segments.
//! Which strand passes under is read from the tracking result.

use crate::braid::Braid;
use crate::error::BraidError;
use crate::layout::Layout;

/// Samples per half-curve: t = 0.00, 0.05, ..., 1.00.
pub const CURVE_SAMPLES: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawn path of one strand, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct StrandPath {
    /// Strand label (its position at the bottom).
    pub label: usize,
    /// Unbroken polylines; a new segment starts after every gap.
    pub segments: Vec<Vec<Point>>,
}

impl StrandPath {
    fn new(label: usize) -> Self {
        Self {
            label,
            segments: vec![Vec::new()],
        }
    }

    fn push(&mut self, p: Point) {
        if let Some(seg) = self.segments.last_mut() {
            seg.push(p);
        }
    }

    fn extend(&mut self, pts: impl IntoIterator<Item = Point>) {
        for p in pts {
            self.push(p);
        }
    }

    fn break_line(&mut self) {
        self.segments.push(Vec::new());
    }

    pub fn gap_count(&self) -> usize {
        self.segments.len() - 1
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().flatten()
    }
}

fn sample(k: usize) -> f64 {
    k as f64 / (CURVE_SAMPLES - 1) as f64
}

/// One half of a crossing curve: the `keep` samples starting from t = 0.
fn half_curve(keep: usize, f: impl Fn(f64) -> Point) -> Vec<Point> {
    (0..keep).map(|k| f(sample(k))).collect()
}

fn draw_crossing_strand(
    path: &mut StrandPath,
    rightward: bool,
    x0: f64,
    y0: f64,
    gap_size: usize,
    under: bool,
) {
    let keep = if under {
        CURVE_SAMPLES.saturating_sub(gap_size)
    } else {
        CURVE_SAMPLES
    };
    let (first, second) = if rightward {
        (
            half_curve(keep, |t| Point::new(0.5 * t * t + x0, -t - y0)),
            half_curve(keep, |t| Point::new(-0.5 * t * t + 1.0 + x0, t - 2.0 - y0)),
        )
    } else {
        (
            half_curve(keep, |t| Point::new(-0.5 * t * t + 1.0 + x0, -t - y0)),
            half_curve(keep, |t| Point::new(0.5 * t * t + x0, t - 2.0 - y0)),
        )
    };
    path.extend(first);
    if under && gap_size > 0 {
        path.break_line();
    }
    path.extend(second.into_iter().rev());
}

/// Build the polyline of every strand, ordered by label.
///
/// `layout` must place exactly the crossings of `braid`'s word.
pub fn strand_paths(
    braid: &Braid,
    layout: &Layout,
    gap_size: usize,
) -> Result<Vec<StrandPath>, BraidError> {
    if layout.rows().len() != braid.len() {
        return Err(BraidError::InvalidConfig(format!(
            "layout places {} crossings but the braid has {}",
            layout.rows().len(),
            braid.len()
        )));
    }
    let n = braid.strand_count();
    let mut paths: Vec<StrandPath> = (1..=n).map(StrandPath::new).collect();
    let mut at_position: Vec<usize> = braid.top_labels().to_vec();

    for (p, &label) in at_position.iter().enumerate() {
        paths[label - 1].push(Point::new((p + 1) as f64, 0.0));
    }

    let crossings = braid.word().iter().zip(braid.undercrossing_labels());
    for (k, (g, &under)) in crossings.enumerate() {
        let position = g.position();
        let left = at_position[position];
        let right = at_position[position + 1];
        debug_assert!(under == left || under == right);

        let x0 = (position + 1) as f64;
        let y0 = Layout::row_offset(layout.row(k));
        draw_crossing_strand(&mut paths[left - 1], true, x0, y0, gap_size, under == left);
        draw_crossing_strand(&mut paths[right - 1], false, x0, y0, gap_size, under == right);

        at_position.swap(position, position + 1);
    }

    let bottom = -layout.drawn_depth();
    for (p, &label) in at_position.iter().enumerate() {
        paths[label - 1].push(Point::new((p + 1) as f64, bottom));
    }
    Ok(paths)
}
