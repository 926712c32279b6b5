//! Strand tracking: which physical strand sits where, and which one passes under.
//!
//! Strands are named by the position they occupy at the **bottom** of the
//! diagram, so the bottom labelling is always `[1, 2, ..., n]`. The word is
//! read top-to-bottom, which means identities have to be carried upward:
//! the crossings are replayed in reverse, swapping the two labels at each
//! crossing position. Before the swap, the label that ends up under the
//! other strand is recorded:
//! - `Under` crossing: the label at the right position `i + 1`
//! - `Over` crossing: the label at the left position `i`
//!
//! One linear pass, O(|word|) time and O(n) working space.

use log::{debug, trace};

use crate::generator::{Crossing, Generator};

/// Strand labelling derived from a braid word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingResult {
    /// Labels at the bottom of the diagram, always `[1, ..., n]`.
    pub bottom_labels: Vec<usize>,
    /// Label occupying each position at the top of the diagram.
    pub top_labels: Vec<usize>,
    /// Label of the strand passing under at each crossing, in word order.
    pub undercrossing_labels: Vec<usize>,
}

impl TrackingResult {
    /// The permutation as `(top position, label)` pairs, 1-based.
    pub fn top_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.top_labels.iter().enumerate().map(|(p, &l)| (p + 1, l))
    }

    /// Whether every strand ends where it started.
    pub fn is_pure(&self) -> bool {
        self.top_labels == self.bottom_labels
    }
}

/// Replay `word` from the bottom of the diagram upward.
///
/// The caller guarantees every generator fits inside `strand_count` strands;
/// [`crate::braid::Braid::new`] is the only constructor that enforces this.
pub(crate) fn track_strands(strand_count: usize, word: &[Generator]) -> TrackingResult {
    let bottom_labels: Vec<usize> = (1..=strand_count).collect();
    let mut labels = bottom_labels.clone();
    let mut under = Vec::with_capacity(word.len());

    for (step, g) in word.iter().rev().enumerate() {
        let i = g.position();
        let under_label = match g.crossing() {
            Crossing::Under => labels[i + 1],
            Crossing::Over => labels[i],
        };
        trace!(
            "crossing {} from bottom ({}): {:?} under={}",
            step,
            g,
            labels,
            under_label
        );
        under.push(under_label);
        labels.swap(i, i + 1);
    }

    under.reverse();
    debug!(
        "tracked {} crossings on {} strands: top={:?} under={:?}",
        word.len(),
        strand_count,
        labels,
        under
    );

    TrackingResult {
        bottom_labels,
        top_labels: labels,
        undercrossing_labels: under,
    }
}
