//! Artin generators: one crossing between two adjacent strand positions.
//!
//! A braid word is written as signed integers. `g` crosses the strands at
//! 1-based positions `|g|` and `|g| + 1`; the sign gives the handedness:
//! - positive: the left strand passes **over** the right one
//! - negative: the left strand passes **under** the right one
//!
//! Internally a generator is a 0-based position plus an explicit
//! [`Crossing`] tag, so no code downstream has to reason about signs.

use std::fmt;

use rand::Rng;

use crate::error::BraidError;

/// Handedness of a crossing, seen from the left strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// Left strand over right (positive generator).
    Over,
    /// Left strand under right (negative generator).
    Under,
}

impl Crossing {
    pub fn sign(self) -> i64 {
        match self {
            Crossing::Over => 1,
            Crossing::Under => -1,
        }
    }
}

/// A validated crossing between positions `position` and `position + 1` (0-based).
///
/// Only [`Generator::from_signed`] builds one, so the position is always
/// checked against a strand count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generator {
    position: usize,
    crossing: Crossing,
}

impl Generator {
    /// Validate a signed Artin generator against the number of strands.
    ///
    /// Fails when `value == 0` or `|value| >= strand_count`, i.e. when the
    /// crossing cannot be embedded in `strand_count` strands.
    pub fn from_signed(value: i64, strand_count: usize) -> Result<Self, BraidError> {
        let magnitude = value.unsigned_abs();
        if magnitude == 0 || magnitude >= strand_count as u64 {
            return Err(BraidError::invalid_operation(value, strand_count));
        }
        let crossing = if value > 0 {
            Crossing::Over
        } else {
            Crossing::Under
        };
        Ok(Self {
            position: magnitude as usize - 1,
            crossing,
        })
    }

    /// Index of the left-hand position taking part in the crossing.
    pub fn position(self) -> usize {
        self.position
    }

    pub fn crossing(self) -> Crossing {
        self.crossing
    }

    /// The 1-based signed form this generator was written in.
    pub fn to_signed(self) -> i64 {
        (self.position as i64 + 1) * self.crossing.sign()
    }

    /// Index of the right-hand position taking part in the crossing.
    pub fn upper_position(self) -> usize {
        self.position + 1
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

/// Generate a uniformly random valid braid word on `strand_count` strands.
///
/// Every generator has magnitude in `1..strand_count` and a random sign.
/// Returns an empty word when fewer than two strands are requested.
pub fn random_word<R: Rng>(strand_count: usize, length: usize, rng: &mut R) -> Vec<i64> {
    if strand_count < 2 {
        return Vec::new();
    }
    (0..length)
        .map(|_| {
            let magnitude = rng.gen_range(1..strand_count) as i64;
            if rng.gen::<bool>() {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}
