//! A validated braid word together with its strand tracking.

use std::fmt;
use std::str::FromStr;

use crate::error::BraidError;
use crate::generator::Generator;
use crate::tracking::{track_strands, TrackingResult};

/// A braid on `strand_count` strands, fixed at construction.
///
/// The tracking result is computed once in [`Braid::new`] and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Braid {
    strand_count: usize,
    word: Vec<Generator>,
    tracking: TrackingResult,
}

impl Braid {
    /// Validate `ops` as a braid word on `strand_count` strands and track it.
    ///
    /// Fails on the first generator that cannot be embedded; no tracking
    /// happens for an invalid word.
    pub fn new(strand_count: usize, ops: &[i64]) -> Result<Self, BraidError> {
        if strand_count < 2 {
            return Err(BraidError::TooFewStrands(strand_count));
        }
        let word = ops
            .iter()
            .map(|&g| Generator::from_signed(g, strand_count))
            .collect::<Result<Vec<_>, _>>()?;
        let tracking = track_strands(strand_count, &word);
        Ok(Self {
            strand_count,
            word,
            tracking,
        })
    }

    pub fn strand_count(&self) -> usize {
        self.strand_count
    }

    /// The validated word, top to bottom.
    pub fn word(&self) -> &[Generator] {
        &self.word
    }

    /// The word in signed Artin notation.
    pub fn signed_word(&self) -> Vec<i64> {
        self.word.iter().map(|g| g.to_signed()).collect()
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn tracking(&self) -> &TrackingResult {
        &self.tracking
    }

    pub fn bottom_labels(&self) -> &[usize] {
        &self.tracking.bottom_labels
    }

    pub fn top_labels(&self) -> &[usize] {
        &self.tracking.top_labels
    }

    pub fn undercrossing_labels(&self) -> &[usize] {
        &self.tracking.undercrossing_labels
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (k, item) in items.iter().enumerate() {
        if k > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Braid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Braid: ")?;
        write_list(f, &self.word)?;
        write!(f, "\nLabels: ")?;
        write_list(f, &self.tracking.undercrossing_labels)
    }
}

/// Parses `"<strands>: <g1> <g2> ..."`. Generators may be separated by
/// whitespace, commas, or both; surrounding brackets are ignored.
impl FromStr for Braid {
    type Err = BraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, ops) = s
            .split_once(':')
            .ok_or_else(|| BraidError::Parse(format!("expected '<strands>: <word>', got {:?}", s)))?;
        let strand_count = count
            .trim()
            .parse::<usize>()
            .map_err(|e| BraidError::Parse(format!("bad strand count {:?}: {}", count.trim(), e)))?;
        let ops = ops
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<i64>()
                    .map_err(|e| BraidError::Parse(format!("bad generator {:?}: {}", tok, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Braid::new(strand_count, &ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_tracks_strands() {
        let braid = Braid::new(3, &[1, 2]).unwrap();
        assert_eq!(braid.strand_count(), 3);
        assert_eq!(braid.signed_word(), vec![1, 2]);
        assert_eq!(braid.bottom_labels(), &[1, 2, 3]);
        assert_eq!(braid.top_labels(), &[3, 1, 2]);
        assert_eq!(braid.undercrossing_labels(), &[1, 2]);
    }

    #[test]
    fn test_invalid_generator_fails_fast() {
        let err = Braid::new(3, &[1, 3, -2]).unwrap_err();
        match err {
            BraidError::InvalidOperation {
                generator,
                strand_count,
                ..
            } => {
                assert_eq!(generator, 3);
                assert_eq!(strand_count, 3);
            }
            other => panic!("expected InvalidOperation, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_valid_for_wider_braid_is_rejected() {
        // 5 fits in 10 strands but not in 3: the word is re-validated
        // against this braid's own strand count before tracking.
        assert!(Generator::from_signed(5, 10).is_ok());
        assert!(matches!(
            Braid::new(3, &[5]),
            Err(BraidError::InvalidOperation { generator: 5, strand_count: 3, .. })
        ));
    }

    #[test]
    fn test_word_positions_fit_strands() {
        let braid = Braid::new(4, &[3, -3, 1, -2]).unwrap();
        assert!(braid
            .word()
            .iter()
            .all(|g| g.upper_position() < braid.strand_count()));
    }

    #[test]
    fn test_zero_generator_fails() {
        assert!(matches!(
            Braid::new(4, &[0]),
            Err(BraidError::InvalidOperation { generator: 0, .. })
        ));
    }

    #[test]
    fn test_too_few_strands() {
        assert!(matches!(Braid::new(1, &[]), Err(BraidError::TooFewStrands(1))));
        assert!(matches!(Braid::new(0, &[]), Err(BraidError::TooFewStrands(0))));
    }

    #[test]
    fn test_empty_word() {
        let braid = Braid::new(3, &[]).unwrap();
        assert!(braid.is_empty());
        assert_eq!(braid.top_labels(), braid.bottom_labels());
        assert!(braid.undercrossing_labels().is_empty());
    }

    #[test]
    fn test_display() {
        let braid = Braid::new(3, &[1, -2]).unwrap();
        assert_eq!(braid.to_string(), "Braid: [1, -2]\nLabels: [1, 3]");
        let empty = Braid::new(2, &[]).unwrap();
        assert_eq!(empty.to_string(), "Braid: []\nLabels: []");
    }

    #[test]
    fn test_parse() {
        let braid: Braid = "3: 1 2".parse().unwrap();
        assert_eq!(braid, Braid::new(3, &[1, 2]).unwrap());

        let braid: Braid = "4: [-1, 2, -3]".parse().unwrap();
        assert_eq!(braid.signed_word(), vec![-1, 2, -3]);

        let braid: Braid = "2:".parse().unwrap();
        assert!(braid.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("1 2 3".parse::<Braid>(), Err(BraidError::Parse(_))));
        assert!(matches!("x: 1".parse::<Braid>(), Err(BraidError::Parse(_))));
        assert!(matches!("3: 1 a".parse::<Braid>(), Err(BraidError::Parse(_))));
        assert!(matches!(
            "3: 1 3".parse::<Braid>(),
            Err(BraidError::InvalidOperation { .. })
        ));
    }
}
