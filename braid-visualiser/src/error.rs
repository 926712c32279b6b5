//! Error type shared by validation, parsing and rendering.

use std::path::PathBuf;

/// Everything that can go wrong when building or drawing a braid.
///
/// Tracking itself never fails: once a [`crate::braid::Braid`] exists every
/// crossing is known to fit inside its strands.
#[derive(thiserror::Error, Debug)]
pub enum BraidError {
    /// A generator of magnitude 0 or at least `strand_count`.
    #[error("invalid braid operation {generator}: generators must satisfy 1 <= |g| <= {max} for a braid on {strand_count} strands")]
    InvalidOperation {
        generator: i64,
        strand_count: usize,
        max: usize,
    },
    #[error("a braid needs at least 2 strands, got {0}")]
    TooFewStrands(usize),
    #[error("could not parse braid: {0}")]
    Parse(String),
    #[error("invalid draw configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BraidError {
    pub(crate) fn invalid_operation(generator: i64, strand_count: usize) -> Self {
        BraidError::InvalidOperation {
            generator,
            strand_count,
            max: strand_count.saturating_sub(1),
        }
    }
}
