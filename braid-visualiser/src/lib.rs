//! # braid-visualiser
//!
//! Braid words on a fixed number of strands: validation, strand tracking,
//! and SVG diagrams.
//!
//! A braid word is a sequence of signed Artin generators read top to bottom.
//! Generator `g` crosses the strands at positions `|g|` and `|g| + 1`; a
//! positive sign puts the left strand over, a negative sign puts it under.
//!
//! ## Tracking
//!
//! Strands are named by their position at the bottom of the diagram. Replaying
//! the word from the bottom up gives, for every crossing, the label of the
//! strand passing under, and the labelling at the top of the diagram.
//!
//! ## Usage
//!
//! ```
//! use braid_visualiser::prelude::*;
//!
//! let braid = Braid::new(3, &[1, 2]).unwrap();
//! assert_eq!(braid.top_labels(), &[3, 1, 2]);
//! assert_eq!(braid.undercrossing_labels(), &[1, 2]);
//!
//! let svg = render_svg(&braid, &DrawConfig::default()).unwrap();
//! assert!(svg.contains("Braid:   [1, 2]"));
//! ```

pub mod error;
pub mod generator;
pub mod tracking;
pub mod braid;
pub mod layout;
pub mod geometry;
pub mod render;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::generator::*;
    pub use crate::tracking::*;
    pub use crate::braid::*;
    pub use crate::layout::*;
    pub use crate::geometry::*;
    pub use crate::render::*;
}
