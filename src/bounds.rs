//! Chunk length bounds.
//!
//! ## The Problem
//!
//! Boundary detection alone produces fragments of wildly different sizes:
//!
//! ```text
//! "Hi." | "Ok." | "This sentence goes on and on, clause after clause, ..."
//!   3      3                          400+
//! ```
//!
//! Tiny fragments embed poorly; huge ones blow past model limits. The
//! assembler therefore works against two numbers:
//!
//! - `min`: keep coalescing fragments until the chunk reaches this length.
//! - `max`: the ceiling. Anything longer is re-split at a word boundary.
//!
//! Lengths are `char` counts.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::{Error, Result};

/// Validated `min..=max` chunk length constraints.
///
/// # Examples
///
/// ```rust
/// use semsplit::ChunkBounds;
/// use std::cmp::Ordering;
///
/// let bounds = ChunkBounds::new(10, 30).unwrap();
/// assert_eq!(bounds.fits(5), Ordering::Less);     // keep accumulating
/// assert_eq!(bounds.fits(20), Ordering::Equal);   // emit
/// assert_eq!(bounds.fits(31), Ordering::Greater); // re-split
///
/// assert!(ChunkBounds::new(10, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkBounds {
    min: usize,
    max: usize,
}

impl ChunkBounds {
    /// Create bounds with both a minimum and a maximum length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max == 0` or `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if max == 0 {
            return Err(Error::InvalidConfiguration(
                "max length must be > 0".to_string(),
            ));
        }
        if min > max {
            return Err(Error::InvalidConfiguration(format!(
                "min length ({min}) must be <= max length ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Bounds with no minimum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max == 0`.
    pub fn up_to(max: usize) -> Result<Self> {
        Self::new(0, max)
    }

    /// The minimum accumulated length before a chunk may be emitted.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// The hard upper bound on chunk length.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Where a chunk of `len` chars stands relative to these bounds.
    ///
    /// - `Ordering::Less`: below `min`, keep accumulating
    /// - `Ordering::Equal`: within `min..=max`, ready to emit
    /// - `Ordering::Greater`: above `max`, must be re-split
    #[must_use]
    pub fn fits(&self, len: usize) -> Ordering {
        if len < self.min {
            Ordering::Less
        } else if len > self.max {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Default for ChunkBounds {
    fn default() -> Self {
        Self { min: 0, max: 5000 }
    }
}

impl TryFrom<RangeInclusive<usize>> for ChunkBounds {
    type Error = Error;

    fn try_from(range: RangeInclusive<usize>) -> Result<Self> {
        Self::new(*range.start(), *range.end())
    }
}
