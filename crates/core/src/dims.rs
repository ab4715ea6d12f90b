//! Dimension triples.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned dimension triple (width, length, height).
///
/// Unordered as input; order becomes significant once the values are assigned
/// to container axes by an [`crate::orientation::Orientation`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dims {
    /// Extent along the width axis.
    pub w: f64,
    /// Extent along the length axis.
    pub l: f64,
    /// Extent along the height (vertical) axis.
    pub h: f64,
}

impl Dims {
    /// Creates a new dimension triple.
    pub fn new(w: f64, l: f64, h: f64) -> Self {
        Self { w, l, h }
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.w * self.l * self.h
    }

    /// Returns the value along the given axis index (0 = width, 1 = length,
    /// 2 = height).
    pub fn axis(&self, index: usize) -> f64 {
        match index {
            0 => self.w,
            1 => self.l,
            _ => self.h,
        }
    }

    /// Returns true if every dimension is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.w > 0.0 && self.l > 0.0 && self.h > 0.0
    }

    /// Returns true if this triple fits inside `other` axis-for-axis,
    /// without rotation.
    pub fn fits_within(&self, other: &Dims) -> bool {
        self.w <= other.w && self.l <= other.l && self.h <= other.h
    }
}
