//! Axis-aligned orientation enumeration.

use crate::dims::Dims;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one of a part's original dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// The part's as-given width.
    Width,
    /// The part's as-given length.
    Length,
    /// The part's as-given height.
    Height,
}

impl Axis {
    const ALL: [Axis; 3] = [Axis::Width, Axis::Length, Axis::Height];
}

/// Descriptive label for how a part's own length ended up aligned with the
/// container. Reporting only, never used in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alignment {
    /// Part length runs along the container length axis.
    Lengthwise,
    /// Part length runs along the container width axis.
    Crosswise,
    /// Part length stands vertical.
    Upended,
}

/// One axis-aligned rotation of a part: an assignment of each original part
/// dimension to a container axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// The oriented dimensions: `dims.w` lies along the container width axis,
    /// `dims.l` along its length, `dims.h` along its height.
    pub dims: Dims,
    /// Which original part dimension landed on each container axis
    /// (index 0 = container width, 1 = length, 2 = height).
    pub axes: [Axis; 3],
}

impl Orientation {
    /// Returns true if the oriented vertical dimension equals the part's
    /// as-given height. The comparison is by value, so a part with two equal
    /// dimensions keeps the extra orientations the value test admits.
    pub fn keeps_upright(&self, part_height: f64) -> bool {
        self.dims.h == part_height
    }

    /// Returns which container axis carries the part's own length.
    pub fn alignment(&self) -> Alignment {
        if self.axes[1] == Axis::Length {
            Alignment::Lengthwise
        } else if self.axes[0] == Axis::Length {
            Alignment::Crosswise
        } else {
            Alignment::Upended
        }
    }
}

/// Enumerates the distinct axis-aligned orientations of a dimension triple.
///
/// At most 6, fewer when dimensions repeat: permutations yielding the same
/// value triple collapse (a cube has exactly 1 orientation, a part with two
/// equal dimensions exactly 3). Values are compared exactly as given, and the
/// first permutation producing each triple is kept, so enumeration order is
/// deterministic.
pub fn enumerate(dims: Dims) -> Vec<Orientation> {
    const PERMS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let mut out: Vec<Orientation> = Vec::with_capacity(6);
    for perm in PERMS {
        let oriented = Dims::new(dims.axis(perm[0]), dims.axis(perm[1]), dims.axis(perm[2]));
        if out.iter().any(|o| o.dims == oriented) {
            continue;
        }
        out.push(Orientation {
            dims: oriented,
            axes: [Axis::ALL[perm[0]], Axis::ALL[perm[1]], Axis::ALL[perm[2]]],
        });
    }
    out
}

/// Returns true if some orientation of `dims` fits inside `shell`.
///
/// This is the shell-fit test used by the bin packer: the part must be
/// physically capable of entering an empty container of this size.
pub fn any_fits(dims: Dims, shell: &Dims) -> bool {
    enumerate(dims).iter().any(|o| o.dims.fits_within(shell))
}
