//! The single-container fitting engine.
//!
//! One consolidated implementation replaces the family of near-duplicate
//! `calculate_fit` routines: grid layering, stacking, nesting, the fragility
//! policy and weight clipping are all driven by the part's rules and the
//! container's weight cap.

use cartonfit_core::dims::Dims;
use cartonfit_core::orientation::{self, Orientation};
use cartonfit_core::{Container, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of fitting one part into one container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult {
    /// Number of parts that fit.
    pub count: usize,
    /// The winning orientation.
    pub orientation: Orientation,
    /// Volume occupied by the fitted parts.
    pub used_volume: f64,
    /// Remaining container volume.
    pub unused_volume: f64,
    /// Used volume over container volume, as a percentage in [0, 100].
    pub utilization_pct: f64,
    /// True when the weight cap, not geometry, limited the count.
    pub weight_limited: bool,
}

/// Computes how many units of `part` fit into `container`, trying every
/// distinct orientation and keeping the best.
///
/// Per orientation, in enumeration order:
///
/// 1. fragile parts reject orientations whose vertical dimension differs
///    from the part's as-given height;
/// 2. the floor grid is `floor(width / ow) * floor(length / ol)`, and a
///    zero grid makes the orientation infeasible;
/// 3. the vertical extent is one layer when stacking is disallowed, the
///    nesting formula when the part nests, and plain `floor(height / oh)`
///    layers otherwise;
/// 4. if the container carries a weight cap and the part a weight, the count
///    is clipped to `floor(max_weight / weight)`.
///
/// The orientation with the strictly greatest post-clip count wins; ties keep
/// the first encountered, so the result is deterministic. Returns `None` when
/// no orientation yields at least one part — an expected outcome, not an
/// error.
///
/// Nesting with `nest_pct = 0` falls back to plain stacking: zero height gain
/// per item is the same physical situation as ordinary stacking.
pub fn fit(container: &Container, part: &Part) -> Option<FitResult> {
    let part_dims = part.dims();
    if !part_dims.is_positive() {
        return None;
    }

    let usable = container.usable_dims();
    let mut best: Option<(usize, Orientation, bool)> = None;

    for orient in orientation::enumerate(part_dims) {
        if part.is_fragile() && !orient.keeps_upright(part_dims.h) {
            continue;
        }

        let per_layer = floor_grid(&usable, &orient.dims);
        if per_layer == 0 {
            continue;
        }

        let layers = vertical_layers(&usable, orient.dims.h, part);
        let mut count = per_layer * layers;

        let mut weight_limited = false;
        if let (Some(max_weight), Some(weight)) = (container.max_weight(), part.weight()) {
            if weight > 0.0 && count as f64 * weight > max_weight {
                count = (max_weight / weight).floor() as usize;
                weight_limited = true;
            }
        }

        if count > best.as_ref().map_or(0, |(c, _, _)| *c) {
            best = Some((count, orient, weight_limited));
        }
    }

    let (count, orientation, weight_limited) = best?;

    let box_volume = container.volume();
    let used_volume = count as f64 * part.volume();
    let utilization_pct = if box_volume > 0.0 {
        // Clamp against float rounding pushing a tight pack past 100.
        (used_volume / box_volume * 100.0).min(100.0)
    } else {
        0.0
    };

    Some(FitResult {
        count,
        orientation,
        used_volume,
        unused_volume: (box_volume - used_volume).max(0.0),
        utilization_pct,
        weight_limited,
    })
}

/// Parts per layer: per-axis floor division over the container floor.
fn floor_grid(usable: &Dims, oriented: &Dims) -> usize {
    let cols = (usable.w / oriented.w).floor() as usize;
    let rows = (usable.l / oriented.l).floor() as usize;
    cols * rows
}

/// Number of layers along the vertical axis for one oriented height.
fn vertical_layers(usable: &Dims, oh: f64, part: &Part) -> usize {
    if !part.is_stackable() {
        // One layer regardless of remaining height.
        return 1;
    }

    if part.is_nested() && part.nest_pct() > 0.0 {
        // First item takes its full height; each further item adds only
        // `oh * nest_pct / 100`. A stack too tall for even one item still
        // counts one layer (explicit floor, never infinite).
        if usable.h < oh {
            return 1;
        }
        let increment = oh * part.nest_pct() / 100.0;
        return 1 + ((usable.h - oh) / increment).floor() as usize;
    }

    (usable.h / oh).floor() as usize
}
