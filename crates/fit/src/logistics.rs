//! Shipment box-count arithmetic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a required quantity of one part splits across boxes of a known
/// per-box capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxPlan {
    /// Total boxes required.
    pub boxes_needed: usize,
    /// Boxes filled to capacity.
    pub full_boxes: usize,
    /// Units in the final box. Equals the capacity when the quantity divides
    /// evenly — the last box is then a full box, never a phantom empty one.
    pub last_box_qty: usize,
}

impl BoxPlan {
    /// Computes the plan for shipping `qty` units at `per_box` units each.
    ///
    /// Returns `None` when `per_box` is 0 (the part does not fit at all), so
    /// callers surface a NO FIT status instead of dividing by zero. A zero
    /// quantity yields an empty plan.
    pub fn for_quantity(qty: usize, per_box: usize) -> Option<Self> {
        if per_box == 0 {
            return None;
        }
        if qty == 0 {
            return Some(Self {
                boxes_needed: 0,
                full_boxes: 0,
                last_box_qty: 0,
            });
        }

        let full_boxes = qty / per_box;
        let remainder = qty % per_box;
        Some(Self {
            boxes_needed: full_boxes + usize::from(remainder != 0),
            full_boxes,
            last_box_qty: if remainder == 0 { per_box } else { remainder },
        })
    }
}
