//! Packing run results.

use cartonfit_core::Container;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One physical box and the item instances assigned to it.
///
/// Accumulates during a packing run, then is frozen for reporting.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedBox {
    /// Part ids in admission order, one entry per instance.
    pub items: Vec<String>,
    /// Total volume of the admitted items.
    pub used_volume: f64,
    /// Total weight of the admitted items.
    pub used_weight: f64,
}

impl PackedBox {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn admit(&mut self, id: String, volume: f64, weight: f64) {
        self.items.push(id);
        self.used_volume += volume;
        self.used_weight += weight;
    }

    /// Returns the number of item instances in the box.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns per-part instance counts, in part-id order.
    pub fn item_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for id in &self.items {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns used volume over the container's usable volume, as a
    /// percentage. 0 for a zero-volume container.
    pub fn utilization_pct(&self, container: &Container) -> f64 {
        let volume = container.volume();
        if volume > 0.0 {
            (self.used_volume / volume * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

/// The outcome of one consolidation run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackReport {
    /// Boxes in the order they were opened.
    pub boxes: Vec<PackedBox>,
    /// Part ids of item instances that fit no box at all, one entry per
    /// instance. Never silently dropped.
    pub leftovers: Vec<String>,
}

impl PackReport {
    /// Returns the number of boxes used.
    pub fn total_boxes(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if every item instance was packed.
    pub fn all_packed(&self) -> bool {
        self.leftovers.is_empty()
    }

    /// Returns the total number of packed item instances.
    pub fn packed_count(&self) -> usize {
        self.boxes.iter().map(PackedBox::item_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_item_counts() {
        let mut packed = PackedBox::new();
        packed.admit("A".into(), 1.0, 0.0);
        packed.admit("B".into(), 1.0, 0.0);
        packed.admit("A".into(), 1.0, 0.0);

        let counts = packed.item_counts();
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(packed.item_count(), 3);
    }

    #[test]
    fn test_utilization() {
        let container = Container::new(10.0, 10.0, 10.0);
        let mut packed = PackedBox::new();
        packed.admit("A".into(), 250.0, 0.0);
        assert_relative_eq!(packed.utilization_pct(&container), 25.0);
    }

    #[test]
    fn test_empty_report() {
        let report = PackReport::default();
        assert_eq!(report.total_boxes(), 0);
        assert!(report.all_packed());
        assert_eq!(report.packed_count(), 0);
    }
}
