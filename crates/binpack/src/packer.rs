//! Greedy first-fit-decreasing consolidation.

use crate::report::{PackReport, PackedBox};
use cartonfit_core::dims::Dims;
use cartonfit_core::orientation;
use cartonfit_core::{Container, Part};
use std::cmp::Ordering;

/// One flattened item instance awaiting placement.
#[derive(Debug, Clone)]
struct Item {
    id: String,
    weight: f64,
    volume: f64,
    /// Whether some orientation fits the empty container shell. Independent
    /// of budgets, so computed once per instance.
    fits_shell: bool,
}

/// Consolidates many distinct part types into a minimal-ish number of
/// identical boxes under volume and weight limits.
///
/// This is a heuristic: the output is always feasible, but no minimal box
/// count is guaranteed, and tests must not assert one.
#[derive(Debug, Clone)]
pub struct BinPacker {
    container: Container,
}

impl BinPacker {
    /// Creates a packer for the given box type.
    pub fn new(container: Container) -> Self {
        Self { container }
    }

    /// Returns the box type.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Packs every `(part, quantity)` pair into boxes.
    ///
    /// Each part expands into `quantity` item instances, the manifest sorts
    /// by volume descending (first-fit-decreasing; the sort is stable, so
    /// equal volumes keep input order and the run is deterministic), and
    /// boxes are opened one at a time. Every remaining item is scanned
    /// against the open box's shrinking budgets — a genuine bin-packing
    /// scan, not single-item placement. An item is admitted iff some
    /// orientation fits the empty shell and its volume and weight fit the
    /// remaining budgets.
    ///
    /// A freshly opened box that admits nothing means the remaining items
    /// can never be placed; they are reported as leftovers and the run
    /// terminates rather than looping. The whole run is O(items²) in the
    /// worst case from the rescans, acceptable at the intended scale of
    /// tens to low hundreds of items.
    pub fn pack(&self, parts: &[Part]) -> PackReport {
        let shell = self.container.usable_dims();
        let box_volume = self.container.volume();

        let mut manifest = flatten(parts, &shell);
        manifest.sort_by(|a, b| b.volume.partial_cmp(&a.volume).unwrap_or(Ordering::Equal));

        let mut report = PackReport::default();

        while !manifest.is_empty() {
            let mut packed = PackedBox::new();
            let mut volume_left = box_volume;
            let mut weight_left = self.container.max_weight();

            let mut index = 0;
            while index < manifest.len() {
                if self.admits(&manifest[index], volume_left, weight_left) {
                    let item = manifest.remove(index);
                    volume_left -= item.volume;
                    if let Some(left) = weight_left.as_mut() {
                        *left -= item.weight;
                    }
                    packed.admit(item.id, item.volume, item.weight);
                } else {
                    index += 1;
                }
            }

            if packed.item_count() == 0 {
                // No progress against full budgets: everything left is
                // unplaceable in this box type.
                log::warn!(
                    "{} item(s) fit no box and were left unpacked",
                    manifest.len()
                );
                report.leftovers = manifest.drain(..).map(|item| item.id).collect();
                break;
            }

            report.boxes.push(packed);
        }

        report
    }

    fn admits(&self, item: &Item, volume_left: f64, weight_left: Option<f64>) -> bool {
        if !item.fits_shell || item.volume > volume_left {
            return false;
        }
        weight_left.map_or(true, |left| item.weight <= left)
    }
}

/// Expands `(part, quantity)` pairs into individual item instances.
fn flatten(parts: &[Part], shell: &Dims) -> Vec<Item> {
    let mut items = Vec::new();
    for part in parts {
        let volume = part.volume();
        let weight = part.weight().unwrap_or(0.0);
        let fits_shell = part.dims().is_positive() && orientation::any_fits(part.dims(), shell);
        for _ in 0..part.quantity() {
            items.push(Item {
                id: part.id().to_string(),
                weight,
                volume,
                fits_shell,
            });
        }
    }
    items
}
