//! Catalogue box selection.

use crate::calculator::{self, FitResult};
use cartonfit_core::{Catalogue, Container, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The winning catalogue box for one part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Catalogue key of the chosen box.
    pub box_key: String,
    /// The fit in the chosen box.
    pub result: FitResult,
    /// The composite score that won.
    pub score: f64,
}

/// Evaluates parts against every box in a fixed catalogue and picks the best
/// by composite score.
///
/// Score = `count * density_factor + utilization / 1000`: the part's
/// packing-density preference discounts the raw count (durable parts prefer
/// looser packing), and utilization acts as a negligible tiebreaker.
#[derive(Debug, Clone)]
pub struct Selector {
    catalogue: Catalogue,
    clearance: f64,
    max_weight: Option<f64>,
}

impl Selector {
    /// Creates a selector over the given catalogue.
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            clearance: 0.0,
            max_weight: None,
        }
    }

    /// Creates a selector over the stock carton range.
    pub fn standard() -> Self {
        Self::new(Catalogue::standard())
    }

    /// Sets the uniform clearance applied to every catalogue box.
    pub fn with_clearance(mut self, clearance: f64) -> Self {
        self.clearance = clearance;
        self
    }

    /// Sets the weight cap applied to every catalogue box.
    pub fn with_max_weight(mut self, weight: f64) -> Self {
        self.max_weight = Some(weight);
        self
    }

    /// Returns the catalogue.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Picks the best catalogue box for one part.
    ///
    /// Boxes are tried in catalogue (key) order; a strictly greater score
    /// wins and ties keep the first, so selection is deterministic. Returns
    /// `None` when no box admits any orientation.
    pub fn select(&self, part: &Part) -> Option<Selection> {
        let factor = part.density().factor();
        let mut best: Option<Selection> = None;

        for (key, dims) in self.catalogue.iter() {
            let mut container = Container::from_dims(dims).with_clearance(self.clearance);
            if let Some(weight) = self.max_weight {
                container = container.with_max_weight(weight);
            }

            let Some(result) = calculator::fit(&container, part) else {
                continue;
            };

            let score = result.count as f64 * factor + result.utilization_pct / 1000.0;
            log::debug!(
                "part '{}' in box '{}': count={} util={:.1}% score={:.3}",
                part.id(),
                key,
                result.count,
                result.utilization_pct,
                score
            );

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Selection {
                    box_key: key.to_string(),
                    result,
                    score,
                });
            }
        }

        best
    }
}
