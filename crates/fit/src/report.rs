//! Batch evaluation into per-part report rows.
//!
//! Callers hand over a table of parts and render or export the rows; a part
//! that fits nowhere becomes a NO FIT row, and no single part's failure
//! aborts the batch.

use crate::calculator::{self, FitResult};
use crate::logistics::BoxPlan;
use crate::selector::{Selection, Selector};
use cartonfit_core::{Container, Part};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fit outcome for one part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitStatus {
    /// The part fits; the winning orientation and counts.
    Fit(FitResult),
    /// No orientation of the part fits the container.
    NoFit,
}

impl FitStatus {
    /// Returns the fit result, if any.
    pub fn result(&self) -> Option<&FitResult> {
        match self {
            FitStatus::Fit(result) => Some(result),
            FitStatus::NoFit => None,
        }
    }
}

/// One output row of a batch evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartReport {
    /// The part id.
    pub part_id: String,
    /// Catalogue key of the assigned box, when auto-selected.
    pub box_key: Option<String>,
    /// The fit outcome.
    pub status: FitStatus,
    /// Box-count arithmetic for the part's required quantity, when it fits.
    pub plan: Option<BoxPlan>,
}

/// Evaluates every part against a single container.
pub fn evaluate(container: &Container, parts: &[Part]) -> Vec<PartReport> {
    parts
        .iter()
        .map(|part| match calculator::fit(container, part) {
            Some(result) => {
                let plan = BoxPlan::for_quantity(part.quantity(), result.count);
                PartReport {
                    part_id: part.id().to_string(),
                    box_key: None,
                    status: FitStatus::Fit(result),
                    plan,
                }
            }
            None => no_fit_row(part),
        })
        .collect()
}

/// Evaluates every part against a catalogue, auto-selecting the best box
/// per part.
pub fn evaluate_catalogue(selector: &Selector, parts: &[Part]) -> Vec<PartReport> {
    parts
        .iter()
        .map(|part| match selector.select(part) {
            Some(Selection {
                box_key, result, ..
            }) => {
                let plan = BoxPlan::for_quantity(part.quantity(), result.count);
                PartReport {
                    part_id: part.id().to_string(),
                    box_key: Some(box_key),
                    status: FitStatus::Fit(result),
                    plan,
                }
            }
            None => no_fit_row(part),
        })
        .collect()
}

fn no_fit_row(part: &Part) -> PartReport {
    PartReport {
        part_id: part.id().to_string(),
        box_key: None,
        status: FitStatus::NoFit,
        plan: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversize_row_does_not_abort_batch() {
        let container = Container::new(100.0, 100.0, 100.0);
        let parts = vec![
            Part::new("fits", 10.0, 10.0, 10.0),
            Part::new("oversize", 500.0, 500.0, 500.0),
            Part::new("also-fits", 20.0, 20.0, 20.0),
        ];

        let rows = evaluate(&container, &parts);
        assert_eq!(rows.len(), 3);
        assert!(matches!(rows[0].status, FitStatus::Fit(_)));
        assert_eq!(rows[1].status, FitStatus::NoFit);
        assert!(rows[1].plan.is_none());
        assert!(matches!(rows[2].status, FitStatus::Fit(_)));
    }

    #[test]
    fn test_plan_uses_part_quantity() {
        let container = Container::new(100.0, 100.0, 100.0);
        let parts = vec![Part::new("P1", 50.0, 50.0, 50.0).with_quantity(100)];

        let rows = evaluate(&container, &parts);
        // 8 per box, 100 required: 13 boxes, 4 in the last.
        let plan = rows[0].plan.unwrap();
        assert_eq!(plan.boxes_needed, 13);
        assert_eq!(plan.full_boxes, 12);
        assert_eq!(plan.last_box_qty, 4);
    }

    #[test]
    fn test_catalogue_rows_carry_box_key() {
        let selector = Selector::standard();
        let parts = vec![
            Part::new("P1", 120.0, 80.0, 50.0),
            Part::new("huge", 5000.0, 5000.0, 5000.0),
        ];

        let rows = evaluate_catalogue(&selector, &parts);
        assert!(rows[0].box_key.is_some());
        assert_eq!(rows[1].status, FitStatus::NoFit);
        assert!(rows[1].box_key.is_none());
    }
}
