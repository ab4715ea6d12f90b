//! # CartonFit Fit
//!
//! The single-container fitting pipeline: orientation search with stacking,
//! nesting, fragility and weight-cap rules, shipment box-count arithmetic,
//! catalogue auto-selection, and batch report rows.

pub mod calculator;
pub mod logistics;
pub mod report;
pub mod selector;

// Re-exports
pub use calculator::{fit, FitResult};
pub use cartonfit_core::{Catalogue, Container, Dims, Error, Part, Result};
pub use logistics::BoxPlan;
pub use report::{evaluate, evaluate_catalogue, FitStatus, PartReport};
pub use selector::{Selection, Selector};
