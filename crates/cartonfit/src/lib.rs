//! # CartonFit
//!
//! Computes how densely rigid rectangular parts pack into rigid rectangular
//! cartons: the best of the six axis-aligned rotations per part, nesting and
//! stacking rules, weight-constrained capacity, catalogue box selection, and
//! a greedy multi-SKU consolidation heuristic.
//!
//! ## Quick Start
//!
//! ```rust
//! use cartonfit::core::{Container, Part};
//! use cartonfit::fit;
//!
//! let container = Container::new(400.0, 300.0, 250.0);
//! let part = Part::new("widget", 120.0, 80.0, 50.0);
//!
//! let result = fit::fit(&container, &part).expect("part fits");
//! assert!(result.count > 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `fit` (default): single-container fitting, logistics, box selection
//! - `binpack` (default): multi-SKU consolidation
//! - `serde`: serialization support

/// Core types: dimensions, orientations, parts, containers, rule decoding.
pub use cartonfit_core as core;

/// Single-container fitting pipeline.
#[cfg(feature = "fit")]
pub use cartonfit_fit as fit;

/// Multi-SKU consolidation pipeline.
#[cfg(feature = "binpack")]
pub use cartonfit_binpack as binpack;

// Re-export commonly used types at root level
pub use cartonfit_core::{Catalogue, Container, Dims, Error, Part, Result};
