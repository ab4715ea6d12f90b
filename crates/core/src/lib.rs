//! # CartonFit Core
//!
//! Shared types for the CartonFit carton fitting engine.
//!
//! This crate provides the foundational types used by the single-container
//! fitting pipeline and the multi-SKU consolidation pipeline:
//!
//! - **Dimensions and orientations**: [`Dims`], [`Orientation`] and the
//!   axis-aligned rotation enumeration
//! - **Inputs**: [`Part`] (with handling rules) and [`Container`]
//! - **Box catalogue**: the fixed carton range for auto-selection
//! - **Rule decoding**: free-text spreadsheet fields to typed parameters
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod catalogue;
pub mod container;
pub mod dims;
pub mod error;
pub mod orientation;
pub mod part;
pub mod rules;

// Re-exports
pub use catalogue::Catalogue;
pub use container::Container;
pub use dims::Dims;
pub use error::{Error, Result};
pub use orientation::{Alignment, Axis, Orientation};
pub use part::{PackDensity, Part};
pub use rules::PartRow;
