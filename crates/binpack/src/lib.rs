//! # CartonFit BinPack
//!
//! Multi-SKU consolidation: a greedy first-fit-decreasing heuristic that
//! packs many distinct part types, each with a quantity, into identical
//! boxes under volume and weight limits.

pub mod packer;
pub mod report;

// Re-exports
pub use cartonfit_core::{Container, Dims, Error, Part, Result};
pub use packer::BinPacker;
pub use report::{PackReport, PackedBox};
