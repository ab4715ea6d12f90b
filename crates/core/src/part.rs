//! Part definitions and handling rules.

use crate::dims::Dims;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packing-density preference derived from a part's lifespan category.
///
/// Durable parts are deliberately packed looser (reduced handling-damage
/// risk) even when tighter packing is volumetrically possible; consumables
/// pack to the physical maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PackDensity {
    /// Pack to the physical maximum (short-lived / consumable parts).
    #[default]
    Tight,
    /// Mild looseness preference (medium lifespan).
    Relaxed,
    /// Strong looseness preference (long-lived / durable parts).
    Loose,
}

impl PackDensity {
    /// Returns the scoring multiplier applied to the fit count during
    /// catalogue selection.
    pub fn factor(&self) -> f64 {
        match self {
            PackDensity::Tight => 1.0,
            PackDensity::Relaxed => 0.92,
            PackDensity::Loose => 0.85,
        }
    }
}

/// A rigid rectangular part to be packed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Part {
    /// Identifier (part name or SKU).
    id: String,

    /// As-given dimensions (width, length, height).
    dims: Dims,

    /// Unit weight. `None` means unconstrained by weight.
    weight: Option<f64>,

    /// Number of units required (shipment / consolidation quantity).
    quantity: usize,

    /// Fragile parts must stay upright: orientations rotating the height
    /// dimension onto a horizontal axis are rejected.
    fragile: bool,

    /// Whether parts may be stacked in multiple layers.
    stackable: bool,

    /// Whether parts nest inside one another (e.g. cups).
    nested: bool,

    /// Fraction of a part's height each additional nested part adds to the
    /// stack (0-100).
    nest_pct: f64,

    /// Packing-density preference for catalogue selection.
    density: PackDensity,
}

impl Part {
    /// Creates a new part with the given id and dimensions.
    ///
    /// Defaults: quantity 1, no weight, not fragile, stackable, not nested,
    /// tight packing density.
    pub fn new(id: impl Into<String>, width: f64, length: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            dims: Dims::new(width, length, height),
            weight: None,
            quantity: 1,
            fragile: false,
            stackable: true,
            nested: false,
            nest_pct: 0.0,
            density: PackDensity::default(),
        }
    }

    /// Sets the unit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the required quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Marks the part as fragile (must stay upright).
    pub fn with_fragile(mut self, fragile: bool) -> Self {
        self.fragile = fragile;
        self
    }

    /// Sets whether the part may be stacked.
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Enables nesting with the given height percentage (0-100).
    pub fn with_nesting(mut self, nest_pct: f64) -> Self {
        self.nested = true;
        self.nest_pct = nest_pct;
        self
    }

    /// Sets the packing-density preference.
    pub fn with_density(mut self, density: PackDensity) -> Self {
        self.density = density;
        self
    }

    /// Returns the part id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the as-given dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the unit volume.
    pub fn volume(&self) -> f64 {
        self.dims.volume()
    }

    /// Returns the unit weight, if any.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns the required quantity.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns whether the part is fragile.
    pub fn is_fragile(&self) -> bool {
        self.fragile
    }

    /// Returns whether the part may be stacked.
    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Returns whether the part nests.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Returns the nesting height percentage.
    pub fn nest_pct(&self) -> f64 {
        self.nest_pct
    }

    /// Returns the packing-density preference.
    pub fn density(&self) -> PackDensity {
        self.density
    }

    /// Validates the part definition.
    pub fn validate(&self) -> Result<()> {
        if !self.dims.is_positive() {
            return Err(Error::InvalidPart(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidPart(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        if let Some(weight) = self.weight {
            if weight < 0.0 {
                return Err(Error::InvalidPart(format!(
                    "Weight for '{}' cannot be negative",
                    self.id
                )));
            }
        }

        if !(0.0..=100.0).contains(&self.nest_pct) {
            return Err(Error::InvalidPart(format!(
                "Nesting percentage for '{}' must be between 0 and 100",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_part_volume() {
        let part = Part::new("P1", 120.0, 80.0, 50.0);
        assert_relative_eq!(part.volume(), 480_000.0, epsilon = 0.001);
    }

    #[test]
    fn test_builder_defaults() {
        let part = Part::new("P1", 10.0, 20.0, 30.0);
        assert_eq!(part.quantity(), 1);
        assert!(part.is_stackable());
        assert!(!part.is_fragile());
        assert!(!part.is_nested());
        assert_eq!(part.density(), PackDensity::Tight);
    }

    #[test]
    fn test_validation() {
        let valid = Part::new("P1", 10.0, 20.0, 30.0);
        assert!(valid.validate().is_ok());

        let zero_dim = Part::new("P2", 0.0, 20.0, 30.0);
        assert!(zero_dim.validate().is_err());

        let zero_qty = Part::new("P3", 10.0, 20.0, 30.0).with_quantity(0);
        assert!(zero_qty.validate().is_err());

        let negative_weight = Part::new("P4", 10.0, 20.0, 30.0).with_weight(-1.0);
        assert!(negative_weight.validate().is_err());

        let bad_pct = Part::new("P5", 10.0, 20.0, 30.0).with_nesting(150.0);
        assert!(bad_pct.validate().is_err());
    }

    #[test]
    fn test_density_factors() {
        assert_eq!(PackDensity::Tight.factor(), 1.0);
        assert_eq!(PackDensity::Relaxed.factor(), 0.92);
        assert_eq!(PackDensity::Loose.factor(), 0.85);
    }
}
