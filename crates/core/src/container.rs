//! Container (carton) definitions.

use crate::dims::Dims;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid rectangular container.
///
/// Interior dimensions may be reduced by a uniform clearance subtracted from
/// each axis before any capacity computation, modeling packaging or padding
/// tolerance. Immutable once built.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Interior dimensions as specified.
    dims: Dims,

    /// Uniform clearance subtracted from each axis.
    clearance: f64,

    /// Maximum total weight allowed. `None` means unconstrained.
    max_weight: Option<f64>,
}

impl Container {
    /// Creates a new container with the given interior dimensions.
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            dims: Dims::new(width, length, height),
            clearance: 0.0,
            max_weight: None,
        }
    }

    /// Creates a container from a dimension triple.
    pub fn from_dims(dims: Dims) -> Self {
        Self::new(dims.w, dims.l, dims.h)
    }

    /// Sets the uniform clearance subtracted from each axis.
    pub fn with_clearance(mut self, clearance: f64) -> Self {
        self.clearance = clearance;
        self
    }

    /// Sets the maximum allowed total weight.
    pub fn with_max_weight(mut self, weight: f64) -> Self {
        self.max_weight = Some(weight);
        self
    }

    /// Returns the interior dimensions as specified.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the clearance.
    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    /// Returns the maximum allowed weight, if any.
    pub fn max_weight(&self) -> Option<f64> {
        self.max_weight
    }

    /// Returns the usable interior dimensions: each axis reduced by the
    /// clearance, floored at zero.
    pub fn usable_dims(&self) -> Dims {
        Dims::new(
            (self.dims.w - self.clearance).max(0.0),
            (self.dims.l - self.clearance).max(0.0),
            (self.dims.h - self.clearance).max(0.0),
        )
    }

    /// Returns the usable interior volume.
    pub fn volume(&self) -> f64 {
        self.usable_dims().volume()
    }

    /// Validates the container definition.
    pub fn validate(&self) -> Result<()> {
        if !self.dims.is_positive() {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }

        if self.clearance < 0.0 {
            return Err(Error::InvalidContainer(
                "Clearance cannot be negative".into(),
            ));
        }

        if let Some(weight) = self.max_weight {
            if weight <= 0.0 {
                return Err(Error::InvalidContainer(
                    "Maximum weight must be positive".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_container_volume() {
        let container = Container::new(400.0, 300.0, 250.0);
        assert_relative_eq!(container.volume(), 30_000_000.0, epsilon = 0.001);
    }

    #[test]
    fn test_clearance_reduces_each_axis() {
        let container = Container::new(100.0, 80.0, 50.0).with_clearance(5.0);
        assert_eq!(container.usable_dims(), Dims::new(95.0, 75.0, 45.0));
    }

    #[test]
    fn test_clearance_floors_at_zero() {
        let container = Container::new(10.0, 80.0, 50.0).with_clearance(20.0);
        let usable = container.usable_dims();
        assert_eq!(usable.w, 0.0);
        assert_eq!(usable.volume(), 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(Container::new(100.0, 80.0, 50.0).validate().is_ok());
        assert!(Container::new(-100.0, 80.0, 50.0).validate().is_err());
        assert!(Container::new(100.0, 80.0, 50.0)
            .with_clearance(-1.0)
            .validate()
            .is_err());
        assert!(Container::new(100.0, 80.0, 50.0)
            .with_max_weight(0.0)
            .validate()
            .is_err());
    }
}
