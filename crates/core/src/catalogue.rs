//! The fixed box catalogue.

use crate::dims::Dims;
use crate::{Error, Result};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed, ordered catalogue of box sizes, keyed by name.
///
/// Interior dimensions are in millimetres. Iteration order is the key order,
/// so selection over a catalogue is deterministic.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalogue {
    boxes: BTreeMap<String, Dims>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stock carton range.
    pub fn standard() -> Self {
        let mut catalogue = Self::new();
        catalogue.insert("S1", Dims::new(200.0, 200.0, 200.0));
        catalogue.insert("S2", Dims::new(300.0, 200.0, 150.0));
        catalogue.insert("M1", Dims::new(400.0, 300.0, 250.0));
        catalogue.insert("M2", Dims::new(400.0, 400.0, 400.0));
        catalogue.insert("L1", Dims::new(600.0, 400.0, 400.0));
        catalogue.insert("L2", Dims::new(600.0, 600.0, 600.0));
        catalogue
    }

    /// Adds or replaces a box size.
    pub fn insert(&mut self, key: impl Into<String>, dims: Dims) {
        self.boxes.insert(key.into(), dims);
    }

    /// Looks up a box by key.
    pub fn get(&self, key: &str) -> Option<Dims> {
        self.boxes.get(key).copied()
    }

    /// Iterates over (key, dims) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Dims)> {
        self.boxes.iter().map(|(k, d)| (k.as_str(), *d))
    }

    /// Returns the number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the catalogue has no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Validates every box in the catalogue.
    pub fn validate(&self) -> Result<()> {
        if self.boxes.is_empty() {
            return Err(Error::InvalidCatalogue("Catalogue has no boxes".into()));
        }
        for (key, dims) in self.iter() {
            if !dims.is_positive() {
                return Err(Error::InvalidCatalogue(format!(
                    "All dimensions for '{}' must be positive",
                    key
                )));
            }
        }
        Ok(())
    }
}
