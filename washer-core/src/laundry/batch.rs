//! Laundry batch definition

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric category of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    Cotton,
    Jeans,
    Wool,
    Synthetic,
    Delicate,
}

impl Material {
    /// All materials, in declaration order
    pub const ALL: [Material; 5] = [
        Material::Cotton,
        Material::Jeans,
        Material::Wool,
        Material::Synthetic,
        Material::Delicate,
    ];
}

/// Errors that can occur when building a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchError {
    /// Weight is zero or negative
    NonPositiveWeight,
    /// Weight is NaN or infinite
    NonFiniteWeight,
}

/// One load of laundry submitted for washing
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaundryBatch {
    material: Material,
    weight_kg: f32,
}

impl LaundryBatch {
    /// Create a new batch
    ///
    /// The weight must be a finite, strictly positive number of kilograms.
    pub fn new(material: Material, weight_kg: f32) -> Result<Self, BatchError> {
        if !weight_kg.is_finite() {
            return Err(BatchError::NonFiniteWeight);
        }
        if weight_kg <= 0.0 {
            return Err(BatchError::NonPositiveWeight);
        }
        Ok(Self {
            material,
            weight_kg,
        })
    }

    /// Get the fabric category
    pub fn material(&self) -> Material {
        self.material
    }

    /// Get the weight in kilograms
    pub fn weight_kg(&self) -> f32 {
        self.weight_kg
    }
}
