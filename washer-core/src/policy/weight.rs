//! Weight policy
//!
//! Materials are split into two classes with separate weight ceilings.
//! A batch heavier than its ceiling is refused before anything else runs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::WeightLimits;
use crate::laundry::{LaundryBatch, Material};

/// Weight class of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightClass {
    /// Fabrics prone to mechanical stress (lower ceiling)
    StressSensitive,
    /// Robust fabrics (higher ceiling)
    Robust,
}

impl WeightClass {
    /// Get the weight class of a material
    pub const fn of(material: Material) -> Self {
        match material {
            Material::Jeans | Material::Wool => WeightClass::StressSensitive,
            Material::Cotton | Material::Synthetic | Material::Delicate => WeightClass::Robust,
        }
    }
}

/// Check if a batch exceeds the ceiling for its material
///
/// A batch exactly at the ceiling is accepted.
pub fn is_overweight(batch: &LaundryBatch, limits: &WeightLimits) -> bool {
    let class = WeightClass::of(batch.material());
    batch.weight_kg() > limits.max_kg(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(material: Material, weight_kg: f32) -> LaundryBatch {
        LaundryBatch::new(material, weight_kg).unwrap()
    }

    #[test]
    fn test_weight_classes() {
        assert_eq!(WeightClass::of(Material::Jeans), WeightClass::StressSensitive);
        assert_eq!(WeightClass::of(Material::Wool), WeightClass::StressSensitive);
        assert_eq!(WeightClass::of(Material::Cotton), WeightClass::Robust);
        assert_eq!(WeightClass::of(Material::Synthetic), WeightClass::Robust);
        assert_eq!(WeightClass::of(Material::Delicate), WeightClass::Robust);
    }

    #[test]
    fn test_stress_sensitive_ceiling() {
        let limits = WeightLimits::default();
        assert!(!is_overweight(&batch(Material::Wool, 4.0), &limits));
        assert!(is_overweight(&batch(Material::Wool, 5.0), &limits));
        assert!(is_overweight(&batch(Material::Jeans, 4.01), &limits));
    }

    #[test]
    fn test_robust_ceiling() {
        let limits = WeightLimits::default();
        assert!(!is_overweight(&batch(Material::Cotton, 7.0), &limits));
        assert!(!is_overweight(&batch(Material::Delicate, 8.0), &limits));
        assert!(is_overweight(&batch(Material::Synthetic, 8.5), &limits));
    }

    #[test]
    fn test_custom_limits() {
        let limits = WeightLimits {
            stress_sensitive_max_kg: 6.0,
            robust_max_kg: 10.0,
        };
        assert!(!is_overweight(&batch(Material::Wool, 5.0), &limits));
        assert!(!is_overweight(&batch(Material::Cotton, 9.0), &limits));
    }
}
