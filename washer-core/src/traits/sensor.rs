//! Dirt sensor trait

use crate::laundry::{LaundryBatch, Percentage};

/// Errors that can occur with dirt sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// ADC conversion error
    ConversionError,
}

/// Trait for dirtiness sensors
///
/// Implementations handle the specific measuring principle (optical
/// turbidity, conductivity, etc.)
pub trait DirtSensor {
    /// Measure how dirty the batch is
    ///
    /// Returns `Ok(Some(pct))` for a usable reading and `Ok(None)` if the
    /// sensor answered but the reading cannot be trusted.
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn detect_dirt(&mut self, batch: &LaundryBatch) -> Result<Option<Percentage>, SensorError>;
}

impl<T: DirtSensor + ?Sized> DirtSensor for &mut T {
    fn detect_dirt(&mut self, batch: &LaundryBatch) -> Result<Option<Percentage>, SensorError> {
        (**self).detect_dirt(batch)
    }
}
