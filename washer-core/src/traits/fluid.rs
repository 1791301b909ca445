//! Water inlet and drain trait

/// Errors that can occur with fluid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FluidError {
    /// Valve or pump output could not be switched
    Actuator,
    /// Requested volume is zero, negative or not a number
    InvalidVolume,
    /// Requested volume exceeds tub capacity
    Overfill,
}

/// Trait for the water system
///
/// Implementations control the inlet valve and drain pump.
pub trait FluidSystem {
    /// Pour water proportional to the batch weight
    fn pour(&mut self, weight_kg: f32) -> Result<(), FluidError>;

    /// Release all water from the tub
    fn release(&mut self) -> Result<(), FluidError>;
}

impl<T: FluidSystem + ?Sized> FluidSystem for &mut T {
    fn pour(&mut self, weight_kg: f32) -> Result<(), FluidError> {
        (**self).pour(weight_kg)
    }

    fn release(&mut self) -> Result<(), FluidError> {
        (**self).release()
    }
}
