//! Drum drive trait

/// Errors that can occur with drive operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// Relay or driver output could not be switched
    Relay,
    /// Motor stall detected
    Stall,
    /// Door interlock open
    Interlock,
}

/// Trait for the drum drive unit
///
/// Both operations block until the motion is finished or has failed.
pub trait DriveUnit {
    /// Run the wash motion for the given number of minutes
    fn run(&mut self, minutes: u16) -> Result<(), DriveError>;

    /// Run a spin cycle
    fn spin(&mut self) -> Result<(), DriveError>;
}

impl<T: DriveUnit + ?Sized> DriveUnit for &mut T {
    fn run(&mut self, minutes: u16) -> Result<(), DriveError> {
        (**self).run(minutes)
    }

    fn spin(&mut self) -> Result<(), DriveError> {
        (**self).spin()
    }
}
