//! Hardware abstraction traits
//!
//! These traits define the interface between the wash controller
//! and hardware-specific implementations.

pub mod drive;
pub mod fluid;
pub mod sensor;

pub use drive::{DriveError, DriveUnit};
pub use fluid::{FluidError, FluidSystem};
pub use sensor::{DirtSensor, SensorError};
