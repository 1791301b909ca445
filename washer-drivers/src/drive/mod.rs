//! Drive unit implementations
//!
//! Relay-switched universal motor with a reversing relay for the wash
//! motion and a separate relay for the spin winding.

pub mod relay;

pub use relay::{DriveConfig, RelayDriveUnit};
