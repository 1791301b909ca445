//! Fluid system implementations

pub mod valve;

pub use valve::{FluidConfig, ValveFluidSystem};
