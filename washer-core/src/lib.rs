//! Board-agnostic core logic for the washing machine controller
//!
//! This crate contains all wash logic that does not depend on specific
//! hardware implementations:
//!
//! - Laundry value types (material, batch, program, configuration)
//! - Hardware abstraction traits (dirt sensor, drive unit, fluid system)
//! - Weight policy and program resolution
//! - Wash cycle state machine
//! - The wash controller and its outcome types
//! - Controller configuration tables

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod laundry;
pub mod policy;
pub mod state;
pub mod status;
pub mod traits;

pub use controller::WashController;
pub use laundry::{LaundryBatch, Material, Percentage, Program, ProgramConfiguration};
pub use status::{ErrorCode, LaundryStatus, WashResult};
