//! Laundry value types
//!
//! Immutable values built by the caller before a wash attempt.

pub mod batch;
pub mod percentage;
pub mod program;

pub use batch::{BatchError, LaundryBatch, Material};
pub use percentage::Percentage;
pub use program::{Program, ProgramConfiguration, ResolvedProgram};
