//! Wash decision policies
//!
//! Pure decision logic: whether a batch may be washed, and which
//! concrete program it gets.

pub mod resolution;
pub mod weight;

pub use resolution::{program_for_dirt, resolve_program, ResolutionError};
pub use weight::{is_overweight, WeightClass};
