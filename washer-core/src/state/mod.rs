//! Wash cycle state machine
//!
//! Defines the path a single wash attempt takes through the controller.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::CycleEvent;
pub use machine::{CycleState, CycleTrace, MAX_TRACE_LEN};
