//! Configuration types
//!
//! Controller-owned tables for weight ceilings and dirt thresholds,
//! optionally stored as postcard binary data.

#[cfg(feature = "serde")]
pub mod storage;
pub mod types;

pub use types::*;
