//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in washer-core for the machine's hardware:
//!
//! - Dirt sensor (optical turbidity probe)
//! - Drive unit (relay-switched drum motor with reversing and spin relays)
//! - Fluid system (inlet valve and drain pump)

#![no_std]
#![deny(unsafe_code)]

pub mod drive;
pub mod fluid;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;
