//! # findpro core
//!
//! Domain crate for booking a session with a professional. It holds the
//! marketplace models, the clock abstraction and the slot engine that turns a
//! professional's availability into the half-hour booking grid.
//!
//! - **Models**: professionals, availability windows and slot grid types
//! - **Booking**: the `SlotScheduleEngine` and its slot computation
//! - **Clock**: where "today" comes from
//! - **Config**: environment configuration for booking sessions

/// Slot computation and booking session state
pub mod booking;
/// Sources of the current date
pub mod clock;
/// Environment configuration
pub mod config;
pub mod errors;
pub mod models;
