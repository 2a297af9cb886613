/// Availability windows and their wire representation
pub mod availability;
/// Slot grid types produced by the booking engine
pub mod booking;
/// Professional profile records
pub mod professional;
