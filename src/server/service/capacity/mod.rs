//! Slot capacity rules and the availability check built on them.

pub mod availability;
pub mod policy;
