//! Chronos Core Domain
//!
//! Pure domain types for the Chronos synchronized clock.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod fields;
pub mod hands;
pub mod values;

// Re-export commonly used types at crate root
pub use fields::TimeOfDay;
pub use hands::HandPositions;
pub use values::{Timestamp, format_hms};
