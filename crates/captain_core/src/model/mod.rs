//! Domain model for the team captain.
//!
//! # Responsibility
//! - Define the single-instance `Captain` type and its process-wide slot.
//!
//! # Invariants
//! - At most one `Captain` exists for the lifetime of the process.
//! - `Captain::get` is the only path that produces a `Captain`.

pub mod captain;
