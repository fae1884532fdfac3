//! Deterministic, pure routing logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod dispatch;
pub mod invariants;
pub mod params;
pub mod resolver;
pub mod types;
