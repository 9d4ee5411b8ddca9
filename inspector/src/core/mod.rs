//! Deterministic predicate evaluation.
//!
//! Core modules are free of I/O. They operate on an already loaded
//! [`Record`](crate::record::Record) and return the same answer for the same
//! inputs.

pub mod accessor;
pub mod numeric;
pub mod predicate;
pub mod text;
pub mod types;
