//! Stable exit codes for `link-inspect`.
//!
//! Scripts gate on these: `NOT_SATISFIED` means the check ran and failed,
//! every code above it means the check could not run.

/// Predicate holds for the inspected field.
pub const SATISFIED: i32 = 0;
/// Predicate evaluated to false.
pub const NOT_SATISFIED: i32 = 1;
/// Bad field selector, operator, reference value, or configuration.
pub const INVALID_INPUT: i32 = 2;
/// Link path does not resolve to a file.
pub const RECORD_NOT_FOUND: i32 = 3;
/// Link file could not be read or parsed.
pub const RECORD_MALFORMED: i32 = 4;
/// Requested byproduct stream is missing from the link.
pub const FIELD_ABSENT: i32 = 5;
