//! Predicate checks against recorded in-toto links.
//!
//! A check loads one link, selects one field (`stdout`, `stderr` or the exit
//! code), and applies one operator against a reference value. The result is
//! tri-state: satisfied, not satisfied, or an evaluation error, each with its
//! own exit status (see [`exit_codes`]).
//!
//! - **[`core`]**: Pure evaluation (field access, text and numeric operators).
//! - **[`io`]**: Link loading and configuration.
//!
//! [`inspect`] ties them together and [`report`] turns the outcome into an exit
//! status and printable output.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod inspect;
pub mod io;
pub mod logging;
pub mod record;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
