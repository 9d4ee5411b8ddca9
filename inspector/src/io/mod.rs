//! I/O helpers for inspections.

pub mod config;
pub mod link_store;
