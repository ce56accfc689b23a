//! Shared utilities for satis-import.
//!
//! This crate provides the cross-cutting concerns used by the other crates:
//! the unified error type and filesystem helpers.

pub mod errors;
pub mod fs;
