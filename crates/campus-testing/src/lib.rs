//! Test utilities for Campus services.
//!
//! Provides `MockSession` and upload fixtures.
//! Import in `#[cfg(test)]` blocks and `tests/` only, never in production code.

pub mod auth;
pub mod fixture;
