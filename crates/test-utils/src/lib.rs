//! Shared test utilities for the weather-transform workspace.
//!
//! This crate provides deterministic grid-data generators used across
//! the test suite.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;
