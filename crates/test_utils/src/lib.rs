//! Test Utilities Crate
//!
//! Provides shared test fixtures and builders for the warranty core test
//! suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built test data for common entities
//! - `builders`: builder patterns for test data construction
//! - `generators`: randomized submission data

pub mod builders;
pub mod fixtures;
pub mod generators;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
