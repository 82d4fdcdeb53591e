//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the FNOL workbench test suite.
//!
//! # Modules
//!
//! - `fixtures`: deterministic ids and instants for predictable tests
//! - `builders`: builder patterns for test data construction

pub mod fixtures;
pub mod builders;

pub use fixtures::*;
pub use builders::*;
