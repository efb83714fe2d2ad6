//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixture record types, and helpers
//! for the mapping test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixture record types (`Contact`, `Account`, `Opportunity`) and instances
//! - `builders`: Builder patterns for fixture records
//! - `assertions`: Assertion helpers for mapping outputs
//! - `generators`: Property-based schema and record generators
//! - `logging`: One-time subscriber installation for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
