//! Testing infrastructure.
//!
//! - **Mocks**: controllable stand-ins for the confirmation and storage
//!   collaborators
//! - **Fixtures**: histories built from outcome codes and temporary data
//!   directories (test-only)

#[cfg(test)]
pub mod fixtures;
pub mod mocks;

#[cfg(test)]
pub use fixtures::*;
pub use mocks::*;
