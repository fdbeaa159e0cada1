//! Test support utilities
//!
//! In-memory doubles for the collaborator traits. Enable with the
//! `test-utils` feature from other crates' dev-dependencies.

pub mod mocks;

pub use mocks::{MockVaultFs, MockVaultFsStats, StaticResolver};
