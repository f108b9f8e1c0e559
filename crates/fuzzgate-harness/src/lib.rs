//! Test tooling for fuzzgate.
//!
//! This crate provides a recording implementation of the `CommandExecutor`
//! trait, a seed corpus and oracle functions, so the processor can be
//! exercised end to end without ever creating a host process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod corpus;
pub mod oracle;
pub mod recording;

pub use corpus::{Seed, seed_corpus};
pub use oracle::OracleFn;
pub use recording::{RecordingExecutor, Script};
