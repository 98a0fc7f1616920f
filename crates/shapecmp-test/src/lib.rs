//! Shared test fixtures for shapecmp crates.
//!
//! - [`args`] - argument builders and cursors that record how they are read
//! - [`logging`] - tracing subscriber setup for tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! shapecmp-test = { workspace = true }
//! ```

pub mod args;
pub mod logging;

pub use args::{enumeration_of, ints, iter_of, strings, DrainCounter};
pub use logging::init_tracing;
