//! Driver library behind the `yatc` binary.
//!
//! The language has no parser; programs are trees built in code. The
//! bundled [`demos`] are the programs the CLI can run, format, and fold.

pub mod commands;
pub mod demos;
mod tracing_setup;

pub use tracing_setup::init_tracing;
