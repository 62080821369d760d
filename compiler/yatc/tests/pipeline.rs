// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests across the yat crates.
//!
//! - `eval/` - building trees and running them through the interpreter
//! - `fold/` - folding, then printing or evaluating the result
//! - `demos/` - the bundled programs through the `yatc` commands
//! - `common/` - shared helpers

#[path = "pipeline/common/mod.rs"]
mod common;

#[path = "pipeline/eval.rs"]
mod eval;

#[path = "pipeline/fold.rs"]
mod fold;

#[path = "pipeline/demos.rs"]
mod demos;
