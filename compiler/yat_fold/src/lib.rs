//! Constant folding for yat expression trees.
//!
//! See [`ConstantFolder`] for the rewrite rules.

mod const_fold;

pub use const_fold::{fold, ConstantFolder, FoldStats};
