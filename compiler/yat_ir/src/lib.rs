//! Yat IR - expression tree for the yat interpreter.
//!
//! This crate contains:
//! - The node set (`Expr` and its payload structs)
//! - Binary and unary operator enums
//! - The `Visitor` protocol used by the pretty-printer and constant folder
//!
//! Trees are built programmatically through the `Expr` constructors and are
//! never mutated afterwards. Transformations build new trees.

pub mod ast;
pub mod visitor;

pub use ast::{BinaryOp, Call, Conditional, Definition, Expr, ExprList, Function, UnaryOp};
pub use visitor::Visitor;
