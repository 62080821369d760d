//! Visitor Protocol
//!
//! Double dispatch over the closed node set. `Expr::accept` runs the
//! visitor's `enter` hook, dispatches on the variant tag to the matching
//! `visit_*` method, then runs `leave`.
//!
//! The hooks fire once per `Expr` that goes through `accept`. The typed
//! children of a node (the branches of a `Conditional`, the body of a
//! `Function`, the function of a `Definition`) are stored as `ExprList` and
//! `Function` rather than `Expr`, so visitors reach them by calling
//! `visit_expr_list` / `visit_function` directly and no hooks fire for them.
//! Their own `Expr` children go through `accept` as usual.
//!
//! Every `visit_*` method is required. A visitor that forgets a variant is
//! rejected by the compiler, so dispatch can never reach a missing handler
//! at run time.
//!
//! # Example
//!
//! ```text
//! struct CountReads(usize);
//!
//! impl Visitor for CountReads {
//!     type Output = ();
//!     fn visit_read(&mut self, _name: &str) { self.0 += 1; }
//!     fn visit_print(&mut self, expr: &Expr) { expr.accept(self) }
//!     // ... one method per variant
//! }
//! ```

use crate::ast::{BinaryOp, Call, Conditional, Definition, Expr, ExprList, Function, UnaryOp};
use yat_stack::ensure_sufficient_stack;

/// An external operation over the expression tree.
///
/// Implementations recurse by calling `accept` on `Expr` children, and
/// `visit_expr_list` / `visit_function` on the typed children of
/// conditionals and definitions.
pub trait Visitor {
    /// Result of visiting one node.
    type Output;

    /// Called before dispatching on `expr`.
    ///
    /// Not called for typed children reached through `visit_expr_list` or
    /// `visit_function` directly.
    fn enter(&mut self, expr: &Expr) {
        let _ = expr;
    }

    /// Called after the `visit_*` method for `expr` returns.
    fn leave(&mut self, expr: &Expr) {
        let _ = expr;
    }

    fn visit_number(&mut self, value: i64) -> Self::Output;

    fn visit_reference(&mut self, name: &str) -> Self::Output;

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> Self::Output;

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Self::Output;

    fn visit_expr_list(&mut self, list: &ExprList) -> Self::Output;

    fn visit_conditional(&mut self, conditional: &Conditional) -> Self::Output;

    fn visit_function(&mut self, function: &Function) -> Self::Output;

    fn visit_definition(&mut self, definition: &Definition) -> Self::Output;

    fn visit_call(&mut self, call: &Call) -> Self::Output;

    fn visit_print(&mut self, expr: &Expr) -> Self::Output;

    fn visit_read(&mut self, name: &str) -> Self::Output;
}

impl Expr {
    /// Dispatch `visitor` on this node.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        ensure_sufficient_stack(|| {
            visitor.enter(self);
            let output = match self {
                Expr::Number(value) => visitor.visit_number(*value),
                Expr::Reference(name) => visitor.visit_reference(name),
                Expr::Unary { op, operand } => visitor.visit_unary(*op, operand),
                Expr::Binary { left, op, right } => visitor.visit_binary(left, *op, right),
                Expr::List(list) => visitor.visit_expr_list(list),
                Expr::Conditional(conditional) => visitor.visit_conditional(conditional),
                Expr::Function(function) => visitor.visit_function(function),
                Expr::Definition(definition) => visitor.visit_definition(definition),
                Expr::Call(call) => visitor.visit_call(call),
                Expr::Print(expr) => visitor.visit_print(expr),
                Expr::Read(name) => visitor.visit_read(name),
            };
            visitor.leave(self);
            output
        })
    }
}
