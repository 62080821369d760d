//! Constant folding.
//!
//! A visitor that rebuilds the tree bottom-up, simplifying as it goes. The
//! input tree is never modified.
//!
//! # Rules
//!
//! Binary operations, after folding both operands:
//! - two literals fold to the result of the operator, computed with the
//!   interpreter's own arithmetic; an operation that would fail at run time
//!   (division by zero, overflow) stays as written
//! - `*` and `&&` with a literal `0` on either side fold to `0`
//! - `/` and `%` with a literal `0` on the left fold to `0`, unless the right
//!   side is also a literal `0`
//! - two references to the same name: `-` `%` `!=` `<` `>` fold to `0`,
//!   `/` `==` `<=` `>=` fold to `1`
//!
//! Unary operations over a literal fold to a literal.
//!
//! Folding assumes the dropped operand would have evaluated successfully and
//! had no effect: a folded `x * 0` no longer fails when `x` is unbound,
//! `x / x` folds to `1` even if `x` is `0` at run time, and `print 5 * 0` or
//! `f() * 0` fold to `0` without the output `print` or `f` would have
//! written (or the line a `read` would have consumed).

use std::rc::Rc;

use tracing::{debug, trace};
use yat_eval::{evaluate_binary, evaluate_unary};
use yat_ir::{BinaryOp, Call, Conditional, Definition, Expr, ExprList, Function, UnaryOp, Visitor};

/// Counters collected during one folding pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoldStats {
    /// `Expr` nodes visited through `accept`. Conditional branches,
    /// function bodies and a definition's function are walked as typed
    /// children and are not counted themselves; their expressions are.
    pub visited: usize,
    /// Nodes replaced by a literal.
    pub folded: usize,
}

/// Produces a simplified, equivalent copy of a tree.
#[derive(Debug, Default)]
pub struct ConstantFolder {
    stats: FoldStats,
}

/// Fold `expr` with a fresh folder.
pub fn fold(expr: &Expr) -> Expr {
    ConstantFolder::new().fold(expr)
}

impl ConstantFolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `expr`, accumulating statistics across calls.
    pub fn fold(&mut self, expr: &Expr) -> Expr {
        let folded = expr.accept(self);
        debug!(
            visited = self.stats.visited,
            folded = self.stats.folded,
            "constant folding done"
        );
        folded
    }

    pub fn stats(&self) -> FoldStats {
        self.stats
    }

    fn literal(&mut self, value: i64, rule: &'static str) -> Expr {
        trace!(rule, value, "folded");
        self.stats.folded += 1;
        Expr::Number(value)
    }

    fn fold_binary(&mut self, left: Expr, op: BinaryOp, right: Expr) -> Expr {
        if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
            if let Ok(value) = evaluate_binary(l, op, r) {
                return self.literal(value, "literal operands");
            }
            return Expr::binary(left, op, right);
        }

        let zero = match op {
            BinaryOp::Mul | BinaryOp::And => left.is_zero() || right.is_zero(),
            BinaryOp::Div | BinaryOp::Mod => left.is_zero(),
            _ => false,
        };
        if zero {
            return self.literal(0, "zero operand");
        }

        if let (Some(l), Some(r)) = (left.as_reference(), right.as_reference()) {
            if l == r {
                let value = match op {
                    BinaryOp::Sub
                    | BinaryOp::Mod
                    | BinaryOp::NotEq
                    | BinaryOp::Lt
                    | BinaryOp::Gt => Some(0),
                    BinaryOp::Div | BinaryOp::Eq | BinaryOp::LtEq | BinaryOp::GtEq => Some(1),
                    _ => None,
                };
                if let Some(value) = value {
                    return self.literal(value, "same reference");
                }
            }
        }

        Expr::binary(left, op, right)
    }

    fn fold_list(&mut self, list: &ExprList) -> ExprList {
        list.map(|expr| expr.accept(self))
    }

    fn fold_function(&mut self, function: &Function) -> Function {
        Function {
            params: function.params.clone(),
            body: self.fold_list(&function.body),
        }
    }
}

impl Visitor for ConstantFolder {
    type Output = Expr;

    fn enter(&mut self, _expr: &Expr) {
        self.stats.visited += 1;
    }

    fn visit_number(&mut self, value: i64) -> Expr {
        Expr::Number(value)
    }

    fn visit_reference(&mut self, name: &str) -> Expr {
        Expr::reference(name)
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> Expr {
        let operand = operand.accept(self);
        if let Some(value) = operand.as_number() {
            if let Ok(result) = evaluate_unary(op, value) {
                return self.literal(result, "literal operand");
            }
        }
        Expr::unary(op, operand)
    }

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Expr {
        let left = left.accept(self);
        let right = right.accept(self);
        self.fold_binary(left, op, right)
    }

    fn visit_expr_list(&mut self, list: &ExprList) -> Expr {
        Expr::List(self.fold_list(list))
    }

    fn visit_conditional(&mut self, conditional: &Conditional) -> Expr {
        Expr::Conditional(Conditional {
            condition: Box::new(conditional.condition.accept(self)),
            if_true: self.fold_list(&conditional.if_true),
            if_false: self.fold_list(&conditional.if_false),
        })
    }

    fn visit_function(&mut self, function: &Function) -> Expr {
        Expr::function(self.fold_function(function))
    }

    fn visit_definition(&mut self, definition: &Definition) -> Expr {
        Expr::Definition(Definition {
            name: definition.name.clone(),
            function: Rc::new(self.fold_function(&definition.function)),
        })
    }

    fn visit_call(&mut self, call: &Call) -> Expr {
        let callee = call.callee.accept(self);
        let args = call.args.iter().map(|arg| arg.accept(self)).collect();
        Expr::call(callee, args)
    }

    fn visit_print(&mut self, expr: &Expr) -> Expr {
        Expr::print(expr.accept(self))
    }

    fn visit_read(&mut self, name: &str) -> Expr {
        Expr::read(name)
    }
}
