//! Single-line expression rendering.
//!
//! Parentheses are purely cosmetic: they are added when an operand could
//! print as a leading `-`, and when a nested binary operation would regroup
//! differently if written bare. Whether an operand "could be negative" is a
//! syntactic check (negative literal or unary `-`), never an evaluation.

use yat_ir::{BinaryOp, Call, Conditional, Definition, Expr, ExprList, Function, UnaryOp, Visitor};

use crate::PrettyPrinter;

/// Renders an expression as one line of text.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineRenderer;

impl InlineRenderer {
    pub fn new() -> Self {
        InlineRenderer
    }

    pub fn render(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn operand(&mut self, expr: &Expr) -> String {
        let text = expr.accept(self);
        if could_be_negative(expr) || is_statement(expr) {
            format!("({text})")
        } else {
            text
        }
    }

    fn binary_operand(&mut self, expr: &Expr, parent: BinaryOp, right_side: bool) -> String {
        if let Expr::Binary { op, .. } = expr {
            let (child, parent) = (op.precedence(), parent.precedence());
            if child > parent || (right_side && child == parent) {
                return format!("({})", expr.accept(self));
            }
            return expr.accept(self);
        }
        self.operand(expr)
    }

    /// Statement forms in expression position: their block lines on one line.
    fn flatten(lines: &[String]) -> String {
        let joined = lines
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join(" ");
        match joined.strip_suffix(';') {
            Some(stripped) => stripped.to_string(),
            None => joined,
        }
    }
}

/// A negative literal or a negation.
fn could_be_negative(expr: &Expr) -> bool {
    match expr {
        Expr::Number(value) => *value < 0,
        Expr::Unary { op, .. } => *op == UnaryOp::Neg,
        _ => false,
    }
}

/// Forms that only have a block rendering.
fn is_statement(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::List(_)
            | Expr::Conditional(_)
            | Expr::Function(_)
            | Expr::Definition(_)
            | Expr::Print(_)
            | Expr::Read(_)
    )
}

impl Visitor for InlineRenderer {
    type Output = String;

    fn visit_number(&mut self, value: i64) -> String {
        value.to_string()
    }

    fn visit_reference(&mut self, name: &str) -> String {
        name.to_string()
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> String {
        let text = if matches!(operand, Expr::Binary { .. }) {
            format!("({})", operand.accept(self))
        } else {
            self.operand(operand)
        };
        format!("{op}{text}")
    }

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> String {
        let left = self.binary_operand(left, op, false);
        let right = self.binary_operand(right, op, true);
        format!("{left} {op} {right}")
    }

    fn visit_expr_list(&mut self, list: &ExprList) -> String {
        Self::flatten(&PrettyPrinter::new().visit_expr_list(list))
    }

    fn visit_conditional(&mut self, conditional: &Conditional) -> String {
        Self::flatten(&PrettyPrinter::new().visit_conditional(conditional))
    }

    fn visit_function(&mut self, function: &Function) -> String {
        Self::flatten(&PrettyPrinter::new().visit_function(function))
    }

    fn visit_definition(&mut self, definition: &Definition) -> String {
        Self::flatten(&PrettyPrinter::new().visit_definition(definition))
    }

    fn visit_call(&mut self, call: &Call) -> String {
        let callee = match &*call.callee {
            Expr::Reference(_) | Expr::Call(_) => call.callee.accept(self),
            other => format!("({})", other.accept(self)),
        };
        let args: Vec<String> = call.args.iter().map(|arg| arg.accept(self)).collect();
        format!("{callee}({})", args.join(", "))
    }

    fn visit_print(&mut self, expr: &Expr) -> String {
        format!("print {}", expr.accept(self))
    }

    fn visit_read(&mut self, name: &str) -> String {
        format!("read {name}")
    }
}
