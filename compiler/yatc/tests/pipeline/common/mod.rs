//! Shared helpers for pipeline tests.

use yat_eval::{buffer_handler, buffer_input, EvalResult, Interpreter, Scope, Value};
use yat_ir::Expr;

/// Evaluation outcome plus everything `print` wrote.
pub struct Run {
    pub result: EvalResult,
    pub output: String,
}

/// Evaluate `expr` in a root scope with `bindings`, feeding `input` to `read`.
pub fn run(expr: &Expr, bindings: &[(&str, i64)], input: &[&str]) -> Run {
    let print = buffer_handler();
    let mut interp = Interpreter::builder()
        .print_handler(print.clone())
        .input_handler(buffer_input(input.iter().copied()))
        .build();
    let mut scope = Scope::new();
    for (name, value) in bindings {
        scope.set(*name, Value::Int(*value));
    }
    let result = interp.eval(expr, &mut scope);
    Run {
        result,
        output: print.get_output(),
    }
}

pub fn num(value: i64) -> Expr {
    Expr::number(value)
}

pub fn var(name: &str) -> Expr {
    Expr::reference(name)
}
