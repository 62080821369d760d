//! Tree-walking interpreter.
//!
//! `Interpreter::eval` takes a node and the scope to evaluate it in. The
//! interpreter itself only carries what outlives a single scope: the I/O
//! handlers and the call-depth bookkeeping.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use std::rc::Rc;

use tracing::debug;
use yat_ir::{BinaryOp, Call, Conditional, Expr, ExprList, Function, UnaryOp};
use yat_stack::ensure_sufficient_stack;

use crate::errors::{expected_integer, not_callable, recursion_limit_exceeded};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{EvalError, EvalResult, Scope, SharedInputHandler, SharedPrintHandler, Value};

/// Evaluates expression trees.
pub struct Interpreter {
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
    pub(crate) max_call_depth: Option<usize>,
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// An interpreter wired to stdout and stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The handler `print` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Calls currently in progress.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Evaluate `expr` in a fresh root scope.
    pub fn run(&mut self, expr: &Expr) -> EvalResult {
        let mut scope = Scope::new();
        self.eval(expr, &mut scope)
    }

    /// Evaluate `expr` in `scope`.
    pub fn eval(&mut self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, scope))
    }

    fn eval_inner(&mut self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult {
        match expr {
            Expr::Number(value) => Ok(Value::Int(*value)),
            Expr::Reference(name) => scope.get(name),
            Expr::Unary { op, operand } => self.eval_unary(*op, operand, scope),
            Expr::Binary { left, op, right } => self.eval_binary(left, *op, right, scope),
            Expr::List(list) => self.eval_list(list, scope),
            Expr::Conditional(conditional) => self.eval_conditional(conditional, scope),
            Expr::Function(function) => self.eval_list(&function.body, scope),
            Expr::Definition(definition) => {
                debug!(name = %definition.name, "define");
                let value = Value::Function(Rc::clone(&definition.function));
                scope.set(definition.name.as_str(), value.clone());
                Ok(value)
            }
            Expr::Call(call) => self.eval_call(call, scope),
            Expr::Print(inner) => {
                let value = self.eval_int(inner, scope, "to print")?;
                self.print_handler.println(&value.to_string());
                Ok(Value::Int(value))
            }
            Expr::Read(name) => {
                let value = self.input_handler.read_int()?;
                debug!(name = %name, value, "read");
                scope.set(name.as_str(), Value::Int(value));
                Ok(Value::Int(value))
            }
        }
    }

    /// Evaluate each expression in order; the last value wins.
    ///
    /// Empty and absent lists both produce `Void`.
    pub fn eval_list(&mut self, list: &ExprList, scope: &mut Scope<'_>) -> EvalResult {
        let mut last = Value::Void;
        for expr in list {
            last = self.eval(expr, scope)?;
        }
        Ok(last)
    }

    fn eval_conditional(&mut self, conditional: &Conditional, scope: &mut Scope<'_>) -> EvalResult {
        let condition = self.eval_int(&conditional.condition, scope, "as a condition")?;
        if condition != 0 {
            self.eval_list(&conditional.if_true, scope)
        } else {
            self.eval_list(&conditional.if_false, scope)
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Expr, scope: &mut Scope<'_>) -> EvalResult {
        let operand = self.eval_int(operand, scope, "as an operand")?;
        evaluate_unary(op, operand).map(Value::Int)
    }

    /// Both operands are always evaluated, left first.
    fn eval_binary(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        scope: &mut Scope<'_>,
    ) -> EvalResult {
        let left = self.eval_int(left, scope, "as an operand")?;
        let right = self.eval_int(right, scope, "as an operand")?;
        evaluate_binary(left, op, right).map(Value::Int)
    }

    /// Call a function.
    ///
    /// Arguments are evaluated in the new activation scope, whose parent is
    /// the caller's scope, then bound to the parameters positionally. Extra
    /// arguments are evaluated and dropped; parameters without an argument
    /// stay unbound.
    #[tracing::instrument(level = "debug", skip_all, fields(args = call.args.len()))]
    fn eval_call(&mut self, call: &Call, scope: &mut Scope<'_>) -> EvalResult {
        let function = self.resolve_callee(&call.callee, scope)?;
        self.check_recursion_limit()?;

        let mut activation = Scope::with_parent(scope);
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval(arg, &mut activation)?);
        }
        for (param, value) in function.params.iter().zip(args) {
            activation.set(param.as_str(), value);
        }

        self.call_depth += 1;
        let result = self.eval_list(&function.body, &mut activation);
        self.call_depth -= 1;
        result
    }

    /// A literal function is called as-is; anything else must evaluate to one.
    fn resolve_callee(
        &mut self,
        callee: &Expr,
        scope: &mut Scope<'_>,
    ) -> Result<Rc<Function>, EvalError> {
        if let Expr::Function(function) = callee {
            return Ok(Rc::clone(function));
        }
        match self.eval(callee, scope)? {
            Value::Function(function) => Ok(function),
            other => Err(not_callable(other.type_name())),
        }
    }

    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        match self.max_call_depth {
            Some(max) if self.call_depth >= max => Err(recursion_limit_exceeded(max)),
            _ => Ok(()),
        }
    }

    fn eval_int(
        &mut self,
        expr: &Expr,
        scope: &mut Scope<'_>,
        context: &'static str,
    ) -> Result<i64, EvalError> {
        match self.eval(expr, scope)? {
            Value::Int(value) => Ok(value),
            other => Err(expected_integer(context, other.type_name())),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
