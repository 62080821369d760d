//! Evaluation errors.
//!
//! Every failure is fatal for the evaluation that raised it and propagates
//! unchanged to the caller. The language has no way to catch an error.
//!
//! Construct errors through the `#[cold]` functions below rather than the
//! variants directly, so call sites stay short and the error paths stay out
//! of the hot code.

use yat_ir::BinaryOp;

use crate::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, EvalError>;

/// Why an evaluation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A name is bound neither locally nor in any ancestor scope.
    #[error("undefined name `{name}`")]
    UndefinedName { name: String },

    /// The callee of a call did not evaluate to a function.
    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    /// `/` or `%` with a zero right-hand operand.
    #[error("division by zero in `{op}`")]
    DivisionByZero { op: BinaryOp },

    /// `read` could not produce an integer.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] InputError),

    /// The result does not fit in 64 bits.
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: &'static str },

    /// A function or the void value where an integer is required.
    #[error("expected an integer {context}, got {got}")]
    ExpectedInteger {
        context: &'static str,
        got: &'static str,
    },

    /// Too many nested calls.
    #[error("maximum call depth of {depth} exceeded")]
    RecursionLimit { depth: usize },
}

/// Why a line of input was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("`{line}` is not an integer")]
    NotAnInteger { line: String },

    #[error("end of input")]
    Exhausted,

    #[error("{message}")]
    Io { message: String },
}

#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::UndefinedName {
        name: name.to_string(),
    }
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::NotCallable { type_name }
}

#[cold]
pub fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::DivisionByZero { op }
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalError {
    EvalError::IntegerOverflow { op }
}

#[cold]
pub fn expected_integer(context: &'static str, got: &'static str) -> EvalError {
    EvalError::ExpectedInteger { context, got }
}

#[cold]
pub fn recursion_limit_exceeded(depth: usize) -> EvalError {
    EvalError::RecursionLimit { depth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(undefined_name("x").to_string(), "undefined name `x`");
        assert_eq!(not_callable("int").to_string(), "int is not callable");
        assert_eq!(
            division_by_zero(BinaryOp::Mod).to_string(),
            "division by zero in `%`"
        );
        assert_eq!(
            EvalError::from(InputError::NotAnInteger {
                line: "12a".to_string()
            })
            .to_string(),
            "malformed input: `12a` is not an integer"
        );
        assert_eq!(
            expected_integer("as a condition", "function").to_string(),
            "expected an integer as a condition, got function"
        );
        assert_eq!(
            recursion_limit_exceeded(64).to_string(),
            "maximum call depth of 64 exceeded"
        );
    }
}
