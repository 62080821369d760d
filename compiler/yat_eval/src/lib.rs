//! Evaluator for the yat expression language.
//!
//! - `Scope`: chained name bindings
//! - `Value`: integers, functions, and the void result of empty lists
//! - `Interpreter`: evaluates an `Expr` in a `Scope`
//! - print and input handlers: where `print` writes and `read` reads
//!
//! Arithmetic lives in `operators` so the constant folder can reuse exactly
//! the rules the interpreter applies.

pub mod errors;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;
mod scope;
mod value;

pub use errors::{EvalError, EvalResult, InputError};
pub use input_handler::{
    buffer_input, parse_int_line, stdin_handler, BufferInputHandler, InputHandlerImpl,
    SharedInputHandler, StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, evaluate_unary, floor_div, floor_mod};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use scope::Scope;
pub use value::Value;
