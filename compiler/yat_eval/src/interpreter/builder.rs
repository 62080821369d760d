//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::{stdin_handler, stdout_handler, SharedInputHandler, SharedPrintHandler};

/// Nested calls allowed before evaluation fails with a recursion error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for `Interpreter`.
///
/// Defaults: stdout for `print`, stdin for `read`, and
/// [`DEFAULT_MAX_CALL_DEPTH`] nested calls.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            input_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `read` takes its lines from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Limit the number of nested calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    /// Remove the call-depth limit. Only the native stack bounds recursion.
    #[must_use]
    pub fn unlimited_call_depth(mut self) -> Self {
        self.max_call_depth = None;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
