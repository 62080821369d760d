//! Source of lines for `read`.
//!
//! Mirrors the print handler: stdin for normal runs, a queue of scripted
//! lines for tests and demos.

use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::InputError;

/// Parse one input line as a base-10 integer.
///
/// Only the line terminator (`\n` or `\r\n`) is stripped; any other
/// surrounding character makes the line malformed.
pub fn parse_int_line(line: &str) -> Result<i64, InputError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.parse().map_err(|_| InputError::NotAnInteger {
        line: line.to_string(),
    })
}

/// Reads lines from the process's standard input.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    pub fn read_line(&self) -> Result<String, InputError> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|err| InputError::Io {
                message: err.to_string(),
            })?;
        if read == 0 {
            return Err(InputError::Exhausted);
        }
        Ok(line)
    }
}

/// Serves a fixed queue of lines.
#[derive(Default)]
pub struct BufferInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl BufferInputHandler {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        BufferInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> Result<String, InputError> {
        self.lines.lock().pop_front().ok_or(InputError::Exhausted)
    }

    /// Queue another line.
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.lock().push_back(line.into());
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.lock().len()
    }
}

/// Where `read` takes its lines from.
pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Buffer(BufferInputHandler),
}

impl InputHandlerImpl {
    /// Next raw line, terminator included when the source provides one.
    pub fn read_line(&self) -> Result<String, InputError> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Buffer(h) => h.read_line(),
        }
    }

    /// Next line parsed as an integer.
    pub fn read_int(&self) -> Result<i64, InputError> {
        parse_int_line(&self.read_line()?)
    }

    /// Lines still queued; `None` for stdin.
    pub fn remaining(&self) -> Option<usize> {
        match self {
            Self::Stdin(_) => None,
            Self::Buffer(h) => Some(h.remaining()),
        }
    }
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

pub fn buffer_input<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Buffer(BufferInputHandler::new(lines)))
}

#[cfg(test)]
mod tests;
