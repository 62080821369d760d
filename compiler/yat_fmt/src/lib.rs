//! Pretty-printer for yat expression trees.
//!
//! Two visitors cooperate:
//!
//! - [`InlineRenderer`] turns an expression into a single line, adding
//!   parentheses where an operand could be negative or would otherwise
//!   regroup.
//! - [`PrettyPrinter`] turns a tree into statement lines (`print x;`,
//!   `if (c) {`, `def f(a) {` ...), indenting nested lists.
//!
//! Output goes through an [`Emitter`], so the same rendering can be
//! collected into a string or streamed to stdout.

mod config;
mod emitter;
mod inline;
mod printer;

pub use config::PrinterConfig;
pub use emitter::{Emitter, StringEmitter, WriterEmitter};
pub use inline::InlineRenderer;
pub use printer::PrettyPrinter;

use yat_ir::Expr;

/// Render `expr` with the default configuration, one `\n`-terminated line
/// per statement.
pub fn format_expr(expr: &Expr) -> String {
    let mut emitter = StringEmitter::new();
    PrettyPrinter::new().write_to(expr, &mut emitter);
    emitter.output()
}
