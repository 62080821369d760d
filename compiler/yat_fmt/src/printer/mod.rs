//! Statement-level rendering.
//!
//! Each node becomes one or more lines. Nested expression lists are indented
//! one level per list by prefixing every line they produce, so indentation
//! composes without the printer tracking a depth.

use std::io;

use yat_ir::{BinaryOp, Call, Conditional, Definition, Expr, ExprList, Function, UnaryOp, Visitor};

use crate::{Emitter, InlineRenderer, PrinterConfig, WriterEmitter};

/// Renders expression trees as source-like lines.
#[derive(Clone, Debug, Default)]
pub struct PrettyPrinter {
    config: PrinterConfig,
    inline: InlineRenderer,
}

impl PrettyPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        PrettyPrinter {
            config,
            inline: InlineRenderer,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// The lines for `expr`, without terminators.
    pub fn render(&mut self, expr: &Expr) -> Vec<String> {
        expr.accept(self)
    }

    /// Emit every rendered line of `expr`, each followed by a newline.
    pub fn write_to<E: Emitter + ?Sized>(&mut self, expr: &Expr, emitter: &mut E) {
        for line in self.render(expr) {
            emitter.emit_line(&line);
        }
    }

    /// Write the rendering of `expr` to stdout.
    pub fn print(&mut self, expr: &Expr) -> io::Result<()> {
        let mut emitter = WriterEmitter::stdout();
        self.write_to(expr, &mut emitter);
        emitter.finish()
    }

    fn statement(text: String) -> Vec<String> {
        vec![format!("{text};")]
    }

    fn block(&mut self, header: String, body: &ExprList) -> Vec<String> {
        let mut lines = vec![header];
        lines.extend(self.visit_expr_list(body));
        lines.push("};".to_string());
        lines
    }
}

fn signature(name: &str, function: &Function) -> String {
    if name.is_empty() {
        format!("def ({}) {{", function.params.join(", "))
    } else {
        format!("def {name}({}) {{", function.params.join(", "))
    }
}

impl Visitor for PrettyPrinter {
    type Output = Vec<String>;

    fn visit_number(&mut self, value: i64) -> Vec<String> {
        Self::statement(self.inline.visit_number(value))
    }

    fn visit_reference(&mut self, name: &str) -> Vec<String> {
        Self::statement(self.inline.visit_reference(name))
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Expr) -> Vec<String> {
        Self::statement(self.inline.visit_unary(op, operand))
    }

    fn visit_binary(&mut self, left: &Expr, op: BinaryOp, right: &Expr) -> Vec<String> {
        Self::statement(self.inline.visit_binary(left, op, right))
    }

    fn visit_expr_list(&mut self, list: &ExprList) -> Vec<String> {
        let mut lines = Vec::new();
        for expr in list {
            for line in expr.accept(self) {
                lines.push(format!("{}{line}", self.config.indent));
            }
        }
        lines
    }

    fn visit_conditional(&mut self, conditional: &Conditional) -> Vec<String> {
        let condition = self.inline.render(&conditional.condition);
        let mut lines = vec![format!("if ({condition}) {{")];
        lines.extend(self.visit_expr_list(&conditional.if_true));
        if !conditional.if_false.is_empty() {
            lines.push("} else {".to_string());
            lines.extend(self.visit_expr_list(&conditional.if_false));
        }
        lines.push("};".to_string());
        lines
    }

    fn visit_function(&mut self, function: &Function) -> Vec<String> {
        self.block(signature("", function), &function.body)
    }

    fn visit_definition(&mut self, definition: &Definition) -> Vec<String> {
        self.block(
            signature(&definition.name, &definition.function),
            &definition.function.body,
        )
    }

    fn visit_call(&mut self, call: &Call) -> Vec<String> {
        Self::statement(self.inline.visit_call(call))
    }

    fn visit_print(&mut self, expr: &Expr) -> Vec<String> {
        Self::statement(format!("print {}", self.inline.render(expr)))
    }

    fn visit_read(&mut self, name: &str) -> Vec<String> {
        Self::statement(format!("read {name}"))
    }
}
