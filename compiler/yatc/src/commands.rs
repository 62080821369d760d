//! Subcommand implementations.
//!
//! Commands write through an [`Emitter`] and take their print handler from
//! the caller, so the binary passes stdout and tests pass buffers.

use std::io;

use tracing::debug;
use yat_eval::{
    buffer_input, stdin_handler, EvalError, Interpreter, SharedPrintHandler, Value,
};
use yat_fmt::{Emitter, PrettyPrinter};
use yat_fold::{ConstantFolder, FoldStats};
use yat_ir::Expr;

use crate::demos::{self, Demo};

/// Why a command failed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown demo `{name}` (see `yatc demos`)")]
    UnknownDemo { name: String },

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Options for `yatc run`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    /// Evaluate the folded program instead of the original.
    pub fold: bool,
    /// Read input from the terminal instead of the demo's scripted lines.
    pub stdin: bool,
    /// Override the interpreter's call-depth limit.
    pub max_call_depth: Option<usize>,
}

impl RunOptions {
    /// Parse `run` flags; returns the first unrecognized argument on failure.
    pub fn parse<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut options = RunOptions::default();
        for arg in args {
            if arg == "--fold" {
                options.fold = true;
            } else if arg == "--stdin" {
                options.stdin = true;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                let depth = depth.parse().map_err(|_| arg.to_string())?;
                options.max_call_depth = Some(depth);
            } else {
                return Err(arg.to_string());
            }
        }
        Ok(options)
    }
}

fn find(name: &str) -> Result<&'static Demo, CliError> {
    demos::find(name).ok_or_else(|| CliError::UnknownDemo {
        name: name.to_string(),
    })
}

/// Fold every top-level statement with one folder.
fn fold_program(program: &[Expr]) -> (Vec<Expr>, FoldStats) {
    let mut folder = ConstantFolder::new();
    let folded = program.iter().map(|expr| folder.fold(expr)).collect();
    (folded, folder.stats())
}

fn write_program(program: &[Expr], emitter: &mut impl Emitter) {
    let mut printer = PrettyPrinter::new();
    for expr in program {
        printer.write_to(expr, emitter);
    }
}

/// `yatc demos`
pub fn list_demos(emitter: &mut impl Emitter) {
    let width = demos::all().iter().map(|demo| demo.name.len()).max().unwrap_or(0);
    for demo in demos::all() {
        emitter.emit_line(&format!("{:<width$}  {}", demo.name, demo.summary));
    }
}

/// `yatc run <demo>`: evaluate and return the value of the last statement.
pub fn run_demo(
    name: &str,
    options: RunOptions,
    print_handler: SharedPrintHandler,
) -> Result<Value, CliError> {
    let demo = find(name)?;
    let input = if options.stdin {
        stdin_handler()
    } else {
        buffer_input(demo.input.iter().copied())
    };
    let mut builder = Interpreter::builder()
        .print_handler(print_handler)
        .input_handler(input);
    if let Some(depth) = options.max_call_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interp = builder.build();

    let mut program = demo.program();
    if options.fold {
        let (folded, stats) = fold_program(&program);
        debug!(
            demo = demo.name,
            folded = stats.folded,
            "running folded program"
        );
        program = folded;
    }
    Ok(demo.run(&mut interp, program)?)
}

/// `yatc fmt <demo>`
pub fn format_demo(name: &str, emitter: &mut impl Emitter) -> Result<(), CliError> {
    let demo = find(name)?;
    write_program(&demo.program(), emitter);
    Ok(())
}

/// `yatc fold <demo>`: print the folded program.
pub fn fold_demo(name: &str, emitter: &mut impl Emitter) -> Result<FoldStats, CliError> {
    let demo = find(name)?;
    let (folded, stats) = fold_program(&demo.program());
    write_program(&folded, emitter);
    Ok(stats)
}
