//! Bundled programs.
//!
//! Each demo is a list of top-level statements evaluated in one root scope,
//! plus the variables that scope starts with and the input lines `read`
//! consumes when no terminal input is requested.

use yat_eval::{EvalResult, Interpreter, Scope, Value};
use yat_ir::{BinaryOp, Expr, ExprList, Function, UnaryOp};

/// A named program.
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    /// Variables bound in the root scope before the program runs.
    pub bindings: &'static [(&'static str, i64)],
    /// Scripted lines for `read`.
    pub input: &'static [&'static str],
    build: fn() -> Vec<Expr>,
}

impl Demo {
    /// The top-level statements.
    pub fn program(&self) -> Vec<Expr> {
        (self.build)()
    }

    /// A root scope holding the demo's bindings.
    pub fn scope(&self) -> Scope<'static> {
        let mut scope = Scope::new();
        for (name, value) in self.bindings {
            scope.set(*name, Value::Int(*value));
        }
        scope
    }

    /// Evaluate `program` (normally [`Self::program`], possibly folded) in a
    /// fresh root scope.
    pub fn run(&self, interp: &mut Interpreter, program: Vec<Expr>) -> EvalResult {
        let mut scope = self.scope();
        interp.eval_list(&ExprList::new(program), &mut scope)
    }
}

static DEMOS: [Demo; 6] = [
    Demo {
        name: "example",
        summary: "call a freshly defined function; prints 2",
        bindings: &[("bar", 10)],
        input: &[],
        build: example,
    },
    Demo {
        name: "cond",
        summary: "conditionals and call-site scoping",
        bindings: &[("a", 10), ("b", 10), ("c", 12)],
        input: &[],
        build: cond,
    },
    Demo {
        name: "binary",
        summary: "every kind of binary operator",
        bindings: &[("a", 10), ("b", 3)],
        input: &[],
        build: binary,
    },
    Demo {
        name: "unary",
        summary: "negation and logical not",
        bindings: &[("a", 0), ("b", 3)],
        input: &[],
        build: unary,
    },
    Demo {
        name: "hard",
        summary: "nested calls that read input",
        bindings: &[("a", -100), ("b", 49)],
        input: &["7", "8", "9"],
        build: hard,
    },
    Demo {
        name: "folding",
        summary: "one of each node kind, for fmt and fold",
        bindings: &[],
        input: &["5"],
        build: folding,
    },
];

/// Every bundled demo.
pub fn all() -> &'static [Demo] {
    &DEMOS
}

/// Look a demo up by name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn var(name: &str) -> Expr {
    Expr::reference(name)
}

fn bin(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::binary(left, op, right)
}

fn neg(expr: Expr) -> Expr {
    Expr::unary(UnaryOp::Neg, expr)
}

fn example() -> Vec<Expr> {
    let foo = Function::new(
        ["hello", "world"],
        vec![Expr::print(bin(var("hello"), BinaryOp::Add, var("world")))],
    );
    let definition = Expr::definition("foo", foo);
    vec![Expr::call(definition, vec![num(5), neg(num(3))])]
}

fn cond() -> Vec<Expr> {
    let check = Expr::conditional(
        bin(
            bin(var("a"), BinaryOp::Eq, var("b")),
            BinaryOp::And,
            var("c"),
        ),
        vec![Expr::print(var("c")), var("a")],
        vec![Expr::print(var("a")), var("b")],
    );
    // The caller's `b` is visible inside `check` because its activation
    // scope is parented to the call site.
    let shadow_b = Function::new(["b"], vec![Expr::call(var("check"), vec![])]);
    vec![
        Expr::definition("check", Function::new(Vec::<String>::new(), vec![check])),
        Expr::print(Expr::call(var("check"), vec![])),
        Expr::print(Expr::call(Expr::function(shadow_b), vec![num(8)])),
    ]
}

fn binary() -> Vec<Expr> {
    let pair = |l: BinaryOp, op: BinaryOp, r: BinaryOp| {
        Expr::print(bin(
            bin(var("a"), l, var("b")),
            op,
            bin(var("a"), r, var("b")),
        ))
    };
    vec![
        pair(BinaryOp::Sub, BinaryOp::Add, BinaryOp::Mul),
        pair(BinaryOp::Mod, BinaryOp::Eq, BinaryOp::Div),
        pair(BinaryOp::Lt, BinaryOp::NotEq, BinaryOp::Gt),
        pair(BinaryOp::LtEq, BinaryOp::Or, BinaryOp::GtEq),
        pair(BinaryOp::LtEq, BinaryOp::And, BinaryOp::GtEq),
    ]
}

fn unary() -> Vec<Expr> {
    let call = |op: UnaryOp, name: &str| {
        Expr::call(var("show"), vec![Expr::unary(op, var(name))])
    };
    vec![
        Expr::definition("show", Function::new(["a"], vec![Expr::print(var("a"))])),
        call(UnaryOp::Neg, "a"),
        call(UnaryOp::Not, "a"),
        call(UnaryOp::Neg, "b"),
        call(UnaryOp::Not, "b"),
    ]
}

fn hard() -> Vec<Expr> {
    let foo = Function::new(
        ["divide", "it"],
        vec![
            Expr::call(var("echo"), vec![Expr::read("number")]),
            bin(var("divide"), BinaryOp::Div, neg(var("it"))),
        ],
    );
    let echo = Function::new(["value"], vec![Expr::print(var("value"))]);
    vec![
        Expr::read("number"),
        Expr::definition("foo", foo),
        Expr::definition("echo", echo),
        Expr::call(var("foo"), vec![var("a"), neg(var("b"))]),
        Expr::call(
            var("echo"),
            vec![Expr::call(var("foo"), vec![neg(var("a")), var("b")])],
        ),
        Expr::print(var("number")),
    ]
}

fn folding() -> Vec<Expr> {
    vec![
        Expr::conditional(num(42), vec![], vec![]),
        Expr::definition("foo", Function::new(Vec::<String>::new(), vec![])),
        Expr::print(num(42)),
        Expr::read("x"),
        num(10),
        var("x"),
        bin(num(1), BinaryOp::Mul, bin(num(2), BinaryOp::Add, num(3))),
        neg(num(42)),
        bin(var("x"), BinaryOp::Sub, var("x")),
        Expr::call(var("foo"), vec![num(1), num(2), num(3)]),
    ]
}
