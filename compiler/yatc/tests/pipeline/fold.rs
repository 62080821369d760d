use pretty_assertions::assert_eq;
use yat_fmt::format_expr;
use yat_fold::fold;
use yat_ir::{BinaryOp, Expr, ExprList, Function, UnaryOp};

use crate::common::{num, run, var};

#[test]
fn folded_program_prints_simplified_source() {
    let program = Expr::definition(
        "f",
        Function::new(
            ["x"],
            vec![
                Expr::print(Expr::binary(num(6), BinaryOp::Mul, num(7))),
                Expr::conditional(
                    Expr::binary(var("x"), BinaryOp::Eq, var("x")),
                    vec![Expr::binary(var("x"), BinaryOp::Mul, num(0))],
                    ExprList::absent(),
                ),
            ],
        ),
    );
    assert_eq!(
        format_expr(&fold(&program)),
        "def f(x) {\n    print 42;\n    if (1) {\n        0;\n    };\n};\n"
    );
}

#[test]
fn folding_then_evaluating_gives_the_same_result() {
    // (a + 2 * 3) - (-(b / b) % 4)
    let product = Expr::binary(num(2), BinaryOp::Mul, num(3));
    let quotient = Expr::binary(var("b"), BinaryOp::Div, var("b"));
    let body = Expr::binary(
        Expr::binary(var("a"), BinaryOp::Add, product),
        BinaryOp::Sub,
        Expr::binary(Expr::unary(UnaryOp::Neg, quotient), BinaryOp::Mod, num(4)),
    );
    let program = Expr::print(body);
    let original = run(&program, &[("a", 10), ("b", 3)], &[]);
    let folded = run(&fold(&program), &[("a", 10), ("b", 3)], &[]);
    assert_eq!(original.result, folded.result);
    assert_eq!(original.output, folded.output);
}

#[test]
fn negative_fold_results_are_parenthesized() {
    let expr = Expr::binary(
        Expr::binary(num(1), BinaryOp::Sub, num(4)),
        BinaryOp::Add,
        var("y"),
    );
    assert_eq!(format_expr(&fold(&expr)), "(-3) + y;\n");
}
