use pretty_assertions::assert_eq;
use yat_eval::{EvalError, Value};
use yat_ir::{BinaryOp, Expr, Function};

use crate::common::{num, run, var};

#[test]
fn print_reference_writes_one_line() {
    let out = run(&Expr::print(var("a")), &[("a", 42)], &[]);
    assert_eq!(out.result, Ok(Value::Int(42)));
    assert_eq!(out.output, "42\n");
}

#[test]
fn define_then_call_double() {
    let program = Expr::list(vec![
        Expr::definition(
            "double",
            Function::new(["n"], vec![Expr::binary(var("n"), BinaryOp::Mul, num(2))]),
        ),
        Expr::call(var("double"), vec![num(21)]),
    ]);
    assert_eq!(run(&program, &[], &[]).result, Ok(Value::Int(42)));
}

#[test]
fn arithmetic_matches_floor_semantics() {
    for (i, j) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 5), (13, 13)] {
        let cases = [
            (BinaryOp::Add, i + j),
            (BinaryOp::Sub, i - j),
            (BinaryOp::Mul, i * j),
            (
                BinaryOp::Div,
                i64::div_euclid(i, j) - i64::from(j < 0 && i.rem_euclid(j) != 0),
            ),
            (
                BinaryOp::Mod,
                if j < 0 && i.rem_euclid(j) != 0 {
                    i.rem_euclid(j) + j
                } else {
                    i.rem_euclid(j)
                },
            ),
        ];
        for (op, expected) in cases {
            let expr = Expr::binary(num(i), op, num(j));
            assert_eq!(
                run(&expr, &[], &[]).result,
                Ok(Value::Int(expected)),
                "{i} {op} {j}"
            );
        }
    }
}

#[test]
fn comparisons_yield_zero_or_one() {
    for (i, j) in [(1, 2), (2, 1), (3, 3), (-4, 4)] {
        let cases = [
            (BinaryOp::Eq, i == j),
            (BinaryOp::NotEq, i != j),
            (BinaryOp::Lt, i < j),
            (BinaryOp::Gt, i > j),
            (BinaryOp::LtEq, i <= j),
            (BinaryOp::GtEq, i >= j),
        ];
        for (op, expected) in cases {
            let expr = Expr::binary(num(i), op, num(j));
            assert_eq!(run(&expr, &[], &[]).result, Ok(Value::bool(expected)));
        }
    }
}

#[test]
fn division_by_zero_fails_for_both_operators() {
    for op in [BinaryOp::Div, BinaryOp::Mod] {
        let expr = Expr::binary(var("a"), op, num(0));
        assert_eq!(
            run(&expr, &[("a", 1)], &[]).result,
            Err(EvalError::DivisionByZero { op })
        );
    }
}

#[test]
fn errors_propagate_out_of_nested_calls() {
    // def inner() { missing }; def outer() { print inner() }; outer()
    let program = Expr::list(vec![
        Expr::definition(
            "inner",
            Function::new(Vec::<String>::new(), vec![var("missing")]),
        ),
        Expr::definition(
            "outer",
            Function::new(
                Vec::<String>::new(),
                vec![Expr::print(Expr::call(var("inner"), vec![]))],
            ),
        ),
        Expr::call(var("outer"), vec![]),
    ]);
    let out = run(&program, &[], &[]);
    assert_eq!(
        out.result,
        Err(EvalError::UndefinedName {
            name: "missing".to_string()
        })
    );
    assert_eq!(out.output, "");
}

#[test]
fn read_then_print_round_trip() {
    let program = Expr::list(vec![
        Expr::read("n"),
        Expr::print(Expr::binary(var("n"), BinaryOp::Add, num(1))),
    ]);
    let out = run(&program, &[], &["41"]);
    assert_eq!(out.result, Ok(Value::Int(42)));
    assert_eq!(out.output, "42\n");
}
