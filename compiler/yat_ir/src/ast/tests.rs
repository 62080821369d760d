use super::*;
use pretty_assertions::assert_eq;

#[test]
fn binary_symbols_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol("**"), None);
}

#[test]
fn unary_symbols_round_trip() {
    assert_eq!(UnaryOp::from_symbol("-"), Some(UnaryOp::Neg));
    assert_eq!(UnaryOp::from_symbol("!"), Some(UnaryOp::Not));
    assert_eq!(UnaryOp::from_symbol("~"), None);
}

#[test]
fn multiplicative_binds_tighter_than_additive() {
    assert!(BinaryOp::Mul.precedence() < BinaryOp::Add.precedence());
    assert!(BinaryOp::Add.precedence() < BinaryOp::Lt.precedence());
    assert!(BinaryOp::Eq.precedence() < BinaryOp::And.precedence());
    assert!(BinaryOp::And.precedence() < BinaryOp::Or.precedence());
}

#[test]
fn absent_and_empty_lists_are_distinct() {
    let absent = ExprList::absent();
    let empty = ExprList::new(vec![]);

    assert!(absent.is_absent());
    assert!(!empty.is_absent());
    assert!(absent.is_empty());
    assert!(empty.is_empty());
    assert_ne!(absent, empty);
    assert_eq!(absent.exprs(), None);
    assert_eq!(empty.exprs(), Some(&[][..]));
}

#[test]
fn list_map_preserves_absence() {
    let absent = ExprList::absent();
    assert!(absent.map(Clone::clone).is_absent());

    let empty = ExprList::new(vec![]);
    let mapped = empty.map(Clone::clone);
    assert!(!mapped.is_absent());
    assert!(mapped.is_empty());
}

#[test]
fn conditional_accepts_optional_branches() {
    let expr = Expr::conditional(
        Expr::number(1),
        vec![Expr::number(2)],
        ExprList::absent(),
    );
    let Expr::Conditional(conditional) = &expr else {
        panic!("expected a conditional");
    };
    assert_eq!(conditional.if_true.len(), 1);
    assert!(conditional.if_false.is_absent());
}

#[test]
fn definition_shares_the_function_node() {
    let function = Rc::new(Function::new(["n"], vec![Expr::reference("n")]));
    let expr = Expr::definition("id", Rc::clone(&function));
    let Expr::Definition(definition) = &expr else {
        panic!("expected a definition");
    };
    assert!(Rc::ptr_eq(&definition.function, &function));
}

#[test]
fn queries() {
    assert_eq!(Expr::number(-4).as_number(), Some(-4));
    assert_eq!(Expr::reference("x").as_number(), None);
    assert_eq!(Expr::reference("x").as_reference(), Some("x"));
    assert!(Expr::number(0).is_zero());
    assert!(!Expr::reference("zero").is_zero());
    assert_eq!(Expr::read("x").kind_name(), "read");
}

const DEEP: usize = 200_000;

#[test]
fn dropping_deep_operator_chains() {
    let mut expr = Expr::number(1);
    for i in 0..DEEP {
        expr = if i % 2 == 0 {
            Expr::unary(UnaryOp::Not, expr)
        } else {
            Expr::binary(Expr::reference("x"), BinaryOp::Add, expr)
        };
    }
    drop(expr);
}

#[test]
fn dropping_deeply_nested_bodies() {
    let mut expr = Expr::read("x");
    for i in 0..DEEP {
        expr = match i % 4 {
            0 => Expr::list(vec![expr]),
            1 => Expr::conditional(Expr::reference("c"), vec![expr], ExprList::absent()),
            2 => Expr::definition("f", Function::new(["a"], vec![expr])),
            _ => Expr::call(Expr::reference("f"), vec![Expr::print(expr)]),
        };
    }
    drop(expr);
}

#[test]
fn dropping_a_tree_keeps_shared_functions_intact() {
    let function = Rc::new(Function::new(["n"], vec![Expr::reference("n")]));
    let expr = Expr::list(vec![
        Expr::definition("id", Rc::clone(&function)),
        Expr::function(Rc::clone(&function)),
    ]);
    drop(expr);
    assert_eq!(Rc::strong_count(&function), 1);
    assert_eq!(function.body.len(), 1);
}
