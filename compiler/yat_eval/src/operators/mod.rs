//! Integer operator semantics.
//!
//! Shared by the interpreter and the constant folder so both agree on every
//! result, including which operations fail.
//!
//! - Arithmetic is checked; overflow is an error, never a wrap.
//! - `/` rounds toward negative infinity and `%` takes the sign of the
//!   divisor, so `a == (a / b) * b + a % b` always holds.
//! - Comparisons and `&&`/`||` yield `0` or `1`. Both operands of `&&`/`||`
//!   are always evaluated by the caller; these functions only combine them.

use yat_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, integer_overflow};
use crate::EvalError;

#[inline]
fn checked(result: Option<i64>, op: &'static str) -> Result<i64, EvalError> {
    result.ok_or_else(|| integer_overflow(op))
}

#[inline]
fn truthy(value: i64) -> bool {
    value != 0
}

/// Quotient rounded toward negative infinity. `None` on overflow.
pub fn floor_div(a: i64, b: i64) -> Option<i64> {
    let div = a.checked_div(b)?;
    let rem = a.checked_rem(b)?;
    if rem != 0 && (rem < 0) != (b < 0) {
        div.checked_sub(1)
    } else {
        Some(div)
    }
}

/// Remainder with the sign of the divisor. `None` only for a zero divisor.
pub fn floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    // `i64::MIN % -1` is mathematically 0; only the checked form rejects it.
    let rem = a.wrapping_rem(b);
    if rem != 0 && (rem < 0) != (b < 0) {
        rem.checked_add(b)
    } else {
        Some(rem)
    }
}

/// Apply a binary operator to two integers.
pub fn evaluate_binary(left: i64, op: BinaryOp, right: i64) -> Result<i64, EvalError> {
    match op {
        BinaryOp::Add => checked(left.checked_add(right), "+"),
        BinaryOp::Sub => checked(left.checked_sub(right), "-"),
        BinaryOp::Mul => checked(left.checked_mul(right), "*"),
        BinaryOp::Div => {
            if right == 0 {
                return Err(division_by_zero(op));
            }
            checked(floor_div(left, right), "/")
        }
        BinaryOp::Mod => {
            if right == 0 {
                return Err(division_by_zero(op));
            }
            checked(floor_mod(left, right), "%")
        }
        BinaryOp::Eq => Ok(i64::from(left == right)),
        BinaryOp::NotEq => Ok(i64::from(left != right)),
        BinaryOp::Lt => Ok(i64::from(left < right)),
        BinaryOp::LtEq => Ok(i64::from(left <= right)),
        BinaryOp::Gt => Ok(i64::from(left > right)),
        BinaryOp::GtEq => Ok(i64::from(left >= right)),
        BinaryOp::And => Ok(i64::from(truthy(left) && truthy(right))),
        BinaryOp::Or => Ok(i64::from(truthy(left) || truthy(right))),
    }
}

/// Apply a unary operator to an integer.
pub fn evaluate_unary(op: UnaryOp, operand: i64) -> Result<i64, EvalError> {
    match op {
        UnaryOp::Neg => checked(operand.checked_neg(), "-"),
        UnaryOp::Not => Ok(i64::from(!truthy(operand))),
    }
}
