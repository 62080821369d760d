//! Runtime values.

use std::fmt;
use std::rc::Rc;

use yat_ir::Function;

/// What evaluating a node produces.
#[derive(Clone, Debug)]
pub enum Value {
    /// The only numeric type. Booleans are `0` and `1`.
    Int(i64),
    /// A shared handle to a function node.
    Function(Rc<Function>),
    /// Result of an empty or absent expression list.
    Void,
}

impl Value {
    /// Encode a boolean as `0`/`1`.
    pub fn bool(value: bool) -> Self {
        Value::Int(i64::from(value))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Rc<Function>> {
        match self {
            Value::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Function(_) => "function",
            Value::Void => "void",
        }
    }
}

/// Integers compare by value, functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Function(function) => write!(f, "<function({})>", function.params.join(", ")),
            Value::Void => f.write_str("void"),
        }
    }
}
