//! Expression tree.
//!
//! Every node is immutable once built. Children are owned (`Box`/`Vec`),
//! except functions, which are reference-counted so that binding a function
//! into a scope shares the node instead of copying it.
//!
//! Dropping is iterative (see `impl Drop for Expr`), so a tree of any depth
//! can be released without exhausting the stack. The derived `Clone`,
//! `PartialEq` and `Debug` still recurse once per level.

mod operators;

use std::rc::Rc;

pub use operators::{BinaryOp, UnaryOp};

/// A node of the expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Number(i64),
    /// Variable or function lookup by name.
    Reference(String),
    /// `-x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// Sequential body.
    List(ExprList),
    /// `if (cond) { .. } else { .. }`
    Conditional(Conditional),
    /// A callable value.
    Function(Rc<Function>),
    /// Binds a name to a function in the current scope.
    Definition(Definition),
    /// `callee(args)`
    Call(Call),
    /// Writes the value of an expression on its own line.
    Print(Box<Expr>),
    /// Reads an integer line and binds it to a name.
    Read(String),
}

/// An ordered sequence of expressions.
///
/// An absent list (`None`) and an empty list (`Some(vec![])`) are distinct
/// states and survive every transformation; they evaluate identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprList {
    exprs: Option<Vec<Expr>>,
}

/// Branching node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conditional {
    pub condition: Box<Expr>,
    pub if_true: ExprList,
    pub if_false: ExprList,
}

/// Parameter names plus a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub params: Vec<String>,
    pub body: ExprList,
}

/// `def name(params) { body }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    pub function: Rc<Function>,
}

/// Invocation of whatever `callee` resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

impl ExprList {
    /// A list with the given expressions.
    pub fn new(exprs: Vec<Expr>) -> Self {
        ExprList { exprs: Some(exprs) }
    }

    /// A list with no sequence at all.
    pub fn absent() -> Self {
        ExprList { exprs: None }
    }

    /// Returns `true` if no sequence was supplied.
    pub fn is_absent(&self) -> bool {
        self.exprs.is_none()
    }

    /// Returns `true` if there is nothing to evaluate (absent or empty).
    pub fn is_empty(&self) -> bool {
        self.exprs.as_ref().map_or(true, Vec::is_empty)
    }

    /// The expressions, or `None` for an absent list.
    pub fn exprs(&self) -> Option<&[Expr]> {
        self.exprs.as_deref()
    }

    /// Iterate the expressions; an absent list yields nothing.
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.exprs.as_deref().unwrap_or_default().iter()
    }

    /// Number of expressions (zero when absent).
    pub fn len(&self) -> usize {
        self.exprs.as_ref().map_or(0, Vec::len)
    }

    /// Rebuild the list by mapping each expression, keeping absent/empty as-is.
    pub fn map(&self, f: impl FnMut(&Expr) -> Expr) -> Self {
        ExprList {
            exprs: self.exprs.as_ref().map(|exprs| exprs.iter().map(f).collect()),
        }
    }
}

impl From<Vec<Expr>> for ExprList {
    fn from(exprs: Vec<Expr>) -> Self {
        ExprList::new(exprs)
    }
}

impl From<Option<Vec<Expr>>> for ExprList {
    fn from(exprs: Option<Vec<Expr>>) -> Self {
        ExprList { exprs }
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Function {
    pub fn new<S: Into<String>>(
        params: impl IntoIterator<Item = S>,
        body: impl Into<ExprList>,
    ) -> Self {
        Function {
            params: params.into_iter().map(Into::into).collect(),
            body: body.into(),
        }
    }
}

/// Detaches the children of every node onto a heap worklist before the node
/// itself is released, so the drop glue never recurses more than one level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Move the children of `expr` into `pending`, leaving leaves in their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    fn take(slot: &mut Expr) -> Expr {
        std::mem::replace(slot, Expr::Number(0))
    }
    fn take_list(list: &mut ExprList, pending: &mut Vec<Expr>) {
        if let Some(exprs) = list.exprs.take() {
            pending.extend(exprs);
        }
    }
    fn take_function(function: &mut Rc<Function>, pending: &mut Vec<Expr>) {
        // Shared functions are released by their last owner.
        if let Some(function) = Rc::get_mut(function) {
            take_list(&mut function.body, pending);
        }
    }

    match expr {
        Expr::Number(_) | Expr::Reference(_) | Expr::Read(_) => {}
        Expr::Unary { operand, .. } => pending.push(take(operand)),
        Expr::Binary { left, right, .. } => {
            pending.push(take(left));
            pending.push(take(right));
        }
        Expr::List(list) => take_list(list, pending),
        Expr::Conditional(conditional) => {
            pending.push(take(&mut conditional.condition));
            take_list(&mut conditional.if_true, pending);
            take_list(&mut conditional.if_false, pending);
        }
        Expr::Function(function) => take_function(function, pending),
        Expr::Definition(definition) => take_function(&mut definition.function, pending),
        Expr::Call(call) => {
            pending.push(take(&mut call.callee));
            pending.append(&mut call.args);
        }
        Expr::Print(inner) => pending.push(take(inner)),
    }
}

// Construction helpers

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Expr::Reference(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn list(exprs: impl Into<ExprList>) -> Self {
        Expr::List(exprs.into())
    }

    /// A conditional; pass `None` for an absent branch.
    pub fn conditional(
        condition: Expr,
        if_true: impl Into<ExprList>,
        if_false: impl Into<ExprList>,
    ) -> Self {
        Expr::Conditional(Conditional {
            condition: Box::new(condition),
            if_true: if_true.into(),
            if_false: if_false.into(),
        })
    }

    pub fn function(function: impl Into<Rc<Function>>) -> Self {
        Expr::Function(function.into())
    }

    pub fn definition(name: impl Into<String>, function: impl Into<Rc<Function>>) -> Self {
        Expr::Definition(Definition {
            name: name.into(),
            function: function.into(),
        })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn print(expr: Expr) -> Self {
        Expr::Print(Box::new(expr))
    }

    pub fn read(name: impl Into<String>) -> Self {
        Expr::Read(name.into())
    }

    // Queries

    /// The literal value, if this node is a `Number`.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The referenced name, if this node is a `Reference`.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Expr::Reference(name) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` for the literal `0`.
    pub fn is_zero(&self) -> bool {
        self.as_number() == Some(0)
    }

    /// Short lowercase name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number",
            Expr::Reference(_) => "reference",
            Expr::Unary { .. } => "unary operation",
            Expr::Binary { .. } => "binary operation",
            Expr::List(_) => "expression list",
            Expr::Conditional(_) => "conditional",
            Expr::Function(_) => "function",
            Expr::Definition(_) => "function definition",
            Expr::Call(_) => "function call",
            Expr::Print(_) => "print",
            Expr::Read(_) => "read",
        }
    }
}

#[cfg(test)]
mod tests;
