//! Runtime values.
//!
//! A value is a tagged variant, matching the AST's own style of
//! exhaustive pattern matching instead of dynamic dispatch. `Error` is
//! its own distinct kind — a value that began life as an error must
//! never be mistaken for a `Return`, even internally.

use std::fmt;
use std::rc::Rc;

use monkeyc_par::{BlockStatement, Identifier};

use crate::environment::Env;

/// A function value: its parameter list, its body, and the frame that
/// was active at the point it was defined. Cloning a `Value::Function`
/// only bumps the `Rc` counts; the frame itself is shared.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
    pub env: Env,
}

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    /// A `return`-unwound value, still travelling up through enclosing
    /// blocks. Unwrapped at the nearest function-call boundary (and at
    /// program exit, see [`crate::eval::eval_program`]).
    Return(Box<Value>),
    /// A runtime error. Distinct from `Return` on purpose: early
    /// revisions of this interpreter tagged errors with the `Return`
    /// kind by mistake, which let an error silently unwrap instead of
    /// short-circuiting.
    Error(String),
    Function(Rc<FunctionValue>),
}

impl PartialEq for Value {
    /// Structural equality for the scalar kinds; `Function` compares by
    /// identity of its captured frame, since a defining frame may hold
    /// a cycle back to the function itself and a structural walk would
    /// never terminate.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Value::Return(_))
    }

    /// The name used in "type mismatch"/"not supported" diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
        }
    }

    /// Truthiness for `if` conditions: `false`/`0`/`null` are false,
    /// everything else (including every other integer) is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Null => false,
            _ => false,
        }
    }

    /// Canonical textual rendering, as printed by the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Null => "null".to_string(),
            Value::Return(inner) => inner.inspect(),
            Value::Error(msg) => format!("Error: {msg}"),
            Value::Function(func) => {
                let params = func
                    .params
                    .iter()
                    .map(|p| p.name.clone())
                    .collect::<Vec<_>>()
                    .join(",");
                format!("fn ({params}) {{{}}}", func.body)
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
