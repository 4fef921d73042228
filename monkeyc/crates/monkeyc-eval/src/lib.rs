//! monkeyc-eval — a tree-walking evaluator over the parsed AST.
//!
//! There is no separate compile step: a [`Program`](monkeyc_par::Program)
//! is evaluated directly against an [`Env`], producing a runtime [`Value`].
//! Errors are ordinary values (`Value::Error`) that short-circuit
//! evaluation rather than a side channel, which is what lets a single
//! `eval_program` call double as both "run this" and "did it fail".

mod environment;
mod eval;
mod value;

pub use environment::{Env, Environment};
pub use eval::eval_program;
pub use value::{FunctionValue, Value};
