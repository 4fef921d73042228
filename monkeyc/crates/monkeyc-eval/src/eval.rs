//! The tree-walking evaluator.
//!
//! `eval_program` and `eval_block_statement` implement the two
//! sequencing rules the language needs: a block keeps a `Return` (or
//! `Error`) wrapped so an enclosing block or call site can unwind
//! through it, while a program unwraps a top-level `return` before
//! handing the value to its caller.

use std::rc::Rc;

use monkeyc_par::{BlockStatement, Expression, IfExpression, InfixExpression, PrefixExpression, Program, Statement};

use crate::environment::{Env, Environment};
use crate::value::{FunctionValue, Value};

pub fn eval_program(program: &Program, env: &Env) -> Value {
    let mut result = Value::Null;

    for stmt in &program.statements {
        result = eval_statement(stmt, env);

        match result {
            Value::Return(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_block_statement(block: &BlockStatement, env: &Env) -> Value {
    let mut result = Value::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env);

        if result.is_return() || result.is_error() {
            return result;
        }
    }

    result
}

fn eval_statement(stmt: &Statement, env: &Env) -> Value {
    match stmt {
        Statement::Let(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(s.name.name.clone(), value);
            Value::Null
        }
        Statement::Return(s) => {
            let value = eval_expression(&s.value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }
        Statement::Expression(s) => eval_expression(&s.expr, env),
    }
}

fn eval_expression(expr: &Expression, env: &Env) -> Value {
    match expr {
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::BooleanLiteral(lit) => Value::Boolean(lit.value),
        Expression::Identifier(ident) => match env.borrow().get(&ident.name) {
            Some(value) => value,
            None => Value::Error(format!("identifier not found : {}", ident.name)),
        },
        Expression::Prefix(expr) => eval_prefix_expression(expr, env),
        Expression::Infix(expr) => eval_infix_expression(expr, env),
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::FunctionLiteral(lit) => Value::Function(Rc::new(FunctionValue {
            params: lit.params.clone(),
            body: lit.body.clone(),
            env: Rc::clone(env),
        })),
        Expression::Call(call) => {
            let callee = eval_expression(&call.callee, env);
            if callee.is_error() {
                return callee;
            }

            let mut args = Vec::with_capacity(call.args.len());
            for arg in &call.args {
                let value = eval_expression(arg, env);
                if value.is_error() {
                    return value;
                }
                args.push(value);
            }

            apply_function(callee, args)
        }
    }
}

fn eval_prefix_expression(expr: &PrefixExpression, env: &Env) -> Value {
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }

    match expr.op.as_str() {
        "!" => Value::Boolean(!right.is_truthy()),
        "-" => match right {
            Value::Integer(n) => match n.checked_neg() {
                Some(result) => Value::Integer(result),
                None => Value::Error("integer overflow".to_string()),
            },
            other => Value::Error(format!("not supported : - {}", other.type_name())),
        },
        op => Value::Error(format!("unknown operator : {op}")),
    }
}

fn eval_infix_expression(expr: &InfixExpression, env: &Env) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }

    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(&expr.op, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(&expr.op, *l, *r, &left, &right),
        _ => Value::Error(format!(
            "type mismatch : {} {} {}",
            left.type_name(),
            expr.op,
            right.type_name()
        )),
    }
}

fn eval_integer_infix(op: &str, l: i64, r: i64) -> Value {
    match op {
        "+" => l.checked_add(r).map(Value::Integer).unwrap_or_else(overflow),
        "-" => l.checked_sub(r).map(Value::Integer).unwrap_or_else(overflow),
        "*" => l.checked_mul(r).map(Value::Integer).unwrap_or_else(overflow),
        "/" => {
            if r == 0 {
                Value::Error("division by zero".to_string())
            } else {
                Value::Integer(floor_div(l, r))
            }
        }
        "<" => Value::Boolean(l < r),
        ">" => Value::Boolean(l > r),
        "==" => Value::Boolean(l == r),
        "!=" => Value::Boolean(l != r),
        op => Value::Error(format!(
            "type mismatch : INTEGER {op} INTEGER"
        )),
    }
}

fn eval_boolean_infix(op: &str, l: bool, r: bool, left: &Value, right: &Value) -> Value {
    match op {
        "==" => Value::Boolean(l == r),
        "!=" => Value::Boolean(l != r),
        _ => Value::Error(format!(
            "type mismatch : {} {op} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn overflow() -> Value {
    Value::Error("integer overflow".to_string())
}

/// Floor division, rounding toward negative infinity rather than the
/// toward-zero truncation Rust's `/` performs natively.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Env) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        Value::Null
    }
}

fn apply_function(callee: Value, args: Vec<Value>) -> Value {
    let func = match callee {
        Value::Function(func) => func,
        other => return Value::Error(format!("not a function: {}", other.type_name())),
    };

    if func.params.len() != args.len() {
        return Value::Error(format!(
            "wrong number of arguments: expected {}, got {}",
            func.params.len(),
            args.len()
        ));
    }

    let call_env = Environment::enclosed(&func.env);
    for (param, arg) in func.params.iter().zip(args.into_iter()) {
        call_env.borrow_mut().set(param.name.clone(), arg);
    }

    let result = eval_block_statement(&func.body, &call_env);
    match result {
        Value::Return(inner) => *inner,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use monkeyc_par::Parser;
    use monkeyc_util::Handler;

    use super::*;

    fn run(source: &str) -> Value {
        let handler = Handler::new();
        let mut parser = Parser::from_source(source, &handler);
        let program = parser.parse_program();
        assert!(handler.is_empty(), "unexpected parse errors: {:?}", handler.messages());
        let env = Environment::new();
        eval_program(&program, &env)
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(run("(5+2)*3;").inspect(), "21");
    }

    #[test]
    fn if_else_picks_the_last_statement_of_the_taken_branch() {
        assert_eq!(run("if (3<5) {5;2;} else {3}").inspect(), "2");
    }

    #[test]
    fn let_bindings_are_visible_to_later_expressions() {
        assert_eq!(run("let a = 5; a + a + 3;").inspect(), "13");
    }

    #[test]
    fn function_calls_and_nested_calls() {
        let source = "let add = fn(a,b){return a+b}; add(add(2,3), add(5,7));";
        assert_eq!(run(source).inspect(), "17");
    }

    #[test]
    fn cross_type_equality_is_a_type_error_not_false() {
        assert_eq!(run("5 == true").inspect(), "Error: type mismatch : INTEGER == BOOLEAN");
    }

    #[test]
    fn unbound_identifier_is_an_error() {
        assert_eq!(run("hello").inspect(), "Error: identifier not found : hello");
    }

    #[test]
    fn closures_capture_their_defining_frame() {
        let source = "let newAdder = fn(x){ fn(y){x+y} }; let addTwo = newAdder(2); addTwo(3);";
        assert_eq!(run(source).inspect(), "5");
    }

    #[test]
    fn double_bang_yields_truthiness_as_a_boolean() {
        assert_eq!(run("!!5;").inspect(), "true");
        assert_eq!(run("!!0;").inspect(), "false");
        assert_eq!(run("!!null_placeholder_is_unbound;"), Value::Error("identifier not found : null_placeholder_is_unbound".to_string()));
    }

    #[test]
    fn an_error_from_a_subexpression_propagates_to_the_top() {
        let result = run("5 + (5 == true) + 5;");
        assert_eq!(result.inspect(), "Error: type mismatch : INTEGER == BOOLEAN");
    }

    #[test]
    fn return_inside_nested_blocks_unwinds_to_the_function_boundary() {
        let source = "let f = fn(x) { if (x > 0) { if (x > 5) { return 1; } return 2; } return 3; }; f(10);";
        assert_eq!(run(source).inspect(), "1");
    }

    #[test]
    fn top_level_return_is_unwrapped() {
        assert_eq!(run("return 5;").inspect(), "5");
    }

    #[test]
    fn division_by_zero_is_an_explicit_error() {
        assert_eq!(run("5 / 0;").inspect(), "Error: division by zero");
    }

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(run("-7 / 2;").inspect(), "-4");
        assert_eq!(run("7 / 2;").inspect(), "3");
        assert_eq!(run("-7 / -2;").inspect(), "3");
    }

    #[test]
    fn wrong_argument_count_is_an_explicit_error() {
        let source = "let add = fn(a, b) { a + b; }; add(1);";
        assert_eq!(
            run(source).inspect(),
            "Error: wrong number of arguments: expected 2, got 1"
        );
    }

    #[test]
    fn calling_a_non_function_value_is_an_error() {
        assert_eq!(run("let x = 5; x(1);").inspect(), "Error: not a function: INTEGER");
    }

    #[test]
    fn negating_a_non_integer_is_an_error() {
        assert_eq!(run("-true;").inspect(), "Error: not supported : - BOOLEAN");
    }

    #[test]
    fn recursive_function_can_call_itself_through_its_own_binding() {
        let source = "let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5);";
        assert_eq!(run(source).inspect(), "120");
    }

    #[test]
    fn function_inspect_renders_params_and_body() {
        let value = run("fn(x, y) { x + y; };");
        assert_eq!(value.inspect(), "fn (x,y) {(x+y)}");
    }

    #[test]
    fn property_double_bang_yields_truthiness_as_a_boolean_for_any_integer() {
        use proptest::prelude::*;

        proptest!(|(n in any::<i32>())| {
            let n = n as i64;
            let source = format!("!!{n};");
            prop_assert_eq!(run(&source), Value::Boolean(n != 0));
        });
    }
}
