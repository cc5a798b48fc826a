use crate::{
    ast::{BoolOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::{eval_binary, eval_compare},
                    function::eval_call},
        value::core::Value,
    },
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an AST against the given environment.
///
/// This is a whitelist evaluator: the match below is exhaustive over the
/// closed node set the parser produces, and there is no fallback arm that
/// could ever reach host functionality. Names resolve only through the
/// environment, calls only through the built-in table.
///
/// Operands evaluate left-to-right, so the leftmost error in an expression
/// is the one reported.
///
/// # Errors
/// Returns a [`RuntimeError`] for undefined names, unknown functions,
/// division by zero, and domain violations.
///
/// # Example
/// ```
/// use numera::interpreter::{environment::Environment,
///                           evaluator::core::eval,
///                           parser::core::parse,
///                           value::core::Value};
///
/// let env = Environment::new();
/// let expr = parse("3 + 5 * 2").unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), Value::Integer(13));
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(Value::from(*value)),

        Expr::Name { name } => {
            env.get(name)
               .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(), })
        },

        Expr::BinaryOp { op, left, right } => {
            let lhs = eval(left, env)?;
            let rhs = eval(right, env)?;
            eval_binary(*op, lhs, rhs)
        },

        Expr::Compare { op, left, right } => {
            let lhs = eval(left, env)?;
            let rhs = eval(right, env)?;
            eval_compare(*op, lhs, rhs)
        },

        Expr::BoolOp { op, operands } => eval_bool_op(*op, operands, env),

        Expr::Call { function, argument } => {
            let value = eval(argument, env)?;
            eval_call(function, value)
        },
    }
}

/// Evaluates a boolean operator over its full operand list.
///
/// Every operand is evaluated before the truth value is combined; there is
/// no short-circuiting, so `0 and oops` still reports the undefined name.
/// The result is the canonical `0`/`1` integer.
fn eval_bool_op(op: BoolOperator, operands: &[Expr], env: &Environment) -> EvalResult<Value> {
    let values = operands.iter()
                         .map(|operand| eval(operand, env))
                         .collect::<EvalResult<Vec<_>>>()?;

    if values.len() < 2 {
        return Err(RuntimeError::Internal { details: format!("boolean operator '{op}' with {} operand(s)", values.len()), });
    }

    let truth = match op {
        BoolOperator::And => values.iter().all(Value::is_truthy),
        BoolOperator::Or => values.iter().any(Value::is_truthy),
    };

    Ok(Value::from_bool(truth))
}
