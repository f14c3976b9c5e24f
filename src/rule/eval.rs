/// Rule formula evaluator — reduces an `Expr` tree against a JSON
/// environment to a single `Value` (spec §4.4).
use serde_json::Value as Json;

use super::Expr;
use super::builtins;
use crate::env;
use crate::error::Cause;
use crate::value::Value;

pub fn eval(expr: &Expr, env_json: &Json) -> Result<Value, Cause> {
    match expr {
        Expr::BoolLit(b) => Ok(Value::Bool(*b)),
        Expr::NumLit(v) => Ok(v.clone()),
        Expr::StrLit(s) => Ok(Value::Str(s.clone())),
        Expr::EnvGet(key_expr) => {
            let key = match eval(key_expr, env_json)? {
                Value::Str(s) => s,
                other => {
                    return Err(Cause::type_err(format!(
                        "env[...] key must evaluate to a string, got {}",
                        other.type_name()
                    )));
                }
            };
            Ok(env::lookup(env_json, &key))
        }
        Expr::ArrayLit(items) => {
            let values = items
                .iter()
                .map(|e| eval(e, env_json))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(values))
        }
        Expr::RangeLit(lo, hi) => {
            let lo = eval_int(lo, env_json)?;
            let hi = eval_int(hi, env_json)?;
            if lo > hi {
                return Err(Cause::domain(format!(
                    "inverted range [{lo}:{hi}], lo must be <= hi"
                )));
            }
            Ok(Value::Range(lo, hi))
        }
        Expr::Call(name, args) => eval_call(&name.to_lowercase(), args, env_json),
    }
}

fn eval_int(expr: &Expr, env_json: &Json) -> Result<i64, Cause> {
    match eval(expr, env_json)? {
        Value::Int(n) => Ok(n),
        other => Err(Cause::type_err(format!(
            "expected int, got {}",
            other.type_name()
        ))),
    }
}

/// Dispatches a lowercased call name. `if` is handled here rather than in
/// `builtins` because it must evaluate only the selected branch — every
/// other builtin evaluates all of its arguments eagerly.
fn eval_call(name: &str, args: &[Expr], env_json: &Json) -> Result<Value, Cause> {
    if name == "if" {
        if args.len() != 3 {
            return Err(Cause::arity(format!(
                "if() takes 3 arguments, got {}",
                args.len()
            )));
        }
        return match eval(&args[0], env_json)? {
            Value::Bool(true) => eval(&args[1], env_json),
            Value::Bool(false) => eval(&args[2], env_json),
            other => Err(Cause::type_err(format!(
                "if() condition must be bool, got {}",
                other.type_name()
            ))),
        };
    }

    let values = args
        .iter()
        .map(|e| eval(e, env_json))
        .collect::<Result<Vec<_>, _>>()?;
    builtins::dispatch(name, values)
}

/// Projects an arbitrary evaluation result into `[0, 1]` per spec §4.4.
/// Not clamped — a formula whose natural result is outside `[0, 1]` is
/// returned as-is, uncapped.
pub fn project_to_frequency(v: &Value) -> f32 {
    match v {
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Int(n) => *n as f32,
        Value::Float(f) => *f as f32,
        Value::Str(s) => s.parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    }
}
