use super::require_arity;
use crate::error::Cause;
use crate::value::Value;

pub fn eval(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    match name {
        "not" => not(args),
        "and" => fold(name, args, true, |acc, b| acc && b),
        "or" => fold(name, args, false, |acc, b| acc || b),
        _ => unreachable!("logic::eval called with non-logic name {name}"),
    }
}

fn not(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("not", &args, 1)?;
    match &args[0] {
        Value::Bool(b) => Ok(Value::Bool(!b)),
        other => Err(Cause::type_err(format!(
            "not() requires a bool argument, got {}",
            other.type_name()
        ))),
    }
}

/// Shared `and`/`or` implementation. Every argument is evaluated (the
/// caller already did that before args reached here) — no short-circuit
/// guarantee per spec §4.4.
fn fold(
    name: &str,
    args: Vec<Value>,
    identity: bool,
    combine: fn(bool, bool) -> bool,
) -> Result<Value, Cause> {
    if args.is_empty() {
        return Err(Cause::arity(format!(
            "{name}() requires at least 1 argument"
        )));
    }
    let mut acc = identity;
    for (i, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Bool(b) => acc = combine(acc, b),
            other => {
                return Err(Cause::type_err(format!(
                    "{name}() argument {i} must be bool, got {}",
                    other.type_name()
                )));
            }
        }
    }
    Ok(Value::Bool(acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_inverts() {
        assert_eq!(not(vec![Value::Bool(true)]).unwrap(), Value::Bool(false));
        assert_eq!(not(vec![Value::Bool(false)]).unwrap(), Value::Bool(true));
    }

    #[test]
    fn not_requires_bool() {
        assert!(not(vec![Value::Str("true".into())]).is_err());
    }

    #[test]
    fn and_all_true() {
        assert_eq!(
            eval("and", vec![Value::Bool(true), Value::Bool(true)]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn and_one_false() {
        assert_eq!(
            eval(
                "and",
                vec![Value::Bool(true), Value::Bool(false), Value::Bool(true)]
            )
            .unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn or_any_true() {
        assert_eq!(
            eval("or", vec![Value::Bool(false), Value::Bool(true)]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn or_all_false() {
        assert_eq!(
            eval("or", vec![Value::Bool(false), Value::Bool(false)]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn and_rejects_non_bool_args() {
        assert!(eval("and", vec![Value::Bool(true), Value::Int(1)]).is_err());
    }
}
