use super::require_arity;
use crate::error::Cause;
use crate::value::Value;
use std::cmp::Ordering;

pub fn eval(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    require_arity(name, &args, 2)?;
    let mut it = args.into_iter();
    let a = it.next().unwrap();
    let b = it.next().unwrap();

    if name == "eq" {
        return Ok(Value::Bool(a.structural_eq(&b)));
    }

    let ordering = compare_scalars(name, &a, &b)?;
    let result = match name {
        "gt" => ordering == Ordering::Greater,
        "gte" => ordering != Ordering::Less,
        "lt" => ordering == Ordering::Less,
        "lte" => ordering != Ordering::Greater,
        _ => unreachable!("compare::eval called with non-compare name {name}"),
    };
    Ok(Value::Bool(result))
}

/// Ordering comparisons require both arguments to be mutually comparable
/// scalars of the same kind — both numeric, both string, or both bool.
/// Mixed-type ordering is a `TypeError` (spec §4.4).
fn compare_scalars(name: &str, a: &Value, b: &Value) -> Result<Ordering, Cause> {
    match (a, b) {
        (a, b) if a.is_numeric() && b.is_numeric() => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .ok_or_else(|| Cause::type_err(format!("{name}() operands are not orderable"))),
        (Value::Str(x), Value::Str(y)) => Ok(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        _ => Err(Cause::type_err(format!(
            "{name}() requires two mutually comparable scalars of the same kind, got {} and {}",
            a.type_name(),
            b.type_name()
        ))),
    }
}
