use super::require_arity;
use crate::error::Cause;
use crate::value::Value;

pub fn eval(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    require_arity(name, &args, 2)?;
    let mut it = args.into_iter();
    let a = it.next().unwrap();
    let b = it.next().unwrap();

    if !a.is_numeric() || !b.is_numeric() {
        return Err(Cause::type_err(format!(
            "{name}() requires two numeric arguments, got {} and {}",
            a.type_name(),
            b.type_name()
        )));
    }

    match name {
        "plus" => Ok(promote(a, b, |x, y| x + y, |x, y| x + y)),
        "minus" => Ok(promote(a, b, |x, y| x - y, |x, y| x - y)),
        "times" => Ok(promote(a, b, |x, y| x * y, |x, y| x * y)),
        "div" => div(a, b),
        "rem" => rem(a, b),
        _ => unreachable!("arith::eval called with non-arith name {name}"),
    }
}

/// Applies `int_op` when both operands are `Int`, otherwise widens both to
/// `f64` and applies `float_op` — the promotion rule shared by
/// `plus`/`minus`/`times` (spec §4.4).
fn promote(
    a: Value,
    b: Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Value::Int(int_op(x, y)),
        (a, b) => Value::Float(float_op(a.as_f64(), b.as_f64())),
    }
}

/// `div` promotes to `Float` even when both operands are `Int`, if integer
/// division would be inexact — e.g. `div(7, 8) == 0.875` (spec §4.4,
/// §9 "Arithmetic promotion rules").
fn div(a: Value, b: Value) -> Result<Value, Cause> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => {
            if y == 0 {
                return Err(Cause::math("division by zero"));
            }
            if x % y == 0 {
                Ok(Value::Int(x / y))
            } else {
                Ok(Value::Float(x as f64 / y as f64))
            }
        }
        (a, b) => {
            let y = b.as_f64();
            if y == 0.0 {
                return Err(Cause::math("division by zero"));
            }
            Ok(Value::Float(a.as_f64() / y))
        }
    }
}

fn rem(a: Value, b: Value) -> Result<Value, Cause> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => {
            if y == 0 {
                return Err(Cause::math("remainder by zero"));
            }
            Ok(Value::Int(x % y))
        }
        (a, b) => {
            let y = b.as_f64();
            if y == 0.0 {
                return Err(Cause::math("remainder by zero"));
            }
            Ok(Value::Float(a.as_f64() % y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_int_int_stays_int() {
        assert_eq!(
            eval("plus", vec![Value::Int(2), Value::Int(3)]).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn plus_mixed_promotes_to_float() {
        assert_eq!(
            eval("plus", vec![Value::Int(2), Value::Float(0.5)]).unwrap(),
            Value::Float(2.5)
        );
    }

    #[test]
    fn minus_and_times_int() {
        assert_eq!(
            eval("minus", vec![Value::Int(5), Value::Int(2)]).unwrap(),
            Value::Int(3)
        );
        assert_eq!(
            eval("times", vec![Value::Int(5), Value::Int(2)]).unwrap(),
            Value::Int(10)
        );
    }

    #[test]
    fn div_exact_int_stays_int() {
        assert_eq!(
            eval("div", vec![Value::Int(8), Value::Int(2)]).unwrap(),
            Value::Int(4)
        );
    }

    #[test]
    fn div_inexact_int_promotes_to_float() {
        assert_eq!(
            eval("div", vec![Value::Int(7), Value::Int(8)]).unwrap(),
            Value::Float(0.875)
        );
    }

    #[test]
    fn div_by_zero_is_math_error() {
        let err = eval("div", vec![Value::Int(1), Value::Int(0)]).unwrap_err();
        assert!(matches!(err, Cause::Math(_)));
    }

    #[test]
    fn rem_by_zero_is_math_error() {
        let err = eval("rem", vec![Value::Int(1), Value::Int(0)]).unwrap_err();
        assert!(matches!(err, Cause::Math(_)));
    }

    #[test]
    fn rem_truncated_semantics() {
        assert_eq!(
            eval("rem", vec![Value::Int(-7), Value::Int(2)]).unwrap(),
            Value::Int(-1)
        );
    }

    #[test]
    fn non_numeric_is_type_error() {
        let err = eval("plus", vec![Value::Bool(true), Value::Bool(false)]).unwrap_err();
        assert!(matches!(err, Cause::Type(_)));
    }
}
