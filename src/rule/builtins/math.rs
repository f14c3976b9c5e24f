use crate::error::Cause;
use crate::value::Value;

pub fn eval(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    match name {
        "log" => log(args),
        "ln" => unary(name, args, f64::ln),
        "pow" => binary(name, args, f64::powf),
        "exp" => unary(name, args, f64::exp),
        "map" => map(args),
        _ => unreachable!("math::eval called with non-math name {name}"),
    }
}

fn numeric(name: &str, v: &Value) -> Result<f64, Cause> {
    if v.is_numeric() {
        Ok(v.as_f64())
    } else {
        Err(Cause::type_err(format!(
            "{name}() requires numeric arguments, got {}",
            v.type_name()
        )))
    }
}

/// `log(x)` = log base 10; `log(x, b)` = log base `b` (one or two args).
fn log(args: Vec<Value>) -> Result<Value, Cause> {
    match args.len() {
        1 => {
            let x = numeric("log", &args[0])?;
            if x <= 0.0 {
                return Err(Cause::math("log() of non-positive value"));
            }
            Ok(Value::Float(x.log10()))
        }
        2 => {
            let x = numeric("log", &args[0])?;
            let base = numeric("log", &args[1])?;
            if x <= 0.0 || base <= 0.0 || base == 1.0 {
                return Err(Cause::math("log() of non-positive value or base"));
            }
            Ok(Value::Float(x.log(base)))
        }
        n => Err(Cause::arity(format!(
            "log() takes 1 or 2 arguments, got {n}"
        ))),
    }
}

fn unary(name: &str, args: Vec<Value>, f: fn(f64) -> f64) -> Result<Value, Cause> {
    super::require_arity(name, &args, 1)?;
    let x = numeric(name, &args[0])?;
    Ok(Value::Float(f(x)))
}

fn binary(name: &str, args: Vec<Value>, f: fn(f64, f64) -> f64) -> Result<Value, Cause> {
    super::require_arity(name, &args, 2)?;
    let x = numeric(name, &args[0])?;
    let y = numeric(name, &args[1])?;
    Ok(Value::Float(f(x, y)))
}

/// `map(x, in_lo, in_hi, out_lo, out_hi)` — linear remap, no clamping
/// (spec §4.4).
fn map(args: Vec<Value>) -> Result<Value, Cause> {
    super::require_arity("map", &args, 5)?;
    let mut nums = Vec::with_capacity(5);
    for v in &args {
        nums.push(numeric("map", v)?);
    }
    let (x, in_lo, in_hi, out_lo, out_hi) = (nums[0], nums[1], nums[2], nums[3], nums[4]);
    if in_hi == in_lo {
        return Err(Cause::math("map() input range has zero width"));
    }
    let result = (x - in_lo) / (in_hi - in_lo) * (out_hi - out_lo) + out_lo;
    Ok(Value::Float(result))
}
