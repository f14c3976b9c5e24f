use super::require_arity;
use crate::error::Cause;
use crate::value::Value;

/// `isblank(v)` — true for `Null`, the empty string, and the empty list.
/// False for `0`, `false`, and every other non-empty value (spec §9 open
/// question, resolved explicitly rather than treating falsy numerics as
/// blank).
pub fn isblank(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("isblank", &args, 1)?;
    let blank = match &args[0] {
        Value::Null => true,
        Value::Str(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        _ => false,
    };
    Ok(Value::Bool(blank))
}

/// `contains(needle, haystack)` — argument order is fixed: needle first,
/// haystack second (spec §9 open question). `haystack` must be a `List`
/// or a `Range`; list containment is element membership via structural
/// equality, range containment checks integer membership. Any other
/// haystack kind (including `Str`) is a `TypeError`.
pub fn contains(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("contains", &args, 2)?;
    let mut it = args.into_iter();
    let needle = it.next().unwrap();
    let haystack = it.next().unwrap();

    let result = match (&needle, &haystack) {
        (needle, Value::List(items)) => items.iter().any(|v| v.structural_eq(needle)),
        (Value::Int(n), Value::Range(lo, hi)) => n >= lo && n <= hi,
        _ => {
            return Err(Cause::type_err(format!(
                "contains() cannot search a {} in a {}",
                needle.type_name(),
                haystack.type_name()
            )))
        }
    };
    Ok(Value::Bool(result))
}
