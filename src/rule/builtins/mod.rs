/// Built-in function dispatcher, grouped by category — mirrors the
/// teacher's `filter::builtins` category-dispatch pattern, one submodule
/// per related group of names.
mod arith;
mod collections;
mod compare;
mod date;
mod logic;
mod math;
mod net;
mod text;

use crate::error::Cause;
use crate::value::Value;

/// Dispatch a lowercased builtin name against its already-evaluated
/// arguments. `if` is handled in `eval` before reaching here, since it
/// needs the unevaluated branches.
pub fn dispatch(name: &str, args: Vec<Value>) -> Result<Value, Cause> {
    match name {
        "isblank" => collections::isblank(args),
        "contains" => collections::contains(args),

        "eq" | "gt" | "gte" | "lt" | "lte" => compare::eval(name, args),

        "now" | "datetime" => date::eval(name, args),

        "ip" | "cidr" => net::eval(name, args),

        "matches" => text::matches(args),

        "not" | "and" | "or" => logic::eval(name, args),

        "plus" | "minus" | "times" | "div" | "rem" => arith::eval(name, args),

        "log" | "ln" | "pow" | "exp" | "map" => math::eval(name, args),

        other => Err(Cause::unknown_function(other.to_string())),
    }
}

/// Shared arity check used by every builtin category.
pub(super) fn require_arity(name: &str, args: &[Value], expected: usize) -> Result<(), Cause> {
    if args.len() != expected {
        return Err(Cause::arity(format!(
            "{name}() takes {expected} argument(s), got {}",
            args.len()
        )));
    }
    Ok(())
}
