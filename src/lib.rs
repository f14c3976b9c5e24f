pub mod env;
pub mod error;
pub mod rule;
pub mod value;

pub use error::RuleError;

/// True iff `formula` parses as a valid rule expression. Does not
/// evaluate it — a formula can validate and still fail at evaluation
/// time with a type, arity, domain, or math error.
pub fn validate(formula: &str) -> bool {
    rule::parse(formula).is_ok()
}

/// Parses and evaluates `formula` against `env`, projecting the result
/// into `[0, 1]` (spec §4.4). Returns `Err` on any parse, type, arity,
/// unknown-function, domain, or math failure.
pub fn evaluate(formula: &str, env: &serde_json::Value) -> error::Result<f32> {
    let expr = rule::parse(formula)?;
    let value = rule::eval::eval(&expr, env)?;
    Ok(rule::eval::project_to_frequency(&value))
}
