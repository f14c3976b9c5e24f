/// The evaluator's typed value domain.
///
/// Distinct from the JSON values a caller's environment is expressed in —
/// see [`crate::env`] for the coercion between the two.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Inclusive `[lo, hi]` of `Int`. Never materialized as a `List`.
    Range(i64, i64),
}

impl Value {
    /// Returns the rule-language type name, used in `TypeError` messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Range(..) => "range",
        }
    }

    /// True iff the value is `Int` or `Float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Widens an `Int`/`Float` to `f64`. Panics on non-numeric input —
    /// callers must check `is_numeric` (or match explicitly) first.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            other => unreachable!("as_f64 called on non-numeric value {other:?}"),
        }
    }

    /// Structural equality across numeric kinds: `Int(1) == Float(1.0)`.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_f64() == b.as_f64(),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.structural_eq(y))
            }
            (Value::Range(a0, a1), Value::Range(b0, b1)) => a0 == b0 && a1 == b1,
            _ => false,
        }
    }
}
