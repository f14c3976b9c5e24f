use super::require_arity;
use crate::error::Cause;
use crate::value::Value;
use regex::Regex;

/// `matches(text, pattern)` — true iff `pattern` matches the entirety of
/// `text` (anchored full match, not a search), spec §4.4.
pub fn matches(args: Vec<Value>) -> Result<Value, Cause> {
    require_arity("matches", &args, 2)?;
    let mut it = args.into_iter();
    let text = it.next().unwrap();
    let pattern = it.next().unwrap();

    let (text, pattern) = match (text, pattern) {
        (Value::Str(t), Value::Str(p)) => (t, p),
        (t, p) => {
            return Err(Cause::type_err(format!(
                "matches() requires two string arguments, got {} and {}",
                t.type_name(),
                p.type_name()
            )))
        }
    };

    let anchored = format!("^(?:{pattern})$");
    let re = Regex::new(&anchored)
        .map_err(|e| Cause::domain(format!("matches() invalid pattern '{pattern}': {e}")))?;
    Ok(Value::Bool(re.is_match(&text)))
}
