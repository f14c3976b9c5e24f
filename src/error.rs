use thiserror::Error;

/// The crate's single public error type. Every parse, type, arity, domain,
/// or math failure surfaces as `InvalidArgument` — callers don't need to
/// distinguish failure classes, but the wrapped [`Cause`] preserves the
/// original diagnostic for logging.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] Cause),
}

impl RuleError {
    /// True iff this error originated in the lexer/parser. Delegates to
    /// [`Cause::is_parse_error`]; exists on `RuleError` too since that's
    /// the type `evaluate()` callers actually hold.
    pub fn is_parse_error(&self) -> bool {
        match self {
            RuleError::InvalidArgument(cause) => cause.is_parse_error(),
        }
    }
}

/// Internal failure classes, matching spec §7. Not part of the public API
/// surface beyond `Display` — callers see `RuleError::InvalidArgument`.
#[derive(Debug, Error)]
pub enum Cause {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("type error: {0}")]
    Type(String),

    #[error("arity error: {0}")]
    Arity(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("domain error: {0}")]
    Domain(String),

    #[error("math error: {0}")]
    Math(String),
}

impl Cause {
    pub fn parse(msg: impl Into<String>) -> Self {
        Cause::Parse(msg.into())
    }

    pub fn type_err(msg: impl Into<String>) -> Self {
        Cause::Type(msg.into())
    }

    pub fn arity(msg: impl Into<String>) -> Self {
        Cause::Arity(msg.into())
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Cause::UnknownFunction(name.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        Cause::Domain(msg.into())
    }

    pub fn math(msg: impl Into<String>) -> Self {
        Cause::Math(msg.into())
    }

    /// True iff this cause originated in the lexer/parser rather than
    /// evaluation — used by `validate` to draw the line spec §8 property 4
    /// requires (`validate` only cares about `Parse` failures).
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Cause::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;
