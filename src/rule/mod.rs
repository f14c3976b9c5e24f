pub mod builtins;
pub mod eval;
pub mod lexer;
pub mod parser;

use crate::value::Value;

/// A rule formula's expression tree (spec §3). Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BoolLit(bool),
    NumLit(Value),
    StrLit(String),
    /// `env[key_expr]` — `key_expr` must evaluate to a `Str`.
    EnvGet(Box<Expr>),
    ArrayLit(Vec<Expr>),
    RangeLit(Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

/// Parse a rule formula string into an `Expr` tree.
pub fn parse(input: &str) -> Result<Expr, crate::error::Cause> {
    let tokens = lexer::lex(input)?;
    parser::parse(&tokens)
}
