/// Recursive-descent parser for rule formulas.
///
/// Grammar (spec §4.2):
///   expr   := boolean | number | string | env | array | range | call
///   boolean:= TRUE | FALSE
///   number := [-]? DIGITS? "." DIGITS | [-]? DIGITS
///   string := STRING
///   env    := ENV "[" string "]"
///   array  := "[" (expr ("," expr)*)? "]"
///   range  := "[" expr ":" expr "]"
///   call   := IDENT "(" (expr ("," expr)*)? ")"
use super::Expr;
use super::lexer::Token;
use crate::error::Cause;
use crate::value::Value;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<(), Cause> {
        match self.advance() {
            Some(tok) if tok == expected => Ok(()),
            Some(tok) => Err(Cause::parse(format!("expected {expected:?}, got {tok:?}"))),
            None => Err(Cause::parse(format!(
                "expected {expected:?}, got end of input"
            ))),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, Cause> {
        match self.peek() {
            Some(Token::True) => {
                self.advance();
                Ok(Expr::BoolLit(true))
            }
            Some(Token::False) => {
                self.advance();
                Ok(Expr::BoolLit(false))
            }
            Some(Token::Int(_)) => {
                let n = match self.advance().unwrap() {
                    Token::Int(n) => *n,
                    _ => unreachable!(),
                };
                Ok(Expr::NumLit(Value::Int(n)))
            }
            Some(Token::Float(_)) => {
                let f = match self.advance().unwrap() {
                    Token::Float(f) => *f,
                    _ => unreachable!(),
                };
                Ok(Expr::NumLit(Value::Float(f)))
            }
            Some(Token::Str(_)) => {
                let s = match self.advance().unwrap() {
                    Token::Str(s) => s.clone(),
                    _ => unreachable!(),
                };
                Ok(Expr::StrLit(unquote(&s)))
            }
            Some(Token::Env) => self.parse_env(),
            Some(Token::LBrack) => self.parse_array_or_range(),
            Some(Token::Ident(_)) => self.parse_call(),
            Some(tok) => Err(Cause::parse(format!("unexpected token: {tok:?}"))),
            None => Err(Cause::parse("unexpected end of formula")),
        }
    }

    // env := ENV "[" string "]"
    fn parse_env(&mut self) -> Result<Expr, Cause> {
        self.expect(&Token::Env)?;
        self.expect(&Token::LBrack)?;
        let key = match self.advance() {
            Some(Token::Str(s)) => unquote(s),
            Some(tok) => {
                return Err(Cause::parse(format!(
                    "env[...] requires a string literal key, got {tok:?}"
                )));
            }
            None => return Err(Cause::parse("env[...] requires a string literal key")),
        };
        self.expect(&Token::RBrack)?;
        Ok(Expr::EnvGet(Box::new(Expr::StrLit(key))))
    }

    // array := "[" (expr ("," expr)*)? "]"
    // range := "[" expr ":" expr "]"
    // Disambiguated by looking for ":" vs "," after the first element,
    // and by an immediate "]" for the empty array.
    fn parse_array_or_range(&mut self) -> Result<Expr, Cause> {
        self.expect(&Token::LBrack)?;
        if self.peek() == Some(&Token::RBrack) {
            self.advance();
            return Ok(Expr::ArrayLit(vec![]));
        }

        let first = self.parse_expr()?;

        if self.peek() == Some(&Token::Colon) {
            self.advance();
            let hi = self.parse_expr()?;
            self.expect(&Token::RBrack)?;
            return Ok(Expr::RangeLit(Box::new(first), Box::new(hi)));
        }

        let mut items = vec![first];
        while self.peek() == Some(&Token::Comma) {
            self.advance();
            items.push(self.parse_expr()?);
        }
        self.expect(&Token::RBrack)?;
        Ok(Expr::ArrayLit(items))
    }

    // call := IDENT "(" (expr ("," expr)*)? ")"
    fn parse_call(&mut self) -> Result<Expr, Cause> {
        let name = match self.advance() {
            Some(Token::Ident(s)) => s.clone(),
            _ => unreachable!("parse_call invoked without a leading Ident"),
        };
        self.expect(&Token::LParen)?;
        let mut args = Vec::new();
        if self.peek() != Some(&Token::RParen) {
            args.push(self.parse_expr()?);
            while self.peek() == Some(&Token::Comma) {
                self.advance();
                args.push(self.parse_expr()?);
            }
        }
        self.expect(&Token::RParen)?;
        Ok(Expr::Call(name, args))
    }
}

/// Strips the leading and trailing `"` from a raw string token. Escape
/// sequences inside are preserved verbatim, per spec §3 invariants.
fn unquote(raw: &str) -> String {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
        .to_string()
}

/// Parse a full token stream into an `Expr`. Fails with `Cause::Parse` if
/// any input remains after a complete expression (spec §4.2).
pub fn parse(tokens: &[Token]) -> Result<Expr, Cause> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    if parser.pos < parser.tokens.len() {
        return Err(Cause::parse(format!(
            "unexpected token after formula: {:?}",
            parser.tokens[parser.pos]
        )));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::lexer;

    fn p(input: &str) -> Expr {
        let tokens = lexer::lex(input).unwrap();
        parse(&tokens).unwrap()
    }

    #[test]
    fn parse_bool_literals() {
        assert_eq!(p("true"), Expr::BoolLit(true));
        assert_eq!(p("false"), Expr::BoolLit(false));
    }

    #[test]
    fn parse_int_literal() {
        assert_eq!(p("42"), Expr::NumLit(Value::Int(42)));
    }

    #[test]
    fn parse_float_literal() {
        assert_eq!(p("0.5"), Expr::NumLit(Value::Float(0.5)));
    }

    #[test]
    fn parse_string_literal_strips_quotes() {
        assert_eq!(p(r#""hello""#), Expr::StrLit("hello".into()));
    }

    #[test]
    fn parse_env_get() {
        assert_eq!(
            p(r#"env["user.email"]"#),
            Expr::EnvGet(Box::new(Expr::StrLit("user.email".into())))
        );
    }

    #[test]
    fn parse_empty_array() {
        assert_eq!(p("[]"), Expr::ArrayLit(vec![]));
    }

    #[test]
    fn parse_array_literal() {
        assert_eq!(
            p("[1, 2, 3]"),
            Expr::ArrayLit(vec![
                Expr::NumLit(Value::Int(1)),
                Expr::NumLit(Value::Int(2)),
                Expr::NumLit(Value::Int(3)),
            ])
        );
    }

    #[test]
    fn parse_single_element_array_not_confused_with_range() {
        assert_eq!(p("[5]"), Expr::ArrayLit(vec![Expr::NumLit(Value::Int(5))]));
    }

    #[test]
    fn parse_range_literal() {
        assert_eq!(
            p("[10:20]"),
            Expr::RangeLit(
                Box::new(Expr::NumLit(Value::Int(10))),
                Box::new(Expr::NumLit(Value::Int(20))),
            )
        );
    }

    #[test]
    fn parse_call_no_args() {
        assert_eq!(p("now()"), Expr::Call("now".into(), vec![]));
    }

    #[test]
    fn parse_call_with_args() {
        assert_eq!(
            p("plus(1, 2)"),
            Expr::Call(
                "plus".into(),
                vec![Expr::NumLit(Value::Int(1)), Expr::NumLit(Value::Int(2))]
            )
        );
    }

    #[test]
    fn parse_nested_call() {
        assert_eq!(
            p(r#"map(datetime("2021-11-08"), datetime("2021-11-16"), 0, 1, now())"#),
            Expr::Call(
                "map".into(),
                vec![
                    Expr::Call(
                        "datetime".into(),
                        vec![Expr::StrLit("2021-11-08".into())]
                    ),
                    Expr::Call(
                        "datetime".into(),
                        vec![Expr::StrLit("2021-11-16".into())]
                    ),
                    Expr::NumLit(Value::Int(0)),
                    Expr::NumLit(Value::Int(1)),
                    Expr::Call("now".into(), vec![]),
                ]
            )
        );
    }

    #[test]
    fn parse_rejects_trailing_input() {
        let tokens = lexer::lex("true false").unwrap();
        assert!(parse(&tokens).is_err());
    }

    #[test]
    fn parse_rejects_env_with_non_string_key() {
        let tokens = lexer::lex("env[1]").unwrap();
        assert!(parse(&tokens).is_err());
    }

    #[test]
    fn parse_rejects_inverted_range_at_parse_time_is_allowed() {
        // [10:0] parses fine; the lo > hi check is an evaluation-time
        // DomainError, not a parse error.
        let tokens = lexer::lex("[10:0]").unwrap();
        assert!(parse(&tokens).is_ok());
    }
}
