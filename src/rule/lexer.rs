/// Rule formula tokenizer.
use crate::error::Cause;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    True,
    False,
    Env,
    LParen,  // (
    RParen,  // )
    LBrack,  // [
    RBrack,  // ]
    Comma,   // ,
    Dot,     // .
    Colon,   // :
    Minus,   // -
    Ident(String),
    Str(String),
    Int(i64),
    Float(f64),
}

pub fn lex(input: &str) -> Result<Vec<Token>, Cause> {
    let mut tokens = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }

        match bytes[i] {
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
                continue;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
                continue;
            }
            b'[' => {
                tokens.push(Token::LBrack);
                i += 1;
                continue;
            }
            b']' => {
                tokens.push(Token::RBrack);
                i += 1;
                continue;
            }
            b',' => {
                tokens.push(Token::Comma);
                i += 1;
                continue;
            }
            b':' => {
                tokens.push(Token::Colon);
                i += 1;
                continue;
            }
            b'-' => {
                // Negative number if followed by a digit or a dot-digit;
                // otherwise a standalone Minus (unused by the grammar but
                // tokenized so unexpected uses produce a clean parse error
                // instead of a lex error).
                if i + 1 < bytes.len()
                    && (bytes[i + 1].is_ascii_digit()
                        || (bytes[i + 1] == b'.'
                            && i + 2 < bytes.len()
                            && bytes[i + 2].is_ascii_digit()))
                {
                    let (tok, consumed) = lex_number(bytes, i)?;
                    tokens.push(tok);
                    i += consumed;
                    continue;
                }
                tokens.push(Token::Minus);
                i += 1;
                continue;
            }
            _ => {}
        }

        if bytes[i] == b'.' {
            if i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
                let (tok, consumed) = lex_number(bytes, i)?;
                tokens.push(tok);
                i += consumed;
                continue;
            }
            tokens.push(Token::Dot);
            i += 1;
            continue;
        }

        if bytes[i] == b'"' {
            let (s, consumed) = lex_string(bytes, i)?;
            tokens.push(Token::Str(s));
            i += consumed;
            continue;
        }

        if bytes[i].is_ascii_digit() {
            let (tok, consumed) = lex_number(bytes, i)?;
            tokens.push(tok);
            i += consumed;
            continue;
        }

        if bytes[i].is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let word = &input[start..i];
            let tok = match word {
                "true" => Token::True,
                "false" => Token::False,
                "env" => Token::Env,
                _ => Token::Ident(word.to_string()),
            };
            tokens.push(tok);
            continue;
        }

        return Err(Cause::parse(format!(
            "unexpected character '{}' at position {i}",
            bytes[i] as char
        )));
    }

    Ok(tokens)
}

/// `"` followed by a run of non-`"` non-`\` characters with `\.` escapes
/// permitted, terminated by `"`. Per spec §4.1, the token value keeps the
/// surrounding quotes — unescaping beyond quote-stripping happens in the
/// parser when it builds a `StrLit`.
fn lex_string(bytes: &[u8], start: usize) -> Result<(String, usize), Cause> {
    debug_assert_eq!(bytes[start], b'"');
    let mut i = start + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let raw = std::str::from_utf8(&bytes[start..=i])
                    .map_err(|e| Cause::parse(format!("invalid utf-8 in string literal: {e}")))?;
                return Ok((raw.to_string(), i + 1 - start));
            }
            b'\\' => {
                i += 1;
                if i >= bytes.len() {
                    return Err(Cause::parse("unterminated string escape"));
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    Err(Cause::parse(format!(
        "unterminated string starting at position {start}"
    )))
}

fn lex_number(bytes: &[u8], start: usize) -> Result<(Token, usize), Cause> {
    let mut i = start;
    let mut is_float = false;

    if bytes[i] == b'-' {
        i += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        is_float = true;
        i += 1;
    }

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }

    if !is_float && i < bytes.len() && bytes[i] == b'.' {
        if i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
            is_float = true;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let text = std::str::from_utf8(&bytes[start..i])
        .map_err(|e| Cause::parse(format!("invalid utf-8 in numeric literal: {e}")))?;
    let consumed = i - start;

    if is_float {
        let f: f64 = text
            .parse()
            .map_err(|e| Cause::parse(format!("invalid float literal '{text}': {e}")))?;
        Ok((Token::Float(f), consumed))
    } else {
        let n: i64 = text
            .parse()
            .map_err(|e| Cause::parse(format!("invalid int literal '{text}': {e}")))?;
        Ok((Token::Int(n), consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_bool_literals() {
        assert_eq!(lex("true").unwrap(), vec![Token::True]);
        assert_eq!(lex("false").unwrap(), vec![Token::False]);
    }

    #[test]
    fn lex_env_and_brackets() {
        assert_eq!(
            lex(r#"env["x"]"#).unwrap(),
            vec![
                Token::Env,
                Token::LBrack,
                Token::Str("\"x\"".into()),
                Token::RBrack,
            ]
        );
    }

    #[test]
    fn lex_call_with_args() {
        assert_eq!(
            lex("plus(1, 2)").unwrap(),
            vec![
                Token::Ident("plus".into()),
                Token::LParen,
                Token::Int(1),
                Token::Comma,
                Token::Int(2),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn lex_range_literal() {
        assert_eq!(
            lex("[10:20]").unwrap(),
            vec![
                Token::LBrack,
                Token::Int(10),
                Token::Colon,
                Token::Int(20),
                Token::RBrack,
            ]
        );
    }

    #[test]
    fn lex_negative_int() {
        assert_eq!(lex("-42").unwrap(), vec![Token::Int(-42)]);
    }

    #[test]
    fn lex_negative_float() {
        assert_eq!(lex("-0.5").unwrap(), vec![Token::Float(-0.5)]);
    }

    #[test]
    fn lex_leading_dot_float() {
        assert_eq!(lex(".5").unwrap(), vec![Token::Float(0.5)]);
    }

    #[test]
    fn lex_string_with_escape() {
        assert_eq!(
            lex(r#""a\"b""#).unwrap(),
            vec![Token::Str(r#""a\"b""#.into())]
        );
    }

    #[test]
    fn lex_unterminated_string_errs() {
        assert!(lex(r#""abc"#).is_err());
    }

    #[test]
    fn lex_unexpected_char_errs() {
        assert!(lex("@").is_err());
    }

    #[test]
    fn lex_ident_is_not_keyword() {
        assert_eq!(lex("matches").unwrap(), vec![Token::Ident("matches".into())]);
    }

    #[test]
    fn lex_skips_whitespace() {
        assert_eq!(
            lex("  true  ,  false ").unwrap(),
            vec![Token::True, Token::Comma, Token::False]
        );
    }
}
