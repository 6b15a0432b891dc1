//! Safe SQL identifier handling.
//!
//! [`Ident`] validates a table or column name before it is spliced into a
//! statement. Identifiers are the one part of a rendered statement that cannot
//! be parameter-bound, so they are checked instead:
//!
//! - Unquoted parts must match `[A-Za-z_][A-Za-z0-9_$]*`
//! - Quoted parts allow any characters except NUL, with `"` escaped as `""`
//! - Dotted notation (`schema.table`) is accepted

use crate::error::{LiteError, LiteResult};

/// A validated SQL identifier (table or column name).
///
/// The inner string is kept exactly as written by the caller; validation
/// guarantees it is safe to splice into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    /// Validate an identifier, supporting dotted and quoted forms.
    pub fn parse(s: &str) -> LiteResult<Self> {
        if s.is_empty() {
            return Err(LiteError::invalid_argument("identifier cannot be empty"));
        }
        if s.contains('\0') {
            return Err(LiteError::invalid_argument(
                "identifier cannot contain NUL character",
            ));
        }

        let mut chars = s.chars().peekable();
        let mut first_part = true;
        while chars.peek().is_some() {
            if !first_part {
                // Between parts only a '.' is allowed, and it needs a successor.
                match chars.next() {
                    Some('.') if chars.peek().is_some() => {}
                    Some('.') => {
                        return Err(LiteError::invalid_argument(
                            "trailing '.' in identifier",
                        ));
                    }
                    Some(c) => {
                        return Err(LiteError::invalid_argument(format!(
                            "expected '.' between identifier parts, got '{c}'"
                        )));
                    }
                    None => break,
                }
            }
            first_part = false;

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut len = 0usize;
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            len += 1;
                        }
                        Some('"') => break,
                        Some(_) => len += 1,
                        None => {
                            return Err(LiteError::invalid_argument(
                                "unclosed quoted identifier",
                            ));
                        }
                    }
                }
                if len == 0 {
                    return Err(LiteError::invalid_argument("empty quoted identifier"));
                }
                continue;
            }

            let mut len = 0usize;
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if len == 0 {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(LiteError::invalid_argument(format!(
                        "invalid character in identifier: '{c}'"
                    )));
                }
                chars.next();
                len += 1;
            }
            if len == 0 {
                return Err(LiteError::invalid_argument("empty identifier segment"));
            }
        }

        Ok(Self(s.to_string()))
    }

    /// The identifier as it will appear in SQL text.
    pub fn as_sql(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        assert_eq!(Ident::parse("users").unwrap().as_sql(), "users");
    }

    #[test]
    fn ident_dotted() {
        assert_eq!(Ident::parse("main.users").unwrap().as_sql(), "main.users");
    }

    #[test]
    fn ident_quoted() {
        assert_eq!(
            Ident::parse(r#""Camel Case""#).unwrap().as_sql(),
            r#""Camel Case""#
        );
    }

    #[test]
    fn ident_quoted_with_escape() {
        assert!(Ident::parse(r#""has""quote""#).is_ok());
    }

    #[test]
    fn ident_mixed() {
        assert!(Ident::parse(r#"main."UserTable""#).is_ok());
    }

    #[test]
    fn ident_with_dollar() {
        assert!(Ident::parse("col$1").is_ok());
    }

    #[test]
    fn ident_rejects_empty() {
        assert!(Ident::parse("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn ident_rejects_start_digit() {
        assert!(Ident::parse("1table").is_err());
    }

    #[test]
    fn ident_rejects_space() {
        assert!(Ident::parse("my table").is_err());
    }

    #[test]
    fn ident_rejects_injection() {
        assert!(Ident::parse("users; DROP TABLE users").is_err());
    }

    #[test]
    fn ident_rejects_double_dot() {
        assert!(Ident::parse("main..users").is_err());
    }

    #[test]
    fn ident_rejects_trailing_dot() {
        assert!(Ident::parse("main.").is_err());
    }

    #[test]
    fn ident_rejects_unclosed_quote() {
        assert!(Ident::parse(r#""unclosed"#).is_err());
    }
}
