//! logos-based tokenizer for declaration values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats a bare `#`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`]
//! - `1fr` matches [`Token::Dimension`], not `Number` + `Ident`

use logos::Logos;

/// Value token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Hex color: `#fff`, `#ff00aa`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number with a unit suffix: `1fr`, `50%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(fr|%)")]
    Dimension,

    /// Integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: `auto`, `red`, `bold`, `none`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,
}

/// A lexed value component.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePart {
    Number(f32),
    Percent(f32),
    Fraction(f32),
    Ident(String),
    Color(String),
}

/// Tokenize `input` into `(Token, slice)` pairs. Unlexable input is skipped.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

/// Lex `input` into typed parts.
///
/// Returns the offending slice as the error if anything fails to lex.
pub fn parse_parts(input: &str) -> Result<Vec<ValuePart>, String> {
    let mut parts = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        let text = &input[span];
        let Ok(token) = result else {
            return Err(text.to_string());
        };
        let part = match token {
            Token::HexColor => ValuePart::Color(text.to_string()),
            Token::Ident => ValuePart::Ident(text.to_ascii_lowercase()),
            Token::Number => ValuePart::Number(text.parse().map_err(|_| text.to_string())?),
            Token::Dimension => {
                if let Some(n) = text.strip_suffix("fr") {
                    ValuePart::Fraction(n.parse().map_err(|_| text.to_string())?)
                } else {
                    let n = text.trim_end_matches('%');
                    ValuePart::Percent(n.parse().map_err(|_| text.to_string())?)
                }
            }
        };
        parts.push(part);
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn dimension_beats_number_plus_ident() {
        assert_eq!(tokens("1fr"), vec![Token::Dimension]);
        assert_eq!(tokens("50%"), vec![Token::Dimension]);
        assert_eq!(tokens("12"), vec![Token::Number]);
    }

    #[test]
    fn hex_color() {
        assert_eq!(tokenize("#ff00aa"), vec![(Token::HexColor, "#ff00aa".to_string())]);
    }

    #[test]
    fn whitespace_separated_list() {
        assert_eq!(
            tokens("1 2  3\t4"),
            vec![Token::Number, Token::Number, Token::Number, Token::Number]
        );
    }

    #[test]
    fn parse_parts_typed() {
        assert_eq!(
            parse_parts("2fr 25% -3 Auto #abc").unwrap(),
            vec![
                ValuePart::Fraction(2.0),
                ValuePart::Percent(25.0),
                ValuePart::Number(-3.0),
                ValuePart::Ident("auto".into()),
                ValuePart::Color("#abc".into()),
            ]
        );
    }

    #[test]
    fn parse_parts_rejects_garbage() {
        assert_eq!(parse_parts("10 @"), Err("@".to_string()));
    }
}
