use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;
use crate::utf8::char::{CharClass, Predicate};
use crate::utf8::take_while::TakeWhile;

fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Parser for a single Unicode whitespace code point, line terminators included
pub fn whitespace() -> CharClass {
    Predicate::new("whitespace", is_whitespace as fn(char) -> bool)
}

/// Parser for zero or more whitespace code points
pub fn spaces() -> TakeWhile<fn(char) -> bool> {
    TakeWhile::new("spaces", is_whitespace as fn(char) -> bool)
}

/// Parser combinator that runs a parser then skips any whitespace after it
///
/// The span covers the trailing whitespace too, so sequences of lexemes tile
/// the input without gaps.
pub struct Lexeme<P> {
    parser: P,
    spaces: TakeWhile<fn(char) -> bool>,
}

impl<P> Lexeme<P> {
    pub fn new(parser: P) -> Self {
        Lexeme {
            parser,
            spaces: spaces(),
        }
    }
}

impl<'code, P> Parser<'code> for Lexeme<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        self.parser.label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<P::Output> {
        let parsed = self.parser.parse(cursor)?;
        let trailing = self.spaces.parse(cursor)?;
        Ok(Parsed::new(
            parsed.value,
            Span::new(parsed.span.start, trailing.span.end),
        ))
    }
}

/// Convenience function to create a Lexeme parser
pub fn lexeme<'code, P>(parser: P) -> Lexeme<P>
where
    P: Parser<'code>,
{
    Lexeme::new(parser)
}

/// Extension trait to add .lexeme() method support for parsers
pub trait LexemeExt<'code>: Parser<'code> + Sized {
    fn lexeme(self) -> Lexeme<Self> {
        Lexeme::new(self)
    }
}

/// Implement LexemeExt for all parsers
impl<'code, P> LexemeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::position::Position;
    use crate::utf8::digit::digit;
    use crate::utf8::string::literal;

    #[test]
    fn test_whitespace_variants() {
        for input in [" ", "\t", "\n", "\r", "\u{00A0}", "\u{2003}"] {
            assert!(parse_str(&whitespace(), input).is_ok(), "Failed for {:?}", input);
        }
        assert!(parse_str(&whitespace(), "x").is_err());
        assert!(parse_str(&whitespace(), "").is_err());
    }

    #[test]
    fn test_spaces_zero_or_more() {
        assert_eq!(parse_str(&spaces(), "   x").unwrap().value, "   ");
        assert_eq!(parse_str(&spaces(), "x").unwrap().value, "");
    }

    #[test]
    fn test_lexeme_skips_trailing_whitespace() {
        let mut cursor = Cursor::from_start("let \n  x");
        let parsed = lexeme(literal("let", "let")).parse(&mut cursor).unwrap();

        assert_eq!(parsed.value, "let");
        assert_eq!(parsed.span.start, Position::start());
        assert_eq!(parsed.span.end, Position::new(7, 2, 3));
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_lexeme_without_whitespace() {
        let parsed = parse_str(&digit().lexeme(), "7+").unwrap();
        assert_eq!(parsed.value, '7');
        assert_eq!(parsed.span.len(), 1);
    }

    #[test]
    fn test_lexeme_failure_does_not_consume() {
        let mut cursor = Cursor::from_start("  7");
        assert!(lexeme(digit()).parse(&mut cursor).is_err());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_lexeme_keeps_label() {
        assert_eq!(lexeme(digit()).label(), "digit");
    }
}
