use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with `()` if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    label: String,
    parser: P,
}

impl<P> Not<P> {
    pub fn new(label: impl Into<String>, parser: P) -> Self {
        Not {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<()> {
        let checkpoint = cursor.save();
        let outcome = self.parser.parse(cursor);
        cursor.rollback(checkpoint);

        match outcome {
            Ok(parsed) => Err(ParseError::new(
                "Negative lookahead failed: unexpected match",
                self.label.clone(),
                parsed.span.slice(cursor.input()),
                cursor,
            )),
            Err(_) => Ok(Parsed::new((), Span::empty(checkpoint))),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    let label = format!("not {}", parser.label());
    Not::new(label, parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        not(self)
    }
}

/// Implement NotExt for all parsers
impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many0;
    use crate::map::MapExt;
    use crate::parser::parse_str;
    use crate::position::Position;
    use crate::then::ThenExt;
    use crate::utf8::{any_char, code_point, literal};

    #[test]
    fn test_not_fails_on_match() {
        let mut cursor = Cursor::from_start("hello");
        let error = not(literal("greeting", "hello")).parse(&mut cursor).unwrap_err();

        assert_eq!(error.expected, "not greeting");
        assert_eq!(error.got, "hello");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let mut cursor = Cursor::from_start("world");
        let parsed = not(literal("greeting", "hello")).parse(&mut cursor).unwrap();

        assert_eq!(parsed.span, Span::empty(Position::start()));
        assert_eq!(cursor.peek(), Some('w'));
    }

    #[test]
    fn test_not_for_parsing_until_delimiter() {
        let parser = many0(not(literal("close", "]]")).then_right(any_char()));
        let mut cursor = Cursor::from_start("hello]]world");

        let parsed = parser.parse(&mut cursor).unwrap();
        assert_eq!(parsed.value, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(cursor.remaining(), "]]world");
    }

    #[test]
    fn test_not_comment_parsing_scenario() {
        let body = many0(literal("end", "*/").not().then_right(any_char()))
            .map(|chars| chars.into_iter().collect::<String>());
        let comment = literal("start", "/*").then_right(body).then_left(literal("end", "*/"));

        let parsed = parse_str(&comment, "/* comment */ code").unwrap();
        assert_eq!(parsed.value, " comment ");
        assert_eq!(parsed.span.end.offset, 13);
    }

    #[test]
    fn test_not_at_end_of_input() {
        let mut cursor = Cursor::from_start("a");
        any_char().parse(&mut cursor).unwrap();

        assert!(not(code_point("a", 'a')).parse(&mut cursor).is_ok());
        assert!(parse_str(&not(code_point("a", 'a')), "").is_ok());
    }

    #[test]
    fn test_not_preserves_cursor_position() {
        let mut cursor = Cursor::from_start("test string");
        literal("test", "test").parse(&mut cursor).unwrap();

        assert!(not(literal("space", " ")).parse(&mut cursor).is_err());
        assert_eq!(cursor.offset(), 4);
        assert!(not(literal("x", "x")).parse(&mut cursor).is_ok());
        assert_eq!(cursor.offset(), 4);
    }
}
