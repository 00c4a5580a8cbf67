use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use crate::then::{KeepLeft, KeepRight, Then, keep_left, keep_right, then};

type Delimited<O, P, C> = KeepLeft<Then<KeepRight<Then<O, P>>, C>>;

/// Parser combinator that matches content between opening and closing delimiters
///
/// Built as `keep_left(then(keep_right(then(open, content)), close))`. Only the
/// content's value is returned; the span covers both delimiters.
pub struct Between<O, P, C> {
    label: String,
    inner: Delimited<O, P, C>,
}

impl<O, P, C> Between<O, P, C> {
    pub fn new<'code>(label: impl Into<String>, open: O, content: P, close: C) -> Self
    where
        O: Parser<'code>,
        P: Parser<'code>,
        C: Parser<'code>,
    {
        Between {
            label: label.into(),
            inner: keep_left(then(keep_right(then(open, content)), close)),
        }
    }
}

impl<'code, O, P, C> Parser<'code> for Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<P::Output> {
        let checkpoint = cursor.save();
        self.inner.parse(cursor).map_err(|error| {
            cursor.rollback(checkpoint);
            ParseError::wrap("Between combinator failed.", cursor, error)
        })
    }
}

/// Creates a parser that matches content between opening and closing delimiters
///
/// This does not skip whitespace; wrap the delimiters in
/// [`lexeme`](crate::utf8::lexeme) for that.
pub fn between<'code, O, P, C>(open: O, content: P, close: C) -> Between<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    let label = format!("{} between {} and {}", content.label(), open.label(), close.label());
    Between::new(label, open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many1;
    use crate::parser::parse_str;
    use crate::position::Position;
    use crate::utf8::{CharClass, CodePoint, code_point, digit, letter, literal};

    fn parenthesized_letter() -> Between<CodePoint, CharClass, CodePoint> {
        between(code_point("open", '('), letter(), code_point("close", ')'))
    }

    #[test]
    fn test_parentheses_round_trip() {
        let mut cursor = Cursor::from_start("(x)");
        let parsed = parenthesized_letter().parse(&mut cursor).unwrap();

        assert_eq!(parsed.value, 'x');
        assert_eq!(parsed.span.len(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_missing_close_delimiter_restores() {
        let mut cursor = Cursor::from_start("(x");
        let error = parenthesized_letter().parse(&mut cursor).unwrap_err();

        assert_eq!(cursor.position(), Position::start());
        assert_eq!(error.message, "Between combinator failed.");
        assert_eq!(error.position, Position::start());
        assert_eq!(error.expected, ")");
        assert!(error.is_eof());
    }

    #[test]
    fn test_missing_open_delimiter_fails() {
        let mut cursor = Cursor::from_start("x)");
        assert!(parenthesized_letter().parse(&mut cursor).is_err());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_bad_content_fails() {
        let error = parse_str(&parenthesized_letter(), "(1)").unwrap_err();
        assert_eq!(error.expected, "letter");
        assert_eq!(error.got, "1");
    }

    #[test]
    fn test_multi_char_delimiters_with_remaining_content() {
        let parser = between(literal("open", "[["), many1(digit()), literal("close", "]]"));
        let mut cursor = Cursor::from_start("[[42]] extra");

        let parsed = parser.parse(&mut cursor).unwrap();
        assert_eq!(parsed.value, vec!['4', '2']);
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_trace_shows_every_level() {
        let error = parse_str(&parenthesized_letter(), "(x]").unwrap_err();
        let trace = error.full_trace();

        assert!(trace.starts_with("Between combinator failed."));
        assert!(trace.contains("KeepLeft failed."));
        assert!(trace.contains("Right of Then failed"));
        assert!(trace.contains("Failed to parse close"));
        assert!(trace.contains("Expected: )\tGot: ]"));
    }
}
