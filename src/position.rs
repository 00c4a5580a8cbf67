use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parsed, Parser};
use std::fmt;

/// A snapshot of where a cursor is in the input
///
/// `offset` is a byte offset into the input, `line` and `column` are 1-indexed.
/// Columns count code points, and a `\r\n` pair counts as a single line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// The beginning of an input: offset 0, line 1, column 1
    pub fn start() -> Self {
        Position::new(0, 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, Column {}, Offset {}",
            self.line, self.column, self.offset
        )
    }
}

/// The range of input consumed by a successful parse
///
/// `start.offset <= end.offset`, equal only for zero-width matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A zero-width span sitting at `at`
    pub fn empty(at: Position) -> Self {
        Span { start: at, end: at }
    }

    /// Number of bytes covered by the span, zero if it is reversed
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The slice of `source` this span covers
    pub fn slice<'code>(&self, source: &'code str) -> &'code str {
        source
            .get(self.start.offset..self.end.offset)
            .unwrap_or_default()
    }
}

/// A parser combinator that captures the span of a successful parse
/// alongside its value
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<'code, P> Parser<'code> for Spanned<P>
where
    P: Parser<'code>,
{
    type Output = (P::Output, Span);

    fn label(&self) -> &str {
        self.parser.label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        let span = parsed.span;
        Ok(Parsed::new((parsed.value, span), span))
    }
}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::{code_point, literal};

    #[test]
    fn test_span_basic() {
        let data = "hello";
        let span = Span::new(Position::start(), Position::new(5, 1, 6));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert_eq!(span.slice(data), "hello");
    }

    #[test]
    fn test_span_empty() {
        let data = "hello";
        let at = Position::new(3, 1, 4);
        let span = Span::empty(at);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice(data), "");
    }

    #[test]
    fn test_span_slice_out_of_range_is_empty() {
        let span = Span::new(Position::start(), Position::new(40, 1, 41));
        assert_eq!(span.slice("short"), "");
    }

    #[test]
    fn test_reversed_span_is_empty() {
        let span = Span::new(Position::new(4, 1, 5), Position::new(1, 1, 2));
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.slice("hello"), "");
    }

    #[test]
    fn test_position_display() {
        let pos = Position::new(7, 2, 1);
        assert_eq!(pos.to_string(), "Line 2, Column 1, Offset 7");
    }

    #[test]
    fn test_spanned_single_code_point() {
        let data = "hello";
        let mut cursor = Cursor::from_start(data);
        let parser = spanned(code_point("h", 'h'));

        let parsed = parser.parse(&mut cursor).unwrap();
        let (ch, span) = parsed.value;
        assert_eq!(ch, 'h');
        assert_eq!(span, Span::new(Position::start(), Position::new(1, 1, 2)));
        assert_eq!(span.slice(data), "h");
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_spanned_multiple_parsers() {
        let data = "abc";
        let mut cursor = Cursor::from_start(data);

        let (_, first) = spanned(code_point("a", 'a'))
            .parse(&mut cursor)
            .unwrap()
            .value;
        let (_, second) = spanned(literal("bc", "bc"))
            .parse(&mut cursor)
            .unwrap()
            .value;

        assert_eq!(first.slice(data), "a");
        assert_eq!(second.slice(data), "bc");
        assert_eq!(second.start, first.end);
    }

    #[test]
    fn test_spanned_error_propagation() {
        let data = "xyz";
        let mut cursor = Cursor::from_start(data);
        let result = spanned(code_point("a", 'a')).parse(&mut cursor);

        assert!(result.is_err());
        assert_eq!(cursor.offset(), 0);
    }
}
