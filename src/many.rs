use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::{Position, Span};

/// Run `parser` until it fails, collecting its values
///
/// The failed final attempt is rolled back. An attempt that succeeds without
/// consuming input ends the repetition after its value is kept, since it
/// would otherwise succeed forever.
fn repeat<'code, P>(parser: &P, cursor: &mut Cursor<'code>, values: &mut Vec<P::Output>)
where
    P: Parser<'code>,
{
    loop {
        let checkpoint = cursor.save();
        match parser.parse(cursor) {
            Ok(parsed) => {
                let zero_width = parsed.span.is_empty();
                values.push(parsed.value);
                if zero_width {
                    break;
                }
            }
            Err(_) => {
                cursor.rollback(checkpoint);
                break;
            }
        }
    }
}

fn collected<T>(values: Vec<T>, start: Position, cursor: &Cursor<'_>) -> Parsed<Vec<T>> {
    Parsed::new(values, Span::new(start, cursor.save()))
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails.
pub struct Many0<P> {
    label: String,
    parser: P,
}

impl<P> Many0<P> {
    pub fn new(label: impl Into<String>, parser: P) -> Self {
        Many0 {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Many0<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.save();
        let mut values = Vec::new();
        repeat(&self.parser, cursor, &mut values);
        Ok(collected(values, start, cursor))
    }
}

/// Convenience function to create a Many0 parser
pub fn many0<'code, P>(parser: P) -> Many0<P>
where
    P: Parser<'code>,
{
    let label = format!("zero or more {}", parser.label());
    Many0::new(label, parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    label: String,
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(label: impl Into<String>, parser: P) -> Self {
        Many1 {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.save();

        let first = match self.parser.parse(cursor) {
            Ok(first) => first,
            Err(error) => {
                cursor.rollback(start);
                let item = self.parser.label();
                let mut error = ParseError::wrap("Many1 parser failed.", cursor, error)
                    .with_expected(format!("{} at least once", item));
                error.got = format!("{} zero times", item);
                return Err(error);
            }
        };

        let zero_width = first.span.is_empty();
        let mut values = vec![first.value];
        if !zero_width {
            repeat(&self.parser, cursor, &mut values);
        }
        Ok(collected(values, start, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    let label = format!("one or more {}", parser.label());
    Many1::new(label, parser)
}

/// Extension trait to add .many0() and .many1() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many0(self) -> Many0<Self> {
        many0(self)
    }

    fn many1(self) -> Many1<Self> {
        many1(self)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
