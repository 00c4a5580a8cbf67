use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::position::{Position, Span};
use std::sync::Arc;

/// A successful parse: the value produced and the span of input it consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Parsed<T> {
    pub fn new(value: T, span: Span) -> Self {
        Parsed { value, span }
    }

    /// Where the cursor stood after the parse
    pub fn next(&self) -> Position {
        self.span.end
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed::new(f(self.value), self.span)
    }
}

pub type ParseResult<T> = Result<Parsed<T>, ParseError>;

/// Core parser trait for parser combinators
///
/// A parser is built once and then run any number of times. Running it either
/// advances the cursor and returns the parsed value, or fails and leaves the
/// cursor exactly where it was.
pub trait Parser<'code> {
    type Output;

    /// Human readable name used in diagnostics
    fn label(&self) -> &str;

    /// Attempt to parse at the cursor's current position
    ///
    /// On success the cursor has moved to the end of the returned span. On
    /// failure the cursor must be left at the position it was given.
    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        (**self).label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        (**self).label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        (**self).label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser that is cheap to clone and safe to share across threads
///
/// Variadic combinators such as [`or`](crate::or::or) take a list of these so
/// that alternatives of different concrete types can sit side by side.
pub struct BoxedParser<'code, T> {
    inner: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<'code, T> Clone for BoxedParser<'code, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn label(&self) -> &str {
        self.inner.label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// Run `parser` once over `input`, starting at offset 0, line 1, column 1
pub fn parse_str<'code, P>(parser: &P, input: &'code str) -> ParseResult<P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let mut cursor = Cursor::from_start(input);
    parser.parse(&mut cursor)
}
