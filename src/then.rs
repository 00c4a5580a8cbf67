use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;

/// Parser combinator that runs two parsers in sequence and keeps both values
pub struct Then<P1, P2> {
    label: String,
    left: P1,
    right: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(label: impl Into<String>, left: P1, right: P2) -> Self {
        Then {
            label: label.into(),
            left,
            right,
        }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let checkpoint = cursor.save();

        let left = self.left.parse(cursor).map_err(|error| {
            cursor.rollback(checkpoint);
            ParseError::wrap("Left of Then failed", cursor, error)
        })?;

        let right = match self.right.parse(cursor) {
            Ok(right) => right,
            Err(error) => {
                cursor.rollback(checkpoint);
                return Err(ParseError::wrap("Right of Then failed", cursor, error));
            }
        };

        Ok(Parsed::new(
            (left.value, right.value),
            Span::new(checkpoint, right.span.end),
        ))
    }
}

/// Convenience function to create a Then parser
pub fn then<'code, P1, P2>(left: P1, right: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    let label = format!("{} then {}", left.label(), right.label());
    Then::new(label, left, right)
}

/// Parser combinator that projects a pair parser onto its left value
///
/// The span still covers both halves of the pair.
pub struct KeepLeft<P> {
    label: String,
    pair: P,
}

impl<P> KeepLeft<P> {
    pub fn new(label: impl Into<String>, pair: P) -> Self {
        KeepLeft {
            label: label.into(),
            pair,
        }
    }
}

impl<'code, P, A, B> Parser<'code> for KeepLeft<P>
where
    P: Parser<'code, Output = (A, B)>,
{
    type Output = A;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<A> {
        let checkpoint = cursor.save();
        match self.pair.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(|(left, _)| left)),
            Err(error) => {
                cursor.rollback(checkpoint);
                Err(ParseError::wrap("KeepLeft failed.", cursor, error))
            }
        }
    }
}

/// Convenience function to create a KeepLeft parser
pub fn keep_left<'code, P, A, B>(pair: P) -> KeepLeft<P>
where
    P: Parser<'code, Output = (A, B)>,
{
    let label = pair.label().to_string();
    KeepLeft::new(label, pair)
}

/// Parser combinator that projects a pair parser onto its right value
///
/// The span still covers both halves of the pair.
pub struct KeepRight<P> {
    label: String,
    pair: P,
}

impl<P> KeepRight<P> {
    pub fn new(label: impl Into<String>, pair: P) -> Self {
        KeepRight {
            label: label.into(),
            pair,
        }
    }
}

impl<'code, P, A, B> Parser<'code> for KeepRight<P>
where
    P: Parser<'code, Output = (A, B)>,
{
    type Output = B;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<B> {
        let checkpoint = cursor.save();
        match self.pair.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(|(_, right)| right)),
            Err(error) => {
                cursor.rollback(checkpoint);
                Err(ParseError::wrap("KeepRight failed.", cursor, error))
            }
        }
    }
}

/// Convenience function to create a KeepRight parser
pub fn keep_right<'code, P, A, B>(pair: P) -> KeepRight<P>
where
    P: Parser<'code, Output = (A, B)>,
{
    let label = pair.label().to_string();
    KeepRight::new(label, pair)
}

/// Extension trait to add .then(), .then_left() and .then_right() to parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, next: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        then(self, next)
    }

    /// Match `next` after this parser and keep this parser's value
    fn then_left<P>(self, next: P) -> KeepLeft<Then<Self, P>>
    where
        P: Parser<'code>,
    {
        keep_left(then(self, next))
    }

    /// Match `next` after this parser and keep `next`'s value
    fn then_right<P>(self, next: P) -> KeepRight<Then<Self, P>>
    where
        P: Parser<'code>,
    {
        keep_right(then(self, next))
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}
