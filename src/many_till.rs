use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;
use crate::utf8::found;

/// Parser that repeatedly applies another parser until a terminator matches
///
/// Before every item the terminator is probed and rolled back, so it is left
/// unconsumed for the caller to match. Fails if an item fails before the
/// terminator is seen, or if an item stops making progress.
pub struct ManyTill<P, E> {
    label: String,
    parser: P,
    end: E,
}

impl<P, E> ManyTill<P, E> {
    pub fn new(label: impl Into<String>, parser: P, end: E) -> Self {
        ManyTill {
            label: label.into(),
            parser,
            end,
        }
    }
}

impl<'code, P, E> Parser<'code> for ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.save();
        let mut items = Vec::new();

        loop {
            let checkpoint = cursor.save();
            let probe = self.end.parse(cursor);
            cursor.rollback(checkpoint);
            if probe.is_ok() {
                return Ok(Parsed::new(items, Span::new(start, checkpoint)));
            }

            match self.parser.parse(cursor) {
                Ok(item) if item.span.is_empty() => {
                    let error = ParseError::new(
                        format!("{} made no progress", self.parser.label()),
                        self.end.label().to_string(),
                        found(cursor),
                        cursor,
                    );
                    cursor.rollback(start);
                    return Err(ParseError::wrap("ManyTill combinator failed.", cursor, error));
                }
                Ok(item) => items.push(item.value),
                Err(error) => {
                    cursor.rollback(start);
                    return Err(ParseError::wrap("ManyTill combinator failed.", cursor, error));
                }
            }
        }
    }
}

/// Convenience function to create a ManyTill parser
pub fn many_till<'code, P, E>(parser: P, end: E) -> ManyTill<P, E>
where
    P: Parser<'code>,
    E: Parser<'code>,
{
    let label = format!("{} until {}", parser.label(), end.label());
    ManyTill::new(label, parser, end)
}

/// Extension trait to add .many_till() method support for parsers
pub trait ManyTillExt<'code>: Parser<'code> + Sized {
    fn many_till<E>(self, end: E) -> ManyTill<Self, E>
    where
        E: Parser<'code>,
    {
        many_till(self, end)
    }
}

/// Implement ManyTillExt for all parsers
impl<'code, P> ManyTillExt<'code> for P where P: Parser<'code> {}
