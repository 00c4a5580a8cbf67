use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The span is that of the inner parser.
pub struct Map<P, F> {
    label: String,
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(label: impl Into<String>, parser: P, mapper: F) -> Self {
        Map {
            label: label.into(),
            parser,
            mapper,
        }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<U> {
        let checkpoint = cursor.save();
        match self.parser.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(&self.mapper)),
            Err(error) => {
                cursor.rollback(checkpoint);
                Err(ParseError::wrap("Map parser failed", cursor, error))
            }
        }
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    let label = parser.label().to_string();
    Map::new(label, parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        map(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
