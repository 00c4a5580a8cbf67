use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parsed, Parser};
use crate::position::Span;
use crate::utf8::found;

/// Parser combinator that runs parsers one after another
///
/// Returns the last parser's value with a span covering everything the
/// sequence consumed. Any failure restores the position the sequence started
/// at.
pub struct Sequence<'code, T> {
    label: String,
    parsers: Vec<BoxedParser<'code, T>>,
}

impl<'code, T> Sequence<'code, T> {
    pub fn new(label: impl Into<String>, parsers: Vec<BoxedParser<'code, T>>) -> Self {
        Sequence {
            label: label.into(),
            parsers,
        }
    }
}

impl<'code, T> Parser<'code> for Sequence<'code, T> {
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let checkpoint = cursor.save();
        let mut last = None;

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(parsed) => last = Some(parsed.value),
                Err(error) => {
                    cursor.rollback(checkpoint);
                    return Err(ParseError::wrap("Sequence parser failed.", cursor, error));
                }
            }
        }

        match last {
            Some(value) => Ok(Parsed::new(value, Span::new(checkpoint, cursor.save()))),
            None => Err(ParseError::new(
                "Sequence parser failed.",
                self.label.clone(),
                found(cursor),
                cursor,
            )),
        }
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'code, T>(
    label: impl Into<String>,
    parsers: Vec<BoxedParser<'code, T>>,
) -> Sequence<'code, T> {
    Sequence::new(label, parsers)
}
