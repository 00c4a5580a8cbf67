use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::utf8::found;

/// Parser combinator that tries each alternative in order from the same position
///
/// The first alternative to succeed wins, even if a later one would match
/// more input. If every alternative fails the error is caused by the last
/// one tried.
pub struct Or<'code, T> {
    label: String,
    alternatives: Vec<BoxedParser<'code, T>>,
}

impl<'code, T> Or<'code, T> {
    pub fn new(label: impl Into<String>, alternatives: Vec<BoxedParser<'code, T>>) -> Self {
        Or {
            label: label.into(),
            alternatives,
        }
    }
}

impl<'code, T> Parser<'code> for Or<'code, T> {
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let checkpoint = cursor.save();
        let mut last_error = None;

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(parsed) => return Ok(parsed),
                Err(error) => {
                    cursor.rollback(checkpoint);
                    last_error = Some(error);
                }
            }
        }

        Err(match last_error {
            Some(cause) => ParseError::wrap("Or combinator failed", cursor, cause),
            None => ParseError::new(
                "Or combinator failed",
                self.label.clone(),
                found(cursor),
                cursor,
            ),
        })
    }
}

/// Convenience function to create an Or parser over any number of alternatives
pub fn or<'code, T>(label: impl Into<String>, alternatives: Vec<BoxedParser<'code, T>>) -> Or<'code, T> {
    Or::new(label, alternatives)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn or<P>(self, other: P) -> Or<'code, Self::Output>
    where
        P: Parser<'code, Output = Self::Output> + Send + Sync + 'code,
    {
        let label = format!("{} or {}", self.label(), other.label());
        Or::new(label, vec![BoxedParser::new(self), BoxedParser::new(other)])
    }
}

/// Implement OrExt for all shareable parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
