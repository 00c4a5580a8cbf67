use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected value is a failure like any other: the cursor is restored and
/// the error names `label` as what was expected.
pub struct Filter<P, F> {
    label: String,
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(label: impl Into<String>, parser: P, predicate: F) -> Self {
        Filter {
            label: label.into(),
            parser,
            predicate,
        }
    }
}

impl<'code, P, F, T> Parser<'code> for Filter<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let checkpoint = cursor.save();
        let parsed = self.parser.parse(cursor)?;

        if (self.predicate)(&parsed.value) {
            return Ok(parsed);
        }

        cursor.rollback(checkpoint);
        Err(ParseError::new(
            format!("Filter rejected {}", self.parser.label()),
            self.label.clone(),
            parsed.span.slice(cursor.input()),
            cursor,
        ))
    }
}

/// Convenience function to create a filtered parser
pub fn filter<'code, P, F>(parser: P, predicate: F, label: impl Into<String>) -> Filter<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output) -> bool,
{
    Filter::new(label, parser, predicate)
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<'code>: Parser<'code> + Sized {
    fn filter<F>(self, predicate: F, label: impl Into<String>) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(label, self, predicate)
    }
}

/// Implement FilterExt for all parsers
impl<'code, P> FilterExt<'code> for P where P: Parser<'code> {}
