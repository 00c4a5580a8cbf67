use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that restores the cursor when the inner parser fails
///
/// The failure is still reported. Every parser in this crate already leaves
/// the cursor untouched on failure; this exists for hand-written parsers that
/// may not. To swallow a failure use [`optional`](crate::optional::optional).
pub struct Attempt<P> {
    label: String,
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(label: impl Into<String>, parser: P) -> Self {
        Attempt {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<P::Output> {
        let checkpoint = cursor.save();
        self.parser.parse(cursor).map_err(|error| {
            cursor.rollback(checkpoint);
            ParseError::wrap("Attempt failed", cursor, error)
        })
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    let label = parser.label().to_string();
    Attempt::new(label, parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        attempt(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}
