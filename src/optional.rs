use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;

/// Parser combinator that makes a parser optional
///
/// Tries the parser once. On failure the cursor is rolled back and the result
/// is a zero-width `None`; the failure itself is dropped.
pub struct Optional<P> {
    label: String,
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(label: impl Into<String>, parser: P) -> Self {
        Optional {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let checkpoint = cursor.save();
        match self.parser.parse(cursor) {
            Ok(parsed) => Ok(parsed.map(Some)),
            Err(_) => {
                cursor.rollback(checkpoint);
                Ok(Parsed::new(None, Span::empty(checkpoint)))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    let label = format!("optional {}", parser.label());
    Optional::new(label, parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        optional(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
