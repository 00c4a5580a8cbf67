use crate::cursor::{Cursor, next_unit};
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};

/// Parser that consumes the longest run of code points satisfying a predicate
///
/// Never fails: an empty run is a zero-width success.
pub struct TakeWhile<F> {
    label: String,
    predicate: F,
}

impl<F> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(label: impl Into<String>, predicate: F) -> Self {
        TakeWhile {
            label: label.into(),
            predicate,
        }
    }

    /// Byte length of the accepted run at the start of `text`
    ///
    /// The predicate sees `\r\n` as one `'\n'`, so a run never ends between
    /// its halves.
    fn run_length(&self, text: &str) -> usize {
        let mut end = 0;
        while let Some((ch, width)) = text.get(end..).and_then(next_unit) {
            if !(self.predicate)(ch) {
                break;
            }
            end += width;
        }
        end
    }
}

impl<'code, F> Parser<'code> for TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'code str;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<&'code str> {
        let length = self.run_length(cursor.remaining());
        let (text, span) = cursor.consume_bytes(length).ok_or_else(|| {
            ParseError::eof("Reached the end of file while parsing", self.label.clone(), cursor)
        })?;
        Ok(Parsed::new(text, span))
    }
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<F>(label: impl Into<String>, predicate: F) -> TakeWhile<F>
where
    F: Fn(char) -> bool,
{
    TakeWhile::new(label, predicate)
}
