use crate::cursor::Cursor;
use crate::error::{EOF, ParseError};
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;
use crate::utf8::found;

/// Parser that succeeds, consuming nothing, only when no input is left
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    type Output = ();

    fn label(&self) -> &str {
        "end of input"
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<()> {
        if cursor.is_eof() {
            return Ok(Parsed::new((), Span::empty(cursor.position())));
        }
        Err(ParseError::new(
            "Expected end of input",
            EOF,
            found(cursor),
            cursor,
        ))
    }
}

/// Convenience function to create an EndOfInput parser
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
