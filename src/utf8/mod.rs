//! Leaf parsers over the code points of the input text
//!
//! Every parser here reads only what it consumes and fails without moving the
//! cursor on a mismatch.

pub mod alphanumeric;
pub mod char;
pub mod digit;
pub mod letter;
pub mod one_of;
pub mod string;
pub mod take_while;
pub mod whitespace;

use crate::cursor::Cursor;
use crate::error::{EOF, ParseError};
use crate::position::Span;

pub use alphanumeric::alphanumeric;
pub use char::{CharClass, CodePoint, Predicate, any_char, code_point, predicate};
pub use digit::digit;
pub use letter::letter;
pub use one_of::{OneOf, none_of, one_of};
pub use string::{Literal, literal, literal_ci};
pub use take_while::{TakeWhile, take_while};
pub use whitespace::{Lexeme, LexemeExt, lexeme, spaces, whitespace};

/// What sits under the cursor, for the `got` side of an error
pub(crate) fn found(cursor: &Cursor<'_>) -> String {
    cursor.peek().map_or_else(|| EOF.to_string(), String::from)
}

/// Consume `n` code points or report running out of input
pub(crate) fn advance<'code>(
    cursor: &mut Cursor<'code>,
    n: usize,
    expected: &str,
) -> Result<(&'code str, Span), ParseError> {
    match cursor.consume(n) {
        Some(consumed) => Ok(consumed),
        None => Err(ParseError::eof(
            "Reached the end of file while parsing",
            expected,
            cursor,
        )),
    }
}
