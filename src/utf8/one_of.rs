use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::utf8::{advance, found};

/// Parser for one code point drawn from (or, negated, absent from) a set
pub struct OneOf {
    label: String,
    chars: String,
    negated: bool,
}

impl OneOf {
    pub fn new(label: impl Into<String>, chars: impl Into<String>, negated: bool) -> Self {
        OneOf {
            label: label.into(),
            chars: chars.into(),
            negated,
        }
    }

    fn accepts(&self, ch: char) -> bool {
        self.chars.contains(ch) != self.negated
    }

    fn describe(&self) -> String {
        if self.negated {
            format!("none of {:?}", self.chars)
        } else {
            format!("one of {:?}", self.chars)
        }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = char;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<char> {
        match cursor.peek() {
            Some(ch) if self.accepts(ch) => {
                let (_, span) = advance(cursor, 1, &self.label)?;
                Ok(Parsed::new(ch, span))
            }
            _ => Err(ParseError::new(
                format!("Failed to parse {}", self.label),
                self.describe(),
                found(cursor),
                cursor,
            )),
        }
    }
}

/// Parser for any one of the code points in `chars`
pub fn one_of(label: impl Into<String>, chars: impl Into<String>) -> OneOf {
    OneOf::new(label, chars, false)
}

/// Parser for any code point not in `chars`
///
/// Fails at end of input like every other single code point parser.
pub fn none_of(label: impl Into<String>, chars: impl Into<String>) -> OneOf {
    OneOf::new(label, chars, true)
}
