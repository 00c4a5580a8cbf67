use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::utf8::{advance, found};

/// Parser that matches one exact code point
pub struct CodePoint {
    label: String,
    expected: char,
}

impl CodePoint {
    pub fn new(label: impl Into<String>, expected: char) -> Self {
        CodePoint {
            label: label.into(),
            expected,
        }
    }
}

impl<'code> Parser<'code> for CodePoint {
    type Output = char;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<char> {
        let expected = self.expected.to_string();
        match cursor.peek() {
            None => Err(ParseError::eof(
                "Reached the end of file while parsing",
                expected,
                cursor,
            )),
            Some(ch) if ch == self.expected => {
                let (_, span) = advance(cursor, 1, &expected)?;
                Ok(Parsed::new(ch, span))
            }
            Some(ch) => Err(ParseError::new(
                format!("Failed to parse {}", self.label),
                expected,
                ch.to_string(),
                cursor,
            )),
        }
    }
}

/// Convenience function to create a parser that matches a specific code point
pub fn code_point(label: impl Into<String>, expected: char) -> CodePoint {
    CodePoint::new(label, expected)
}

/// Parser that decodes one code point and accepts it if the predicate holds
pub struct Predicate<F> {
    label: String,
    predicate: F,
}

impl<F> Predicate<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(label: impl Into<String>, predicate: F) -> Self {
        Predicate {
            label: label.into(),
            predicate,
        }
    }
}

impl<'code, F> Parser<'code> for Predicate<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<char> {
        match cursor.peek() {
            Some(ch) if (self.predicate)(ch) => {
                let (_, span) = advance(cursor, 1, &self.label)?;
                Ok(Parsed::new(ch, span))
            }
            _ => Err(ParseError::new(
                "Char parser with predicate failed.",
                self.label.clone(),
                found(cursor),
                cursor,
            )),
        }
    }
}

/// Convenience function to create a predicate parser
pub fn predicate<F>(label: impl Into<String>, predicate: F) -> Predicate<F>
where
    F: Fn(char) -> bool,
{
    Predicate::new(label, predicate)
}

/// A predicate parser over a fixed character class
pub type CharClass = Predicate<fn(char) -> bool>;

/// Parser that accepts any single code point
pub fn any_char() -> CharClass {
    let accept: fn(char) -> bool = |_| true;
    Predicate::new("any character", accept)
}
