use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};

/// Parser that matches an exact string
///
/// The case-insensitive variant compares lowercase forms code point by code
/// point, so it consumes exactly as many code points as `expected` has.
pub struct Literal {
    label: String,
    expected: String,
    /// Lowercased `expected` when matching case-insensitively
    folded: Option<String>,
}

impl Literal {
    pub fn new(label: impl Into<String>, expected: impl Into<String>) -> Self {
        Literal {
            label: label.into(),
            expected: expected.into(),
            folded: None,
        }
    }

    pub fn case_insensitive(label: impl Into<String>, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Literal {
            label: label.into(),
            folded: Some(expected.to_lowercase()),
            expected,
        }
    }

    fn parse_exact<'code>(&self, cursor: &mut Cursor<'code>) -> ParseResult<&'code str> {
        let rest = cursor.remaining();
        let width = self.expected.chars().count();

        if rest.starts_with(self.expected.as_str()) {
            return match cursor.consume_bytes(self.expected.len()) {
                Some((text, span)) => Ok(Parsed::new(text, span)),
                None => Err(self.split_line_break(rest, self.expected.len(), cursor)),
            };
        } else if self.expected.starts_with(rest) {
            return Err(ParseError::eof(
                "Reached the end of file while parsing",
                self.expected.clone(),
                cursor,
            ));
        }

        Err(ParseError::new(
            "Strings do not match.",
            self.expected.clone(),
            prefix(rest, width),
            cursor,
        ))
    }

    fn parse_folded<'code>(
        &self,
        cursor: &mut Cursor<'code>,
        folded: &str,
    ) -> ParseResult<&'code str> {
        let rest = cursor.remaining();
        let width = self.expected.chars().count();
        let candidate = prefix(rest, width);
        let lowered = candidate.to_lowercase();

        if lowered == folded {
            return match cursor.consume_bytes(candidate.len()) {
                Some((text, span)) => Ok(Parsed::new(text, span)),
                None => Err(self.split_line_break(rest, candidate.len(), cursor)),
            };
        } else if candidate.chars().count() < width && folded.starts_with(lowered.as_str()) {
            return Err(ParseError::eof(
                "Reached the end of file while parsing",
                self.expected.clone(),
                cursor,
            ));
        }

        Err(ParseError::new(
            "Strings do not match (case-insensitive).",
            self.expected.clone(),
            candidate,
            cursor,
        ))
    }

    /// The input matched up to a `\r` whose `\n` the literal leaves behind
    ///
    /// The cursor cannot stop inside a `\r\n` pair, so this is reported as its
    /// own failure with the whole line break in `got`.
    fn split_line_break(&self, rest: &str, len: usize, cursor: &Cursor<'_>) -> ParseError {
        let got = rest.get(..len + 1).unwrap_or(rest);
        ParseError::new(
            "String ends inside a \\r\\n line break.",
            self.expected.clone(),
            got,
            cursor,
        )
    }
}

/// The first `width` code points of `text`, or all of it if shorter
fn prefix(text: &str, width: usize) -> &str {
    let end = text
        .char_indices()
        .nth(width)
        .map_or(text.len(), |(at, _)| at);
    &text[..end]
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<&'code str> {
        match &self.folded {
            Some(folded) => self.parse_folded(cursor, folded),
            None => self.parse_exact(cursor),
        }
    }
}

/// Convenience function to create a case-sensitive Literal parser
pub fn literal(label: impl Into<String>, expected: impl Into<String>) -> Literal {
    Literal::new(label, expected)
}

/// Convenience function to create a case-insensitive Literal parser
pub fn literal_ci(label: impl Into<String>, expected: impl Into<String>) -> Literal {
    Literal::case_insensitive(label, expected)
}
