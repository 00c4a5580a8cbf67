use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::utf8::found;

/// Parser combinator that requires every parser to match at the same position
///
/// Each parser runs from the starting position; the cursor is rolled back
/// between attempts. On success the cursor is left where the last parser left
/// it and that parser's value is returned, so the earlier ones act as guards.
/// Use [`then`](crate::then::then) to match parsers one after another.
pub struct AllOf<'code, T> {
    label: String,
    parsers: Vec<BoxedParser<'code, T>>,
}

impl<'code, T> AllOf<'code, T> {
    pub fn new(label: impl Into<String>, parsers: Vec<BoxedParser<'code, T>>) -> Self {
        AllOf {
            label: label.into(),
            parsers,
        }
    }
}

impl<'code, T> Parser<'code> for AllOf<'code, T> {
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let checkpoint = cursor.save();
        let mut last = None;

        for parser in &self.parsers {
            cursor.rollback(checkpoint);
            match parser.parse(cursor) {
                Ok(parsed) => last = Some(parsed),
                Err(error) => {
                    cursor.rollback(checkpoint);
                    return Err(ParseError::wrap("AllOf combinator failed", cursor, error));
                }
            }
        }

        last.ok_or_else(|| {
            ParseError::new(
                "AllOf combinator failed",
                self.label.clone(),
                found(cursor),
                cursor,
            )
        })
    }
}

/// Convenience function to create an AllOf parser
pub fn all_of<'code, T>(label: impl Into<String>, parsers: Vec<BoxedParser<'code, T>>) -> AllOf<'code, T> {
    AllOf::new(label, parsers)
}
