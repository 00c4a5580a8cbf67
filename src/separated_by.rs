use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;

/// Parser combinator that matches a list of items separated by a delimiter
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (delimiter + item). It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with delimiter `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with delimiter `;` → `vec!['1', '2', '3']`
///
/// # Note
/// - Requires at least one item
/// - The list ends without error the first time the delimiter fails
/// - A trailing delimiter is an error
/// - Does not handle whitespace automatically
pub struct SeparatedBy<P, D> {
    label: String,
    parser: P,
    delimiter: D,
}

impl<P, D> SeparatedBy<P, D> {
    pub fn new(label: impl Into<String>, parser: P, delimiter: D) -> Self {
        SeparatedBy {
            label: label.into(),
            parser,
            delimiter,
        }
    }
}

impl<'code, P, D> Parser<'code> for SeparatedBy<P, D>
where
    P: Parser<'code>,
    D: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<Self::Output> {
        let start = cursor.save();
        let fail = |cursor: &mut Cursor<'code>, error| {
            cursor.rollback(start);
            ParseError::wrap("SeparatedBy combinator failed.", cursor, error)
        };

        let first = match self.parser.parse(cursor) {
            Ok(first) => first,
            Err(error) => return Err(fail(cursor, error)),
        };
        let mut items = vec![first.value];
        let mut progressed = true;

        while progressed {
            let checkpoint = cursor.save();
            if self.delimiter.parse(cursor).is_err() {
                cursor.rollback(checkpoint);
                break;
            }

            match self.parser.parse(cursor) {
                Ok(item) => {
                    items.push(item.value);
                    progressed = cursor.offset() > checkpoint.offset;
                }
                Err(error) => return Err(fail(cursor, error)),
            }
        }

        Ok(Parsed::new(items, Span::new(start, cursor.save())))
    }
}

/// Convenience function to create a SeparatedBy parser
pub fn separated_by<'code, P, D>(parser: P, delimiter: D) -> SeparatedBy<P, D>
where
    P: Parser<'code>,
    D: Parser<'code>,
{
    let label = format!("{} separated by {}", parser.label(), delimiter.label());
    SeparatedBy::new(label, parser, delimiter)
}

/// Extension trait to add .separated_by() method support for parsers
pub trait SeparatedByExt<'code>: Parser<'code> + Sized {
    fn separated_by<D>(self, delimiter: D) -> SeparatedBy<Self, D>
    where
        D: Parser<'code>,
    {
        separated_by(self, delimiter)
    }
}

/// Implement SeparatedByExt for all parsers
impl<'code, P> SeparatedByExt<'code> for P where P: Parser<'code> {}
