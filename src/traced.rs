use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that logs every attempt of the inner parser
///
/// Logs at `trace` level through the `log` facade before each attempt and
/// after it returns. Parsing behaviour is unchanged.
pub struct Traced<P> {
    name: String,
    parser: P,
}

impl<P> Traced<P> {
    pub fn new(name: impl Into<String>, parser: P) -> Self {
        Traced {
            name: name.into(),
            parser,
        }
    }
}

impl<'code, P> Parser<'code> for Traced<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        self.parser.label()
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<P::Output> {
        log::trace!("Trying {} at {}", self.name, cursor.position());
        let result = self.parser.parse(cursor);
        match &result {
            Ok(parsed) => log::trace!(
                "{} matched {:?} from {} to {}",
                self.name,
                parsed.span.slice(cursor.input()),
                parsed.span.start,
                parsed.span.end
            ),
            Err(error) => log::trace!("{} failed: {}", self.name, error),
        }
        result
    }
}

/// Convenience function to create a Traced parser
pub fn traced<'code, P>(name: impl Into<String>, parser: P) -> Traced<P>
where
    P: Parser<'code>,
{
    Traced::new(name, parser)
}

/// Extension trait to add .traced() method support for parsers
pub trait TracedExt<'code>: Parser<'code> + Sized {
    fn traced(self, name: impl Into<String>) -> Traced<Self> {
        Traced::new(name, self)
    }
}

/// Implement TracedExt for all parsers
impl<'code, P> TracedExt<'code> for P where P: Parser<'code> {}
