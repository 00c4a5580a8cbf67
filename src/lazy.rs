use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::utf8::found;
use once_cell::sync::OnceCell;
use std::sync::{Arc, Weak};

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// A factory that calls the function defining the rule builds a new `Lazy` for
/// every level of nesting it reaches. Use [`recursive`] when the rule needs to
/// refer back to itself.
///
/// The factory runs at most once per `Lazy`. Concurrent first uses from
/// several threads block until one of them has built the parser, and all of
/// them then share it.
pub struct Lazy<F, P> {
    label: String,
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(label: impl Into<String>, factory: F) -> Self {
        Lazy {
            label: label.into(),
            factory,
            parser: OnceCell::new(),
        }
    }

    /// Whether the factory has run yet
    pub fn is_built(&self) -> bool {
        self.parser.get().is_some()
    }

    fn get(&self) -> &P {
        self.parser.get_or_init(|| {
            log::debug!("Building lazy parser {}", self.label);
            (self.factory)()
        })
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<P::Output> {
        self.get().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(label: impl Into<String>, factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
{
    Lazy::new(label, factory)
}

/// A recursive rule whose factory receives a handle to the rule itself
///
/// The factory runs once, on first use, and the handle it is given parses
/// through the same built parser at every depth. The handle holds the rule
/// weakly so the grammar does not keep itself alive.
pub struct Recursive<'code, T, F> {
    label: String,
    factory: F,
    parser: Arc<OnceCell<BoxedParser<'code, T>>>,
}

impl<'code, T, F, P> Recursive<'code, T, F>
where
    T: 'code,
    F: Fn(BoxedParser<'code, T>) -> P,
    P: Parser<'code, Output = T> + Send + Sync + 'code,
{
    pub fn new(label: impl Into<String>, factory: F) -> Self {
        Recursive {
            label: label.into(),
            factory,
            parser: Arc::new(OnceCell::new()),
        }
    }

    /// Whether the factory has run yet
    pub fn is_built(&self) -> bool {
        self.parser.get().is_some()
    }

    fn get(&self) -> &BoxedParser<'code, T> {
        self.parser.get_or_init(|| {
            log::debug!("Building recursive parser {}", self.label);
            let this = BoxedParser::new(SelfRef {
                label: self.label.clone(),
                parser: Arc::downgrade(&self.parser),
            });
            BoxedParser::new((self.factory)(this))
        })
    }
}

impl<'code, T, F, P> Parser<'code> for Recursive<'code, T, F>
where
    T: 'code,
    F: Fn(BoxedParser<'code, T>) -> P,
    P: Parser<'code, Output = T> + Send + Sync + 'code,
{
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        self.get().parse(cursor)
    }
}

/// The handle a [`Recursive`] factory receives
struct SelfRef<'code, T> {
    label: String,
    parser: Weak<OnceCell<BoxedParser<'code, T>>>,
}

impl<'code, T> Parser<'code> for SelfRef<'code, T> {
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let rule = self.parser.upgrade();
        match rule.as_deref().and_then(OnceCell::get) {
            Some(parser) => parser.parse(cursor),
            None => Err(ParseError::new(
                format!("Recursive rule {} is no longer available", self.label),
                self.label.clone(),
                found(cursor),
                cursor,
            )),
        }
    }
}

/// Create a recursive rule from a factory that receives the rule itself
pub fn recursive<'code, T, F, P>(label: impl Into<String>, factory: F) -> Recursive<'code, T, F>
where
    T: 'code,
    F: Fn(BoxedParser<'code, T>) -> P,
    P: Parser<'code, Output = T> + Send + Sync + 'code,
{
    Recursive::new(label, factory)
}
