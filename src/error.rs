use crate::cursor::Cursor;
use crate::position::Position;
use std::borrow::Cow;
use std::fmt::Write;

/// What the parser reports as found when the input ran out
pub const EOF: &str = "EOF";

/// A structured parse failure
///
/// Combinators wrap the failure of a sub-parser as the `cause` of a new, more
/// specific error, so the chain reads from the outermost context down to the
/// root cause. [`ParseError::full_trace`] renders every level.
///
/// Running out of input is not a separate class of failure; it is reported
/// with `got` set to [`EOF`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {position}")]
pub struct ParseError {
    pub message: Cow<'static, str>,
    pub expected: String,
    pub got: String,
    pub position: Position,
    /// Text of the line the failure happened on
    pub snippet: String,
    #[source]
    pub cause: Option<Box<ParseError>>,
}

impl ParseError {
    /// A leaf failure at the cursor's current position
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        expected: impl Into<String>,
        got: impl Into<String>,
        cursor: &Cursor<'_>,
    ) -> Self {
        ParseError {
            message: message.into(),
            expected: expected.into(),
            got: got.into(),
            position: cursor.position(),
            snippet: cursor.snippet().to_string(),
            cause: None,
        }
    }

    /// A leaf failure for running out of input
    pub fn eof(
        message: impl Into<Cow<'static, str>>,
        expected: impl Into<String>,
        cursor: &Cursor<'_>,
    ) -> Self {
        ParseError::new(message, expected, EOF, cursor)
    }

    /// Wrap `cause` in a new error positioned at the cursor
    ///
    /// Callers restore their checkpoint first, so the new level reports where
    /// the failing combinator started. `expected` and `got` are carried over
    /// from the cause.
    pub fn wrap(
        message: impl Into<Cow<'static, str>>,
        cursor: &Cursor<'_>,
        cause: ParseError,
    ) -> Self {
        ParseError {
            message: message.into(),
            expected: cause.expected.clone(),
            got: cause.got.clone(),
            position: cursor.position(),
            snippet: cursor.snippet().to_string(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Replace what this level reports as expected
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = expected.into();
        self
    }

    /// Whether the input ran out at the root of this failure
    pub fn is_eof(&self) -> bool {
        self.root_cause().got == EOF
    }

    /// Iterate over this error and its causes, outermost first
    pub fn causes(&self) -> impl Iterator<Item = &ParseError> {
        std::iter::successors(Some(self), |error| error.cause.as_deref())
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &ParseError {
        self.causes().last().unwrap_or(self)
    }

    /// Number of levels in the chain, including this one
    pub fn depth(&self) -> usize {
        self.causes().count()
    }

    /// The snippet line with a caret under the failing column
    pub fn formatted_snippet(&self) -> String {
        let gutter = format!("{}| ", self.position.line);
        let indent = gutter.len() + self.position.column.saturating_sub(1);
        format!("{}{}\n{}^", gutter, self.snippet, " ".repeat(indent))
    }

    /// Render every level of the cause chain for terminal display
    pub fn full_trace(&self) -> String {
        let mut trace = String::new();
        for (level, error) in self.causes().enumerate() {
            if level > 0 {
                trace.push_str("\n\n");
            }
            // Writing into a String cannot fail
            let _ = write!(
                trace,
                "{}\nAt: {}\n{}\nExpected: {}\tGot: {}",
                error.message,
                error.position,
                error.formatted_snippet(),
                error.expected,
                error.got,
            );
        }
        trace
    }
}
