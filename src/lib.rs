//! # pcomb - Parser Combinator Library
//!
//! Build recursive-descent parsers for textual grammars out of small,
//! composable parsers, with source positions tracked for you and structured,
//! chained diagnostics on failure.
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Backtracking**: A failing parser always leaves the cursor where it found it
//! - **Rich error reporting**: Every combinator adds a level to the cause chain,
//!   rendered with line, column and the offending line by [`ParseError::full_trace`]
//! - **Recursion**: [`recursive`] builds a self-referential rule once, on
//!   first use, and [`lazy`] defers building any parser the same way
//!
//! ```
//! use pcomb::{between, code_point, letter, many1, parse_str};
//!
//! let word = between(code_point("open", '['), many1(letter()), code_point("close", ']'));
//! let parsed = parse_str(&word, "[abc]").unwrap();
//! assert_eq!(parsed.value, vec!['a', 'b', 'c']);
//! assert_eq!(parsed.span.len(), 5);
//! ```

pub mod all_of;
pub mod attempt;
pub mod between;
pub mod chain;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod many;
pub mod many_till;
pub mod map;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod separated_by;
pub mod sequence;
pub mod then;
pub mod traced;
pub mod utf8;

pub use all_of::{AllOf, all_of};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use between::{Between, between};
pub use chain::{Chainl1, Chainr1, chainl1, chainr1};
pub use cursor::Cursor;
pub use eof::{EndOfInput, end_of_input};
pub use error::{EOF, ParseError};
pub use filter::{Filter, FilterExt, filter};
pub use lazy::{Lazy, Recursive, lazy, recursive};
pub use many::{Many0, Many1, ManyExt, many0, many1};
pub use many_till::{ManyTill, ManyTillExt, many_till};
pub use map::{Map, MapExt, map};
pub use not::{Not, NotExt, not};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedExt, BoxedParser, ParseResult, Parsed, Parser, parse_str};
pub use position::{Position, Span, Spanned, spanned};
pub use separated_by::{SeparatedBy, SeparatedByExt, separated_by};
pub use sequence::{Sequence, sequence};
pub use then::{KeepLeft, KeepRight, Then, ThenExt, keep_left, keep_right, then};
pub use traced::{Traced, TracedExt, traced};
pub use utf8::{
    CharClass, CodePoint, Lexeme, LexemeExt, Literal, OneOf, Predicate, TakeWhile, alphanumeric, any_char,
    code_point, digit, letter, lexeme, literal, literal_ci, none_of, one_of, predicate, spaces,
    take_while, whitespace,
};
