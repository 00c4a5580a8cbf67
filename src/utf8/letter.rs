use crate::utf8::char::{CharClass, Predicate};

/// Parser for a single Unicode letter
pub fn letter() -> CharClass {
    let is_letter: fn(char) -> bool = |c| c.is_alphabetic();
    Predicate::new("letter", is_letter)
}
