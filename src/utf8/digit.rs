use crate::utf8::char::{CharClass, Predicate};

/// Parser for a single ASCII decimal digit
pub fn digit() -> CharClass {
    let is_digit: fn(char) -> bool = |c| c.is_ascii_digit();
    Predicate::new("digit", is_digit)
}
