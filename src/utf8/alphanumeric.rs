use crate::utf8::char::{CharClass, Predicate};

/// Parser for a single Unicode letter or digit
pub fn alphanumeric() -> CharClass {
    let is_alphanumeric: fn(char) -> bool = |c| c.is_alphanumeric();
    Predicate::new("alphanumeric", is_alphanumeric)
}
