use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parsed, Parser};
use crate::position::Span;

/// Parse `operand (operator operand)*`, returning the first operand and the
/// (operator, operand) pairs that followed it
///
/// The chain ends without error when the operator fails. An operator that is
/// not followed by an operand fails the whole chain and restores the cursor.
fn operands<'code, P, O>(
    operand: &P,
    operator: &O,
    cursor: &mut Cursor<'code>,
    who: &'static str,
) -> Result<(P::Output, Vec<(O::Output, P::Output)>), ParseError>
where
    P: Parser<'code>,
    O: Parser<'code>,
{
    let start = cursor.save();

    let first = operand.parse(cursor).map_err(|error| {
        cursor.rollback(start);
        ParseError::wrap(format!("{}: failed to parse initial value.", who), cursor, error)
    })?;

    let mut rest = Vec::new();
    loop {
        let checkpoint = cursor.save();
        let op = match operator.parse(cursor) {
            Ok(op) => op,
            Err(_) => {
                cursor.rollback(checkpoint);
                break;
            }
        };

        match operand.parse(cursor) {
            Ok(right) => rest.push((op.value, right.value)),
            Err(error) => {
                cursor.rollback(start);
                return Err(ParseError::wrap(
                    format!("{}: failed to parse right value.", who),
                    cursor,
                    error,
                ));
            }
        }
    }

    Ok((first.value, rest))
}

/// Parser combinator that folds a chain of binary operations from the left
///
/// The operator parser yields the combining function, so one rule can serve
/// several operators: `1-2-3` evaluates as `(1-2)-3`.
pub struct Chainl1<P, O> {
    label: String,
    operand: P,
    operator: O,
}

impl<P, O> Chainl1<P, O> {
    pub fn new(label: impl Into<String>, operand: P, operator: O) -> Self {
        Chainl1 {
            label: label.into(),
            operand,
            operator,
        }
    }
}

impl<'code, P, O, T, F> Parser<'code> for Chainl1<P, O>
where
    P: Parser<'code, Output = T>,
    O: Parser<'code, Output = F>,
    F: FnOnce(T, T) -> T,
{
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let start = cursor.save();
        let (first, rest) = operands(&self.operand, &self.operator, cursor, "Chainl1")?;

        let value = rest
            .into_iter()
            .fold(first, |acc, (combine, right)| combine(acc, right));
        Ok(Parsed::new(value, Span::new(start, cursor.save())))
    }
}

/// Convenience function to create a Chainl1 parser
pub fn chainl1<'code, P, O, T, F>(operand: P, operator: O) -> Chainl1<P, O>
where
    P: Parser<'code, Output = T>,
    O: Parser<'code, Output = F>,
    F: FnOnce(T, T) -> T,
{
    let label = format!("{} chained by {}", operand.label(), operator.label());
    Chainl1::new(label, operand, operator)
}

/// Parser combinator that folds a chain of binary operations from the right
///
/// Operands keep their order: `a op1 b op2 c` evaluates as
/// `op1(a, op2(b, c))`, so `2^3^2` is `2^(3^2)`.
pub struct Chainr1<P, O> {
    label: String,
    operand: P,
    operator: O,
}

impl<P, O> Chainr1<P, O> {
    pub fn new(label: impl Into<String>, operand: P, operator: O) -> Self {
        Chainr1 {
            label: label.into(),
            operand,
            operator,
        }
    }
}

impl<'code, P, O, T, F> Parser<'code> for Chainr1<P, O>
where
    P: Parser<'code, Output = T>,
    O: Parser<'code, Output = F>,
    F: FnOnce(T, T) -> T,
{
    type Output = T;

    fn label(&self) -> &str {
        &self.label
    }

    fn parse(&self, cursor: &mut Cursor<'code>) -> ParseResult<T> {
        let start = cursor.save();
        let (first, mut rest) = operands(&self.operand, &self.operator, cursor, "Chainr1")?;

        let value = match rest.pop() {
            None => first,
            Some((mut combine, mut acc)) => {
                while let Some((previous, left)) = rest.pop() {
                    acc = combine(left, acc);
                    combine = previous;
                }
                combine(first, acc)
            }
        };
        Ok(Parsed::new(value, Span::new(start, cursor.save())))
    }
}

/// Convenience function to create a Chainr1 parser
pub fn chainr1<'code, P, O, T, F>(operand: P, operator: O) -> Chainr1<P, O>
where
    P: Parser<'code, Output = T>,
    O: Parser<'code, Output = F>,
    F: FnOnce(T, T) -> T,
{
    let label = format!("{} chained by {}", operand.label(), operator.label());
    Chainr1::new(label, operand, operator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::parse_str;
    use crate::position::Position;
    use crate::utf8::{code_point, digit};

    type BinOp = fn(i64, i64) -> i64;

    fn number() -> impl for<'code> Parser<'code, Output = i64> {
        digit().map(|c| i64::from(c.to_digit(10).unwrap_or_default()))
    }

    fn op(symbol: char, f: BinOp) -> impl for<'code> Parser<'code, Output = BinOp> {
        code_point(symbol.to_string(), symbol).map(move |_| f)
    }

    #[test]
    fn test_chainl1_addition() {
        let parser = chainl1(number(), op('+', |a, b| a + b));
        let parsed = parse_str(&parser, "1+2+9").unwrap();

        assert_eq!(parsed.value, 12);
        assert_eq!(parsed.span.len(), 5);
    }

    #[test]
    fn test_chainl1_is_left_associative() {
        let parser = chainl1(number(), op('-', |a, b| a - b));
        assert_eq!(parse_str(&parser, "9-3-2").unwrap().value, 4);
    }

    #[test]
    fn test_chainl1_single_operand() {
        let mut cursor = Cursor::from_start("7;");
        let parsed = chainl1(number(), op('+', |a, b| a + b)).parse(&mut cursor).unwrap();

        assert_eq!(parsed.value, 7);
        assert_eq!(cursor.peek(), Some(';'));
    }

    #[test]
    fn test_chainl1_stops_before_failed_operator() {
        let mut cursor = Cursor::from_start("1+2*3");
        let parsed = chainl1(number(), op('+', |a, b| a + b)).parse(&mut cursor).unwrap();

        assert_eq!(parsed.value, 3);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_chainl1_initial_value_failure() {
        let mut cursor = Cursor::from_start("+1");
        let error = chainl1(number(), op('+', |a, b| a + b)).parse(&mut cursor).unwrap_err();

        assert_eq!(error.message, "Chainl1: failed to parse initial value.");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_chainl1_dangling_operator_restores() {
        let mut cursor = Cursor::from_start("1+2+");
        let error = chainl1(number(), op('+', |a, b| a + b)).parse(&mut cursor).unwrap_err();

        assert_eq!(error.message, "Chainl1: failed to parse right value.");
        assert_eq!(error.position, Position::start());
        assert!(error.is_eof());
        assert_eq!(cursor.position(), Position::start());
    }

    #[test]
    fn test_chainr1_is_right_associative() {
        let parser = chainr1(number(), op('-', |a, b| a - b));
        // 9-(3-2)
        assert_eq!(parse_str(&parser, "9-3-2").unwrap().value, 8);
    }

    #[test]
    fn test_chainr1_power() {
        let parser = chainr1(number(), op('^', |a, b| a.pow(b as u32)));
        // 2^(3^2)
        assert_eq!(parse_str(&parser, "2^3^2").unwrap().value, 512);
    }

    #[test]
    fn test_chainr1_keeps_operand_order() {
        let parser = chainr1(number(), op('/', |a, b| a / b));
        assert_eq!(parse_str(&parser, "8/4").unwrap().value, 2);
    }

    #[test]
    fn test_chainr1_mixed_operators() {
        let operator = op('-', |a, b| a - b).or(op('+', |a, b| a + b));
        let parser = chainr1(number(), operator);
        // 1-(2+(3-4))
        assert_eq!(parse_str(&parser, "1-2+3-4").unwrap().value, 0);
    }

    #[test]
    fn test_chainr1_failures() {
        let error = parse_str(&chainr1(number(), op('+', |a, b| a + b)), "x").unwrap_err();
        assert_eq!(error.message, "Chainr1: failed to parse initial value.");

        let error = parse_str(&chainr1(number(), op('+', |a, b| a + b)), "1+x").unwrap_err();
        assert_eq!(error.message, "Chainr1: failed to parse right value.");
        assert_eq!(error.got, "x");
    }
}
