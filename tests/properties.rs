//! Invariants every parser in the crate must hold, checked over generated input

use pcomb::{
    BoxedExt, BoxedParser, Cursor, ManyExt, MapExt, Parser, Position, ThenExt, all_of, any_char,
    attempt, between, chainl1, chainr1, code_point, digit, letter, lexeme, literal, literal_ci,
    many_till, none_of, not, one_of, optional, or, separated_by, sequence, spaces, take_while,
};
use proptest::prelude::*;
use proptest::sample::Index;

type BinOp = fn(usize, usize) -> usize;

fn add(a: usize, b: usize) -> usize {
    a + b
}

fn plus<'code>() -> BoxedParser<'code, BinOp> {
    code_point("plus", '+').map(|_| add as BinOp).boxed()
}

fn count<'code>() -> BoxedParser<'code, usize> {
    digit().many1().map(|digits| digits.len()).boxed()
}

/// A spread of primitives and combinators, all reduced to the same output
fn parsers<'code>() -> Vec<BoxedParser<'code, usize>> {
    vec![
        code_point("a", 'a').map(|_| 1).boxed(),
        literal("abc", "abc").map(str::len).boxed(),
        literal_ci("ABC", "ABC").map(str::len).boxed(),
        one_of("paren", "()").map(|_| 1).boxed(),
        none_of("not a", "a").map(|_| 1).boxed(),
        take_while("letters", char::is_alphabetic).map(str::len).boxed(),
        count(),
        letter().many0().map(|letters| letters.len()).boxed(),
        optional(digit()).map(|digit| usize::from(digit.is_some())).boxed(),
        not(letter()).map(|_| 0).boxed(),
        attempt(letter().then(digit())).map(|_| 2).boxed(),
        between(code_point("open", '('), count(), code_point("close", ')')).boxed(),
        separated_by(letter(), code_point("comma", ',')).map(|items| items.len()).boxed(),
        many_till(any_char(), code_point("close", ')')).map(|items| items.len()).boxed(),
        chainl1(count(), plus()).boxed(),
        chainr1(count(), plus()).boxed(),
        lexeme(letter()).map(|_| 1).boxed(),
        spaces().map(str::len).boxed(),
        or(
            "letter or digits",
            vec![letter().map(|_| 1).boxed(), count()],
        )
        .boxed(),
        all_of("letter", vec![letter().map(|_| 1).boxed(), any_char().map(|_| 1).boxed()]).boxed(),
        sequence("a then b", vec![literal("a", "a").boxed(), literal("b", "b").boxed()])
            .map(str::len)
            .boxed(),
    ]
}

/// Cursor over `input` advanced by an arbitrary number of code points
fn cursor_at(input: &str, skip: Index) -> Cursor<'_> {
    let target = skip.index(input.chars().count() + 1);
    let mut cursor = Cursor::from_start(input);
    let mut skipped = 0;
    while skipped < target && cursor.consume(1).is_some() {
        skipped += 1;
    }
    cursor
}

/// Count line breaks the way the cursor does: `\r\n`, `\r` and `\n` each once
fn line_breaks(input: &str) -> usize {
    input.replace("\r\n", "\n").chars().filter(|&c| c == '\r' || c == '\n').count()
}

proptest! {
    #[test]
    fn failure_never_consumes(input in "[abcABC()+,0-9 \r\n]{0,24}", skip in any::<Index>()) {
        for parser in parsers() {
            let mut cursor = cursor_at(&input, skip);
            let before = cursor.position();

            match parser.parse(&mut cursor) {
                Err(error) => {
                    prop_assert_eq!(cursor.position(), before, "{} moved on failure", parser.label());
                    prop_assert_eq!(error.position, before);
                }
                Ok(parsed) => {
                    prop_assert!(cursor.offset() >= before.offset, "{} went backwards", parser.label());
                    prop_assert_eq!(parsed.span.start, before);
                    prop_assert_eq!(parsed.span.end, cursor.position());
                    prop_assert_eq!(parsed.span.is_empty(), cursor.offset() == before.offset);
                }
            }
        }
    }

    #[test]
    fn consume_tracks_lines(input in "[ab\r\n]{0,32}") {
        let mut cursor = Cursor::from_start(&input);
        let mut last = cursor.position();

        while let Some((text, span)) = cursor.consume(1) {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(span.start, last);
            prop_assert!(span.end.offset > last.offset);
            prop_assert!(cursor.column() >= 1);
            last = cursor.position();
        }

        prop_assert_eq!(cursor.offset(), input.len());
        prop_assert_eq!(cursor.line(), line_breaks(&input) + 1);
        prop_assert_eq!(cursor.line_starts().len(), if input.is_empty() { 0 } else { cursor.line() });
    }

    #[test]
    fn snippet_is_current_line(input in "[ab\r\n]{0,32}", skip in any::<Index>()) {
        let cursor = cursor_at(&input, skip);
        let snippet = cursor.snippet();

        prop_assert!(!snippet.contains('\n'));
        prop_assert!(!snippet.contains('\r'));
        prop_assert!(input.contains(snippet));
    }

    #[test]
    fn rollback_restores_everything(input in "[ab\r\n]{0,32}", first in 0usize..16, second in 0usize..16) {
        let mut cursor = Cursor::from_start(&input);
        let _ = cursor.consume(first);
        let checkpoint = cursor.save();
        let _ = cursor.consume(second);

        cursor.rollback(checkpoint);
        prop_assert_eq!(cursor.position(), checkpoint);
    }

    #[test]
    fn or_prefers_first_match(word in "[a-z]{1,8}") {
        let longer = format!("{}x", word);
        let parser = or(
            "word",
            vec![literal("short", word.clone()).boxed(), literal("long", longer.clone()).boxed()],
        );

        let parsed = parser.parse(&mut Cursor::from_start(&longer)).unwrap();
        prop_assert_eq!(parsed.value, word.as_str());
    }

    #[test]
    fn chainl1_sums_digit_runs(counts in prop::collection::vec(1usize..4, 1..6)) {
        let input = counts.iter().map(|n| "7".repeat(*n)).collect::<Vec<_>>().join("+");
        let parsed = chainl1(count(), plus()).parse(&mut Cursor::from_start(&input)).unwrap();

        prop_assert_eq!(parsed.value, counts.iter().sum::<usize>());
        prop_assert_eq!(parsed.span.end.offset, input.len());
    }
}

#[test]
fn crlf_counts_as_one_break() {
    let mut cursor = Cursor::from_start("line1\r\nline2");
    cursor.consume(6).unwrap();
    assert_eq!(cursor.position(), Position::new(7, 2, 1));
}
