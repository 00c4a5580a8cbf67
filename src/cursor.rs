use crate::position::{Position, Span};
use std::sync::Arc;

/// A position over an immutable input text
///
/// The cursor owns its position only. The input is borrowed and the index of
/// line starts is shared between clones, so saving and restoring a position is
/// a copy of three integers regardless of input size.
///
/// Parsers receive `&mut Cursor` and must leave it exactly where they found it
/// when they fail. Combinators that try something and may need to undo it pair
/// every [`Cursor::save`] with a [`Cursor::rollback`] on each failure path.
#[derive(Debug, Clone)]
pub struct Cursor<'code> {
    input: &'code str,
    /// Ascending byte offsets at which lines begin. `[0, ...]` for any
    /// non-empty input, empty for empty input.
    line_starts: Arc<[usize]>,
    offset: usize,
    line: usize,
    column: usize,
}

fn is_line_terminator(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// The first unit of `text` as the parsers see it, with its byte width
///
/// A `\r\n` pair reads as a single `'\n'` two bytes wide.
pub(crate) fn next_unit(text: &str) -> Option<(char, usize)> {
    if text.starts_with("\r\n") {
        return Some(('\n', 2));
    }
    text.chars().next().map(|ch| (ch, ch.len_utf8()))
}

fn index_line_starts(input: &str) -> Arc<[usize]> {
    if input.is_empty() {
        return Arc::from(Vec::new());
    }

    let bytes = input.as_bytes();
    let mut starts = vec![0];
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                i += 2;
                starts.push(i);
            }
            b'\r' | b'\n' => {
                i += 1;
                starts.push(i);
            }
            _ => i += 1,
        }
    }
    starts.into()
}

impl<'code> Cursor<'code> {
    /// Create a cursor over `input` starting at `start`
    ///
    /// An offset past the end of the input is clamped to the end.
    pub fn new(input: &'code str, start: Position) -> Self {
        Cursor {
            input,
            line_starts: index_line_starts(input),
            offset: start.offset.min(input.len()),
            line: start.line,
            column: start.column,
        }
    }

    /// Create a cursor at offset 0, line 1, column 1
    pub fn from_start(input: &'code str) -> Self {
        Cursor::new(input, Position::start())
    }

    pub fn input(&self) -> &'code str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Snapshot the current position
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Capture a checkpoint to return to with [`Cursor::rollback`]
    pub fn save(&self) -> Position {
        self.position()
    }

    /// Restore a checkpoint taken by [`Cursor::save`]
    ///
    /// Offset, line and column are always restored together.
    pub fn rollback(&mut self, checkpoint: Position) {
        debug_assert!(checkpoint.offset <= self.input.len());
        self.offset = checkpoint.offset;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }

    /// The unconsumed rest of the input
    ///
    /// Empty if the cursor was placed inside a code point.
    pub fn remaining(&self) -> &'code str {
        self.input.get(self.offset..).unwrap_or_default()
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// The code point under the cursor, if any
    ///
    /// A `\r\n` pair is reported as `'\n'`, matching how [`Cursor::consume`]
    /// steps over it as one unit.
    pub fn peek(&self) -> Option<char> {
        next_unit(self.remaining()).map(|(ch, _)| ch)
    }

    /// Advance over `n` code points, returning the consumed text and its span
    ///
    /// A `\r\n` pair counts as one code point. If fewer than `n` are left the
    /// cursor does not move and `None` is returned.
    pub fn consume(&mut self, n: usize) -> Option<(&'code str, Span)> {
        let checkpoint = self.save();

        for _ in 0..n {
            let Some(ch) = self.peek() else {
                self.rollback(checkpoint);
                return None;
            };

            if is_line_terminator(ch) {
                self.progress_line();
            } else {
                self.advance_column(ch.len_utf8());
            }
        }

        let end = self.save();
        Some((
            &self.input[checkpoint.offset..end.offset],
            Span::new(checkpoint, end),
        ))
    }

    /// Advance over exactly `len` bytes of input, code point by code point
    ///
    /// Fails without moving if the input is shorter or if `len` would split a
    /// code point or a `\r\n` pair.
    pub fn consume_bytes(&mut self, len: usize) -> Option<(&'code str, Span)> {
        let checkpoint = self.save();
        let target = checkpoint.offset + len;

        while self.offset < target {
            if self.consume(1).is_none() {
                self.rollback(checkpoint);
                return None;
            }
        }

        if self.offset != target {
            self.rollback(checkpoint);
            return None;
        }

        let end = self.save();
        Some((
            &self.input[checkpoint.offset..end.offset],
            Span::new(checkpoint, end),
        ))
    }

    fn advance_column(&mut self, width: usize) {
        self.column += 1;
        self.offset += width;
    }

    /// Move to the start of the next line
    ///
    /// Steps over the next line terminator at or after the cursor, two bytes for
    /// `\r\n` and one for a lone `\r` or `\n`, then bumps the line and resets the
    /// column to 1. Returns `false` without moving if no terminator is left.
    pub fn progress_line(&mut self) -> bool {
        let rest = self.remaining();
        let Some(at) = rest.find(is_line_terminator) else {
            return false;
        };

        let width = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        self.offset += at + width;
        self.line += 1;
        self.column = 1;
        true
    }

    /// Index into [`Cursor::line_starts`] of the last line start at or before
    /// the cursor, found by binary search
    pub fn line_start_before_current_offset(&self) -> Option<usize> {
        self.line_starts
            .partition_point(|&start| start <= self.offset)
            .checked_sub(1)
    }

    /// The text of the line the cursor is on, without its terminator
    ///
    /// Falls back to the whole input when there is no line index.
    pub fn snippet(&self) -> &'code str {
        let Some(index) = self.line_start_before_current_offset() else {
            return self.input;
        };

        let start = self.line_starts[index];
        let end = self
            .line_starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.input.len());
        self.input[start..end].trim_end_matches(is_line_terminator)
    }
}
