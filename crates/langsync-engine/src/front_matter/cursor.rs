/// Horizontal whitespace recognised by the scanner.
pub const WHITESPACE: [u8; 4] = [b' ', b'\t', 0x0B, 0x0C];

/// Line break bytes recognised by the scanner.
pub const LINE_BREAK: [u8; 2] = [b'\n', b'\r'];

pub fn is_whitespace(b: u8) -> bool {
    WHITESPACE.contains(&b)
}

pub fn is_line_break(b: u8) -> bool {
    LINE_BREAK.contains(&b)
}

/// A forward-only scan position over a front matter buffer.
///
/// `at` starts at the beginning of the front matter span inside `data` and
/// only ever moves forward until `end`. Reads past the buffer yield `0`, as
/// if the buffer were NUL-terminated, so the tokenizer can treat that as end
/// of stream.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    /// Current position.
    pub at: usize,
    /// Last byte of the span (the line break before the closing delimiter).
    pub end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], start: usize, end: usize) -> Self {
        Self {
            data,
            at: start,
            end,
        }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// True once the scan has reached the span end.
    pub fn finished(&self) -> bool {
        self.at >= self.end
    }

    /// Byte at the current position, `0` past the buffer.
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `offset` bytes ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.data.get(self.at + offset).copied().unwrap_or(0)
    }

    pub fn advance(&mut self) {
        self.at += 1;
    }

    /// Moves forward to `offset`. Never moves backwards.
    pub fn jump_to(&mut self, offset: usize) {
        self.at = self.at.max(offset);
    }

    /// Offset of the first line break at or after the current position, or
    /// the buffer length when the line is unterminated.
    pub fn line_end(&self) -> usize {
        self.data
            .get(self.at..)
            .and_then(|rest| rest.iter().position(|&b| is_line_break(b)))
            .map_or(self.data.len().max(self.at), |i| self.at + i)
    }

    /// The bytes from the current position to the end of the line.
    pub fn rest_of_line(&self) -> &'a [u8] {
        let eol = self.line_end();
        self.data.get(self.at..eol).unwrap_or(&[])
    }

    /// Skips plain spaces only (not tabs).
    pub fn skip_spaces(&mut self) {
        while self.peek() == b' ' {
            self.advance();
        }
    }

    /// Skips whitespace and line breaks, stopping at the span end.
    pub fn skip_whitespace(&mut self) {
        while !self.finished() {
            let b = self.peek();
            if is_whitespace(b) || is_line_break(b) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Moves past the next `\n`, or to the span end if there is none.
    pub fn skip_to_next_line(&mut self) {
        while self.at < self.end {
            let b = self.peek();
            self.advance();
            if b == b'\n' {
                return;
            }
        }
        self.at = self.at.max(self.end);
    }
}

/// Strips trailing spaces from a byte slice.
pub fn trim_spaces_end(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
    &bytes[..len]
}

/// Strips leading and trailing spaces from a byte slice.
pub fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    trim_spaces_end(&bytes[start..])
}
