use std::fmt;

use super::cursor::Cursor;

/// A lexical token of the front matter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    EndOfStream,
    OpenParen,
    CloseParen,
    Colon,
    Semicolon,
    Asterisk,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    /// A run of ASCII letters and underscores. May be empty.
    Scalar(&'a [u8]),
    /// `#`
    Comment,
    Dash,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfStream => f.write_str("end of stream"),
            Token::OpenParen => f.write_str("`(`"),
            Token::CloseParen => f.write_str("`)`"),
            Token::Colon => f.write_str("`:`"),
            Token::Semicolon => f.write_str("`;`"),
            Token::Asterisk => f.write_str("`*`"),
            Token::OpenBracket => f.write_str("`[`"),
            Token::CloseBracket => f.write_str("`]`"),
            Token::OpenBrace => f.write_str("`{`"),
            Token::CloseBrace => f.write_str("`}`"),
            Token::Comma => f.write_str("`,`"),
            Token::Scalar(s) if s.is_empty() => f.write_str("non-identifier text"),
            Token::Scalar(s) => write!(f, "\"{}\"", String::from_utf8_lossy(s)),
            Token::Comment => f.write_str("`#`"),
            Token::Dash => f.write_str("`-`"),
        }
    }
}

/// Single-byte token kinds, indexed by byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Punct {
    None,
    EndOfStream,
    OpenParen,
    CloseParen,
    Colon,
    Semicolon,
    Asterisk,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    Comment,
    Dash,
}

const PUNCT: [Punct; 256] = {
    let mut table = [Punct::None; 256];
    table[0] = Punct::EndOfStream;
    table[b'(' as usize] = Punct::OpenParen;
    table[b')' as usize] = Punct::CloseParen;
    table[b':' as usize] = Punct::Colon;
    table[b';' as usize] = Punct::Semicolon;
    table[b'*' as usize] = Punct::Asterisk;
    table[b'[' as usize] = Punct::OpenBracket;
    table[b']' as usize] = Punct::CloseBracket;
    table[b'{' as usize] = Punct::OpenBrace;
    table[b'}' as usize] = Punct::CloseBrace;
    table[b',' as usize] = Punct::Comma;
    table[b'#' as usize] = Punct::Comment;
    table[b'-' as usize] = Punct::Dash;
    table
};

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Reads the next token at the cursor.
///
/// Punctuation is matched on the current byte without skipping anything.
/// Otherwise leading whitespace and line breaks are skipped and the longest
/// run of letters and `_` becomes a scalar, which is empty when the next
/// byte is neither.
pub fn next_token<'a>(cur: &mut Cursor<'a>) -> Token<'a> {
    if cur.finished() {
        return Token::EndOfStream;
    }

    let punct = match PUNCT[cur.peek() as usize] {
        Punct::None => None,
        Punct::EndOfStream => Some(Token::EndOfStream),
        Punct::OpenParen => Some(Token::OpenParen),
        Punct::CloseParen => Some(Token::CloseParen),
        Punct::Colon => Some(Token::Colon),
        Punct::Semicolon => Some(Token::Semicolon),
        Punct::Asterisk => Some(Token::Asterisk),
        Punct::OpenBracket => Some(Token::OpenBracket),
        Punct::CloseBracket => Some(Token::CloseBracket),
        Punct::OpenBrace => Some(Token::OpenBrace),
        Punct::CloseBrace => Some(Token::CloseBrace),
        Punct::Comma => Some(Token::Comma),
        Punct::Comment => Some(Token::Comment),
        Punct::Dash => Some(Token::Dash),
    };
    if let Some(token) = punct {
        if token != Token::EndOfStream {
            cur.advance();
        }
        return token;
    }

    cur.skip_whitespace();
    let start = cur.at;
    while is_ident_byte(cur.peek()) {
        cur.advance();
    }
    Token::Scalar(&cur.data()[start..cur.at])
}
