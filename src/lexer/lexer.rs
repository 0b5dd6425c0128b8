use super::tokens::{lookup_ident, Token, TokenKind};

/// A pull-based scanner over an immutable source string.
///
/// The lexer holds the full source and a small amount of cursor state;
/// each call to [`Lexer::next_token`] produces exactly one token and
/// advances the cursor. Nothing is buffered ahead of the caller, so a
/// parser can interleave with the lexer without materialising the token
/// stream. The sequence is not restartable; scan the same text again by
/// constructing a new `Lexer`.
pub struct Lexer {
    /// The source text being scanned.
    input: Vec<u8>,
    /// Index of the character currently staged in `ch`.
    position: usize,
    /// Index of the next character to be read.
    read_position: usize,
    /// The character under the cursor, 0 once the input is exhausted.
    ch: u8,
}

impl Lexer {
    /// Creates a lexer positioned at the first character of `input`.
    pub fn new(input: &str) -> Lexer {
        let mut lexer = Lexer {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token in the input, advancing the cursor.
    ///
    /// Never fails: unrecognised characters come back as
    /// `TokenKind::Illegal` tokens, and once the input is exhausted every
    /// further call returns the `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => Token::new(TokenKind::Assign, "="),
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'!' => Token::new(TokenKind::Bang, "!"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Lt, "<"),
            b'>' => Token::new(TokenKind::Gt, ">"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::Semicolon, ";"),
            b'(' => Token::new(TokenKind::Lparen, "("),
            b')' => Token::new(TokenKind::Rparen, ")"),
            b'{' => Token::new(TokenKind::Lbrace, "{"),
            b'}' => Token::new(TokenKind::Rbrace, "}"),
            0 => Token::new(TokenKind::Eof, ""),
            ch => {
                if is_letter(ch) {
                    // The identifier scan already consumed past the
                    // lexeme, so return without the trailing advance.
                    let literal = self.read_identifier();
                    return Token::new(lookup_ident(&literal), literal);
                } else if ch.is_ascii_digit() {
                    return Token::new(TokenKind::Int, self.read_number());
                } else {
                    Token::new(TokenKind::Illegal, (ch as char).to_string())
                }
            }
        };

        self.read_char();
        token
    }

    /// Stages the next character and advances both cursors. Past the end
    /// of the input `ch` is pinned to the 0 sentinel.
    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = 0;
        } else {
            self.ch = self.input[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
