//! Interactive read-print loop over the lexer.
//!
//! Each line of input is scanned by a fresh lexer and the resulting
//! tokens are printed one per line, until the input stream ends.

use std::io::{self, BufRead, Write};

use crate::lexer::{lexer::Lexer, tokens::TokenKind};

/// Shown at the beginning of each REPL line.
const PROMPT: &str = ">> ";

/// Reads lines from `input` until end of stream, printing every token
/// the lexer produces for each line.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}
