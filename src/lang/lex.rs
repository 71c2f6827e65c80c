use super::{token::*, Column};
use crate::mach::Array;
use std::rc::Rc;

pub fn lex(s: &str) -> Vec<(Column, Token)> {
    Lexer {
        chars: s.chars().peekable(),
        col: 0..0,
    }
    .collect()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn digit(ch: char) -> Token {
    let value = ch.to_digit(10).unwrap_or_default();
    Token::Literal(Rc::new(Array::scalar(i64::from(value))))
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: Column,
}

impl<'a> Lexer<'a> {
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col.end += 1;
        Some(ch)
    }

    fn minutia(&mut self, ch: char) -> Token {
        if let Some(verb) = Verb::from_char(ch) {
            return Token::Verb(verb);
        }
        // `i.` is iota as J spells it.
        if ch == 'i' && self.chars.peek() == Some(&'.') {
            self.advance();
            return Token::Verb(Verb::Tilde);
        }
        Token::Name(ch)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (Column, Token);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.col.start = self.col.end;
            let ch = self.advance()?;
            if is_whitespace(ch) {
                continue;
            }
            let token = if ch.is_ascii_digit() {
                digit(ch)
            } else {
                self.minutia(ch)
            };
            return Some((self.col.clone(), token));
        }
    }
}
