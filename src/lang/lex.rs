use super::{token::*, Error, MAX_DIGITS};
use std::iter::Peekable;

type Result<T> = std::result::Result<T, Error>;

fn is_pl0_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_pl0_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_pl0_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Lexical analysis
///
/// Produces one token per call from any character source.
/// A lexical error consumes the offending character before it is
/// returned, so the caller recovers by asking for the next token.

pub struct Scanner<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    line: usize,
    pending: Option<Token>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            chars: source.peekable(),
            line: 1,
            pending: None,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.pending.take() {
            return Ok(token);
        }
        self.whitespace();
        let pk = match self.chars.peek() {
            Some(pk) => *pk,
            None => return Ok(Token::Eof),
        };
        if is_pl0_alphabetic(pk) {
            return Ok(self.alphabetic());
        }
        if is_pl0_digit(pk) {
            return self.number();
        }
        self.minutia()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if ch == Some('\n') {
            self.line += 1;
        }
        ch
    }

    fn next_if_eq(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.next_char();
            return true;
        }
        false
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_pl0_whitespace(*pk) {
                break;
            }
            self.next_char();
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars.peek() {
            if !is_pl0_alphabetic(*pk) && !is_pl0_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.next_char();
        }
        match Token::from_word(&s) {
            Some(token) => token,
            None => Token::Ident(s.into()),
        }
    }

    fn number(&mut self) -> Result<Token> {
        let mut value: i64 = 0;
        let mut digits = 0;
        while let Some(pk) = self.chars.peek() {
            let digit = match pk.to_digit(10) {
                Some(d) => d as i64,
                None => break,
            };
            if digits < MAX_DIGITS {
                value = value * 10 + digit;
            }
            digits += 1;
            self.next_char();
        }
        if digits > MAX_DIGITS {
            self.pending = Some(Token::Number(value));
            return Err(error!(NumberTooLarge, self.line));
        }
        Ok(Token::Number(value))
    }

    fn minutia(&mut self) -> Result<Token> {
        let ch = match self.next_char() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };
        let token = match ch {
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '=' => Token::Operator(Operator::Equal),
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '.' => Token::Period,
            '<' => {
                if self.next_if_eq('=') {
                    Token::Operator(Operator::LessEqual)
                } else if self.next_if_eq('>') {
                    Token::Operator(Operator::NotEqual)
                } else {
                    Token::Operator(Operator::Less)
                }
            }
            '>' => {
                if self.next_if_eq('=') {
                    Token::Operator(Operator::GreaterEqual)
                } else {
                    Token::Operator(Operator::Greater)
                }
            }
            ':' => {
                if self.next_if_eq('=') {
                    Token::Becomes
                } else {
                    return Err(error!(ColonWithoutEqual, self.line));
                }
            }
            _ => {
                return Err(error!(InvalidCharacter, self.line; &format!("{:?}", ch)));
            }
        };
        Ok(token)
    }
}
