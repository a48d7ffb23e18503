// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display};

use log::{debug, trace};
use strum::AsRefStr;
use thiserror::Error;

use crate::FileLocation;

use super::{Keyword, Token, TokenKind};

/// Scans plotscript source text into [`Token`]s.
///
/// `position` is the byte offset of `current`, `read_position` the offset of
/// the character after it. `current` is `None` once the input is exhausted.
pub struct Lexer<'source_code> {
    input: &'source_code str,
    position: usize,
    read_position: usize,

    current: Option<char>,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            current: None,
            line: 0,
            column: 0,
            errors: Vec::new(),
        };

        lexer.advance();
        lexer
    }

    /// Returns the next token. After the input is exhausted, every call
    /// returns an [`TokenKind::EndOfInput`] token.
    pub fn get_next_token(&mut self) -> Token<'source_code> {
        self.skip_whitespace();

        let Some(c) = self.current else {
            return Token::end_of_input();
        };

        let token = match c {
            'a'..='z' | 'A'..='Z' | '_' => self.read_identifier(),
            '0'..='9' => self.read_number(),

            _ => match TokenKind::from_symbol(c) {
                Some(kind) => self.read_single_char_token(kind),
                None => self.read_illegal_character(c),
            },
        };

        trace!("Lexed {token}");
        token
    }

    /// The location of the character that will be scanned next.
    #[must_use]
    pub fn location(&self) -> FileLocation {
        FileLocation::new(self.position, self.line, self.column)
    }

    /// Every diagnostic produced so far, in the order the tokens were lexed.
    #[must_use]
    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    /// Drains the lexer, excluding the final [`TokenKind::EndOfInput`] token.
    /// Only the diagnostics of the drained tokens are returned.
    pub fn collect_all(mut self) -> (Vec<Token<'source_code>>, Vec<LexerError>) {
        let first_error = self.errors.len();
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.errors.split_off(first_error))
    }

    fn read_single_char_token(&mut self, kind: TokenKind) -> Token<'source_code> {
        let literal = &self.input[self.position..self.read_position];
        self.advance();

        Token::new(kind, literal)
    }

    fn read_illegal_character(&mut self, character: char) -> Token<'source_code> {
        let location = self.location();
        debug!("Illegal character {character:?} at {location}");

        self.errors.push(LexerError {
            location,
            kind: LexerErrorKind::IllegalCharacter { character },
        });

        self.read_single_char_token(TokenKind::Illegal)
    }

    fn read_identifier(&mut self) -> Token<'source_code> {
        let location = self.location();
        let literal = self.read_while(is_letter);

        let kind = match Keyword::parse(literal) {
            Some(keyword) => {
                debug!("Reserved keyword `{keyword}` at {location}");
                self.errors.push(LexerError {
                    location,
                    kind: LexerErrorKind::ReservedKeyword { keyword },
                });
                keyword.token_kind()
            }
            None => TokenKind::Identifier,
        };

        Token::new(kind, literal)
    }

    fn read_number(&mut self) -> Token<'source_code> {
        let literal = self.read_while(|c| c.is_ascii_digit());
        Token::new(TokenKind::Integer, literal)
    }

    /// Consumes the current character and every following character that
    /// matches `predicate`. The current character is assumed to match.
    fn read_while(&mut self, predicate: fn(char) -> bool) -> &'source_code str {
        let begin = self.position;

        while self.peek_char().is_some_and(predicate) {
            self.advance();
        }

        let end = self.read_position;
        self.advance();

        &self.input[begin..end]
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.current {
            self.advance();
        }
    }

    fn advance(&mut self) {
        match self.current {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(..) => self.column += 1,
            None => (),
        }

        self.current = self.char_at(self.read_position);
        self.position = self.read_position;
        self.read_position += self.current.map_or(0, char::len_utf8);
    }

    fn peek_char(&self) -> Option<char> {
        self.char_at(self.read_position)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.input.get(offset..)?.chars().next()
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token<'source_code>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

/// Lexes the whole input, including the trailing [`TokenKind::EndOfInput`].
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(input);
    let mut tokens: Vec<Token<'_>> = lexer.by_ref().collect();
    tokens.push(lexer.get_next_token());
    tokens
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Illegal character `{character}`")]
    IllegalCharacter { character: char },

    #[error("`{keyword}` is a reserved word and can't be used yet")]
    ReservedKeyword { keyword: Keyword },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("h", Token::new(TokenKind::Identifier, "h"))]
    #[case("s ", Token::new(TokenKind::Identifier, "s"))]
    #[case("  \t\r\ncat", Token::new(TokenKind::Identifier, "cat"))]
    #[case("snake_case", Token::new(TokenKind::Identifier, "snake_case"))]
    #[case("cat42", Token::new(TokenKind::Identifier, "cat"))]
    #[case("func", Token::new(TokenKind::Illegal, "func"))]
    #[case("function", Token::new(TokenKind::Identifier, "function"))]
    #[case("42", Token::new(TokenKind::Integer, "42"))]
    #[case("007 ", Token::new(TokenKind::Integer, "007"))]
    #[case("12ab", Token::new(TokenKind::Integer, "12"))]
    #[case("-1", Token::new(TokenKind::Illegal, "-"))]
    #[case("==", Token::new(TokenKind::Equal, "="))]
    #[case("#", Token::new(TokenKind::Illegal, "#"))]
    #[case("\0", Token::new(TokenKind::Illegal, "\0"))]
    #[case("€", Token::new(TokenKind::Illegal, "€"))]
    #[case("", Token::end_of_input())]
    #[case(" \n\t\r ", Token::end_of_input())]
    fn get_next_token(#[case] input: &'static str, #[case] expected: Token<'static>) {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.get_next_token(), expected);
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.get_next_token(), Token::new(TokenKind::Identifier, "x"));

        for _ in 0..5 {
            assert_eq!(lexer.get_next_token(), Token::end_of_input());
        }

        assert_eq!(lexer.location(), FileLocation::new(1, 0, 1));
    }

    #[test]
    fn cursor_invariants_hold() {
        let input = "a = 1;\n  b€";
        let mut lexer = Lexer::new(input);

        loop {
            assert!(lexer.position <= lexer.read_position);
            assert!(lexer.read_position <= input.len());
            assert_eq!(lexer.current, input[lexer.position..].chars().next());

            if lexer.get_next_token().is_end_of_input() {
                break;
            }
        }
    }

    #[test]
    fn location_tracks_lines_and_columns() {
        let mut lexer = Lexer::new("ab\n  cd");
        _ = lexer.get_next_token();
        assert_eq!(lexer.location(), FileLocation::new(2, 0, 2));

        lexer.skip_whitespace();
        assert_eq!(lexer.location(), FileLocation::new(5, 1, 2));
    }

    #[test]
    fn illegal_input_is_reported() {
        let (tokens, errors) = Lexer::new("x #\nfunc").collect_all();

        assert_eq!(tokens, vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Illegal, "#"),
            Token::new(TokenKind::Illegal, "func"),
        ]);

        assert_eq!(errors, vec![
            LexerError {
                location: FileLocation::new(2, 0, 2),
                kind: LexerErrorKind::IllegalCharacter { character: '#' },
            },
            LexerError {
                location: FileLocation::new(4, 1, 0),
                kind: LexerErrorKind::ReservedKeyword { keyword: Keyword::Func },
            },
        ]);

        assert_eq!(errors[0].to_string(), "Illegal character `#`");
        assert_eq!(errors[1].to_string(), "`func` is a reserved word and can't be used yet");
        assert_eq!(errors[1].kind.name(), "ReservedKeyword");
    }

    #[test]
    fn errors_accumulate_per_token() {
        let mut lexer = Lexer::new("# a func");
        assert!(lexer.errors().is_empty());

        assert_eq!(lexer.get_next_token(), Token::new(TokenKind::Illegal, "#"));
        assert_eq!(lexer.errors().len(), 1);

        assert_eq!(lexer.get_next_token(), Token::new(TokenKind::Identifier, "a"));
        assert_eq!(lexer.errors().len(), 1);

        assert_eq!(lexer.get_next_token(), Token::new(TokenKind::Illegal, "func"));
        assert_eq!(lexer.errors()[1].kind, LexerErrorKind::ReservedKeyword { keyword: Keyword::Func });
        assert_eq!(lexer.errors()[1].location, FileLocation::new(4, 0, 4));
    }

    #[test]
    fn collect_all_after_partial_use() {
        let mut lexer = Lexer::new("# a $");
        assert_eq!(lexer.get_next_token(), Token::new(TokenKind::Illegal, "#"));

        let (tokens, errors) = lexer.collect_all();
        assert_eq!(tokens, vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Illegal, "$"),
        ]);
        assert_eq!(errors, vec![
            LexerError {
                location: FileLocation::new(4, 0, 4),
                kind: LexerErrorKind::IllegalCharacter { character: '$' },
            },
        ]);
    }

    #[test]
    fn tokenize_includes_end_of_input() {
        assert_eq!(tokenize("a+1"), vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Plus, "+"),
            Token::new(TokenKind::Integer, "1"),
            Token::end_of_input(),
        ]);
    }
}
