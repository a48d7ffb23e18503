// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::TokenKind;

/// A classified piece of source text. The literal borrows from the input the
/// [`Lexer`](super::Lexer) was created with, not from the lexer itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'source_code> {
    pub kind: TokenKind,
    pub literal: &'source_code str,
}

impl<'source_code> Token<'source_code> {
    #[must_use]
    pub const fn new(kind: TokenKind, literal: &'source_code str) -> Self {
        Self {
            kind,
            literal,
        }
    }

    #[must_use]
    pub const fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&'source_code str> {
        match self.kind {
            TokenKind::Identifier => Some(self.literal),
            _ => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} {:?}", self.kind, self.literal))
    }
}
