// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod lexer;
mod location;

pub use self::{
    lexer::{tokenize, Keyword, Lexer, LexerError, LexerErrorKind, Token, TokenKind},
    location::FileLocation,
};
