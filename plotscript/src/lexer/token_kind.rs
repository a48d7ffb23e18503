// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumIter, EnumString, IntoStaticStr)]
pub enum TokenKind {
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    #[strum(serialize = "EOF")]
    EndOfInput,

    #[strum(serialize = "IDENT")]
    Identifier,
    #[strum(serialize = "INT")]
    Integer,

    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = ".")]
    Dot,

    #[strum(serialize = "(")]
    LParen,
    #[strum(serialize = ")")]
    RParen,
    #[strum(serialize = "{")]
    LBrace,
    #[strum(serialize = "}")]
    RBrace,
    #[strum(serialize = "[")]
    LBracket,
    #[strum(serialize = "]")]
    RBracket,
}

impl TokenKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// The character this kind is spelled with, for the kinds that are
    /// always exactly one fixed character long.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Equal => Some('='),
            Self::Plus => Some('+'),
            Self::Comma => Some(','),
            Self::Semicolon => Some(';'),
            Self::Dot => Some('.'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::LBrace => Some('{'),
            Self::RBrace => Some('}'),
            Self::LBracket => Some('['),
            Self::RBracket => Some(']'),

            Self::Illegal | Self::EndOfInput | Self::Identifier | Self::Integer => None,
        }
    }

    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(Self::Equal),
            '+' => Some(Self::Plus),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            '.' => Some(Self::Dot),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            '[' => Some(Self::LBracket),
            ']' => Some(Self::RBracket),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
