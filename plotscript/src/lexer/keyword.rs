// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;

use super::TokenKind;

/// Reserved spellings. Identifiers matching one of these are not lexed as
/// [`TokenKind::Identifier`], but as [`Keyword::token_kind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Func,
}

impl Keyword {
    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// Functions are reserved but can't be used yet.
    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            Self::Func => TokenKind::Illegal,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
