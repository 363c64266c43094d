// tooling/cyclops-core/src/token.rs

use serde::Serialize;

use crate::syntax::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Literal,
    Punct,
    Lifetime,
}

/// A lexical unit of a source file: kind, raw text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn identifier(text: impl Into<String>, location: Location) -> Self {
        Self::new(TokenKind::Identifier, text, location)
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }
}
