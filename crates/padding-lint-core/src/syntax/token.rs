//! Lexical tokens and comments.

use super::node::Span;

/// Index of a token inside a [`SourceTree`](super::SourceTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(pub(crate) usize);

impl TokenId {
    /// Returns the position in the token stream.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Operators and delimiters such as `;`, `}` or `=>`.
    Punctuator,
    /// Reserved and contextual words (`const`, `return`, `using`, ...).
    Keyword,
    /// Identifiers and names.
    Identifier,
    /// String literal, quotes included.
    String,
    /// Template literal, including substitutions.
    Template,
    /// Numeric literal.
    Numeric,
    /// Regular expression literal.
    RegularExpression,
    /// `// ...` comment.
    LineComment,
    /// `/* ... */` comment.
    BlockComment,
    /// Anything else (JSX text, shebang, ...).
    Other,
}

impl TokenKind {
    /// Returns true for both comment flavours.
    #[must_use]
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }
}

/// A token in the stream. The text lives in the owning tree's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Byte range of the token text.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
