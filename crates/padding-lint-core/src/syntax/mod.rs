//! Language-neutral syntax model consumed by rules.
//!
//! Front ends (see `padding-lint-js`) lower their concrete syntax trees into a
//! [`SourceTree`]: an arena of ESTree-shaped [`Node`]s plus a position-sorted
//! stream of [`Token`]s that includes comments. Rules only ever read it.

pub mod lines;
mod node;
mod token;
mod tree;

pub use lines::LineIndex;
pub use node::{DeclarationKind, Node, NodeId, NodeKind, Span};
pub use token::{Token, TokenId, TokenKind};
pub use tree::{SourceTree, TreeBuilder};

/// Errors raised by a front end that cannot produce a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at line {line}: {message}")]
pub struct ParseError {
    /// 1-indexed line of the first error.
    pub line: usize,
    /// Description of the error.
    pub message: String,
}

/// A front end that turns source text into a [`SourceTree`].
///
/// Implement this to teach the analyzer a new language.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"javascript"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&[".js", ".mjs"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the source does not parse cleanly.
    fn parse(&self, source: &str) -> Result<SourceTree, ParseError>;
}
