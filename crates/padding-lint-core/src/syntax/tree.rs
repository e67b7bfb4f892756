//! Arena-backed syntax tree with a token stream.

use super::lines::LineIndex;
use super::node::{Node, NodeId, NodeKind, Span};
use super::token::{Token, TokenId, TokenKind};

/// A parsed source unit: text, nodes and tokens.
///
/// Nodes are stored in an arena and addressed by [`NodeId`]; tokens
/// (comments included) are kept sorted by start offset and addressed by
/// [`TokenId`]. The tree is immutable once built.
#[derive(Debug, Clone)]
pub struct SourceTree {
    source: String,
    lines: LineIndex,
    nodes: Vec<Node>,
    tokens: Vec<Token>,
}

impl SourceTree {
    /// Returns the full source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the line index.
    #[must_use]
    pub fn lines(&self) -> &LineIndex {
        &self.lines
    }

    /// Returns the `Program` root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    /// Returns the span of a node.
    #[must_use]
    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    /// Returns the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Returns the children of a node in source order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Returns the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Returns the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Returns the text covered by `span`, or `""` if it is out of range.
    #[must_use]
    pub fn text(&self, span: Span) -> &str {
        self.source.get(span.start..span.end).unwrap_or("")
    }

    /// 1-indexed line on which `span` starts.
    #[must_use]
    pub fn start_line(&self, span: Span) -> usize {
        self.lines.line_of(span.start)
    }

    /// 1-indexed line on which `span` ends.
    #[must_use]
    pub fn end_line(&self, span: Span) -> usize {
        self.lines.line_of(span.end)
    }

    /// 0-indexed character column of `offset`.
    #[must_use]
    pub fn column_of(&self, offset: usize) -> usize {
        self.lines.column_of(offset, &self.source)
    }

    /// Returns true if the node starts and ends on the same line.
    #[must_use]
    pub fn is_single_line(&self, id: NodeId) -> bool {
        let span = self.span(id);
        self.start_line(span) == self.end_line(span)
    }

    /// Returns the deepest node whose range contains `offset`.
    #[must_use]
    pub fn node_at(&self, offset: usize) -> Option<NodeId> {
        let mut current = self.root();
        if !self.span(current).contains(offset) {
            return None;
        }

        'descend: loop {
            for &child in self.children(current) {
                if self.span(child).contains(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    // ── Tokens ──────────────────────────────────────────────

    /// Number of tokens, comments included.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns a token.
    ///
    /// # Panics
    ///
    /// Panics if `id` belongs to another tree.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Token {
        self.tokens[id.0]
    }

    /// Comment tokens in source order.
    pub fn comments(&self) -> impl Iterator<Item = TokenId> + '_ {
        (0..self.tokens.len())
            .filter(move |&i| self.tokens[i].kind.is_comment())
            .map(TokenId)
    }

    /// Returns the text of a token.
    #[must_use]
    pub fn token_text(&self, id: TokenId) -> &str {
        self.text(self.token(id).span)
    }

    /// Returns true if `left` ends on the line where `right` starts.
    #[must_use]
    pub fn is_same_line(&self, left: Span, right: Span) -> bool {
        self.end_line(left) == self.start_line(right)
    }

    /// First non-comment token inside the node.
    #[must_use]
    pub fn first_token(&self, id: NodeId) -> Option<TokenId> {
        let span = self.span(id);
        let from = self.tokens.partition_point(|t| t.span.start < span.start);
        (from..self.tokens.len())
            .take_while(|&i| self.tokens[i].span.start < span.end)
            .find(|&i| !self.tokens[i].kind.is_comment() && self.tokens[i].span.end <= span.end)
            .map(TokenId)
    }

    /// Last non-comment token inside the node.
    #[must_use]
    pub fn last_token(&self, id: NodeId) -> Option<TokenId> {
        self.last_token_where(id, |_, _| true)
    }

    /// Last non-comment token inside the node accepted by `filter`.
    ///
    /// The filter receives the token and its text.
    #[must_use]
    pub fn last_token_where<F>(&self, id: NodeId, mut filter: F) -> Option<TokenId>
    where
        F: FnMut(Token, &str) -> bool,
    {
        let span = self.span(id);
        let until = self.tokens.partition_point(|t| t.span.start < span.end);
        (0..until)
            .rev()
            .take_while(|&i| self.tokens[i].span.start >= span.start)
            .find(|&i| {
                let token = self.tokens[i];
                !token.kind.is_comment()
                    && token.span.end <= span.end
                    && filter(token, self.text(token.span))
            })
            .map(TokenId)
    }

    /// Token immediately before `id`.
    #[must_use]
    pub fn token_before(&self, id: TokenId, include_comments: bool) -> Option<TokenId> {
        (0..id.0)
            .rev()
            .find(|&i| include_comments || !self.tokens[i].kind.is_comment())
            .map(TokenId)
    }

    /// Token immediately after `id`.
    #[must_use]
    pub fn token_after(&self, id: TokenId, include_comments: bool) -> Option<TokenId> {
        (id.0 + 1..self.tokens.len())
            .find(|&i| include_comments || !self.tokens[i].kind.is_comment())
            .map(TokenId)
    }

    /// Last non-comment token ending at or before the start of the node.
    #[must_use]
    pub fn token_before_node(&self, id: NodeId) -> Option<TokenId> {
        let start = self.span(id).start;
        let until = self.tokens.partition_point(|t| t.span.start < start);
        (0..until)
            .rev()
            .find(|&i| !self.tokens[i].kind.is_comment() && self.tokens[i].span.end <= start)
            .map(TokenId)
    }

    /// First non-comment token starting at or after the end of the node.
    #[must_use]
    pub fn token_after_node(&self, id: NodeId) -> Option<TokenId> {
        let end = self.span(id).end;
        let from = self.tokens.partition_point(|t| t.span.start < end);
        (from..self.tokens.len())
            .find(|&i| !self.tokens[i].kind.is_comment())
            .map(TokenId)
    }

    /// Tokens strictly after `from` that start before `until`, in order.
    pub fn tokens_between(
        &self,
        from: TokenId,
        until: usize,
        include_comments: bool,
    ) -> impl Iterator<Item = TokenId> + '_ {
        (from.0 + 1..self.tokens.len())
            .take_while(move |&i| self.tokens[i].span.start < until)
            .filter(move |&i| include_comments || !self.tokens[i].kind.is_comment())
            .map(TokenId)
    }
}

/// Incremental constructor for a [`SourceTree`].
///
/// The `Program` root spanning the whole source is created up front; nodes are
/// attached to a parent as they are added. Tokens may be added in any order.
#[derive(Debug)]
pub struct TreeBuilder {
    source: String,
    nodes: Vec<Node>,
    tokens: Vec<Token>,
}

impl TreeBuilder {
    /// Starts a tree over `source`.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let root = Node {
            kind: NodeKind::Program,
            span: Span::new(0, source.len()),
            parent: None,
            children: Vec::new(),
        };
        Self {
            source,
            nodes: vec![root],
            tokens: Vec::new(),
        }
    }

    /// Returns the `Program` root.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the source the tree is being built over.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Adds a node under `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not returned by this builder.
    pub fn node(&mut self, kind: NodeKind, span: Span, parent: NodeId) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            kind,
            span,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Adds a token.
    pub fn token(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind, span));
    }

    /// Finalises the tree, ordering tokens and children by position.
    #[must_use]
    pub fn finish(mut self) -> SourceTree {
        self.tokens.sort_by_key(|t| (t.span.start, t.span.end));

        let starts: Vec<usize> = self.nodes.iter().map(|n| n.span.start).collect();
        for node in &mut self.nodes {
            node.children.sort_by_key(|c| starts[c.index()]);
        }

        SourceTree {
            lines: LineIndex::new(&self.source),
            source: self.source,
            nodes: self.nodes,
            tokens: self.tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a();\n\n// note\nb();`
    fn two_calls() -> (SourceTree, NodeId, NodeId) {
        let src = "a();\n\n// note\nb();";
        let mut b = TreeBuilder::new(src);
        let root = b.root();
        let first = b.node(NodeKind::ExpressionStatement, Span::new(0, 4), root);
        let second = b.node(NodeKind::ExpressionStatement, Span::new(14, 18), root);
        b.token(TokenKind::Identifier, Span::new(0, 1));
        b.token(TokenKind::Punctuator, Span::new(1, 2));
        b.token(TokenKind::Punctuator, Span::new(2, 3));
        b.token(TokenKind::Punctuator, Span::new(3, 4));
        b.token(TokenKind::LineComment, Span::new(6, 13));
        b.token(TokenKind::Identifier, Span::new(14, 15));
        b.token(TokenKind::Punctuator, Span::new(15, 16));
        b.token(TokenKind::Punctuator, Span::new(16, 17));
        b.token(TokenKind::Punctuator, Span::new(17, 18));
        (b.finish(), first, second)
    }

    #[test]
    fn first_and_last_tokens() {
        let (tree, first, second) = two_calls();
        let head = tree.first_token(first).map(|t| tree.token_text(t));
        let tail = tree.last_token(second).map(|t| tree.token_text(t));
        assert_eq!(head, Some("a"));
        assert_eq!(tail, Some(";"));
    }

    #[test]
    fn token_after_skips_comments_unless_asked() {
        let (tree, first, _) = two_calls();
        let semi = tree.last_token(first).unwrap();
        let plain = tree.token_after(semi, false).unwrap();
        let with_comments = tree.token_after(semi, true).unwrap();
        assert_eq!(tree.token_text(plain), "b");
        assert_eq!(tree.token_text(with_comments), "// note");
    }

    #[test]
    fn tokens_between_stops_before_limit() {
        let (tree, first, second) = two_calls();
        let semi = tree.last_token(first).unwrap();
        let between: Vec<_> = tree
            .tokens_between(semi, tree.span(second).start, true)
            .map(|t| tree.token_text(t))
            .collect();
        assert_eq!(between, vec!["// note"]);
    }

    #[test]
    fn node_at_finds_deepest() {
        let (tree, _, second) = two_calls();
        assert_eq!(tree.node_at(15), Some(second));
        assert_eq!(tree.node_at(5), Some(tree.root()));
        assert_eq!(tree.node_at(100), None);
    }

    #[test]
    fn line_queries() {
        let (tree, first, second) = two_calls();
        assert_eq!(tree.start_line(tree.span(first)), 1);
        assert_eq!(tree.start_line(tree.span(second)), 4);
        assert!(tree.is_single_line(second));
    }
}
