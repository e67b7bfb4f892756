//! Blank-line detection between two statements.

use padding_lint_core::syntax::{NodeId, SourceTree, TokenId, TokenKind};

/// Two consecutive tokens (comments included) with at least one blank line
/// between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankRegion {
    /// Token ending before the gap.
    pub before: TokenId,
    /// Token starting after the gap.
    pub after: TokenId,
}

/// Token that really ends `node`.
///
/// A trailing semicolon placed at the head of the following line, as in
/// semicolon-less style (`foo()\n;[1, 2].forEach(bar)`), belongs to the next
/// statement; the token before it ends the node instead.
#[must_use]
pub fn actual_last_token(tree: &SourceTree, node: NodeId) -> Option<TokenId> {
    let semi = tree.last_token(node)?;
    let before = tree.token_before(semi, false);
    let after = tree.token_after(semi, false);

    let moved_semicolon = match (before, after) {
        (Some(before), Some(after)) => {
            let semi_token = tree.token(semi);
            tree.token(before).span.start >= tree.span(node).start
                && semi_token.kind == TokenKind::Punctuator
                && tree.token_text(semi) == ";"
                && !tree.is_same_line(tree.token(before).span, semi_token.span)
                && tree.is_same_line(semi_token.span, tree.token(after).span)
        }
        _ => false,
    };

    if moved_semicolon {
        before
    } else {
        Some(semi)
    }
}

/// Finds every blank region between the end of `prev` and the start of `next`.
#[must_use]
pub fn scan(tree: &SourceTree, prev: NodeId, next: NodeId) -> Vec<BlankRegion> {
    let mut regions = Vec::new();
    let Some(mut cursor) = actual_last_token(tree, prev) else {
        return regions;
    };

    let next_start = tree.span(next).start;
    let line_gap = |from: TokenId, to_offset: usize| {
        tree.lines()
            .line_of(to_offset)
            .saturating_sub(tree.end_line(tree.token(from).span))
    };

    if line_gap(cursor, next_start) < 2 {
        return regions;
    }

    while let Some(token) = tree.token_after(cursor, true) {
        if line_gap(cursor, tree.token(token).span.start) >= 2 {
            regions.push(BlankRegion {
                before: cursor,
                after: token,
            });
        }
        cursor = token;
        if tree.token(cursor).span.start >= next_start {
            break;
        }
    }

    regions
}
