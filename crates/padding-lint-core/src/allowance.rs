//! Comment-based allowance directives.
//!
//! A comment on the reported line, or on the line before it, can silence a
//! rule:
//! ```text
//! // padding-lint: allow(padding-line-between-statements) reason="generated"
//! /* padding-lint: allow(all) */
//! ```
//!
//! Directives are read from comment tokens, so look-alike text inside string
//! literals is never picked up.

use crate::syntax::SourceTree;
use std::collections::{HashMap, HashSet};

const DIRECTIVE_PREFIX: &str = "padding-lint:";

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowDirective {
    /// Rule names that are allowed (`all` matches every rule).
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

impl AllowDirective {
    fn covers(&self, rule_name: &str) -> bool {
        self.rules.contains(rule_name) || self.rules.contains("all")
    }
}

/// Allow directives of one file, keyed by the line their comment ends on.
#[derive(Debug, Default)]
pub struct AllowIndex {
    by_line: HashMap<usize, Vec<AllowDirective>>,
}

impl AllowIndex {
    /// Collects every directive found in the comment tokens of `tree`.
    #[must_use]
    pub fn from_tree(tree: &SourceTree) -> Self {
        let mut by_line: HashMap<usize, Vec<AllowDirective>> = HashMap::new();
        for id in tree.comments() {
            if let Some(directive) = parse_allow_directive(tree.token_text(id)) {
                by_line
                    .entry(tree.end_line(tree.token(id).span))
                    .or_default()
                    .push(directive);
            }
        }
        Self { by_line }
    }

    /// Returns true if the file carries no directive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    /// Checks `line` (1-indexed) and the line before it for a directive
    /// covering `rule_name`.
    #[must_use]
    pub fn check(&self, line: usize, rule_name: &str) -> AllowCheck {
        [line.saturating_sub(1), line]
            .iter()
            .filter_map(|l| self.by_line.get(l))
            .flatten()
            .find(|d| d.covers(rule_name))
            .map_or(AllowCheck::Denied, |d| AllowCheck::Allowed {
                reason: d.reason.clone(),
            })
    }
}

/// Parses an allowance directive from the text of a comment.
#[must_use]
pub fn parse_allow_directive(comment: &str) -> Option<AllowDirective> {
    let body = if let Some(rest) = comment.strip_prefix("//") {
        rest
    } else {
        comment.strip_prefix("/*")?.strip_suffix("*/")?
    };

    let directive = body.trim().strip_prefix(DIRECTIVE_PREFIX)?.trim_start();
    let allow_content = directive.strip_prefix("allow(")?;
    let (rules_str, rest) = allow_content.split_once(')')?;

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if rules.is_empty() {
        return None;
    }

    let reason = rest
        .trim()
        .strip_prefix("reason=")
        .and_then(|r| r.trim().strip_prefix('"'))
        .and_then(|r| r.split_once('"'))
        .map(|(reason, _)| reason.to_string());

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Span, TokenKind, TreeBuilder};

    #[test]
    fn parses_line_comment_directive() {
        let directive =
            parse_allow_directive("// padding-lint: allow(padding-line-between-statements)")
                .unwrap();
        assert!(directive.rules.contains("padding-line-between-statements"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn parses_block_comment_with_reason() {
        let directive =
            parse_allow_directive("/* padding-lint: allow(a, b) reason=\"generated code\" */")
                .unwrap();
        assert!(directive.rules.contains("a"));
        assert!(directive.rules.contains("b"));
        assert_eq!(directive.reason.as_deref(), Some("generated code"));
    }

    #[test]
    fn rejects_other_comments() {
        assert!(parse_allow_directive("// just a note").is_none());
        assert!(parse_allow_directive("// padding-lint: allow()").is_none());
        assert!(parse_allow_directive("// eslint-disable-line").is_none());
    }

    fn tree_with_comment(src: &str, comment: Span) -> SourceTree {
        let mut builder = TreeBuilder::new(src);
        builder.token(TokenKind::LineComment, comment);
        builder.finish()
    }

    #[test]
    fn index_checks_same_and_previous_line() {
        let src = "a();\n// padding-lint: allow(all) reason=\"x\"\nb();\nc();";
        let comment_end = src.find("\nb").unwrap();
        let tree = tree_with_comment(src, Span::new(5, comment_end));
        let index = AllowIndex::from_tree(&tree);

        assert!(!index.is_empty());
        assert_eq!(index.check(3, "anything").reason(), Some("x"));
        assert!(index.check(2, "anything").is_allowed());
        assert_eq!(index.check(4, "anything"), AllowCheck::Denied);
        assert_eq!(index.check(1, "anything"), AllowCheck::Denied);
    }

    #[test]
    fn index_ignores_unrelated_rules() {
        let src = "// padding-lint: allow(other-rule)\nb();";
        let tree = tree_with_comment(src, Span::new(0, 34));
        let index = AllowIndex::from_tree(&tree);
        assert!(!index.check(2, "padding-line-between-statements").is_allowed());
        assert!(index.check(2, "other-rule").is_allowed());
    }
}
