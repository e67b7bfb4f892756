//! Policy enforcement for one statement pair.
//!
//! Findings are plain data: the span to report, which message applies, and an
//! optional text edit. The rule turns them into violations.

use padding_lint_core::syntax::{NodeId, SourceTree, Span};
use regex::Regex;
use std::sync::OnceLock;

use super::model::PaddingPolicy;
use super::scanner::{actual_last_token, BlankRegion};

/// Which of the two diagnostics a finding carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    /// Blank line present under `never`.
    UnexpectedBlankLine,
    /// Blank line missing under `always`.
    ExpectedBlankLine,
}

impl MessageId {
    /// Stable identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedBlankLine => "unexpectedBlankLine",
            Self::ExpectedBlankLine => "expectedBlankLine",
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedBlankLine => "Unexpected blank line before this statement.",
            Self::ExpectedBlankLine => "Expected blank line before this statement.",
        }
    }

    /// Short description of the fix.
    #[must_use]
    pub fn fix_message(self) -> &'static str {
        match self {
            Self::UnexpectedBlankLine => "Remove the blank line",
            Self::ExpectedBlankLine => "Insert a blank line",
        }
    }
}

/// Replace `span` with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range replaced; empty for an insertion.
    pub span: Span,
    /// Replacement text.
    pub text: String,
}

/// A reported pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Diagnostic kind.
    pub message_id: MessageId,
    /// Range reported on the later statement.
    pub span: Span,
    /// Automatic fix, if one is safe.
    pub fix: Option<Edit>,
}

/// Checks one pair under `policy` given its blank regions.
#[must_use]
pub fn enforce(
    policy: PaddingPolicy,
    tree: &SourceTree,
    prev: NodeId,
    next: NodeId,
    regions: &[BlankRegion],
) -> Option<Finding> {
    match policy {
        PaddingPolicy::Any => None,
        PaddingPolicy::Never => {
            if regions.is_empty() {
                return None;
            }
            let fix = match regions {
                [region] => never_fix(tree, *region),
                _ => None,
            };
            Some(Finding {
                message_id: MessageId::UnexpectedBlankLine,
                span: report_span(tree, next),
                fix,
            })
        }
        PaddingPolicy::Always => {
            if !regions.is_empty() {
                return None;
            }
            Some(Finding {
                message_id: MessageId::ExpectedBlankLine,
                span: report_span(tree, next),
                fix: always_fix(tree, prev, next),
            })
        }
    }
}

/// The whole statement if it fits on one line, else its first line.
#[must_use]
pub fn report_span(tree: &SourceTree, node: NodeId) -> Span {
    let span = tree.span(node);
    if tree.is_single_line(node) {
        return span;
    }
    let line = tree.start_line(span);
    Span::new(span.start, tree.lines().line_end(line, tree.source()))
}

/// Two or more line breaks separated only by whitespace, keeping the
/// whitespace before the first break and after the last one.
fn blank_line_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"^(\s*?(?:\r\n|[\r\n\u{2028}\u{2029}]))\s*(?:\r\n|[\r\n\u{2028}\u{2029}])(\s*;?)$",
            )
            .ok()
        })
        .as_ref()
}

/// Collapses the gap of a single region to one line break.
#[must_use]
pub fn never_fix(tree: &SourceTree, region: BlankRegion) -> Option<Edit> {
    let span = Span::new(
        tree.token(region.before).span.end,
        tree.token(region.after).span.start,
    );
    let text = tree.text(span);
    let pattern = blank_line_pattern()?;
    if !pattern.is_match(text) {
        return None;
    }
    Some(Edit {
        span,
        text: pattern.replace(text, "$1$2").into_owned(),
    })
}

/// Inserts one blank line after the previous statement and any tokens
/// trailing it on the same line.
#[must_use]
pub fn always_fix(tree: &SourceTree, prev: NodeId, next: NodeId) -> Option<Edit> {
    let mut boundary = actual_last_token(tree, prev)?;
    let next_span = tree.span(next);

    let mut following = next_span;
    for token in tree.tokens_between(boundary, next_span.start, true) {
        let span = tree.token(token).span;
        if tree.is_same_line(tree.token(boundary).span, span) {
            boundary = token;
        } else {
            following = span;
            break;
        }
    }

    let at = tree.token(boundary).span.end;
    let text = if tree.is_same_line(tree.token(boundary).span, following) {
        "\n\n"
    } else {
        "\n"
    };
    Some(Edit {
        span: Span::new(at, at),
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding_line_between_statements::scanner::scan;
    use padding_lint_core::SourceParser;
    use padding_lint_js::JavaScriptParser;

    fn pair(src: &str) -> (SourceTree, NodeId, NodeId) {
        let tree = JavaScriptParser::new().parse(src).expect("fixture should parse");
        let stmts = tree.children(tree.root()).to_vec();
        (tree, stmts[0], stmts[1])
    }

    fn apply(src: &str, edit: &Edit) -> String {
        format!("{}{}{}", &src[..edit.span.start], edit.text, &src[edit.span.end..])
    }

    #[test]
    fn any_never_reports() {
        for src in ["a();\nb();\n", "a();\n\n\nb();\n"] {
            let (tree, prev, next) = pair(src);
            let regions = scan(&tree, prev, next);
            assert_eq!(enforce(PaddingPolicy::Any, &tree, prev, next, &regions), None);
        }
    }

    #[test]
    fn never_collapses_single_region() {
        let src = "const a = 1;\n\n\nconst b = 2;";
        let (tree, prev, next) = pair(src);
        let regions = scan(&tree, prev, next);
        let finding = enforce(PaddingPolicy::Never, &tree, prev, next, &regions).unwrap();
        assert_eq!(finding.message_id, MessageId::UnexpectedBlankLine);
        assert_eq!(tree.text(finding.span), "const b = 2;");
        let edit = finding.fix.unwrap();
        assert_eq!(apply(src, &edit), "const a = 1;\nconst b = 2;");
    }

    #[test]
    fn never_keeps_indentation() {
        let src = "function f() {\n  a();\n\n  b();\n}";
        let tree = JavaScriptParser::new().parse(src).unwrap();
        let body = tree.last_child(tree.children(tree.root())[0]).unwrap();
        let stmts = tree.children(body).to_vec();
        let regions = scan(&tree, stmts[0], stmts[1]);
        let edit = never_fix(&tree, regions[0]).unwrap();
        assert_eq!(apply(src, &edit), "function f() {\n  a();\n  b();\n}");
    }

    #[test]
    fn never_without_fix_for_split_regions() {
        let (tree, prev, next) = pair("a();\n\n// note\n\nb();\n");
        let regions = scan(&tree, prev, next);
        assert_eq!(regions.len(), 2);
        let finding = enforce(PaddingPolicy::Never, &tree, prev, next, &regions).unwrap();
        assert!(finding.fix.is_none());
    }

    #[test]
    fn always_inserts_line_break() {
        let src = "a();\nreturn x;";
        let (tree, prev, next) = pair(src);
        let finding = enforce(PaddingPolicy::Always, &tree, prev, next, &[]).unwrap();
        assert_eq!(finding.message_id, MessageId::ExpectedBlankLine);
        let edit = finding.fix.unwrap();
        assert_eq!(apply(src, &edit), "a();\n\nreturn x;");
    }

    #[test]
    fn always_on_same_line_inserts_two_breaks() {
        let src = "a(); b();";
        let (tree, prev, next) = pair(src);
        let edit = always_fix(&tree, prev, next).unwrap();
        assert_eq!(apply(src, &edit), "a();\n\n b();");
    }

    #[test]
    fn always_skips_trailing_comment() {
        let src = "a(); // done\nb();";
        let (tree, prev, next) = pair(src);
        let edit = always_fix(&tree, prev, next).unwrap();
        assert_eq!(apply(src, &edit), "a(); // done\n\nb();");
    }

    #[test]
    fn always_fix_is_idempotent() {
        let src = "a();\nb();";
        let (tree, prev, next) = pair(src);
        let fixed = apply(src, &always_fix(&tree, prev, next).unwrap());
        let (tree, prev, next) = pair(&fixed);
        let regions = scan(&tree, prev, next);
        assert_eq!(regions.len(), 1);
        assert_eq!(enforce(PaddingPolicy::Always, &tree, prev, next, &regions), None);
    }

    #[test]
    fn multi_line_statement_reports_first_line() {
        let src = "a();\nif (x) {\n  y();\n}";
        let (tree, _, next) = pair(src);
        assert_eq!(tree.text(report_span(&tree, next)), "if (x) {");
    }

    #[test]
    fn messages() {
        assert_eq!(MessageId::ExpectedBlankLine.as_str(), "expectedBlankLine");
        assert_eq!(
            MessageId::UnexpectedBlankLine.message(),
            "Unexpected blank line before this statement."
        );
    }
}
