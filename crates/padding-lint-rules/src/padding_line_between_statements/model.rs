//! Validated padding rules and the last-match-wins resolver.

use padding_lint_core::syntax::{NodeId, SourceTree};
use std::fmt;
use std::str::FromStr;

use super::statement_type::StatementSelector;

/// Validation failures turning configuration into the domain model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Name outside the statement-type vocabulary.
    #[error("unknown statement type `{name}`")]
    UnknownStatementType {
        /// The offending name.
        name: String,
    },

    /// `blank_line` value other than `any`, `never` or `always`.
    #[error("unknown blank line policy `{value}`, expected: any, never, always")]
    UnknownPolicy {
        /// The offending value.
        value: String,
    },

    /// A `prev`/`next` list with no entries.
    #[error("statement type list must not be empty")]
    EmptySelector,

    /// The same name listed twice in one `prev`/`next` list.
    #[error("statement type `{name}` is listed more than once")]
    DuplicateStatementType {
        /// The repeated name.
        name: String,
    },
}

/// Blank-line requirement between two statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaddingPolicy {
    /// No requirement.
    #[default]
    Any,
    /// No blank line allowed.
    Never,
    /// At least one blank line required.
    Always,
}

impl PaddingPolicy {
    /// Configuration name of the policy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Never => "never",
            Self::Always => "always",
        }
    }
}

impl FromStr for PaddingPolicy {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "any" => Ok(Self::Any),
            "never" => Ok(Self::Never),
            "always" => Ok(Self::Always),
            other => Err(ModelError::UnknownPolicy {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{ blankLine, prev, next }` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingRule {
    /// Policy applied when both selectors match.
    pub blank_line: PaddingPolicy,
    /// Selector for the earlier statement.
    pub prev: StatementSelector,
    /// Selector for the later statement.
    pub next: StatementSelector,
}

impl PaddingRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(blank_line: PaddingPolicy, prev: StatementSelector, next: StatementSelector) -> Self {
        Self {
            blank_line,
            prev,
            next,
        }
    }

    fn applies(&self, tree: &SourceTree, prev: NodeId, next: NodeId) -> bool {
        self.prev.matches(tree, prev) && self.next.matches(tree, next)
    }
}

impl fmt::Display for PaddingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.blank_line, self.prev, self.next)
    }
}

/// Policy for a pair: the last rule matching both statements, else `any`.
#[must_use]
pub fn resolve(rules: &[PaddingRule], tree: &SourceTree, prev: NodeId, next: NodeId) -> PaddingPolicy {
    rules
        .iter()
        .rev()
        .find(|rule| rule.applies(tree, prev, next))
        .map_or(PaddingPolicy::Any, |rule| rule.blank_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding_line_between_statements::statement_type::StatementType;
    use padding_lint_core::SourceParser;
    use padding_lint_js::JavaScriptParser;

    fn rule(policy: &str, prev: &str, next: &str) -> PaddingRule {
        let selector = |name: &str| {
            StatementSelector::one(name.parse::<StatementType>().expect("known type"))
        };
        PaddingRule::new(policy.parse().unwrap(), selector(prev), selector(next))
    }

    #[test]
    fn policy_names() {
        assert_eq!("always".parse(), Ok(PaddingPolicy::Always));
        assert_eq!(PaddingPolicy::Never.to_string(), "never");
        assert_eq!(
            "sometimes".parse::<PaddingPolicy>(),
            Err(ModelError::UnknownPolicy {
                value: "sometimes".to_string()
            })
        );
    }

    #[test]
    fn last_matching_rule_wins() {
        let tree = JavaScriptParser::new()
            .parse("const a = 1;\nconst b = 2;\nlet c = 3;\n")
            .unwrap();
        let stmts = tree.children(tree.root()).to_vec();
        let rules = [rule("always", "*", "*"), rule("never", "const", "const")];

        assert_eq!(resolve(&rules, &tree, stmts[0], stmts[1]), PaddingPolicy::Never);
        assert_eq!(resolve(&rules, &tree, stmts[1], stmts[2]), PaddingPolicy::Always);
    }

    #[test]
    fn no_match_is_any() {
        let tree = JavaScriptParser::new().parse("a();\nb();\n").unwrap();
        let stmts = tree.children(tree.root()).to_vec();
        let rules = [rule("always", "const", "*")];
        assert_eq!(resolve(&rules, &tree, stmts[0], stmts[1]), PaddingPolicy::Any);
        assert_eq!(resolve(&[], &tree, stmts[0], stmts[1]), PaddingPolicy::Any);
    }
}
