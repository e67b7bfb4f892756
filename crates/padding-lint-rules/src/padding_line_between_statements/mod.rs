//! Rule requiring or disallowing blank lines between statements.
//!
//! # Rationale
//!
//! Blank lines group related statements. Teams agree on where they belong
//! (before a `return`, after a block of declarations) and this rule keeps
//! the agreement enforced and auto-fixable.
//!
//! # How it works
//!
//! Every statement in a statement list (program, block, switch case, static
//! block, module block, interface body or type literal) is paired with the
//! statement before it in the same list. The last configured pattern whose
//! `prev` and `next` both match the pair decides the policy:
//!
//! - `any`: nothing is checked
//! - `never`: blank lines between the two are reported
//! - `always`: a missing blank line is reported
//!
//! # Configuration
//!
//! ```toml
//! [[rules.padding-line-between-statements.patterns]]
//! blank_line = "always"
//! prev = ["const", "let", "var"]
//! next = "*"
//! ```

mod config_dto;
mod enforcer;
mod loader;
mod model;
mod scanner;
mod scope;
mod statement_type;

pub use config_dto::{PatternDto, SelectorDto};
pub use enforcer::{always_fix, enforce, never_fix, report_span, Edit, Finding, MessageId};
pub use loader::{load, validate, LoadError};
pub use model::{resolve, ModelError, PaddingPolicy, PaddingRule};
pub use scanner::{actual_last_token, scan, BlankRegion};
pub use scope::ScopeStack;
pub use statement_type::{LineSpan, StatementSelector, StatementShape, StatementType};

use padding_lint_core::syntax::{NodeId, NodeKind, SourceTree};
use padding_lint_core::{
    Config, FileContext, Replacement, Rule, Severity, Suggestion, Violation,
};
use tracing::{debug, trace};

/// Rule code for padding-line-between-statements.
pub const CODE: &str = "PL001";

/// Rule name for padding-line-between-statements.
pub const NAME: &str = "padding-line-between-statements";

/// Requires or disallows blank lines between statements.
#[derive(Debug, Clone)]
pub struct PaddingLineBetweenStatements {
    patterns: Vec<PaddingRule>,
    severity: Severity,
}

impl Default for PaddingLineBetweenStatements {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PaddingLineBetweenStatements {
    /// Creates the rule over an ordered pattern list.
    #[must_use]
    pub fn new(patterns: Vec<PaddingRule>) -> Self {
        Self {
            patterns,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from the preset and patterns in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the preset or a pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        load(config).map(Self::new)
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Patterns in resolution order.
    #[must_use]
    pub fn patterns(&self) -> &[PaddingRule] {
        &self.patterns
    }

    /// Walks `tree` and returns every reported pair.
    #[must_use]
    pub fn findings(&self, tree: &SourceTree) -> Vec<Finding> {
        if self.patterns.is_empty() {
            return Vec::new();
        }
        let mut walker = Walker {
            tree,
            patterns: &self.patterns,
            scopes: ScopeStack::new(),
            findings: Vec::new(),
        };
        walker.walk();
        walker.findings
    }

    fn to_violation(&self, ctx: &FileContext, tree: &SourceTree, finding: Finding) -> Violation {
        let id = finding.message_id;
        let location = ctx.location(tree, finding.span);
        let suggestion = match finding.fix {
            Some(edit) => Suggestion::with_fix(
                id.fix_message(),
                Replacement::new(ctx.location(tree, edit.span), edit.text),
            ),
            None => Suggestion::new("Blank lines are separated by comments; remove them by hand"),
        };

        Violation::new(CODE, NAME, self.severity, location, id.message())
            .with_message_id(id.as_str())
            .with_suggestion(suggestion)
    }
}

impl Rule for PaddingLineBetweenStatements {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires or disallows blank lines between statements"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        self.findings(tree)
            .into_iter()
            .map(|finding| self.to_violation(ctx, tree, finding))
            .collect()
    }
}

/// Nodes whose direct statements are paired with each other.
fn is_statement_list(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Program
            | NodeKind::BlockStatement
            | NodeKind::StaticBlock
            | NodeKind::SwitchCase
            | NodeKind::SwitchStatement
            | NodeKind::TsInterfaceBody
            | NodeKind::TsModuleBlock
            | NodeKind::TsTypeLiteral
    )
}

/// Members that are paired but are not statements.
fn is_member(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SwitchCase | NodeKind::TsDeclareFunction | NodeKind::TsMethodSignature
    )
}

fn opens_scope(kind: NodeKind) -> bool {
    is_statement_list(kind) || is_member(kind)
}

enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

struct Walker<'a> {
    tree: &'a SourceTree,
    patterns: &'a [PaddingRule],
    scopes: ScopeStack,
    findings: Vec<Finding>,
}

impl Walker<'_> {
    fn walk(&mut self) {
        let mut stack = vec![Visit::Enter(self.tree.root())];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(node) => {
                    let kind = self.tree.kind(node);
                    if kind.is_statement() || is_member(kind) {
                        self.verify(node);
                    }
                    if opens_scope(kind) {
                        self.scopes.enter();
                    }
                    stack.push(Visit::Exit(node));
                    stack.extend(self.tree.children(node).iter().rev().map(|&c| Visit::Enter(c)));
                }
                Visit::Exit(node) => {
                    if opens_scope(self.tree.kind(node)) {
                        self.scopes.exit();
                    }
                }
            }
        }
    }

    fn verify(&mut self, node: NodeId) {
        let in_list = self
            .tree
            .parent(node)
            .is_some_and(|parent| is_statement_list(self.tree.kind(parent)));
        if !in_list {
            return;
        }

        if let Some(prev) = self.scopes.prev() {
            let policy = resolve(self.patterns, self.tree, prev, node);
            trace!(?prev, ?node, %policy, "Resolved padding policy");

            let regions = scan(self.tree, prev, node);
            if let Some(finding) = enforce(policy, self.tree, prev, node, &regions) {
                debug!(
                    line = self.tree.start_line(self.tree.span(node)),
                    message = finding.message_id.as_str(),
                    fixable = finding.fix.is_some(),
                    "Reported statement pair"
                );
                self.findings.push(finding);
            }
        }

        self.scopes.set_prev(node);
    }
}
