//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::SourceTree;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a lowered [`SourceTree`].
///
/// Rules are read-only: they inspect nodes and tokens and return violations,
/// optionally carrying a fix as data. The analyzer decides whether to apply it.
///
/// # Example
///
/// ```ignore
/// use padding_lint_core::{FileContext, Rule, SourceTree, Violation};
///
/// pub struct NoEmptyFile;
///
/// impl Rule for NoEmptyFile {
///     fn name(&self) -> &'static str { "no-empty-file" }
///     fn code(&self) -> &'static str { "PL900" }
///
///     fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "PL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether allow directives for this rule must carry a reason.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
