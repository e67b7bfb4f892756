//! Pattern presets for common configurations.

use crate::padding_line_between_statements::{
    PaddingPolicy, PaddingRule, StatementSelector, StatementShape,
};
use PaddingPolicy::{Always, Any, Never};
use StatementShape as S;

/// Preset pattern lists for padding-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Blank lines around declaration groups, imports, directives and returns.
    Recommended,
    /// Recommended, plus blank lines around blocks and control flow.
    Strict,
    /// Only a blank line before `return`.
    Minimal,
}

impl Preset {
    /// Every preset, in listing order.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Strict, Self::Minimal];

    /// Looks a preset up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Configuration name of the preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Returns the patterns for this preset.
    #[must_use]
    pub fn patterns(self) -> Vec<PaddingRule> {
        match self {
            Self::Recommended => recommended_patterns(),
            Self::Strict => strict_patterns(),
            Self::Minimal => minimal_patterns(),
        }
    }
}

const DECLARATIONS: &[StatementShape] = &[S::Const, S::Let, S::Var];

fn pattern(policy: PaddingPolicy, prev: &[StatementShape], next: &[StatementShape]) -> PaddingRule {
    PaddingRule::new(policy, StatementSelector::of(prev), StatementSelector::of(next))
}

/// Returns the recommended patterns.
///
/// - blank line before every `return`
/// - blank line after the directive prologue
/// - blank line after `const`/`let`/`var` groups
/// - blank line after the import block
#[must_use]
pub fn recommended_patterns() -> Vec<PaddingRule> {
    vec![
        pattern(Always, &[S::Any], &[S::Return]),
        pattern(Always, &[S::Directive], &[S::Any]),
        pattern(Any, &[S::Directive], &[S::Directive]),
        pattern(Always, DECLARATIONS, &[S::Any]),
        pattern(Any, DECLARATIONS, DECLARATIONS),
        pattern(Always, &[S::Import], &[S::Any]),
        pattern(Any, &[S::Import], &[S::Import]),
    ]
}

/// Returns the strict patterns.
///
/// Recommended plus:
/// - blank line after block-like statements
/// - blank line before control flow
/// - directives and imports packed without blank lines
#[must_use]
pub fn strict_patterns() -> Vec<PaddingRule> {
    vec![
        pattern(Always, &[S::Any], &[S::Return]),
        pattern(Always, &[S::BlockLike], &[S::Any]),
        pattern(
            Always,
            &[S::Any],
            &[S::If, S::For, S::While, S::Do, S::Switch, S::Try],
        ),
        pattern(Always, &[S::Directive], &[S::Any]),
        pattern(Never, &[S::Directive], &[S::Directive]),
        pattern(Always, DECLARATIONS, &[S::Any]),
        pattern(Any, DECLARATIONS, DECLARATIONS),
        pattern(Always, &[S::Import], &[S::Any]),
        pattern(Never, &[S::Import], &[S::Import]),
    ]
}

/// Returns the minimal patterns: a blank line before every `return`.
#[must_use]
pub fn minimal_patterns() -> Vec<PaddingRule> {
    vec![pattern(Always, &[S::Any], &[S::Return])]
}
