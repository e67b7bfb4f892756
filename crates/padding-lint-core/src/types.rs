//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown severity `{other}`, expected: error, warning, info"
            )),
        }
    }
}

/// Source code location.
///
/// Lines and columns are 1-indexed; `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Line on which the reported range ends.
    pub end_line: usize,
    /// Column one past the end of the reported range.
    pub end_column: usize,
    /// Byte offset in file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a zero-width location at `line:column`.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            end_line: line,
            end_column: column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets where the reported range ends.
    #[must_use]
    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional automatic replacement.
    pub replacement: Option<Replacement>,
}

impl Suggestion {
    /// Creates a new suggestion without automatic fix.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Creates a new suggestion with automatic fix.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
        }
    }
}

/// An automatic code replacement over `offset..offset + length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Location to replace.
    pub location: Location,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, new_text: impl Into<String>) -> Self {
        Self {
            location,
            new_text: new_text.into(),
        }
    }

    /// First byte replaced.
    #[must_use]
    pub fn start(&self) -> usize {
        self.location.offset
    }

    /// One past the last byte replaced.
    #[must_use]
    pub fn end(&self) -> usize {
        self.location.offset + self.location.length
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "PL001").
    pub code: String,
    /// Rule name (e.g., "padding-line-between-statements").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Machine-readable message identifier (e.g., "expectedBlankLine").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message_id: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the message identifier.
    #[must_use]
    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns the automatic fix, if any.
    #[must_use]
    pub fn fix(&self) -> Option<&Replacement> {
        self.suggestion.as_ref()?.replacement.as_ref()
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let fixable = if suggestion.replacement.is_some() {
                " (fixable)"
            } else {
                ""
            };
            let _ = writeln!(output, "  = help: {}{fixable}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found (after fixing, the ones that remain).
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of files rewritten by fix mode.
    #[serde(default)]
    pub files_fixed: usize,
    /// Number of replacements applied by fix mode.
    #[serde(default)]
    pub fixes_applied: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Number of violations carrying an automatic fix.
    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.violations.iter().filter(|v| v.fix().is_some()).count()
    }

    /// Counts violations by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Sorts violations by file, then position.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "PL001",
            "padding-line-between-statements",
            severity,
            Location::new(PathBuf::from("src/index.js"), 3, 1).with_end(3, 10),
            "Expected blank line before this statement.",
        )
    }

    #[test]
    fn severity_parses_known_names() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn violation_format_marks_fixable_suggestion() {
        let fix = Replacement::new(
            Location::new(PathBuf::from("src/index.js"), 2, 5).with_span(12, 0),
            "\n",
        );
        let v = make_violation(Severity::Error)
            .with_suggestion(Suggestion::with_fix("Insert a blank line", fix));
        let formatted = v.format();
        assert!(formatted.contains("= help: Insert a blank line (fixable)"));
        assert_eq!(v.fix().map(Replacement::start), Some(12));
    }

    #[test]
    fn violation_display_is_compact() {
        let v = make_violation(Severity::Warning);
        assert_eq!(
            v.to_string(),
            "src/index.js:3:1: warning [PL001] Expected blank line before this statement."
        );
    }

    #[test]
    fn message_id_is_skipped_when_absent() {
        let v = make_violation(Severity::Error);
        let json = serde_json::to_string(&v).unwrap();
        assert!(!json.contains("message_id"));

        let v = v.with_message_id("expectedBlankLine");
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"message_id\":\"expectedBlankLine\""));
    }

    #[test]
    fn has_violations_at_respects_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_groups() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Error));
        assert_eq!(result.count_by_severity(), (2, 1, 0));
    }
}
