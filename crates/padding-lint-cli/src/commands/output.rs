//! Shared output formatting for lint results.

use anyhow::{Context, Result};
use miette::{NamedSource, Report};
use padding_lint_core::{LintResult, Severity, ViolationDiagnostic};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, base: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print!("{}", compact(result)),
        OutputFormat::Pretty => print_pretty(result, base),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            let marker = if suggestion.replacement.is_some() {
                " (fixable)"
            } else {
                ""
            };
            println!("  = help: {}{marker}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    if result.fixes_applied > 0 {
        println!(
            "Applied {} fix(es) in {} file(s)",
            result.fixes_applied, result.files_fixed
        );
    }
    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    let fixable = result.fixable_count();
    if fixable > 0 {
        println!("{fixable} violation(s) can be fixed with --fix");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize results")?;
    println!("{json}");
    Ok(())
}

/// One `file:line:column: severity [code] message` line per violation.
pub fn compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|violation| format!("{violation}\n"))
        .collect()
}

fn print_pretty(result: &LintResult, base: &Path) {
    for violation in &result.violations {
        let diagnostic = ViolationDiagnostic::from(violation);
        let file = &violation.location.file;
        let report = match std::fs::read_to_string(base.join(file)) {
            Ok(source) => Report::new(diagnostic)
                .with_source_code(NamedSource::new(file.display().to_string(), source)),
            Err(e) => {
                tracing::debug!("Cannot re-read {}: {e}", file.display());
                Report::new(diagnostic)
            }
        };
        println!("{report:?}");
    }

    print_summary(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use padding_lint_core::{Location, Violation};
    use std::path::PathBuf;

    fn violation(line: usize, severity: Severity) -> Violation {
        Violation::new(
            "PL001",
            "padding-line-between-statements",
            severity,
            Location::new(PathBuf::from("src/a.js"), line, 3),
            "Expected blank line before this statement.",
        )
    }

    #[test]
    fn compact_lines() {
        let mut result = LintResult::new();
        result.violations.push(violation(3, Severity::Error));
        result.violations.push(violation(7, Severity::Warning));

        insta::assert_snapshot!(compact(&result), @r"
        src/a.js:3:3: error [PL001] Expected blank line before this statement.
        src/a.js:7:3: warning [PL001] Expected blank line before this statement.
        ");
    }

    #[test]
    fn json_is_serializable() {
        let mut result = LintResult::new();
        result.violations.push(
            violation(3, Severity::Error).with_message_id("expectedBlankLine"),
        );
        result.files_checked = 1;

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["files_checked"], 1);
        assert_eq!(value["violations"][0]["message_id"], "expectedBlankLine");
        assert_eq!(value["violations"][0]["severity"], "error");
    }
}
