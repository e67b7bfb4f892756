//! Check command implementation.

use anyhow::{Context, Result};
use padding_lint_core::{Analyzer, Config, LintResult, Severity};
use padding_lint_js::all_parsers;
use padding_lint_rules::PaddingLineBetweenStatements;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Result of one check run.
#[derive(Debug)]
pub struct Outcome {
    /// Violations that remain, plus fix counters.
    pub result: LintResult,
    /// Directory that violation paths are relative to.
    pub base: PathBuf,
    /// Lowest severity that fails the run.
    pub fail_on: Severity,
}

impl Outcome {
    /// Whether any remaining violation reaches `fail_on`.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.result.has_violations_at(self.fail_on)
    }
}

/// Runs the check command and reports whether it failed.
pub fn run(
    path: &Path,
    fix: bool,
    format: OutputFormat,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let outcome = lint(path, fix, exclude, source)?;
    super::output::print(&outcome.result, format, &outcome.base)?;
    Ok(outcome.failed())
}

/// Lints (and with `fix`, rewrites) every supported file under `path`.
pub fn lint(
    path: &Path,
    fix: bool,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<Outcome> {
    let config = load_config(source)?;
    let fail_on = config
        .fail_on_severity()
        .context("Invalid `fail_on` setting")?;

    let rule = PaddingLineBetweenStatements::from_config(&config)
        .context("Invalid padding-line-between-statements configuration")?;
    if rule.patterns().is_empty() {
        tracing::warn!("No padding patterns configured; set `preset` or add patterns");
    }

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .rule(rule)
        .excludes(exclude);
    for parser in all_parsers() {
        builder = builder.parser_box(parser);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking {} with {} rule(s){}",
        path.display(),
        analyzer.rule_count(),
        if fix { ", fixing" } else { "" }
    );

    let result = if fix {
        analyzer.fix()
    } else {
        analyzer.analyze()
    }
    .context("Analysis failed")?;

    Ok(Outcome {
        result,
        base: analyzer.base().to_path_buf(),
        fail_on,
    })
}

/// Loads the resolved configuration, or defaults when none was found.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
