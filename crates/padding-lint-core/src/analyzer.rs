//! Core analyzer for orchestrating lint execution.

use crate::allowance::AllowIndex;
use crate::config::{Config, RuleConfig};
use crate::context::FileContext;
use crate::fix::apply_fixes;
use crate::rule::{Rule, RuleBox};
use crate::syntax::{SourceParser, SourceTree};
use crate::types::{LintResult, Severity, Suggestion, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file has syntax errors.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// No registered parser handles the file's extension.
    #[error("No parser registered for {path}")]
    Unsupported {
        /// Path of the file.
        path: PathBuf,
    },

    /// Directory traversal failed.
    #[error("Failed to walk {root}: {message}")]
    Walk {
        /// Root of the traversal.
        root: PathBuf,
        /// Underlying error.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    parsers: Vec<Box<dyn SourceParser>>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory (or single file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Registers a front end.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Registers a boxed front end.
    #[must_use]
    pub fn parser_box(mut self, parser: Box<dyn SourceParser>) -> Self {
        self.parsers.push(parser);
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or a glob
    /// pattern is invalid.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // A single-file root reports paths relative to its directory.
        let base = if root.is_file() {
            root.parent().map_or_else(|| root.clone(), Path::to_path_buf)
        } else {
            root.clone()
        };

        let mut exclude = self.exclude_patterns;
        exclude.extend(config.analyzer.exclude.iter().cloned());
        let mut include = self.include_patterns;
        include.extend(config.analyzer.include.iter().cloned());

        Ok(Analyzer {
            root,
            base,
            parsers: self.parsers,
            rules: self.rules,
            exclude: compile_patterns(&exclude)?,
            include: compile_patterns(&include)?,
            fail_on_parse_error: self.fail_on_parse_error,
            config,
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>, glob::PatternError> {
    patterns.iter().map(|p| glob::Pattern::new(p)).collect()
}

/// Outcome of fixing one source text.
#[derive(Debug, Clone)]
pub struct FixedSource {
    /// Source after every applied pass.
    pub text: String,
    /// Violations remaining in `text`.
    pub violations: Vec<Violation>,
    /// Replacements applied across all passes.
    pub fixes_applied: usize,
    /// Number of passes that changed the text.
    pub passes: usize,
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    base: PathBuf,
    parsers: Vec<Box<dyn SourceParser>>,
    rules: Vec<RuleBox>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that violation paths are relative to.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery or reading fails, or on a parse
    /// error when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        self.run(false)
    }

    /// Fixes all files in place and returns the violations that remain.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::analyze`], plus write failures.
    pub fn fix(&self) -> Result<LintResult, AnalyzerError> {
        self.run(true)
    }

    fn run(&self, fix: bool) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for path in &files {
            debug!("Analyzing: {}", path.display());
            let content = std::fs::read_to_string(path)?;

            let outcome = if fix {
                self.fix_source(path, &content).map(|fixed| {
                    if fixed.passes > 0 {
                        result.files_fixed += 1;
                        result.fixes_applied += fixed.fixes_applied;
                    }
                    (fixed.violations, Some(fixed.text))
                })
            } else {
                self.check_source(path, &content).map(|v| (v, None))
            };

            match outcome {
                Ok((violations, fixed_text)) => {
                    if let Some(text) = fixed_text.filter(|t| *t != content) {
                        std::fs::write(path, text)?;
                        debug!("Wrote fixes to {}", path.display());
                    }
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Lints one source text as if it were stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Unsupported`] if no parser handles `path`, or
    /// [`AnalyzerError::Parse`] if the text does not parse.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, AnalyzerError> {
        let parser = self
            .parser_for(path)
            .ok_or_else(|| AnalyzerError::Unsupported {
                path: path.to_path_buf(),
            })?;
        let tree = parser.parse(source).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(self.check_tree(path, &tree))
    }

    /// Lints and fixes one source text, re-linting after every pass until no
    /// fix applies or `max_fix_passes` is reached.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::check_source`].
    pub fn fix_source(&self, path: &Path, source: &str) -> Result<FixedSource, AnalyzerError> {
        let max_passes = self.config.analyzer.max_fix_passes;
        let mut text = source.to_string();
        let mut fixes_applied = 0;
        let mut passes = 0;

        loop {
            let violations = self.check_source(path, &text)?;
            if passes >= max_passes {
                debug!("Stopped fixing {} after {passes} passes", path.display());
                return Ok(FixedSource {
                    text,
                    violations,
                    fixes_applied,
                    passes,
                });
            }

            let output = apply_fixes(&text, &violations);
            if output.applied == 0 {
                return Ok(FixedSource {
                    text,
                    violations,
                    fixes_applied,
                    passes,
                });
            }

            debug!(
                "Pass {}: applied {} fixes ({} deferred) in {}",
                passes + 1,
                output.applied,
                output.skipped,
                path.display()
            );
            text = output.text;
            fixes_applied += output.applied;
            passes += 1;
        }
    }

    fn check_tree(&self, path: &Path, tree: &SourceTree) -> Vec<Violation> {
        let ctx = FileContext::new(path, tree.source(), &self.base);
        let allowances = AllowIndex::from_tree(tree);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let found = rule.check(&ctx, tree);
            let found = self.apply_severity_override(rule.name(), found);
            if allowances.is_empty() {
                violations.extend(found);
            } else {
                violations.extend(apply_allowances(rule.as_ref(), &allowances, found));
            }
        }

        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    fn parser_for(&self, path: &Path) -> Option<&dyn SourceParser> {
        let ext = extension_of(path)?;
        self.parsers
            .iter()
            .find(|p| p.extensions().contains(&ext.as_str()))
            .map(AsRef::as_ref)
    }

    /// Discovers every file a registered parser accepts.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let candidates = if self.config.analyzer.respect_gitignore {
            self.walk_ignoring()?
        } else {
            self.walk_all()?
        };

        let mut files: Vec<PathBuf> = candidates
            .into_iter()
            .filter(|path| self.parser_for(path).is_some())
            .filter(|path| {
                if self.should_exclude(path) {
                    debug!("Excluding: {}", path.display());
                    return false;
                }
                self.should_include(path)
            })
            .collect();

        files.sort();
        Ok(files)
    }

    fn walk_ignoring(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder.hidden(false).git_ignore(true).require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| AnalyzerError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_some_and(|t| t.is_file()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn walk_all(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| AnalyzerError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.base)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        let absolute = path.to_string_lossy();
        self.exclude
            .iter()
            .any(|p| p.matches(&relative) || p.matches(&absolute))
    }

    fn should_include(&self, path: &Path) -> bool {
        if self.include.is_empty() {
            return true;
        }
        let relative = self.relative(path);
        self.include.iter().any(|p| p.matches(&relative))
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}

/// Drops violations silenced by an allow directive.
///
/// An allowance without a reason for a rule that requires one is replaced by a
/// warning asking for the reason.
fn apply_allowances(
    rule: &dyn Rule,
    allowances: &AllowIndex,
    violations: Vec<Violation>,
) -> Vec<Violation> {
    violations
        .into_iter()
        .filter_map(|v| {
            let check = allowances.check(v.location.line, rule.name());
            if !check.is_allowed() {
                return Some(v);
            }
            if rule.requires_allow_reason() && check.reason().is_none() {
                return Some(
                    Violation::new(
                        rule.code(),
                        rule.name(),
                        Severity::Warning,
                        v.location,
                        format!("Allow directive for '{}' is missing required reason", rule.name()),
                    )
                    .with_suggestion(Suggestion::new(
                        "Add reason=\"...\" to explain why this exception is necessary",
                    )),
                );
            }
            debug!(
                "Allowed {} at line {}: {}",
                rule.name(),
                v.location.line,
                check.reason().unwrap_or("no reason")
            );
            None
        })
        .collect()
}
