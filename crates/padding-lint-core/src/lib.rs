//! # padding-lint-core
//!
//! Core framework for padding-lint: the syntax model rules read, the rule
//! trait, violation and fix types, configuration, and the analyzer.
//!
//! - [`syntax`] holds the arena [`SourceTree`] front ends lower into
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for discovery, rule execution and fix passes
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use padding_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .parser(JavaScriptParser::new())
//!     .rule(PaddingLineBetweenStatements::default())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

pub mod allowance;
pub mod fix;
pub mod syntax;

pub use allowance::{AllowCheck, AllowIndex};
pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, FixedSource};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use fix::{apply_fixes, apply_replacements, FixOutput};
pub use rule::{Rule, RuleBox};
pub use syntax::{NodeId, NodeKind, ParseError, SourceParser, SourceTree, Span, TokenId};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
