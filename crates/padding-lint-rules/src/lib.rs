//! # padding-lint-rules
//!
//! The `padding-line-between-statements` rule for padding-lint.
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PL001 | `padding-line-between-statements` | Requires or disallows blank lines between statements |
//!
//! ## Usage
//!
//! ```ignore
//! use padding_lint_core::{Analyzer, Config};
//! use padding_lint_js::JavaScriptParser;
//! use padding_lint_rules::PaddingLineBetweenStatements;
//!
//! let config = Config::from_file("padding-lint.toml".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .parser(JavaScriptParser::new())
//!     .rule(PaddingLineBetweenStatements::from_config(&config)?)
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod padding_line_between_statements;
mod presets;

pub use padding_line_between_statements::{
    LoadError, PaddingLineBetweenStatements, PaddingPolicy, PaddingRule, StatementSelector,
    StatementShape, StatementType,
};
pub use presets::{minimal_patterns, recommended_patterns, strict_patterns, Preset};

/// Re-export core types for convenience.
pub use padding_lint_core::{Rule, Severity, Violation};
