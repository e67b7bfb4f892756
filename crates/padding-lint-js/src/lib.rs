//! # padding-lint-js
//!
//! Tree-sitter front end for padding-lint.
//!
//! Parses JavaScript, TypeScript and TSX with Tree-sitter and lowers the
//! concrete syntax tree into the [`SourceTree`](padding_lint_core::SourceTree)
//! the rules read:
//!
//! - [`JavaScriptParser`] for `.js`, `.mjs`, `.cjs` and `.jsx`
//! - [`TypeScriptParser`] for `.ts`, `.mts` and `.cts`
//! - [`TsxParser`] for `.tsx`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod lower;
pub mod parsers;

pub use parsers::{all_parsers, JavaScriptParser, TsxParser, TypeScriptParser};
