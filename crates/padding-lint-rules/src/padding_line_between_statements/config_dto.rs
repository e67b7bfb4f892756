//! Serialized form of the `patterns` option.

use serde::Deserialize;

/// One `[[rules.padding-line-between-statements.patterns]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternDto {
    /// `any`, `never` or `always`.
    #[serde(alias = "blankLine")]
    pub blank_line: String,
    /// Statement types of the earlier statement.
    pub prev: SelectorDto,
    /// Statement types of the later statement.
    pub next: SelectorDto,
}

/// A single statement-type name or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectorDto {
    /// `prev = "const"`
    One(String),
    /// `prev = ["const", "let"]`
    Many(Vec<String>),
}

impl SelectorDto {
    /// Names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::One(name) => vec![name.as_str()],
            Self::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}
