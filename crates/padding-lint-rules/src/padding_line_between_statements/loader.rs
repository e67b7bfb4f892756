//! Turns configuration into validated [`PaddingRule`]s.

use padding_lint_core::{Config, ConfigError};
use tracing::debug;

use super::config_dto::{PatternDto, SelectorDto};
use super::model::{ModelError, PaddingPolicy, PaddingRule};
use super::statement_type::{StatementSelector, StatementType};
use super::NAME;
use crate::presets::Preset;

/// Errors loading padding patterns.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A pattern field failed validation.
    #[error("{context}: {source}")]
    Validation {
        /// Offending field, e.g. `patterns[2].next`.
        context: String,
        /// What was wrong with it.
        #[source]
        source: ModelError,
    },

    /// `preset` names no known preset.
    #[error("unknown preset `{name}`, expected: recommended, strict, minimal")]
    UnknownPreset {
        /// The offending name.
        name: String,
    },

    /// `patterns` is not a list of pattern tables.
    #[error(transparent)]
    Options(#[from] ConfigError),
}

/// Preset patterns followed by the configured ones.
///
/// # Errors
///
/// Returns [`LoadError`] for an unknown preset or an invalid pattern.
pub fn load(config: &Config) -> Result<Vec<PaddingRule>, LoadError> {
    let mut rules = match config.preset.as_deref() {
        Some(name) => Preset::from_name(name)
            .ok_or_else(|| LoadError::UnknownPreset {
                name: name.to_string(),
            })?
            .patterns(),
        None => Vec::new(),
    };

    let configured = match config.rules.get(NAME) {
        Some(rule_config) => rule_config
            .try_option::<Vec<PatternDto>>("patterns")?
            .unwrap_or_default(),
        None => Vec::new(),
    };
    rules.extend(validate(&configured)?);

    debug!(
        preset = config.preset.as_deref().unwrap_or("none"),
        patterns = rules.len(),
        "Loaded padding patterns"
    );
    Ok(rules)
}

/// Validates deserialized patterns in order.
///
/// # Errors
///
/// Returns [`LoadError::Validation`] naming the first invalid field.
pub fn validate(patterns: &[PatternDto]) -> Result<Vec<PaddingRule>, LoadError> {
    patterns
        .iter()
        .enumerate()
        .map(|(index, dto)| {
            let field = |name: &str| format!("patterns[{index}].{name}");
            let invalid = |name: &str| {
                let context = field(name);
                move |source| LoadError::Validation { context, source }
            };

            let blank_line = dto
                .blank_line
                .parse::<PaddingPolicy>()
                .map_err(invalid("blank_line"))?;
            let prev = selector(&dto.prev).map_err(invalid("prev"))?;
            let next = selector(&dto.next).map_err(invalid("next"))?;
            Ok(PaddingRule::new(blank_line, prev, next))
        })
        .collect()
}

fn selector(dto: &SelectorDto) -> Result<StatementSelector, ModelError> {
    let types = dto
        .names()
        .into_iter()
        .map(str::parse::<StatementType>)
        .collect::<Result<Vec<_>, _>>()?;
    StatementSelector::new(types)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> Config {
        Config::parse(toml).expect("valid config")
    }

    #[test]
    fn loads_configured_patterns() {
        let rules = load(&config(
            r#"
            [[rules.padding-line-between-statements.patterns]]
            blank_line = "always"
            prev = "*"
            next = "return"
            "#,
        ))
        .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].to_string(), "always * -> return");
    }

    #[test]
    fn preset_patterns_come_first() {
        let rules = load(&config(
            r#"
            preset = "minimal"

            [[rules.padding-line-between-statements.patterns]]
            blankLine = "never"
            prev = "*"
            next = "return"
            "#,
        ))
        .unwrap();
        let listed: Vec<String> = rules.iter().map(ToString::to_string).collect();
        assert_eq!(listed, vec!["always * -> return", "never * -> return"]);
    }

    #[test]
    fn no_configuration_means_no_patterns() {
        assert!(load(&Config::default()).unwrap().is_empty());
    }

    #[test]
    fn errors_name_the_field() {
        let err = load(&config(
            r#"
            [[rules.padding-line-between-statements.patterns]]
            blank_line = "always"
            prev = "*"
            next = "*"

            [[rules.padding-line-between-statements.patterns]]
            blank_line = "always"
            prev = "*"
            next = ["const", "statement"]
            "#,
        ))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "patterns[1].next: unknown statement type `statement`"
        );
    }

    #[test]
    fn rejects_bad_policy_and_sets() {
        let bad = |toml: &str| load(&config(toml)).unwrap_err().to_string();

        assert_eq!(
            bad("[[rules.padding-line-between-statements.patterns]]\nblank_line = \"maybe\"\nprev = \"*\"\nnext = \"*\"\n"),
            "patterns[0].blank_line: unknown blank line policy `maybe`, expected: any, never, always"
        );
        assert_eq!(
            bad("[[rules.padding-line-between-statements.patterns]]\nblank_line = \"any\"\nprev = []\nnext = \"*\"\n"),
            "patterns[0].prev: statement type list must not be empty"
        );
        assert_eq!(
            bad("[[rules.padding-line-between-statements.patterns]]\nblank_line = \"any\"\nprev = \"*\"\nnext = [\"let\", \"let\"]\n"),
            "patterns[0].next: statement type `let` is listed more than once"
        );
    }

    #[test]
    fn unknown_preset() {
        let err = load(&config("preset = \"lenient\"\n")).unwrap_err();
        assert!(matches!(err, LoadError::UnknownPreset { ref name } if name == "lenient"));
    }

    #[test]
    fn malformed_patterns_option() {
        let err = load(&config(
            "[rules.padding-line-between-statements]\npatterns = \"always\"\n",
        ))
        .unwrap_err();
        assert!(matches!(err, LoadError::Options(_)));
    }
}
