//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# padding-lint configuration

# Pattern preset placed before the patterns below: recommended, strict, minimal
preset = "recommended"

# Lowest severity that makes `padding-lint check` exit with status 1
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.padding-line-between-statements]
enabled = true
# severity = "warning"

# Patterns are matched last-to-first; the last one matching a statement pair wins.
# blank_line: any, never, always
# prev/next: a statement type or a list of them (see `padding-lint list-types`)
#
# [[rules.padding-line-between-statements.patterns]]
# blank_line = "always"
# prev = "*"
# next = ["if", "for", "while"]
"#;

/// File name written by `init`.
const CONFIG_NAME: &str = "padding-lint.toml";

/// Runs the init command in `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to add patterns");
    println!("  2. Run: padding-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use padding_lint_core::Config;
    use padding_lint_rules::{PaddingLineBetweenStatements, Preset};

    #[test]
    fn default_config_loads() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("recommended"));

        let rule = PaddingLineBetweenStatements::from_config(&config).unwrap();
        assert_eq!(rule.patterns().len(), Preset::Recommended.patterns().len());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::tempdir().unwrap();
        run(tmp.path(), false).unwrap();
        assert!(run(tmp.path(), false).is_err());

        std::fs::write(tmp.path().join(CONFIG_NAME), "").unwrap();
        run(tmp.path(), true).unwrap();
        let written = std::fs::read_to_string(tmp.path().join(CONFIG_NAME)).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);
    }
}
