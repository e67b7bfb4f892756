//! Integration test: discovery, exclusion and fix write-back on a real
//! directory tree.

use padding_lint_core::syntax::{NodeKind, TokenKind, TreeBuilder};
use padding_lint_core::{
    Analyzer, Config, FileContext, ParseError, Replacement, Rule, SourceParser, SourceTree, Span,
    Suggestion, Violation,
};
use std::fs;
use std::path::Path;

/// Treats every non-empty line as one statement.
struct LineParser;

impl SourceParser for LineParser {
    fn language_id(&self) -> &'static str {
        "lines"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".js", ".ts"]
    }

    fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
        let mut builder = TreeBuilder::new(source);
        let root = builder.root();
        let mut offset = 0;
        for (index, line) in source.split('\n').enumerate() {
            if line.contains("@@") {
                return Err(ParseError {
                    line: index + 1,
                    message: "unexpected `@@`".to_string(),
                });
            }
            if !line.is_empty() {
                let span = Span::new(offset, offset + line.len());
                builder.node(NodeKind::ExpressionStatement, span, root);
                builder.token(TokenKind::Identifier, span);
            }
            offset += line.len() + 1;
        }
        Ok(builder.finish())
    }
}

/// Requires statements to be upper-case; fixes by upper-casing.
struct Shout;

impl Rule for Shout {
    fn name(&self) -> &'static str {
        "shout"
    }

    fn code(&self) -> &'static str {
        "TEST100"
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        tree.children(tree.root())
            .iter()
            .map(|&id| tree.span(id))
            .filter(|&span| tree.text(span).chars().any(char::is_lowercase))
            .map(|span| {
                let location = ctx.location(tree, span);
                Violation::new(self.code(), self.name(), self.default_severity(), location.clone(), "quiet")
                    .with_suggestion(Suggestion::with_fix(
                        "shout",
                        Replacement::new(location, tree.text(span).to_uppercase()),
                    ))
            })
            .collect()
    }
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn analyzer(root: &Path, config: Config) -> Analyzer {
    Analyzer::builder()
        .root(root)
        .parser(LineParser)
        .rule(Shout)
        .config(config)
        .build()
        .expect("analyzer should build")
}

#[test]
fn discovers_supported_files_and_skips_excluded() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.js", "one\nTWO");
    write(dir.path(), "src/b.ts", "THREE");
    write(dir.path(), "notes.txt", "ignored");
    write(dir.path(), "node_modules/pkg/index.js", "vendored");
    write(dir.path(), "dist/out.js", "built");

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.violations.len(), 1);
    let v = &result.violations[0];
    assert_eq!(v.location.file, Path::new("src/a.js"));
    assert_eq!((v.location.line, v.location.column), (1, 1));
}

#[test]
fn gitignore_is_respected_unless_disabled() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), ".gitignore", "generated/\n");
    write(dir.path(), "generated/g.js", "lower");
    write(dir.path(), "main.js", "UPPER");

    let respected = analyzer(dir.path(), Config::default()).analyze().unwrap();
    assert_eq!(respected.files_checked, 1);
    assert!(respected.violations.is_empty());

    let mut config = Config::default();
    config.analyzer.respect_gitignore = false;
    let all = analyzer(dir.path(), config).analyze().unwrap();
    assert_eq!(all.files_checked, 2);
    assert_eq!(all.violations.len(), 1);
}

#[test]
fn include_patterns_narrow_discovery() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/a.js", "lower");
    write(dir.path(), "scripts/b.js", "lower");

    let config = Config::parse("[analyzer]\ninclude = [\"src/**\"]\n").unwrap();
    let result = analyzer(dir.path(), config).analyze().unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations[0].location.file, Path::new("src/a.js"));
}

#[test]
fn parse_errors_are_skipped_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.js", "a @@ b");
    write(dir.path(), "fine.js", "FINE");

    let result = analyzer(dir.path(), Config::default()).analyze().unwrap();
    assert_eq!(result.files_checked, 1);

    let strict = Analyzer::builder()
        .root(dir.path())
        .parser(LineParser)
        .rule(Shout)
        .fail_on_parse_error(true)
        .build()
        .unwrap();
    assert!(strict.analyze().is_err());
}

#[test]
fn fix_writes_files_back() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.js", "first\nSECOND\nthird");
    write(dir.path(), "b.js", "CLEAN");

    let result = analyzer(dir.path(), Config::default()).fix().unwrap();
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.files_fixed, 1);
    assert_eq!(result.fixes_applied, 2);
    assert!(result.violations.is_empty());

    let fixed = fs::read_to_string(dir.path().join("a.js")).unwrap();
    insta::assert_snapshot!(fixed, @r"
    FIRST
    SECOND
    THIRD
    ");
    assert_eq!(fs::read_to_string(dir.path().join("b.js")).unwrap(), "CLEAN");
}

#[test]
fn single_file_root_reports_file_name() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "only.js", "quiet");

    let result = analyzer(&dir.path().join("only.js"), Config::default())
        .analyze()
        .unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].location.file, Path::new("only.js"));
}
