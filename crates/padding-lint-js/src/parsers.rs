//! [`SourceParser`] implementations for JavaScript, TypeScript and TSX.

use padding_lint_core::syntax::{ParseError, SourceParser, SourceTree};
use tree_sitter::Language;

use crate::lower;

/// JavaScript and JSX (`.js`, `.mjs`, `.cjs`, `.jsx`).
pub struct JavaScriptParser {
    language: Language,
}

impl JavaScriptParser {
    /// Creates a new JavaScript parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for JavaScriptParser {
    fn language_id(&self) -> &'static str {
        "javascript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".js", ".mjs", ".cjs", ".jsx"]
    }

    fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
        lower::parse(&self.language, source)
    }
}

/// TypeScript without JSX (`.ts`, `.mts`, `.cts`).
pub struct TypeScriptParser {
    language: Language,
}

impl TypeScriptParser {
    /// Creates a new TypeScript parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for TypeScriptParser {
    fn language_id(&self) -> &'static str {
        "typescript"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".ts", ".mts", ".cts"]
    }

    fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
        lower::parse(&self.language, source)
    }
}

/// TypeScript with JSX (`.tsx`).
pub struct TsxParser {
    language: Language,
}

impl TsxParser {
    /// Creates a new TSX parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl Default for TsxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for TsxParser {
    fn language_id(&self) -> &'static str {
        "tsx"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".tsx"]
    }

    fn parse(&self, source: &str) -> Result<SourceTree, ParseError> {
        lower::parse(&self.language, source)
    }
}

/// One parser per supported language.
#[must_use]
pub fn all_parsers() -> Vec<Box<dyn SourceParser>> {
    vec![
        Box::new(JavaScriptParser::new()),
        Box::new(TypeScriptParser::new()),
        Box::new(TsxParser::new()),
    ]
}
