//! Lowering of tree-sitter syntax trees into a [`SourceTree`].
//!
//! Leaves become tokens; the statement and expression kinds the padding rule
//! distinguishes become typed nodes; every other named node with children
//! becomes [`NodeKind::Other`] so ranges and parents stay intact.

use padding_lint_core::syntax::{
    DeclarationKind, NodeId, NodeKind, ParseError, SourceTree, Span, TokenKind, TreeBuilder,
};
use tracing::{debug, trace};
use tree_sitter::{Language, Node, Parser};

/// Parses `source` with `language` and lowers the result.
pub(crate) fn parse(language: &Language, source: &str) -> Result<SourceTree, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(language).map_err(|e| ParseError {
        line: 1,
        message: format!("incompatible grammar: {e}"),
    })?;

    let tree = parser.parse(source, None).ok_or_else(|| ParseError {
        line: 1,
        message: "parser produced no tree".to_string(),
    })?;

    let root = tree.root_node();
    if let Some(error) = first_error(root) {
        let message = if error.is_missing() {
            format!("missing `{}`", error.kind())
        } else {
            let text = &source[error.byte_range()];
            let snippet: String = text.chars().take(20).collect();
            format!("unexpected `{}`", snippet.trim())
        };
        let line = error.start_position().row + 1;
        debug!(line, %message, "Source has syntax errors");
        return Err(ParseError { line, message });
    }

    let mut lowerer = Lowerer {
        source,
        builder: TreeBuilder::new(source),
    };
    let program = lowerer.builder.root();
    for child in children(root) {
        lowerer.visit(child, program, root.kind());
    }
    let lowered = lowerer.builder.finish();
    trace!(
        nodes = lowered.node_count(),
        tokens = lowered.token_count(),
        "Lowered syntax tree"
    );
    Ok(lowered)
}

/// First `ERROR` or `MISSING` node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(first_error)
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn is_comment(node: Node<'_>) -> bool {
    matches!(node.kind(), "comment" | "html_comment" | "hash_bang_line")
}

fn is_empty(node: Node<'_>) -> bool {
    node.is_missing() || node.start_byte() == node.end_byte()
}

/// Start of the first non-comment leaf under `node`.
fn content_start(node: Node<'_>) -> usize {
    children(node)
        .into_iter()
        .find(|c| !is_comment(*c) && !is_empty(*c))
        .map_or(node.start_byte(), content_start)
}

/// End of the last non-comment leaf under `node`.
fn content_end(node: Node<'_>) -> usize {
    children(node)
        .into_iter()
        .rev()
        .find(|c| !is_comment(*c) && !is_empty(*c))
        .map_or(node.end_byte(), content_end)
}

fn content_span(node: Node<'_>) -> Span {
    Span::new(content_start(node), content_end(node))
}

/// What a named tree-sitter node becomes.
enum Shape {
    /// An arena node of this kind.
    Node(NodeKind),
    /// Children attach to the enclosing arena node.
    Transparent,
    /// `declare …`
    Ambient,
}

struct Lowerer<'s> {
    source: &'s str,
    builder: TreeBuilder,
}

impl Lowerer<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    fn token(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.builder.token(kind, Span::new(start, end));
    }

    /// `outer` is the tree-sitter kind of the node's parent.
    fn visit(&mut self, node: Node<'_>, parent: NodeId, outer: &str) {
        if is_empty(node) {
            return;
        }

        let atomic = if node.is_named() { node.kind() } else { "" };
        match atomic {
            "comment" | "html_comment" => {
                let kind = if self.text(node).starts_with("//") {
                    TokenKind::LineComment
                } else {
                    TokenKind::BlockComment
                };
                self.token(kind, node.start_byte(), node.end_byte());
                return;
            }
            "hash_bang_line" => {
                self.token(TokenKind::LineComment, node.start_byte(), node.end_byte());
                return;
            }
            "string" => {
                self.token(TokenKind::String, node.start_byte(), node.end_byte());
                self.builder
                    .node(NodeKind::StringLiteral, content_span(node), parent);
                return;
            }
            "regex" => {
                self.token(TokenKind::RegularExpression, node.start_byte(), node.end_byte());
                return;
            }
            "template_string" => {
                let id = self.builder.node(NodeKind::Other, content_span(node), parent);
                self.template(node, id);
                return;
            }
            _ => {}
        }

        if node.child_count() == 0 {
            self.leaf(node);
            return;
        }

        if !node.is_named() {
            self.descend(node, parent);
            return;
        }

        match self.shape(node, outer) {
            Shape::Transparent => self.descend(node, parent),
            Shape::Ambient => self.ambient(node, parent),
            Shape::Node(kind) => self.lower(node, kind, content_span(node), parent),
        }
    }

    fn descend(&mut self, node: Node<'_>, parent: NodeId) {
        for child in children(node) {
            self.visit(child, parent, node.kind());
        }
    }

    fn lower(&mut self, node: Node<'_>, kind: NodeKind, span: Span, parent: NodeId) {
        let id = self.builder.node(kind, span, parent);
        self.descend(node, id);
    }

    fn leaf(&mut self, node: Node<'_>) {
        let kind = if node.is_named() {
            match node.kind() {
                "number" => TokenKind::Numeric,
                "this" | "super" | "true" | "false" | "null" | "undefined" => TokenKind::Keyword,
                _ => TokenKind::Identifier,
            }
        } else if self.text(node).chars().all(|c| c.is_ascii_alphabetic()) {
            TokenKind::Keyword
        } else {
            TokenKind::Punctuator
        };
        self.token(kind, node.start_byte(), node.end_byte());
    }

    /// Template pieces are single tokens; substitutions lower normally.
    fn template(&mut self, node: Node<'_>, id: NodeId) {
        let mut start = node.start_byte();
        for child in children(node) {
            if child.kind() != "template_substitution" {
                continue;
            }
            // `${` opens the substitution, `}` closes it.
            self.token(TokenKind::Template, start, child.start_byte() + 2);
            for inner in children(child) {
                if inner.is_named() {
                    self.visit(inner, id, child.kind());
                }
            }
            start = child.end_byte().saturating_sub(1);
        }
        self.token(TokenKind::Template, start, node.end_byte());
    }

    /// Hoists `declare <declaration>` so the declaration starts at `declare`.
    fn ambient(&mut self, node: Node<'_>, parent: NodeId) {
        let parts = children(node);

        if parts.iter().any(|c| c.kind() == "statement_block") {
            // declare global { … }
            let id = self
                .builder
                .node(NodeKind::TsModuleDeclaration, content_span(node), parent);
            self.descend(node, id);
            return;
        }

        let declaration = parts
            .iter()
            .copied()
            .find(|c| c.is_named() && !is_comment(*c) && c.child_count() > 0);
        let hoisted = declaration.and_then(|decl| match self.shape(decl, node.kind()) {
            Shape::Node(kind) if kind != NodeKind::Other => Some((decl, kind)),
            _ => None,
        });

        let Some((decl, kind)) = hoisted else {
            self.lower(node, NodeKind::Other, content_span(node), parent);
            return;
        };

        for part in parts {
            if part.id() != decl.id() {
                self.visit(part, parent, node.kind());
            }
        }
        let span = Span::new(content_start(node), content_end(decl));
        self.lower(decl, kind, span, parent);
    }

    fn first_word(&self, node: Node<'_>) -> &str {
        node.child(0).map_or("", |first| self.text(first))
    }

    fn declaration_kind(&self, node: Node<'_>) -> DeclarationKind {
        let keyword = node
            .child_by_field_name("kind")
            .map_or_else(|| self.first_word(node), |kind| self.text(kind));
        match keyword {
            "let" => DeclarationKind::Let,
            "using" => DeclarationKind::Using,
            "await" => DeclarationKind::AwaitUsing,
            "var" => DeclarationKind::Var,
            _ => DeclarationKind::Const,
        }
    }

    fn export_kind(node: Node<'_>) -> NodeKind {
        let parts = children(node);
        let after_export = parts
            .iter()
            .position(|c| c.kind() == "export")
            .and_then(|i| parts.get(i + 1));
        match after_export.map(|c| c.kind()) {
            Some("default") => NodeKind::ExportDefaultDeclaration,
            Some("*") => NodeKind::ExportAllDeclaration,
            Some("=") => NodeKind::TsExportAssignment,
            Some("as") => NodeKind::TsNamespaceExportDeclaration,
            _ => NodeKind::ExportNamedDeclaration,
        }
    }

    fn for_in_kind(&self, node: Node<'_>) -> NodeKind {
        let is_of = node
            .child_by_field_name("operator")
            .map_or_else(
                || children(node).iter().any(|c| c.kind() == "of"),
                |op| self.text(op) == "of",
            );
        if is_of {
            NodeKind::ForOfStatement
        } else {
            NodeKind::ForInStatement
        }
    }

    /// Expression statement holding only `namespace X { … }`.
    fn wraps_namespace(node: Node<'_>) -> bool {
        let mut named = children(node)
            .into_iter()
            .filter(|c| c.is_named() && !is_comment(*c));
        matches!(
            (named.next(), named.next()),
            (Some(only), None) if only.kind() == "internal_module"
        )
    }

    fn shape(&self, node: Node<'_>, outer: &str) -> Shape {
        use NodeKind as K;

        let kind = match node.kind() {
            "parenthesized_expression" | "switch_body" => return Shape::Transparent,
            "sequence_expression" if outer == "sequence_expression" => return Shape::Transparent,
            "expression_statement" if Self::wraps_namespace(node) => return Shape::Transparent,
            "ambient_declaration" => return Shape::Ambient,
            "statement_block" => match outer {
                "class_static_block" => return Shape::Transparent,
                "module" | "internal_module" | "ambient_declaration" => K::TsModuleBlock,
                _ => K::BlockStatement,
            },

            "expression_statement" => K::ExpressionStatement,
            "empty_statement" => K::EmptyStatement,
            "lexical_declaration" | "variable_declaration" | "using_declaration" => {
                K::VariableDeclaration(self.declaration_kind(node))
            }
            "function_declaration" | "generator_function_declaration" => K::FunctionDeclaration,
            "class_declaration" | "abstract_class_declaration" => K::ClassDeclaration,
            "class_static_block" => K::StaticBlock,
            "if_statement" => K::IfStatement,
            "switch_statement" => K::SwitchStatement,
            "switch_case" | "switch_default" => K::SwitchCase,
            "for_statement" => K::ForStatement,
            "for_in_statement" => self.for_in_kind(node),
            "while_statement" => K::WhileStatement,
            "do_statement" => K::DoWhileStatement,
            "try_statement" => K::TryStatement,
            "throw_statement" => K::ThrowStatement,
            "return_statement" => K::ReturnStatement,
            "break_statement" => K::BreakStatement,
            "continue_statement" => K::ContinueStatement,
            "debugger_statement" => K::DebuggerStatement,
            "with_statement" => K::WithStatement,
            "labeled_statement" => K::LabeledStatement,
            "import_statement"
                if children(node)
                    .iter()
                    .any(|c| c.kind() == "import_require_clause") =>
            {
                K::TsImportEqualsDeclaration
            }
            "import_statement" => K::ImportDeclaration,
            "import_alias" => K::TsImportEqualsDeclaration,
            "export_statement" => Self::export_kind(node),

            "type_alias_declaration" => K::TsTypeAliasDeclaration,
            "interface_declaration" => K::TsInterfaceDeclaration,
            "interface_body" => K::TsInterfaceBody,
            "object_type" if outer == "interface_declaration" => K::TsInterfaceBody,
            "object_type" => K::TsTypeLiteral,
            "enum_declaration" => K::TsEnumDeclaration,
            "module" | "internal_module" => K::TsModuleDeclaration,
            "function_signature" => K::TsDeclareFunction,
            "method_signature" => K::TsMethodSignature,

            "call_expression" => K::CallExpression,
            "unary_expression" => K::UnaryExpression,
            "sequence_expression" => K::SequenceExpression,
            "function_expression" | "function" | "generator_function" => K::FunctionExpression,
            "arrow_function" => K::ArrowFunctionExpression,
            "method_definition" => K::MethodDefinition,
            _ => K::Other,
        };
        Shape::Node(kind)
    }
}
