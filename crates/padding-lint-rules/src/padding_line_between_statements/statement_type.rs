//! Statement-type vocabulary and the classifier behind it.
//!
//! Every name a pattern may use is a [`StatementType`]: a base
//! [`StatementShape`] plus an optional [`LineSpan`] gate for the
//! `singleline-`/`multiline-` variants. Shapes are a closed enum; the only
//! string handling happens when configuration is parsed.

use padding_lint_core::syntax::{DeclarationKind, NodeId, NodeKind, SourceTree, TokenKind};
use std::fmt;
use std::str::FromStr;

use super::model::ModelError;

/// Base shape of a statement, one per vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementShape {
    /// `*`: every statement.
    Any,
    /// Member of a directive prologue (`"use strict";`).
    Directive,
    /// Immediately invoked function expression statement.
    Iife,
    /// Bare `{ ... }` block.
    Block,
    /// `;` on its own.
    Empty,
    /// Function declaration.
    Function,
    /// Method signature in an interface or type literal.
    TsMethod,
    /// Overload signature or `declare function`.
    FunctionOverload,
    /// `break`
    Break,
    /// `case` clause.
    Case,
    /// `class` declaration.
    Class,
    /// `continue`
    Continue,
    /// `debugger`
    Debugger,
    /// `default` clause.
    Default,
    /// `do ... while`
    Do,
    /// `for`, `for ... in`, `for ... of`
    For,
    /// `if`
    If,
    /// `import` declaration.
    Import,
    /// `switch`
    Switch,
    /// `throw`
    Throw,
    /// `try`
    Try,
    /// `while` (and the `while` of a `do ... while` written `while` first).
    While,
    /// `with`
    With,
    /// `enum` declaration.
    Enum,
    /// `interface` declaration.
    Interface,
    /// Statement whose last non-semicolon token closes a block or switch.
    BlockLike,
    /// Expression statement outside a directive prologue.
    Expression,
    /// `return`
    Return,
    /// `export` declaration.
    Export,
    /// `var` declaration.
    Var,
    /// `let` declaration.
    Let,
    /// `const` declaration.
    Const,
    /// `using` or `await using` declaration.
    Using,
    /// `type` alias.
    Type,
}

/// Name table, in listing order.
const SHAPES: &[(&str, StatementShape)] = &[
    ("*", StatementShape::Any),
    ("block-like", StatementShape::BlockLike),
    ("expression", StatementShape::Expression),
    ("return", StatementShape::Return),
    ("export", StatementShape::Export),
    ("var", StatementShape::Var),
    ("let", StatementShape::Let),
    ("const", StatementShape::Const),
    ("using", StatementShape::Using),
    ("type", StatementShape::Type),
    ("directive", StatementShape::Directive),
    ("iife", StatementShape::Iife),
    ("block", StatementShape::Block),
    ("empty", StatementShape::Empty),
    ("function", StatementShape::Function),
    ("ts-method", StatementShape::TsMethod),
    ("function-overload", StatementShape::FunctionOverload),
    ("break", StatementShape::Break),
    ("case", StatementShape::Case),
    ("class", StatementShape::Class),
    ("continue", StatementShape::Continue),
    ("debugger", StatementShape::Debugger),
    ("default", StatementShape::Default),
    ("do", StatementShape::Do),
    ("for", StatementShape::For),
    ("if", StatementShape::If),
    ("import", StatementShape::Import),
    ("switch", StatementShape::Switch),
    ("throw", StatementShape::Throw),
    ("try", StatementShape::Try),
    ("while", StatementShape::While),
    ("with", StatementShape::With),
    ("enum", StatementShape::Enum),
    ("interface", StatementShape::Interface),
];

impl StatementShape {
    /// Every shape, in listing order.
    pub fn all() -> impl Iterator<Item = Self> {
        SHAPES.iter().map(|&(_, shape)| shape)
    }

    /// Configuration name of the shape.
    #[must_use]
    pub fn name(self) -> &'static str {
        SHAPES
            .iter()
            .find(|&&(_, shape)| shape == self)
            .map_or("*", |&(name, _)| name)
    }

    fn from_name(name: &str) -> Option<Self> {
        SHAPES
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, shape)| shape)
    }

    /// Whether `singleline-` and `multiline-` variants exist.
    #[must_use]
    pub fn has_line_variants(self) -> bool {
        matches!(
            self,
            Self::BlockLike
                | Self::Expression
                | Self::Return
                | Self::Export
                | Self::Var
                | Self::Let
                | Self::Const
                | Self::Using
                | Self::Type
        )
    }

    /// Tests the shape against a node that is not a labeled statement.
    #[must_use]
    pub fn test(self, tree: &SourceTree, node: NodeId) -> bool {
        use NodeKind as K;

        let kind = tree.kind(node);
        match self {
            Self::Any => true,
            Self::Directive => is_directive_prologue(tree, node),
            Self::Iife => is_iife(tree, node),
            Self::Block => kind == K::BlockStatement,
            Self::Empty => kind == K::EmptyStatement,
            Self::Function => kind == K::FunctionDeclaration,
            Self::TsMethod => kind == K::TsMethodSignature,
            Self::FunctionOverload => kind == K::TsDeclareFunction,
            Self::BlockLike => is_block_like(tree, node),
            Self::Expression => is_expression(tree, node),
            Self::Using => matches!(
                kind,
                K::VariableDeclaration(DeclarationKind::Using | DeclarationKind::AwaitUsing)
            ),
            Self::Break => keyword(tree, node, |k| k == K::BreakStatement, "break"),
            Self::Case => keyword(tree, node, |k| k == K::SwitchCase, "case"),
            Self::Class => keyword(tree, node, |k| k == K::ClassDeclaration, "class"),
            Self::Continue => keyword(tree, node, |k| k == K::ContinueStatement, "continue"),
            Self::Debugger => keyword(tree, node, |k| k == K::DebuggerStatement, "debugger"),
            Self::Default => keyword(
                tree,
                node,
                |k| matches!(k, K::SwitchCase | K::ExportDefaultDeclaration),
                "default",
            ),
            Self::Do => keyword(tree, node, |k| k == K::DoWhileStatement, "do"),
            Self::For => keyword(
                tree,
                node,
                |k| matches!(k, K::ForStatement | K::ForInStatement | K::ForOfStatement),
                "for",
            ),
            Self::If => keyword(tree, node, |k| k == K::IfStatement, "if"),
            Self::Import => keyword(tree, node, |k| k == K::ImportDeclaration, "import"),
            Self::Switch => keyword(tree, node, |k| k == K::SwitchStatement, "switch"),
            Self::Throw => keyword(tree, node, |k| k == K::ThrowStatement, "throw"),
            Self::Try => keyword(tree, node, |k| k == K::TryStatement, "try"),
            Self::While => keyword(
                tree,
                node,
                |k| matches!(k, K::WhileStatement | K::DoWhileStatement),
                "while",
            ),
            Self::With => keyword(tree, node, |k| k == K::WithStatement, "with"),
            Self::Enum => keyword(tree, node, |k| k == K::TsEnumDeclaration, "enum"),
            Self::Interface => keyword(tree, node, |k| k == K::TsInterfaceDeclaration, "interface"),
            Self::Return => keyword(tree, node, |k| k == K::ReturnStatement, "return"),
            Self::Export => keyword(
                tree,
                node,
                |k| {
                    matches!(
                        k,
                        K::ExportAllDeclaration
                            | K::ExportDefaultDeclaration
                            | K::ExportNamedDeclaration
                    )
                },
                "export",
            ),
            Self::Var => keyword(tree, node, is_variable_declaration, "var"),
            Self::Let => keyword(tree, node, is_variable_declaration, "let"),
            Self::Const => keyword(tree, node, is_variable_declaration, "const"),
            Self::Type => keyword(tree, node, |k| k == K::TsTypeAliasDeclaration, "type"),
        }
    }
}

/// Line-count gate of the `singleline-`/`multiline-` variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineSpan {
    /// No gate.
    #[default]
    Any,
    /// Starts and ends on the same line.
    Single,
    /// Spans more than one line.
    Multi,
}

impl LineSpan {
    fn admits(self, tree: &SourceTree, node: NodeId) -> bool {
        match self {
            Self::Any => true,
            Self::Single => tree.is_single_line(node),
            Self::Multi => !tree.is_single_line(node),
        }
    }
}

/// A named statement type usable in `prev` / `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatementType {
    /// Base shape.
    pub shape: StatementShape,
    /// Line gate.
    pub lines: LineSpan,
}

impl StatementType {
    /// Ungated statement type.
    #[must_use]
    pub const fn new(shape: StatementShape) -> Self {
        Self {
            shape,
            lines: LineSpan::Any,
        }
    }

    /// Tests a node, unwrapping labels first.
    #[must_use]
    pub fn matches(self, tree: &SourceTree, node: NodeId) -> bool {
        self.matches_unwrapped(tree, unwrap_labels(tree, node))
    }

    fn matches_unwrapped(self, tree: &SourceTree, node: NodeId) -> bool {
        self.shape.test(tree, node) && self.lines.admits(tree, node)
    }

    /// Every accepted name, variants included, in listing order.
    #[must_use]
    pub fn all_names() -> Vec<String> {
        StatementShape::all()
            .flat_map(|shape| {
                let base = shape.name();
                let mut names = vec![base.to_string()];
                if shape.has_line_variants() {
                    names.push(format!("singleline-{base}"));
                    names.push(format!("multiline-{base}"));
                }
                names
            })
            .collect()
    }
}

impl FromStr for StatementType {
    type Err = ModelError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unknown = || ModelError::UnknownStatementType {
            name: name.to_string(),
        };

        let (lines, base) = if let Some(base) = name.strip_prefix("singleline-") {
            (LineSpan::Single, base)
        } else if let Some(base) = name.strip_prefix("multiline-") {
            (LineSpan::Multi, base)
        } else {
            (LineSpan::Any, name)
        };

        let shape = StatementShape::from_name(base).ok_or_else(unknown)?;
        if lines != LineSpan::Any && !shape.has_line_variants() {
            return Err(unknown());
        }
        Ok(Self { shape, lines })
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lines {
            LineSpan::Any => write!(f, "{}", self.shape.name()),
            LineSpan::Single => write!(f, "singleline-{}", self.shape.name()),
            LineSpan::Multi => write!(f, "multiline-{}", self.shape.name()),
        }
    }
}

/// One or more statement types, matched with OR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSelector(Vec<StatementType>);

impl StatementSelector {
    /// Builds a selector from a non-empty list without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySelector`] or
    /// [`ModelError::DuplicateStatementType`].
    pub fn new(types: Vec<StatementType>) -> Result<Self, ModelError> {
        if types.is_empty() {
            return Err(ModelError::EmptySelector);
        }
        for (i, ty) in types.iter().enumerate() {
            if types[..i].contains(ty) {
                return Err(ModelError::DuplicateStatementType {
                    name: ty.to_string(),
                });
            }
        }
        Ok(Self(types))
    }

    /// Selector holding a single type.
    #[must_use]
    pub fn one(ty: StatementType) -> Self {
        Self(vec![ty])
    }

    /// Selector over ungated shapes; `shapes` must be non-empty and distinct.
    pub(crate) fn of(shapes: &[StatementShape]) -> Self {
        Self(shapes.iter().copied().map(StatementType::new).collect())
    }

    /// Types in declaration order.
    #[must_use]
    pub fn types(&self) -> &[StatementType] {
        &self.0
    }

    /// Tests a node against any member, unwrapping labels first.
    #[must_use]
    pub fn matches(&self, tree: &SourceTree, node: NodeId) -> bool {
        let inner = unwrap_labels(tree, node);
        self.0.iter().any(|ty| ty.matches_unwrapped(tree, inner))
    }
}

impl fmt::Display for StatementSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{single}"),
            many => {
                let names: Vec<String> = many.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", names.join(", "))
            }
        }
    }
}

// ── Predicates ──────────────────────────────────────────

fn unwrap_labels(tree: &SourceTree, mut node: NodeId) -> NodeId {
    while tree.kind(node) == NodeKind::LabeledStatement {
        match tree.last_child(node) {
            Some(body) => node = body,
            None => break,
        }
    }
    node
}

fn is_variable_declaration(kind: NodeKind) -> bool {
    matches!(kind, NodeKind::VariableDeclaration(_))
}

/// Node kind accepted and first token equal to `keyword`.
fn keyword(
    tree: &SourceTree,
    node: NodeId,
    accepts: impl Fn(NodeKind) -> bool,
    keyword: &str,
) -> bool {
    accepts(tree.kind(node))
        && tree
            .first_token(node)
            .is_some_and(|t| tree.token_text(t) == keyword)
}

fn skip_chain(tree: &SourceTree, node: NodeId) -> NodeId {
    if tree.kind(node) == NodeKind::ChainExpression {
        tree.first_child(node).unwrap_or(node)
    } else {
        node
    }
}

/// `(function () { ... })();`, `!function () {}()`, `(0, () => {})()` and
/// their optional-chain forms.
pub(crate) fn is_iife(tree: &SourceTree, node: NodeId) -> bool {
    if tree.kind(node) != NodeKind::ExpressionStatement {
        return false;
    }
    let Some(mut expression) = tree.first_child(node).map(|e| skip_chain(tree, e)) else {
        return false;
    };

    if tree.kind(expression) == NodeKind::UnaryExpression {
        let Some(argument) = tree.first_child(expression) else {
            return false;
        };
        expression = skip_chain(tree, argument);
    }

    if tree.kind(expression) != NodeKind::CallExpression {
        return false;
    }
    let Some(mut callee) = tree.first_child(expression) else {
        return false;
    };
    // Identifiers and literals are tokens, so the last child node is only
    // the last expression when it reaches the end of the sequence.
    while tree.kind(callee) == NodeKind::SequenceExpression {
        match tree.last_child(callee) {
            Some(last) if tree.span(last).end == tree.span(callee).end => callee = last,
            _ => return false,
        }
    }
    tree.kind(callee).is_function()
}

pub(crate) fn is_block_like(tree: &SourceTree, node: NodeId) -> bool {
    if tree.kind(node) == NodeKind::DoWhileStatement
        && tree
            .first_child(node)
            .is_some_and(|body| tree.kind(body) == NodeKind::BlockStatement)
    {
        return true;
    }

    if is_iife(tree, node) {
        return true;
    }

    let last = tree.last_token_where(node, |token, text| {
        token.kind == TokenKind::Punctuator && text != ";"
    });
    let Some(last) = last.filter(|&t| tree.token_text(t) == "}") else {
        return false;
    };

    tree.node_at(tree.token(last).span.start)
        .is_some_and(|owner| {
            matches!(
                tree.kind(owner),
                NodeKind::BlockStatement | NodeKind::SwitchStatement
            )
        })
}

fn is_parenthesized(tree: &SourceTree, node: NodeId) -> bool {
    match (tree.token_before_node(node), tree.token_after_node(node)) {
        (Some(before), Some(after)) => {
            tree.token_text(before) == "(" && tree.token_text(after) == ")"
        }
        _ => false,
    }
}

/// Expression statement directly in a program or function body.
fn is_top_level_expression_statement(tree: &SourceTree, node: NodeId) -> bool {
    if tree.kind(node) != NodeKind::ExpressionStatement {
        return false;
    }
    let Some(parent) = tree.parent(node) else {
        return false;
    };
    match tree.kind(parent) {
        NodeKind::Program => true,
        NodeKind::BlockStatement => tree.parent(parent).is_some_and(|owner| {
            let kind = tree.kind(owner);
            kind.is_function() || kind == NodeKind::MethodDefinition
        }),
        _ => false,
    }
}

fn is_directive(tree: &SourceTree, node: NodeId) -> bool {
    is_top_level_expression_statement(tree, node)
        && tree.first_child(node).is_some_and(|expression| {
            tree.kind(expression) == NodeKind::StringLiteral
                && !is_parenthesized(tree, expression)
        })
}

pub(crate) fn is_directive_prologue(tree: &SourceTree, node: NodeId) -> bool {
    if !is_directive(tree, node) {
        return false;
    }
    let Some(parent) = tree.parent(node) else {
        return false;
    };
    tree.children(parent)
        .iter()
        .take_while(|&&sibling| sibling != node)
        .all(|&sibling| is_directive(tree, sibling))
}

pub(crate) fn is_expression(tree: &SourceTree, node: NodeId) -> bool {
    tree.kind(node) == NodeKind::ExpressionStatement && !is_directive_prologue(tree, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use padding_lint_core::syntax::{Span, TreeBuilder};
    use padding_lint_core::SourceParser;
    use padding_lint_js::{JavaScriptParser, TypeScriptParser};

    fn js(src: &str) -> SourceTree {
        JavaScriptParser::new().parse(src).expect("fixture should parse")
    }

    fn ts(src: &str) -> SourceTree {
        TypeScriptParser::new().parse(src).expect("fixture should parse")
    }

    fn ty(name: &str) -> StatementType {
        name.parse().expect("known statement type")
    }

    /// Statements of the program body.
    fn top(tree: &SourceTree) -> Vec<NodeId> {
        tree.children(tree.root()).to_vec()
    }

    fn names_matching(tree: &SourceTree, node: NodeId) -> Vec<String> {
        StatementType::all_names()
            .into_iter()
            .filter(|name| ty(name).matches(tree, node))
            .collect()
    }

    #[test]
    fn parses_names_and_variants() {
        assert_eq!(ty("const"), StatementType::new(StatementShape::Const));
        assert_eq!(ty("multiline-const").lines, LineSpan::Multi);
        assert_eq!(ty("singleline-block-like").shape, StatementShape::BlockLike);
        assert!("singleline-if".parse::<StatementType>().is_err());
        assert!("statement".parse::<StatementType>().is_err());
        assert_eq!(ty("multiline-expression").to_string(), "multiline-expression");
    }

    #[test]
    fn vocabulary_is_complete() {
        let names = StatementType::all_names();
        assert_eq!(names.len(), 34 + 9 * 2);
        for name in ["*", "ts-method", "function-overload", "singleline-using", "multiline-type"] {
            assert!(names.iter().any(|n| n == name), "missing {name}");
        }
    }

    #[test]
    fn keyword_statements() {
        let tree = js("if (a) {}\nfor (;;) {}\nfor (k in o) {}\nwhile (x) {}\nthrow e;\n");
        let stmts = top(&tree);
        assert!(ty("if").matches(&tree, stmts[0]));
        assert!(ty("for").matches(&tree, stmts[1]));
        assert!(ty("for").matches(&tree, stmts[2]));
        assert!(ty("while").matches(&tree, stmts[3]));
        assert!(ty("throw").matches(&tree, stmts[4]));
        assert!(!ty("while").matches(&tree, stmts[1]));
    }

    #[test]
    fn declarations_by_keyword() {
        let tree = js("var a = 1;\nlet b = 2;\nconst c = 3;\nfunction f() {}\nclass K {}\n");
        let stmts = top(&tree);
        assert!(ty("var").matches(&tree, stmts[0]));
        assert!(!ty("let").matches(&tree, stmts[0]));
        assert!(ty("let").matches(&tree, stmts[1]));
        assert!(ty("const").matches(&tree, stmts[2]));
        assert!(ty("function").matches(&tree, stmts[3]));
        assert!(ty("class").matches(&tree, stmts[4]));
    }

    #[test]
    fn do_while_is_do_and_block_like() {
        let tree = js("do {\n  x();\n} while (y);\n");
        let stmt = top(&tree)[0];
        assert!(ty("do").matches(&tree, stmt));
        assert!(!ty("while").matches(&tree, stmt));
        assert!(ty("block-like").matches(&tree, stmt));
        assert!(ty("multiline-block-like").matches(&tree, stmt));
    }

    #[test]
    fn block_like_follows_closing_brace_owner() {
        let tree = js("const f = function () {};\nconst o = {};\nclass A {}\nswitch (a) {}\nfoo();\n");
        let stmts = top(&tree);
        assert!(is_block_like(&tree, stmts[0]));
        assert!(!is_block_like(&tree, stmts[1]));
        assert!(!is_block_like(&tree, stmts[2]));
        assert!(is_block_like(&tree, stmts[3]));
        assert!(!is_block_like(&tree, stmts[4]));
    }

    #[test]
    fn single_and_multi_line_block_like() {
        let one = js("if (x) { y(); }\n");
        let stmt = top(&one)[0];
        assert!(ty("singleline-block-like").matches(&one, stmt));
        assert!(!ty("multiline-block-like").matches(&one, stmt));

        let three = js("if (x) {\n  y();\n}\n");
        let stmt = top(&three)[0];
        assert!(!ty("singleline-block-like").matches(&three, stmt));
        assert!(ty("multiline-block-like").matches(&three, stmt));
    }

    #[test]
    fn iife_forms() {
        let tree = js(
            "(function () {})();\n!function () {}();\n(0, () => {})();\nfoo();\n(() => 1)();\n",
        );
        let stmts = top(&tree);
        assert!(is_iife(&tree, stmts[0]));
        assert!(is_iife(&tree, stmts[1]));
        assert!(is_iife(&tree, stmts[2]));
        assert!(!is_iife(&tree, stmts[3]));
        assert!(is_iife(&tree, stmts[4]));
        assert!(ty("block-like").matches(&tree, stmts[4]));
    }

    #[test]
    fn sequence_callee_uses_its_last_expression() {
        let tree = js("(function () {}, a)();\n(a, function () {})();\n");
        let stmts = top(&tree);
        assert!(!is_iife(&tree, stmts[0]));
        assert!(!ty("iife").matches(&tree, stmts[0]));
        assert!(is_iife(&tree, stmts[1]));
    }

    #[test]
    fn iife_through_optional_chain() {
        // (function () {})?.(); lowered by hand with an explicit chain node.
        let src = "(function () {})?.();";
        let mut b = TreeBuilder::new(src);
        let root = b.root();
        let stmt = b.node(NodeKind::ExpressionStatement, Span::new(0, 21), root);
        let chain = b.node(NodeKind::ChainExpression, Span::new(0, 20), stmt);
        let call = b.node(NodeKind::CallExpression, Span::new(0, 20), chain);
        b.node(NodeKind::FunctionExpression, Span::new(1, 15), call);
        let tree = b.finish();
        assert!(is_iife(&tree, stmt));
    }

    #[test]
    fn directive_prologue_is_contiguous() {
        let tree = js("\"use strict\";\n\"use foo\";\ndoSomething();\n\"late\";\n");
        let stmts = top(&tree);
        assert!(ty("directive").matches(&tree, stmts[0]));
        assert!(ty("directive").matches(&tree, stmts[1]));
        assert!(!ty("directive").matches(&tree, stmts[2]));
        assert!(!ty("directive").matches(&tree, stmts[3]));
        assert!(ty("expression").matches(&tree, stmts[2]));
        assert!(ty("expression").matches(&tree, stmts[3]));
        assert!(!ty("expression").matches(&tree, stmts[0]));
    }

    #[test]
    fn parenthesized_string_is_not_directive() {
        let tree = js("(\"use strict\");\n");
        let stmt = top(&tree)[0];
        assert!(!ty("directive").matches(&tree, stmt));
        assert!(ty("expression").matches(&tree, stmt));
    }

    #[test]
    fn directive_in_function_body_only() {
        let tree = js("function f() {\n  \"use strict\";\n}\nif (a) {\n  \"nope\";\n}\n");
        let stmts = top(&tree);
        let fn_body = tree.last_child(stmts[0]).unwrap();
        let inner = tree.children(fn_body)[0];
        assert!(ty("directive").matches(&tree, inner));

        let if_body = tree.last_child(stmts[1]).unwrap();
        let inner = tree.children(if_body)[0];
        assert!(!ty("directive").matches(&tree, inner));
    }

    #[test]
    fn labels_are_unwrapped() {
        let tree = js("outer: for (;;) {}\n");
        let stmt = top(&tree)[0];
        assert_eq!(tree.kind(stmt), NodeKind::LabeledStatement);
        assert!(ty("for").matches(&tree, stmt));
        assert!(ty("block-like").matches(&tree, stmt));
    }

    #[test]
    fn selectors_match_any_member() {
        let tree = js("let a = 1;\n");
        let stmt = top(&tree)[0];
        let selector = StatementSelector::new(vec![ty("const"), ty("let")]).unwrap();
        assert!(selector.matches(&tree, stmt));
        assert_eq!(selector.to_string(), "[const, let]");
        assert!(StatementSelector::new(vec![]).is_err());
        assert!(StatementSelector::new(vec![ty("let"), ty("let")]).is_err());
    }

    #[test]
    fn typescript_shapes() {
        let tree = ts(
            "type A = string;\ninterface B {\n  m(): void;\n}\nenum C { X }\nfunction f(a: string): void;\nfunction f(a: any) {}\n",
        );
        let stmts = top(&tree);
        assert!(ty("type").matches(&tree, stmts[0]));
        assert!(ty("singleline-type").matches(&tree, stmts[0]));
        assert!(ty("interface").matches(&tree, stmts[1]));
        assert!(ty("enum").matches(&tree, stmts[2]));
        assert!(ty("function-overload").matches(&tree, stmts[3]));
        assert!(ty("function").matches(&tree, stmts[4]));

        let body = tree.last_child(stmts[1]).unwrap();
        assert_eq!(tree.kind(body), NodeKind::TsInterfaceBody);
        let method = tree.children(body)[0];
        assert!(ty("ts-method").matches(&tree, method));
    }

    #[test]
    fn switch_clauses() {
        let tree = js("switch (a) {\n  case 1:\n    break;\n  default:\n    x();\n}\n");
        let switch = top(&tree)[0];
        let clauses: Vec<NodeId> = tree
            .children(switch)
            .iter()
            .copied()
            .filter(|&c| tree.kind(c) == NodeKind::SwitchCase)
            .collect();
        assert_eq!(names_matching(&tree, clauses[0]), vec!["*", "case"]);
        assert_eq!(names_matching(&tree, clauses[1]), vec!["*", "default"]);
    }
}
