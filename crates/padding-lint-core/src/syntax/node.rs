//! Syntax tree nodes.

/// Half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte of the range.
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if `offset` lies inside the span.
    #[must_use]
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-width span.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Index of a node inside a [`SourceTree`](super::SourceTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declaration keyword of a `VariableDeclaration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `using`
    Using,
    /// `await using`
    AwaitUsing,
}

/// Shape of a syntax node, named after the ESTree node types.
///
/// Only the distinctions the padding rule needs are kept; everything else
/// lowers to [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NodeKind {
    Program,
    BlockStatement,
    StaticBlock,
    EmptyStatement,
    ExpressionStatement,
    VariableDeclaration(DeclarationKind),
    FunctionDeclaration,
    ClassDeclaration,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoWhileStatement,
    TryStatement,
    ThrowStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    DebuggerStatement,
    WithStatement,
    LabeledStatement,
    ImportDeclaration,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    /// `import x = require("x")` and `import x = N.y`
    TsImportEqualsDeclaration,
    /// `export = x`
    TsExportAssignment,
    /// `export as namespace X`
    TsNamespaceExportDeclaration,
    TsTypeAliasDeclaration,
    TsInterfaceDeclaration,
    TsInterfaceBody,
    TsEnumDeclaration,
    TsModuleDeclaration,
    TsModuleBlock,
    TsTypeLiteral,
    TsDeclareFunction,
    TsMethodSignature,
    CallExpression,
    ChainExpression,
    UnaryExpression,
    SequenceExpression,
    FunctionExpression,
    ArrowFunctionExpression,
    MethodDefinition,
    StringLiteral,
    Other,
}

impl NodeKind {
    /// Statement and declaration kinds, the nodes a host visits as `:statement`.
    #[must_use]
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Self::BlockStatement
                | Self::EmptyStatement
                | Self::ExpressionStatement
                | Self::VariableDeclaration(_)
                | Self::FunctionDeclaration
                | Self::ClassDeclaration
                | Self::IfStatement
                | Self::SwitchStatement
                | Self::ForStatement
                | Self::ForInStatement
                | Self::ForOfStatement
                | Self::WhileStatement
                | Self::DoWhileStatement
                | Self::TryStatement
                | Self::ThrowStatement
                | Self::ReturnStatement
                | Self::BreakStatement
                | Self::ContinueStatement
                | Self::DebuggerStatement
                | Self::WithStatement
                | Self::LabeledStatement
                | Self::ImportDeclaration
                | Self::ExportNamedDeclaration
                | Self::ExportDefaultDeclaration
                | Self::ExportAllDeclaration
                | Self::TsImportEqualsDeclaration
                | Self::TsExportAssignment
                | Self::TsNamespaceExportDeclaration
                | Self::TsTypeAliasDeclaration
                | Self::TsInterfaceDeclaration
                | Self::TsEnumDeclaration
                | Self::TsModuleDeclaration
        )
    }

    /// Function values: declarations, expressions and arrows.
    #[must_use]
    pub fn is_function(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration | Self::FunctionExpression | Self::ArrowFunctionExpression
        )
    }
}

/// A node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Shape of the node.
    pub kind: NodeKind,
    /// Byte range covered by the node.
    pub span: Span,
    /// Enclosing node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Child nodes in source order.
    pub children: Vec<NodeId>,
}
