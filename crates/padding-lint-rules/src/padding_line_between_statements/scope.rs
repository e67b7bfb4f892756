//! Per-container tracking of the previously verified statement.

use padding_lint_core::syntax::NodeId;

/// Stack of scope frames, innermost last.
///
/// Each frame remembers the last statement verified directly inside its
/// container, or `None` before the first one.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<Option<NodeId>>,
}

impl ScopeStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a fresh frame.
    pub fn enter(&mut self) {
        self.frames.push(None);
    }

    /// Pops the innermost frame. Popping an empty stack does nothing.
    pub fn exit(&mut self) {
        if self.frames.pop().is_none() {
            tracing::debug!("scope exit without matching enter");
        }
    }

    /// Previous statement of the innermost frame.
    #[must_use]
    pub fn prev(&self) -> Option<NodeId> {
        self.frames.last().copied().flatten()
    }

    /// Records `node` as the previous statement of the innermost frame.
    pub fn set_prev(&mut self, node: NodeId) {
        if let Some(frame) = self.frames.last_mut() {
            *frame = Some(node);
        }
    }

    /// Number of open frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
