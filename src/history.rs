use log::debug;

use crate::action::Action;

/// The undoable drawing history.
///
/// Two disjoint sequences: `committed` is replayed oldest-first on every
/// redraw, `undone` is a stack of actions removed by undo. An action belongs
/// to at most one of them at any time.
#[derive(Default)]
pub struct ActionLog {
    committed: Vec<Action>,
    undone: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the committed history.
    ///
    /// Branching history is not supported: committing discards everything
    /// that could have been redone. Always succeeds; the caller invalidates
    /// the render.
    pub fn commit(&mut self, action: Action) {
        debug!(
            "commit {} ({} committed, {} undone discarded)",
            action.kind(),
            self.committed.len() + 1,
            self.undone.len()
        );
        self.committed.push(action);
        self.undone.clear();
    }

    /// Move the most recent committed action onto the undone stack.
    /// Returns false (and changes nothing) when there is nothing to undo;
    /// the caller invalidates the render only on true.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(action) => {
                debug!("undo {}", action.kind());
                self.undone.push(action);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone action back onto the committed history.
    /// Returns false (and changes nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(action) => {
                debug!("redo {}", action.kind());
                self.committed.push(action);
                true
            }
            None => false,
        }
    }

    /// Empty both sequences unconditionally. Always invalidates.
    pub fn clear(&mut self) {
        debug!(
            "clear ({} committed, {} undone)",
            self.committed.len(),
            self.undone.len()
        );
        self.committed.clear();
        self.undone.clear();
    }

    /// Read-only view of the committed history in render order.
    pub fn snapshot(&self) -> &[Action] {
        &self.committed
    }

    /// Mutable access to the in-flight action for `extend`/`reposition`.
    ///
    /// Only meaningful while a gesture is active; an empty history is a
    /// defined no-op state for the caller, not an error.
    pub fn current_mut(&mut self) -> Option<&mut Action> {
        self.committed.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}
