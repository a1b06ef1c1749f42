//! Navigation cursor: the current folder, back/forward history and the
//! search-mode flag.

use crate::error::{CoreError, CoreResult};
use crate::nav::history::History;
use crate::tree::{EntityId, FileTree};

/// Where the user is, and how they got there.
///
/// `current` always names a live folder of the tree it was validated
/// against. Entering or leaving search mode never touches the cursor or
/// the history. Failed transitions leave the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: EntityId,
    history: History,
    search_active: bool,
}

impl NavigationState {
    /// Starts at `start` with empty history, not searching.
    pub fn new(start: EntityId) -> Self {
        Self {
            current: start,
            history: History::new(),
            search_active: false,
        }
    }

    pub fn current(&self) -> EntityId {
        self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Opens `folder`: the old position goes onto the back stack and the
    /// forward stack is cleared.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEntity`] or [`CoreError::NotAFolder`].
    pub fn move_to(&mut self, tree: &FileTree, folder: EntityId) -> CoreResult<()> {
        tree.folder(folder)?;
        self.history = self.history.push(self.current);
        self.current = folder;
        tracing::debug!(folder = %folder, "moved to folder");
        Ok(())
    }

    /// Moves to the parent of the current folder, recording history.
    ///
    /// # Errors
    ///
    /// [`CoreError::AtRoot`] when the current folder has no parent.
    pub fn up(&mut self, tree: &FileTree) -> CoreResult<EntityId> {
        let parent = tree
            .entity(self.current)?
            .parent()
            .ok_or(CoreError::AtRoot)?;
        self.move_to(tree, parent)?;
        Ok(parent)
    }

    /// Returns to the previously visited folder.
    ///
    /// # Errors
    ///
    /// [`CoreError::NoBackHistory`] when the back stack is empty.
    pub fn back(&mut self) -> CoreResult<EntityId> {
        let (history, target) = self
            .history
            .go_back(self.current)
            .ok_or(CoreError::NoBackHistory)?;
        self.history = history;
        self.current = target;
        tracing::debug!(folder = %target, "went back");
        Ok(target)
    }

    /// Re-visits the folder left by the last [`back`](Self::back).
    ///
    /// # Errors
    ///
    /// [`CoreError::NoForwardHistory`] when the forward stack is empty.
    pub fn forward(&mut self) -> CoreResult<EntityId> {
        let (history, target) = self
            .history
            .go_forward(self.current)
            .ok_or(CoreError::NoForwardHistory)?;
        self.history = history;
        self.current = target;
        tracing::debug!(folder = %target, "went forward");
        Ok(target)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn enter_search(&mut self) {
        self.search_active = true;
    }

    pub fn exit_search(&mut self) {
        self.search_active = false;
    }

    pub fn is_searching(&self) -> bool {
        self.search_active
    }

    /// Drops history entries pointing at removed entities. Steps that
    /// would no longer change the current folder are dropped with them.
    pub(crate) fn forget(&mut self, dropped: &[EntityId]) {
        if dropped.is_empty() {
            return;
        }
        self.history = self
            .history
            .retain(|id| !dropped.contains(&id), self.current);
    }
}
