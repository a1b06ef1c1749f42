//! Navigation history with back/forward support.

use crate::tree::EntityId;

/// Immutable navigation history with back/forward stacks of folder ids.
///
/// Every mutation returns a **new** `History` instance. Pushing a new
/// folder clears the forward stack (same semantics as a web browser).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    back_stack: Vec<EntityId>,
    forward_stack: Vec<EntityId>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `folder` onto the back stack and clears the forward stack.
    pub fn push(&self, folder: EntityId) -> Self {
        let mut back_stack = self.back_stack.clone();
        back_stack.push(folder);
        Self {
            back_stack,
            forward_stack: Vec::new(),
        }
    }

    /// Go back one step from `current`. Returns the new history and the
    /// folder to move to, or `None` if the back stack is empty.
    ///
    /// `current` is pushed onto the forward stack.
    pub fn go_back(&self, current: EntityId) -> Option<(Self, EntityId)> {
        let mut back_stack = self.back_stack.clone();
        let target = back_stack.pop()?;
        let mut forward_stack = self.forward_stack.clone();
        forward_stack.push(current);
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Go forward one step from `current`. Returns the new history and the
    /// folder to move to, or `None` if the forward stack is empty.
    ///
    /// `current` is pushed onto the back stack.
    pub fn go_forward(&self, current: EntityId) -> Option<(Self, EntityId)> {
        let mut forward_stack = self.forward_stack.clone();
        let target = forward_stack.pop()?;
        let mut back_stack = self.back_stack.clone();
        back_stack.push(current);
        Some((
            Self {
                back_stack,
                forward_stack,
            },
            target,
        ))
    }

    /// Returns a history without the entries for which `keep` is false.
    ///
    /// Entries left adjacent to an equal entry are merged, and stack tops
    /// equal to `current` are dropped, so every remaining step moves to a
    /// different folder.
    pub fn retain(&self, keep: impl Fn(EntityId) -> bool, current: EntityId) -> Self {
        Self {
            back_stack: compact(&self.back_stack, &keep, current),
            forward_stack: compact(&self.forward_stack, &keep, current),
        }
    }

    /// Returns `true` if there is at least one entry on the back stack.
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Returns `true` if there is at least one entry on the forward stack.
    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Back stack, oldest first (the top is the last element).
    pub fn back_entries(&self) -> &[EntityId] {
        &self.back_stack
    }

    /// Forward stack, oldest first (the top is the last element).
    pub fn forward_entries(&self) -> &[EntityId] {
        &self.forward_stack
    }
}

fn compact(stack: &[EntityId], keep: impl Fn(EntityId) -> bool, current: EntityId) -> Vec<EntityId> {
    let mut kept: Vec<EntityId> = stack.iter().copied().filter(|id| keep(*id)).collect();
    kept.dedup();
    while kept.last() == Some(&current) {
        kept.pop();
    }
    kept
}
