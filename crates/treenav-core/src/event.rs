//! Event system for communication between UI and Core.
//!
//! The UI translates user input into [`Command`]s, which
//! [`Explorer::dispatch`](crate::Explorer::dispatch) executes and answers
//! with an [`Event`]. This decoupling allows any frontend to drive the same
//! core logic.

use crate::tree::EntityId;

/// An intent the UI asks the core to carry out.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the given folder (double-click, tree selection). Leaves search mode.
    Navigate(EntityId),
    /// Move to the parent folder.
    GoUp,
    /// Navigate backward in history.
    GoBack,
    /// Navigate forward in history.
    GoForward,
    /// Create an auto-named folder (`New Folder N`) in the current folder.
    NewFolder,
    /// Create an auto-named file (`New File N`) in the current folder.
    NewFile,
    /// Create a folder with the given name in the current folder.
    CreateFolder(String),
    /// Create a file with the given name and extension in the current folder.
    CreateFile(String, String),
    /// Rename an entity.
    Rename(EntityId, String),
    /// Change a file's extension.
    SetExtension(EntityId, String),
    /// Remove the listed entities from their parent folders.
    Remove(Vec<EntityId>),
    /// Search the current folder's subtree and enter search mode.
    Search(String),
    /// Leave search mode.
    CloseSearch,
}

/// A notification the core sends back to the UI.
///
/// Events flow **Core → UI**. The UI re-reads whatever the event names
/// and re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The current folder changed.
    Navigated {
        /// The new current folder.
        folder: EntityId,
    },
    /// A new entity was added to the current folder.
    EntityCreated {
        /// The new entity.
        id: EntityId,
    },
    /// A create intent collided with an existing sibling and was ignored.
    DuplicateRejected {
        /// The name that was requested.
        name: String,
    },
    /// An entity's own attributes changed.
    EntityUpdated {
        /// The renamed or re-typed entity.
        id: EntityId,
    },
    /// Entities were removed.
    EntitiesRemoved {
        /// How many of the requested ids were actually removed.
        removed: usize,
    },
    /// A search finished.
    SearchCompleted {
        /// The keyword as typed.
        keyword: String,
        /// Matches in pre-order.
        results: Vec<EntityId>,
    },
    /// Search mode was left.
    SearchClosed,
    /// The intent failed and nothing changed.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
}
