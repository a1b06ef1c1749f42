//! The in-memory file tree.
//!
//! [`entity::Entity`] is a folder or a file; [`file_tree::FileTree`] owns
//! all entities of a session and enforces sibling uniqueness and the
//! per-folder counters; [`search::search`] walks a subtree by name.

pub mod entity;
pub mod file_tree;
pub mod sample;
pub mod search;

pub use entity::{
    compare_entities, names_equal, validate_name, Entity, EntityId, EntityKind, EntityType,
    FolderContents,
};
pub use file_tree::FileTree;
pub use search::search;
