//! treenav core library: UI-agnostic in-memory file tree logic.
//!
//! `treenav-core` provides the data model, navigation cursor and search
//! engine for browsing a hierarchical tree of folders and files held
//! entirely in memory. It is decoupled from any frontend so that the line
//! shell (`treenav-shell`) and any future GUI can share the same logic.
//!
//! # Modules
//!
//! - [`tree`]: [`Entity`], the arena-backed [`FileTree`], and recursive [`search`].
//! - [`nav`]: the [`NavigationState`] cursor, back/forward [`History`], sorting and fuzzy filtering.
//! - [`explorer`]: the [`Explorer`] facade that composes the tree and the cursor.
//! - [`event`]: intent and notification types for UI ↔ Core communication.
//! - [`view`]: breadcrumb, status and timestamp text for frontends.
//! - [`config`]: TOML-based settings.
//! - [`clock`]: injectable time source for entity timestamps.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod explorer;
pub mod nav;
pub mod tree;
pub mod view;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use explorer::{Controls, Explorer};
pub use nav::filter::{fuzzy_filter, sort_entries, FuzzyMatch, SortDirection, SortField};
pub use nav::history::History;
pub use nav::state::NavigationState;
pub use tree::{search, Entity, EntityId, EntityKind, EntityType, FileTree, FolderContents};
pub use view::{
    breadcrumb, count_types, directory_label, folder_outline, format_timestamp, status_text,
    OutlineRow,
};
