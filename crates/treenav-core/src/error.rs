//! Error types for `treenav-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. A failed operation never
//! leaves the tree or the navigation state partially modified.

use std::path::PathBuf;

use crate::tree::EntityId;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or disable the control that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The id does not refer to a live entity (never existed or was removed).
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// A folder was expected but the id refers to a file.
    #[error("not a folder: {0}")]
    NotAFolder(EntityId),

    /// A file was expected but the id refers to a folder.
    #[error("not a file: {0}")]
    NotAFile(EntityId),

    /// `up` was requested while positioned at the root folder.
    #[error("already at the root folder")]
    AtRoot,

    /// `back` was requested with an empty back history.
    #[error("no previous folder in history")]
    NoBackHistory,

    /// `forward` was requested with an empty forward history.
    #[error("no next folder in history")]
    NoForwardHistory,

    /// A sibling of the same type already uses this name (case-insensitive).
    #[error("name already in use: {0}")]
    DuplicateName(String),

    /// A name is invalid (empty or whitespace only).
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Moving a folder into itself or one of its descendants.
    #[error("cannot move {0} into its own subtree")]
    WouldCreateCycle(EntityId),

    /// The folder is the current position or one of its ancestors.
    #[error("folder is in use: {0}")]
    FolderInUse(EntityId),

    /// The intent is unavailable while search results are shown.
    #[error("not available while searching")]
    SearchActive,

    /// A timestamp format string has an unknown specifier.
    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// A configuration file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read a configuration file.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `treenav-core`.
pub type CoreResult<T> = Result<T, CoreError>;
