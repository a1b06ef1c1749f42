//! Entity representation: the folders and files stored in a [`FileTree`].
//!
//! [`FileTree`]: crate::tree::FileTree

use std::cmp::Ordering;
use std::fmt;
use std::time::SystemTime;

use unicode_normalization::UnicodeNormalization;

use crate::error::{CoreError, CoreResult};

/// Index of an entity inside its [`FileTree`](crate::tree::FileTree).
///
/// Ids are never reused, so an id that outlives its entity is reported as
/// [`CoreError::UnknownEntity`] instead of aliasing a newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(usize);

impl EntityId {
    /// Wraps a raw slot index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw slot index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The immutable type of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Folder,
    File,
}

impl EntityType {
    /// Human-readable label for the type column of listings.
    pub fn label(self) -> &'static str {
        match self {
            EntityType::Folder => "Folder",
            EntityType::File => "File",
        }
    }
}

/// Children of a folder plus incrementally maintained per-type counters.
///
/// The counters only ever change together with `children`, so they always
/// equal the number of direct children of each type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderContents {
    children: Vec<EntityId>,
    folder_count: usize,
    file_count: usize,
}

impl FolderContents {
    /// Direct children in insertion order.
    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    /// Number of direct child folders.
    pub fn folder_count(&self) -> usize {
        self.folder_count
    }

    /// Number of direct child files.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.children.contains(&id)
    }

    pub(crate) fn push(&mut self, id: EntityId, entity_type: EntityType) {
        self.children.push(id);
        *self.counter_mut(entity_type) += 1;
    }

    /// Removes `id`; returns `false` when it was not a child.
    pub(crate) fn remove(&mut self, id: EntityId, entity_type: EntityType) -> bool {
        let Some(pos) = self.children.iter().position(|c| *c == id) else {
            return false;
        };
        self.children.remove(pos);
        *self.counter_mut(entity_type) -= 1;
        true
    }

    fn counter_mut(&mut self, entity_type: EntityType) -> &mut usize {
        match entity_type {
            EntityType::Folder => &mut self.folder_count,
            EntityType::File => &mut self.file_count,
        }
    }
}

/// Variant-specific data of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Folder(FolderContents),
    File { extension: String },
}

/// A named, timestamped node of the tree: either a folder or a file.
///
/// Entities are built detached via [`Entity::folder`] / [`Entity::file`] and
/// handed to [`FileTree::add_child`](crate::tree::FileTree::add_child), which
/// takes ownership and links the parent. Names are stored in NFC form.
/// Not `Clone`: a folder's child list is owned by exactly one tree slot.
#[derive(Debug, PartialEq, Eq)]
pub struct Entity {
    name: String,
    kind: EntityKind,
    created_at: SystemTime,
    updated_at: SystemTime,
    parent: Option<EntityId>,
}

impl Entity {
    /// Creates an empty, detached folder stamped with `at`.
    pub fn folder(name: impl AsRef<str>, at: SystemTime) -> Self {
        Self::with_kind(name.as_ref(), EntityKind::Folder(FolderContents::default()), at)
    }

    /// Creates a detached file stamped with `at`.
    pub fn file(name: impl AsRef<str>, extension: impl AsRef<str>, at: SystemTime) -> Self {
        let extension = nfc(extension.as_ref());
        Self::with_kind(name.as_ref(), EntityKind::File { extension }, at)
    }

    fn with_kind(name: &str, kind: EntityKind, at: SystemTime) -> Self {
        Self {
            name: nfc(name),
            kind,
            created_at: at,
            updated_at: at,
            parent: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_type(&self) -> EntityType {
        match self.kind {
            EntityKind::Folder(_) => EntityType::Folder,
            EntityKind::File { .. } => EntityType::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, EntityKind::Folder(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntityKind::File { .. })
    }

    /// Set once at construction.
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Refreshed by rename and extension changes.
    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    /// Owning folder, `None` for the root and for detached entities.
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    /// The file extension, or `None` for folders.
    pub fn extension(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::File { extension } => Some(extension),
            EntityKind::Folder(_) => None,
        }
    }

    /// Folder contents, or `None` for files.
    pub fn contents(&self) -> Option<&FolderContents> {
        match &self.kind {
            EntityKind::Folder(contents) => Some(contents),
            EntityKind::File { .. } => None,
        }
    }

    /// `name.ext` for files with an extension, the bare name otherwise.
    pub fn display_name(&self) -> String {
        match self.extension() {
            Some(ext) if !ext.is_empty() => format!("{}.{}", self.name, ext),
            _ => self.name.clone(),
        }
    }

    /// Sibling identity rule: same type and case-insensitive name match.
    pub fn same_identity(&self, entity_type: EntityType, name: &str) -> bool {
        self.entity_type() == entity_type && names_equal(&self.name, name)
    }

    /// Trimmed, case-insensitive substring match against an already
    /// lowercased keyword.
    pub(crate) fn matches_lowered(&self, keyword_lower: &str) -> bool {
        self.name.trim().to_lowercase().contains(keyword_lower)
    }

    pub(crate) fn contents_mut(&mut self) -> Option<&mut FolderContents> {
        match &mut self.kind {
            EntityKind::Folder(contents) => Some(contents),
            EntityKind::File { .. } => None,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<EntityId>) {
        self.parent = parent;
    }

    pub(crate) fn set_name(&mut self, name: &str, at: SystemTime) {
        self.name = nfc(name);
        self.updated_at = at;
    }

    pub(crate) fn set_extension(&mut self, extension: &str, at: SystemTime) -> bool {
        match &mut self.kind {
            EntityKind::File { extension: current } => {
                *current = nfc(extension);
                self.updated_at = at;
                true
            }
            EntityKind::Folder(_) => false,
        }
    }
}

/// Case-insensitive name equality.
pub fn names_equal(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Orders two entities for listings.
///
/// Folders sort before files. Within a type the order is case-insensitive
/// on name; files then break ties on extension, `created_at` and
/// `updated_at`.
pub fn compare_entities(a: &Entity, b: &Entity) -> Ordering {
    a.entity_type()
        .cmp(&b.entity_type())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| match (a.extension(), b.extension()) {
            (Some(ea), Some(eb)) => ea
                .to_lowercase()
                .cmp(&eb.to_lowercase())
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.updated_at.cmp(&b.updated_at)),
            _ => Ordering::Equal,
        })
}

/// Normalises a user-supplied name and rejects blank ones.
///
/// # Errors
///
/// [`CoreError::InvalidName`] if the name is empty after trimming.
pub fn validate_name(name: &str) -> CoreResult<String> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    Ok(nfc(name))
}

fn nfc(s: &str) -> String {
    s.nfc().collect()
}
