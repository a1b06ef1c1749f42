//! Frontend-neutral text for breadcrumbs, status lines and listings.

use std::fmt::Write as _;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::{CoreError, CoreResult};
use crate::tree::{EntityId, EntityType, FileTree};

/// Names from the root down to `id` inclusive.
pub fn breadcrumb(tree: &FileTree, id: EntityId) -> CoreResult<Vec<String>> {
    let mut names = tree
        .ancestors(id)?
        .into_iter()
        .map(|a| tree.entity(a).map(|e| e.name().to_string()))
        .collect::<CoreResult<Vec<_>>>()?;
    names.push(tree.entity(id)?.name().to_string());
    Ok(names)
}

/// The "directory" column for a search hit: every ancestor followed by
/// `separator`, e.g. `root / Folder 1 / `.
pub fn directory_label(tree: &FileTree, id: EntityId, separator: &str) -> CoreResult<String> {
    let mut label = String::new();
    for ancestor in tree.ancestors(id)? {
        label.push_str(tree.entity(ancestor)?.name());
        label.push_str(separator);
    }
    Ok(label)
}

/// Status bar pair: `("N Folders", "M Files")`.
pub fn status_text(folders: usize, files: usize) -> (String, String) {
    (format!("{folders} Folders"), format!("{files} Files"))
}

/// `(folders, files)` among `ids`. Dead ids are skipped.
pub fn count_types(tree: &FileTree, ids: &[EntityId]) -> (usize, usize) {
    ids.iter()
        .filter_map(|id| tree.get(*id))
        .fold((0, 0), |(folders, files), e| match e.entity_type() {
            EntityType::Folder => (folders + 1, files),
            EntityType::File => (folders, files + 1),
        })
}

/// Formats `time` in local time with a strftime-style `format`.
///
/// # Errors
///
/// [`CoreError::InvalidDateFormat`] if `format` has an unknown specifier.
pub fn format_timestamp(time: SystemTime, format: &str) -> CoreResult<String> {
    let local: DateTime<Local> = time.into();
    let mut out = String::new();
    write!(out, "{}", local.format(format))
        .map_err(|_| CoreError::InvalidDateFormat(format.to_string()))?;
    Ok(out)
}

/// One line of a folder outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineRow {
    pub id: EntityId,
    /// `0` for the outline's root.
    pub depth: usize,
}

/// Folders under (and including) `root` in pre-order, with nesting depth.
/// Files are left out, as in a navigation tree.
pub fn folder_outline(tree: &FileTree, root: EntityId) -> CoreResult<Vec<OutlineRow>> {
    tree.folder(root)?;
    let mut rows = Vec::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((id, depth)) = stack.pop() {
        rows.push(OutlineRow { id, depth });
        let folders = tree.direct_folders(id)?;
        stack.extend(folders.into_iter().rev().map(|f| (f, depth + 1)));
    }
    Ok(rows)
}
