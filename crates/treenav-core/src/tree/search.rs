//! Recursive name search over a folder's subtree.

use crate::error::CoreResult;
use crate::tree::entity::EntityId;
use crate::tree::file_tree::FileTree;

/// Returns every descendant of `folder` whose trimmed name contains
/// `keyword`, both compared case-insensitively.
///
/// Results are in pre-order: a folder is reported before anything inside
/// it, and siblings follow their `children` order. `folder` itself is never
/// a candidate. An empty keyword matches every descendant.
///
/// # Errors
///
/// [`CoreError::UnknownEntity`](crate::CoreError::UnknownEntity) or
/// [`CoreError::NotAFolder`](crate::CoreError::NotAFolder) for `folder`.
pub fn search(tree: &FileTree, folder: EntityId, keyword: &str) -> CoreResult<Vec<EntityId>> {
    let needle = keyword.to_lowercase();
    let mut hits = Vec::new();
    let mut stack: Vec<EntityId> = tree.children(folder)?.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let entity = tree.entity(id)?;
        if entity.matches_lowered(&needle) {
            hits.push(id);
        }
        if let Some(contents) = entity.contents() {
            stack.extend(contents.children().iter().rev());
        }
    }

    tracing::debug!(folder = %folder, keyword, hits = hits.len(), "search finished");
    Ok(hits)
}
