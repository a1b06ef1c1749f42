//! The ownership root: an arena of entities under a single root folder.

use std::time::SystemTime;

use crate::clock::{SharedClock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::tree::entity::{validate_name, Entity, EntityId, EntityType, FolderContents};

/// Owns every entity of a session, addressed by [`EntityId`].
///
/// Parent→child edges are owning (`FolderContents::children`); the child's
/// `parent` is a plain id used for traversal only. Removing a child drops
/// its whole subtree and empties the slots, which are never reused.
#[derive(Debug)]
pub struct FileTree {
    slots: Vec<Option<Entity>>,
    root: EntityId,
    clock: SharedClock,
}

impl FileTree {
    /// Creates a tree whose root folder is named `root_name`, stamped by
    /// the system clock.
    pub fn new(root_name: &str) -> Self {
        Self::with_clock(root_name, SystemClock::shared())
    }

    /// Creates a tree that stamps entities with `clock`.
    pub fn with_clock(root_name: &str, clock: SharedClock) -> Self {
        let root = Entity::folder(root_name, clock.now());
        Self {
            slots: vec![Some(root)],
            root: EntityId::new(0),
            clock,
        }
    }

    /// The root folder. It has no parent and can never be removed.
    pub fn root(&self) -> EntityId {
        self.root
    }

    pub fn now(&self) -> SystemTime {
        self.clock.now()
    }

    /// A detached folder stamped with this tree's clock.
    pub fn make_folder(&self, name: &str) -> Entity {
        Entity::folder(name, self.now())
    }

    /// A detached file stamped with this tree's clock.
    pub fn make_file(&self, name: &str, extension: &str) -> Entity {
        Entity::file(name, extension, self.now())
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    pub fn entity(&self, id: EntityId) -> CoreResult<&Entity> {
        self.get(id).ok_or(CoreError::UnknownEntity(id))
    }

    fn entity_mut(&mut self, id: EntityId) -> CoreResult<&mut Entity> {
        self.slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(CoreError::UnknownEntity(id))
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live entities, root included.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Always `false`: the root folder is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates live entities in id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntityId::new(i), e)))
    }

    /// The contents of folder `id`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEntity`] or [`CoreError::NotAFolder`].
    pub fn folder(&self, id: EntityId) -> CoreResult<&FolderContents> {
        self.entity(id)?.contents().ok_or(CoreError::NotAFolder(id))
    }

    fn folder_mut(&mut self, id: EntityId) -> CoreResult<&mut FolderContents> {
        self.entity_mut(id)?
            .contents_mut()
            .ok_or(CoreError::NotAFolder(id))
    }

    /// Direct children of `folder` in insertion order.
    pub fn children(&self, folder: EntityId) -> CoreResult<&[EntityId]> {
        Ok(self.folder(folder)?.children())
    }

    /// Direct child folders of `folder`, in `children` order.
    pub fn direct_folders(&self, folder: EntityId) -> CoreResult<Vec<EntityId>> {
        self.direct_of_type(folder, EntityType::Folder)
    }

    /// Direct child files of `folder`, in `children` order.
    pub fn direct_files(&self, folder: EntityId) -> CoreResult<Vec<EntityId>> {
        self.direct_of_type(folder, EntityType::File)
    }

    fn direct_of_type(&self, folder: EntityId, entity_type: EntityType) -> CoreResult<Vec<EntityId>> {
        Ok(self
            .children(folder)?
            .iter()
            .copied()
            .filter(|id| {
                self.get(*id)
                    .is_some_and(|e| e.entity_type() == entity_type)
            })
            .collect())
    }

    pub fn folder_count(&self, folder: EntityId) -> CoreResult<usize> {
        Ok(self.folder(folder)?.folder_count())
    }

    pub fn file_count(&self, folder: EntityId) -> CoreResult<usize> {
        Ok(self.folder(folder)?.file_count())
    }

    /// Finds the direct child of `folder` that has the given identity.
    pub fn find_child(
        &self,
        folder: EntityId,
        entity_type: EntityType,
        name: &str,
    ) -> CoreResult<Option<EntityId>> {
        Ok(self.children(folder)?.iter().copied().find(|id| {
            self.get(*id)
                .is_some_and(|e| e.same_identity(entity_type, name))
        }))
    }

    /// Moves `entity` into `parent`.
    ///
    /// Returns `Ok(Some(id))` when inserted, or `Ok(None)` when a sibling
    /// with the same type and case-insensitive name already exists; in
    /// that case the entity is dropped and the tree is unchanged.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEntity`] or [`CoreError::NotAFolder`] for `parent`.
    pub fn add_child(&mut self, parent: EntityId, mut entity: Entity) -> CoreResult<Option<EntityId>> {
        let entity_type = entity.entity_type();
        if self.find_child(parent, entity_type, entity.name())?.is_some() {
            tracing::debug!(parent = %parent, name = entity.name(), "duplicate sibling rejected");
            return Ok(None);
        }

        let id = EntityId::new(self.slots.len());
        entity.set_parent(Some(parent));
        tracing::debug!(parent = %parent, id = %id, name = entity.name(), "entity added");
        self.slots.push(Some(entity));
        self.folder_mut(parent)?.push(id, entity_type);
        Ok(Some(id))
    }

    /// Removes `child` from `parent` and drops its subtree.
    ///
    /// Returns the dropped ids in pre-order (`child` first), or an empty
    /// list when `child` is not a direct child of `parent`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEntity`] or [`CoreError::NotAFolder`] for `parent`.
    pub fn remove_child(&mut self, parent: EntityId, child: EntityId) -> CoreResult<Vec<EntityId>> {
        let Some(entity_type) = self.get(child).map(Entity::entity_type) else {
            self.folder(parent)?;
            return Ok(Vec::new());
        };
        if !self.folder_mut(parent)?.remove(child, entity_type) {
            return Ok(Vec::new());
        }

        let dropped = self.subtree(child)?;
        for id in &dropped {
            self.slots[id.index()] = None;
        }
        tracing::debug!(parent = %parent, child = %child, dropped = dropped.len(), "entity removed");
        Ok(dropped)
    }

    /// Applies [`remove_child`](Self::remove_child) to each id; ids that are
    /// not children are skipped without aborting the rest.
    pub fn remove_children(
        &mut self,
        parent: EntityId,
        children: &[EntityId],
    ) -> CoreResult<Vec<EntityId>> {
        let mut dropped = Vec::new();
        for child in children {
            dropped.extend(self.remove_child(parent, *child)?);
        }
        Ok(dropped)
    }

    /// Renames `id`, refusing a name already used by a sibling of the same
    /// type. Renaming to a case variant of the current name is allowed.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidName`] if `new_name` is blank.
    /// - [`CoreError::DuplicateName`] if a sibling already has the name.
    /// - [`CoreError::UnknownEntity`] if `id` is not live.
    pub fn rename(&mut self, id: EntityId, new_name: &str) -> CoreResult<()> {
        let name = validate_name(new_name)?;
        let entity = self.entity(id)?;
        if let Some(parent) = entity.parent() {
            if let Some(existing) = self.find_child(parent, entity.entity_type(), &name)? {
                if existing != id {
                    return Err(CoreError::DuplicateName(name));
                }
            }
        }
        let now = self.now();
        self.entity_mut(id)?.set_name(&name, now);
        tracing::debug!(id = %id, name = %name, "entity renamed");
        Ok(())
    }

    /// Changes the extension of file `id` and refreshes its `updated_at`.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotAFile`] for folders, [`CoreError::UnknownEntity`] if
    /// `id` is not live.
    pub fn set_extension(&mut self, id: EntityId, extension: &str) -> CoreResult<()> {
        let now = self.now();
        if !self.entity_mut(id)?.set_extension(extension, now) {
            return Err(CoreError::NotAFile(id));
        }
        Ok(())
    }

    /// Re-parents `id` under `new_parent`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::WouldCreateCycle`] if `new_parent` is `id` or lies
    ///   inside its subtree (this also covers moving the root).
    /// - [`CoreError::DuplicateName`] if `new_parent` already holds a child
    ///   with the same identity.
    /// - [`CoreError::NotAFolder`] / [`CoreError::UnknownEntity`].
    pub fn move_entity(&mut self, id: EntityId, new_parent: EntityId) -> CoreResult<()> {
        self.folder(new_parent)?;
        let entity = self.entity(id)?;
        let entity_type = entity.entity_type();
        if id == new_parent || self.is_ancestor(id, new_parent)? {
            return Err(CoreError::WouldCreateCycle(id));
        }
        let Some(old_parent) = entity.parent() else {
            return Err(CoreError::WouldCreateCycle(id));
        };
        if old_parent == new_parent {
            return Ok(());
        }
        if let Some(existing) = self.find_child(new_parent, entity_type, entity.name())? {
            let name = self.entity(existing)?.name().to_string();
            return Err(CoreError::DuplicateName(name));
        }

        self.folder_mut(old_parent)?.remove(id, entity_type);
        self.folder_mut(new_parent)?.push(id, entity_type);
        self.entity_mut(id)?.set_parent(Some(new_parent));
        tracing::debug!(id = %id, from = %old_parent, to = %new_parent, "entity moved");
        Ok(())
    }

    /// Folders from the root down to the direct parent of `id`.
    ///
    /// Empty for the root itself.
    pub fn ancestors(&self, id: EntityId) -> CoreResult<Vec<EntityId>> {
        let mut chain = Vec::new();
        let mut cursor = self.entity(id)?.parent();
        while let Some(folder) = cursor {
            chain.push(folder);
            cursor = self.entity(folder)?.parent();
        }
        chain.reverse();
        Ok(chain)
    }

    /// `true` if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: EntityId, id: EntityId) -> CoreResult<bool> {
        let mut cursor = self.entity(id)?.parent();
        while let Some(folder) = cursor {
            if folder == ancestor {
                return Ok(true);
            }
            cursor = self.entity(folder)?.parent();
        }
        Ok(false)
    }

    /// `id` and all of its descendants in pre-order.
    pub fn subtree(&self, id: EntityId) -> CoreResult<Vec<EntityId>> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let entity = self.entity(next)?;
            out.push(next);
            if let Some(contents) = entity.contents() {
                stack.extend(contents.children().iter().rev());
            }
        }
        Ok(out)
    }

    /// The first `"{base} N"` (N ≥ 1) not used by a sibling of `entity_type`
    /// inside `folder`.
    pub fn next_available_name(
        &self,
        folder: EntityId,
        entity_type: EntityType,
        base: &str,
    ) -> CoreResult<String> {
        let mut n = 1usize;
        loop {
            let candidate = format!("{base} {n}");
            if self.find_child(folder, entity_type, &candidate)?.is_none() {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn tree() -> FileTree {
        FileTree::with_clock("root", ManualClock::shared(0))
    }

    fn add_folder(tree: &mut FileTree, parent: EntityId, name: &str) -> EntityId {
        let folder = tree.make_folder(name);
        tree.add_child(parent, folder).unwrap().unwrap()
    }

    fn add_file(tree: &mut FileTree, parent: EntityId, name: &str, ext: &str) -> EntityId {
        let file = tree.make_file(name, ext);
        tree.add_child(parent, file).unwrap().unwrap()
    }

    #[test]
    fn new_tree_has_parentless_root() {
        let tree = tree();
        let root = tree.entity(tree.root()).unwrap();

        assert_eq!(root.name(), "root");
        assert!(root.is_folder());
        assert!(root.parent().is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn add_child_links_parent_and_counts() {
        let mut tree = tree();
        let root = tree.root();
        let docs = add_folder(&mut tree, root, "Docs");
        let notes = add_file(&mut tree, root, "notes", "txt");

        assert_eq!(tree.children(root).unwrap(), &[docs, notes]);
        assert_eq!(tree.entity(docs).unwrap().parent(), Some(root));
        assert_eq!(tree.folder_count(root).unwrap(), 1);
        assert_eq!(tree.file_count(root).unwrap(), 1);
    }

    #[test]
    fn adding_duplicate_is_a_noop() {
        let mut tree = tree();
        let root = tree.root();
        add_folder(&mut tree, root, "Docs");
        let before = tree.children(root).unwrap().to_vec();

        let dup = tree.make_folder("DOCS");
        assert_eq!(tree.add_child(root, dup).unwrap(), None);

        assert_eq!(tree.children(root).unwrap(), before.as_slice());
        assert_eq!(tree.folder_count(root).unwrap(), 1);
        assert_eq!(tree.file_count(root).unwrap(), 0);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn folder_and_file_may_share_a_name() {
        let mut tree = tree();
        let root = tree.root();
        add_folder(&mut tree, root, "same");
        add_file(&mut tree, root, "same", "txt");

        assert_eq!(tree.folder_count(root).unwrap(), 1);
        assert_eq!(tree.file_count(root).unwrap(), 1);
    }

    #[test]
    fn files_collide_on_name_regardless_of_extension() {
        let mut tree = tree();
        let root = tree.root();
        add_file(&mut tree, root, "notes", "txt");

        let other = tree.make_file("Notes", "md");
        assert_eq!(tree.add_child(root, other).unwrap(), None);
        assert_eq!(tree.file_count(root).unwrap(), 1);
    }

    #[test]
    fn add_child_to_file_is_not_a_folder() {
        let mut tree = tree();
        let root = tree.root();
        let file = add_file(&mut tree, root, "a", "txt");

        let child = tree.make_folder("x");
        assert!(matches!(
            tree.add_child(file, child),
            Err(CoreError::NotAFolder(id)) if id == file
        ));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn direct_views_filter_by_type_in_order() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_folder(&mut tree, root, "a");
        let f1 = add_file(&mut tree, root, "f1", "txt");
        let b = add_folder(&mut tree, root, "b");
        let f2 = add_file(&mut tree, root, "f2", "txt");

        assert_eq!(tree.direct_folders(root).unwrap(), vec![a, b]);
        assert_eq!(tree.direct_files(root).unwrap(), vec![f1, f2]);
    }

    #[test]
    fn remove_child_drops_subtree_and_updates_counts() {
        let mut tree = tree();
        let root = tree.root();
        let docs = add_folder(&mut tree, root, "Docs");
        let inner = add_folder(&mut tree, docs, "inner");
        let file = add_file(&mut tree, inner, "deep", "txt");

        let dropped = tree.remove_child(root, docs).unwrap();

        assert_eq!(dropped, vec![docs, inner, file]);
        assert!(!tree.contains(docs));
        assert!(!tree.contains(file));
        assert_eq!(tree.folder_count(root).unwrap(), 0);
        assert!(matches!(tree.entity(docs), Err(CoreError::UnknownEntity(_))));
    }

    #[test]
    fn remove_missing_child_is_a_noop() {
        let mut tree = tree();
        let root = tree.root();
        let docs = add_folder(&mut tree, root, "Docs");
        let file = add_file(&mut tree, docs, "a", "txt");

        assert!(tree.remove_child(root, file).unwrap().is_empty());
        assert!(tree.remove_child(root, EntityId::new(99)).unwrap().is_empty());
        assert_eq!(tree.file_count(docs).unwrap(), 1);
    }

    #[test]
    fn remove_children_continues_past_missing() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_file(&mut tree, root, "a", "txt");
        let b = add_file(&mut tree, root, "b", "txt");

        let dropped = tree
            .remove_children(root, &[a, EntityId::new(42), b])
            .unwrap();

        assert_eq!(dropped, vec![a, b]);
        assert_eq!(tree.file_count(root).unwrap(), 0);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_file(&mut tree, root, "a", "txt");
        tree.remove_child(root, a).unwrap();
        let b = add_file(&mut tree, root, "a", "txt");

        assert_ne!(a, b);
        assert!(tree.get(a).is_none());
    }

    #[test]
    fn ancestors_run_root_to_parent() {
        let mut tree = tree();
        let root = tree.root();
        let f1 = add_folder(&mut tree, root, "Folder 1");
        let file = add_file(&mut tree, f1, "lorem", "txt");

        assert_eq!(tree.ancestors(file).unwrap(), vec![root, f1]);
        assert!(tree.ancestors(root).unwrap().is_empty());
    }

    #[test]
    fn rename_refreshes_updated_at() {
        let clock = ManualClock::shared(1_000);
        let mut tree = FileTree::with_clock("root", clock.clone());
        let root = tree.root();
        let a = add_file(&mut tree, root, "a", "txt");

        clock.advance(Duration::from_secs(1));
        tree.rename(a, "b").unwrap();

        let entity = tree.entity(a).unwrap();
        assert_eq!(entity.name(), "b");
        assert_eq!(entity.created_at(), UNIX_EPOCH + Duration::from_millis(1_000));
        assert_eq!(entity.updated_at(), UNIX_EPOCH + Duration::from_millis(2_000));
    }

    #[test]
    fn rename_rejects_sibling_collision() {
        let mut tree = tree();
        let root = tree.root();
        add_folder(&mut tree, root, "Docs");
        let other = add_folder(&mut tree, root, "Other");

        assert!(matches!(
            tree.rename(other, "docs"),
            Err(CoreError::DuplicateName(_))
        ));
        assert_eq!(tree.entity(other).unwrap().name(), "Other");
    }

    #[test]
    fn rename_to_case_variant_of_self_is_allowed() {
        let mut tree = tree();
        let root = tree.root();
        let docs = add_folder(&mut tree, root, "docs");

        tree.rename(docs, "DOCS").unwrap();
        assert_eq!(tree.entity(docs).unwrap().name(), "DOCS");
    }

    #[test]
    fn rename_ignores_other_type_with_same_name() {
        let mut tree = tree();
        let root = tree.root();
        add_folder(&mut tree, root, "x");
        let file = add_file(&mut tree, root, "y", "txt");

        tree.rename(file, "x").unwrap();
        assert_eq!(tree.entity(file).unwrap().name(), "x");
    }

    #[test]
    fn rename_rejects_blank_name() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_file(&mut tree, root, "a", "txt");
        assert!(matches!(tree.rename(a, "  "), Err(CoreError::InvalidName(_))));
    }

    #[test]
    fn rename_root_is_allowed() {
        let mut tree = tree();
        let root = tree.root();
        tree.rename(root, "Computer").unwrap();
        assert_eq!(tree.entity(root).unwrap().name(), "Computer");
    }

    #[test]
    fn set_extension_on_folder_fails() {
        let mut tree = tree();
        let root = tree.root();
        assert!(matches!(
            tree.set_extension(root, "md"),
            Err(CoreError::NotAFile(_))
        ));
    }

    #[test]
    fn set_extension_updates_file() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_file(&mut tree, root, "a", "txt");
        tree.set_extension(a, "md").unwrap();
        assert_eq!(tree.entity(a).unwrap().extension(), Some("md"));
    }

    #[test]
    fn move_into_own_subtree_is_rejected() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_folder(&mut tree, root, "a");
        let b = add_folder(&mut tree, a, "b");

        assert!(matches!(tree.move_entity(a, b), Err(CoreError::WouldCreateCycle(_))));
        assert!(matches!(tree.move_entity(a, a), Err(CoreError::WouldCreateCycle(_))));
        assert!(matches!(
            tree.move_entity(root, a),
            Err(CoreError::WouldCreateCycle(_))
        ));
        assert_eq!(tree.entity(b).unwrap().parent(), Some(a));
    }

    #[test]
    fn move_entity_relinks_and_recounts() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_folder(&mut tree, root, "a");
        let b = add_folder(&mut tree, root, "b");
        let file = add_file(&mut tree, a, "f", "txt");

        tree.move_entity(file, b).unwrap();

        assert_eq!(tree.entity(file).unwrap().parent(), Some(b));
        assert_eq!(tree.file_count(a).unwrap(), 0);
        assert_eq!(tree.file_count(b).unwrap(), 1);
        assert_eq!(tree.ancestors(file).unwrap(), vec![root, b]);
    }

    #[test]
    fn move_entity_rejects_collision_at_destination() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_folder(&mut tree, root, "a");
        let b = add_folder(&mut tree, root, "b");
        let f1 = add_file(&mut tree, a, "f", "txt");
        add_file(&mut tree, b, "F", "txt");

        assert!(matches!(
            tree.move_entity(f1, b),
            Err(CoreError::DuplicateName(_))
        ));
        assert_eq!(tree.file_count(a).unwrap(), 1);
    }

    #[test]
    fn subtree_is_pre_order() {
        let mut tree = tree();
        let root = tree.root();
        let a = add_folder(&mut tree, root, "a");
        let a1 = add_file(&mut tree, a, "a1", "txt");
        let b = add_folder(&mut tree, root, "b");

        assert_eq!(tree.subtree(root).unwrap(), vec![root, a, a1, b]);
    }

    #[test]
    fn next_available_name_skips_taken() {
        let mut tree = tree();
        let root = tree.root();
        add_folder(&mut tree, root, "New Folder 1");
        add_folder(&mut tree, root, "new folder 2");
        add_file(&mut tree, root, "New Folder 3", "txt");

        assert_eq!(
            tree.next_available_name(root, EntityType::Folder, "New Folder").unwrap(),
            "New Folder 3"
        );
        assert_eq!(
            tree.next_available_name(root, EntityType::File, "New File").unwrap(),
            "New File 1"
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        AddFolder { parent: usize, name: u8 },
        AddFile { parent: usize, name: u8 },
        Remove { parent: usize, child: usize },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..8usize, 0..4u8).prop_map(|(parent, name)| Op::AddFolder { parent, name }),
            (0..8usize, 0..4u8).prop_map(|(parent, name)| Op::AddFile { parent, name }),
            (0..8usize, 0..8usize).prop_map(|(parent, child)| Op::Remove { parent, child }),
        ]
    }

    fn pick_folder(tree: &FileTree, n: usize) -> EntityId {
        let folders: Vec<EntityId> = tree
            .iter()
            .filter(|(_, e)| e.is_folder())
            .map(|(id, _)| id)
            .collect();
        folders[n % folders.len()]
    }

    fn assert_invariants(tree: &FileTree) {
        for (id, entity) in tree.iter() {
            let Some(contents) = entity.contents() else {
                continue;
            };
            let children: Vec<&Entity> = contents
                .children()
                .iter()
                .map(|c| tree.entity(*c).unwrap())
                .collect();
            let folders = children.iter().filter(|e| e.is_folder()).count();
            let files = children.iter().filter(|e| e.is_file()).count();
            assert_eq!(contents.folder_count(), folders);
            assert_eq!(contents.file_count(), files);
            for (i, a) in children.iter().enumerate() {
                assert_eq!(a.parent(), Some(id));
                for b in &children[i + 1..] {
                    assert!(!b.same_identity(a.entity_type(), a.name()));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn counters_and_uniqueness_hold_under_random_ops(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut tree = tree();
            for op in ops {
                match op {
                    Op::AddFolder { parent, name } => {
                        let parent = pick_folder(&tree, parent);
                        let folder = tree.make_folder(&format!("Dir{name}"));
                        tree.add_child(parent, folder).unwrap();
                    }
                    Op::AddFile { parent, name } => {
                        let parent = pick_folder(&tree, parent);
                        let file = tree.make_file(&format!("file{name}"), "txt");
                        tree.add_child(parent, file).unwrap();
                    }
                    Op::Remove { parent, child } => {
                        let parent = pick_folder(&tree, parent);
                        let children = tree.children(parent).unwrap().to_vec();
                        if !children.is_empty() {
                            tree.remove_child(parent, children[child % children.len()]).unwrap();
                        }
                    }
                }
                assert_invariants(&tree);
            }
        }
    }
}
