//! The facade frontends talk to: a [`FileTree`] plus a [`NavigationState`].

use crate::clock::SharedClock;
use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event};
use crate::nav::state::NavigationState;
use crate::tree::{search, validate_name, Entity, EntityId, EntityType, FileTree};
use crate::view;

const NEW_FOLDER_BASE: &str = "New Folder";
const NEW_FILE_BASE: &str = "New File";

/// Which navigation and editing controls a frontend should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub back: bool,
    pub forward: bool,
    pub up: bool,
    /// New file / new folder.
    pub create: bool,
    pub close_search: bool,
}

/// Owns the tree and the navigation cursor for one session.
///
/// Structural mutations go through here so the cursor and history never
/// point at a removed folder: removing the current folder or one of its
/// ancestors is refused, and removed ids are pruned from history.
#[derive(Debug)]
pub struct Explorer {
    tree: FileTree,
    nav: NavigationState,
    default_extension: String,
}

impl Explorer {
    /// Starts at the root of `tree`.
    pub fn new(tree: FileTree) -> Self {
        let nav = NavigationState::new(tree.root());
        Self {
            tree,
            nav,
            default_extension: "txt".to_string(),
        }
    }

    /// Builds the session described by `config`.
    pub fn from_config(config: &Config, clock: SharedClock) -> CoreResult<Self> {
        let general = &config.general;
        let tree = if general.sample_content {
            FileTree::with_sample_content(&general.root_name, clock)?
        } else {
            FileTree::with_clock(&general.root_name, clock)
        };
        let mut explorer = Self::new(tree);
        explorer.default_extension = general.default_extension.clone();
        Ok(explorer)
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Extension given to files created without one.
    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }

    pub fn current_folder(&self) -> EntityId {
        self.nav.current()
    }

    pub fn entity(&self, id: EntityId) -> CoreResult<&Entity> {
        self.tree.entity(id)
    }

    /// Direct children of `folder`, in insertion order.
    pub fn contents(&self, folder: EntityId) -> CoreResult<&[EntityId]> {
        self.tree.children(folder)
    }

    /// Folders from the root down to the parent of `id`.
    pub fn ancestors(&self, id: EntityId) -> CoreResult<Vec<EntityId>> {
        self.tree.ancestors(id)
    }

    /// `(folders, files)` directly inside the current folder.
    pub fn current_counts(&self) -> CoreResult<(usize, usize)> {
        let contents = self.tree.folder(self.nav.current())?;
        Ok((contents.folder_count(), contents.file_count()))
    }

    pub fn move_to(&mut self, folder: EntityId) -> CoreResult<()> {
        self.nav.move_to(&self.tree, folder)
    }

    pub fn up(&mut self) -> CoreResult<EntityId> {
        self.nav.up(&self.tree)
    }

    pub fn back(&mut self) -> CoreResult<EntityId> {
        self.nav.back()
    }

    pub fn forward(&mut self) -> CoreResult<EntityId> {
        self.nav.forward()
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.nav.can_go_forward()
    }

    /// `true` if `folder` is live and has a parent.
    pub fn can_go_up(&self, folder: EntityId) -> bool {
        self.tree.get(folder).is_some_and(|e| e.parent().is_some())
    }

    pub fn enter_search(&mut self) {
        self.nav.enter_search();
    }

    pub fn exit_search(&mut self) {
        self.nav.exit_search();
    }

    pub fn is_searching(&self) -> bool {
        self.nav.is_searching()
    }

    /// Control availability for the current state. Navigation and creation
    /// are disabled while search results are shown.
    pub fn controls(&self) -> Controls {
        let searching = self.nav.is_searching();
        Controls {
            back: !searching && self.can_go_back(),
            forward: !searching && self.can_go_forward(),
            up: !searching && self.can_go_up(self.nav.current()),
            create: !searching,
            close_search: searching,
        }
    }

    /// See [`FileTree::add_child`]: `Ok(None)` means a duplicate was ignored.
    pub fn add_entity(&mut self, parent: EntityId, entity: Entity) -> CoreResult<Option<EntityId>> {
        self.tree.add_child(parent, entity)
    }

    /// Removes `id` from `parent`. Returns `false` if it was not a child.
    ///
    /// # Errors
    ///
    /// [`CoreError::FolderInUse`] if `id` is the current folder or one of
    /// its ancestors.
    pub fn remove_entity(&mut self, parent: EntityId, id: EntityId) -> CoreResult<bool> {
        if !self.tree.children(parent)?.contains(&id) {
            return Ok(false);
        }
        let current = self.nav.current();
        if id == current || self.tree.is_ancestor(id, current)? {
            return Err(CoreError::FolderInUse(id));
        }
        let dropped = self.tree.remove_child(parent, id)?;
        self.nav.forget(&dropped);
        Ok(!dropped.is_empty())
    }

    /// Creates a folder named `name` in the current folder.
    pub fn create_folder(&mut self, name: &str) -> CoreResult<Option<EntityId>> {
        let name = validate_name(name)?;
        let folder = self.tree.make_folder(&name);
        self.tree.add_child(self.nav.current(), folder)
    }

    /// Creates a file in the current folder.
    pub fn create_file(&mut self, name: &str, extension: &str) -> CoreResult<Option<EntityId>> {
        let name = validate_name(name)?;
        let file = self.tree.make_file(&name, extension);
        self.tree.add_child(self.nav.current(), file)
    }

    /// Creates `New Folder N` in the current folder.
    pub fn new_folder(&mut self) -> CoreResult<EntityId> {
        let current = self.nav.current();
        let name = self
            .tree
            .next_available_name(current, EntityType::Folder, NEW_FOLDER_BASE)?;
        let folder = self.tree.make_folder(&name);
        self.tree
            .add_child(current, folder)?
            .ok_or(CoreError::DuplicateName(name))
    }

    /// Creates `New File N` with the default extension in the current folder.
    pub fn new_file(&mut self) -> CoreResult<EntityId> {
        let current = self.nav.current();
        let name = self
            .tree
            .next_available_name(current, EntityType::File, NEW_FILE_BASE)?;
        let file = self.tree.make_file(&name, &self.default_extension);
        self.tree
            .add_child(current, file)?
            .ok_or(CoreError::DuplicateName(name))
    }

    pub fn rename(&mut self, id: EntityId, new_name: &str) -> CoreResult<()> {
        self.tree.rename(id, new_name)
    }

    pub fn set_extension(&mut self, id: EntityId, extension: &str) -> CoreResult<()> {
        self.tree.set_extension(id, extension)
    }

    pub fn move_entity(&mut self, id: EntityId, new_parent: EntityId) -> CoreResult<()> {
        self.tree.move_entity(id, new_parent)
    }

    /// Descendants of `folder` whose names contain `keyword`, in pre-order.
    pub fn search(&self, folder: EntityId, keyword: &str) -> CoreResult<Vec<EntityId>> {
        search(&self.tree, folder, keyword)
    }

    /// `(folders, files)` among `ids`, for a search-results status line.
    pub fn count_types(&self, ids: &[EntityId]) -> (usize, usize) {
        view::count_types(&self.tree, ids)
    }

    /// Executes one intent. Failures come back as
    /// [`Event::OperationFailed`] with the model unchanged.
    pub fn dispatch(&mut self, command: Command) -> Event {
        let operation = operation_name(&command);
        match self.execute(command) {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(operation, error = %err, "intent failed");
                Event::OperationFailed {
                    operation: operation.to_string(),
                    error: err.to_string(),
                }
            }
        }
    }

    fn execute(&mut self, command: Command) -> CoreResult<Event> {
        let searching = self.nav.is_searching();
        match command {
            Command::Navigate(folder) => {
                self.move_to(folder)?;
                self.exit_search();
                Ok(Event::Navigated { folder })
            }
            Command::GoUp | Command::GoBack | Command::GoForward | Command::NewFolder
            | Command::NewFile | Command::CreateFolder(_) | Command::CreateFile(..)
                if searching =>
            {
                Err(CoreError::SearchActive)
            }
            Command::GoUp => Ok(Event::Navigated { folder: self.up()? }),
            Command::GoBack => Ok(Event::Navigated { folder: self.back()? }),
            Command::GoForward => Ok(Event::Navigated {
                folder: self.forward()?,
            }),
            Command::NewFolder => Ok(Event::EntityCreated {
                id: self.new_folder()?,
            }),
            Command::NewFile => Ok(Event::EntityCreated {
                id: self.new_file()?,
            }),
            Command::CreateFolder(name) => Ok(match self.create_folder(&name)? {
                Some(id) => Event::EntityCreated { id },
                None => Event::DuplicateRejected { name },
            }),
            Command::CreateFile(name, extension) => Ok(match self.create_file(&name, &extension)? {
                Some(id) => Event::EntityCreated { id },
                None => Event::DuplicateRejected { name },
            }),
            Command::Rename(id, name) => {
                self.rename(id, &name)?;
                Ok(Event::EntityUpdated { id })
            }
            Command::SetExtension(id, extension) => {
                self.set_extension(id, &extension)?;
                Ok(Event::EntityUpdated { id })
            }
            Command::Remove(ids) => {
                let current = self.nav.current();
                for id in &ids {
                    if *id == current || self.tree.is_ancestor(*id, current).unwrap_or(false) {
                        return Err(CoreError::FolderInUse(*id));
                    }
                }
                let mut removed = 0;
                for id in ids {
                    // Already gone with an earlier folder in the batch.
                    let Some(parent) = self.tree.get(id).and_then(Entity::parent) else {
                        continue;
                    };
                    if self.remove_entity(parent, id)? {
                        removed += 1;
                    }
                }
                Ok(Event::EntitiesRemoved { removed })
            }
            Command::Search(keyword) => {
                let results = self.search(self.nav.current(), &keyword)?;
                self.enter_search();
                Ok(Event::SearchCompleted { keyword, results })
            }
            Command::CloseSearch => {
                self.exit_search();
                Ok(Event::SearchClosed)
            }
        }
    }
}

fn operation_name(command: &Command) -> &'static str {
    match command {
        Command::Navigate(_) => "navigate",
        Command::GoUp => "up",
        Command::GoBack => "back",
        Command::GoForward => "forward",
        Command::NewFolder | Command::CreateFolder(_) => "create folder",
        Command::NewFile | Command::CreateFile(..) => "create file",
        Command::Rename(..) => "rename",
        Command::SetExtension(..) => "set extension",
        Command::Remove(_) => "remove",
        Command::Search(_) => "search",
        Command::CloseSearch => "close search",
    }
}
