use std::io::Write;

use treenav_core::config::settings::Config;
use treenav_core::event::Event;
use treenav_core::nav::filter::{fuzzy_filter, sort_entries, SortDirection, SortField};
use treenav_core::{CoreResult, EntityId, Explorer, SharedClock};

use crate::input::InputAction;
use crate::render;

/// Shell-side state around the core [`Explorer`]: listing order, the last
/// search results and the message shown on the status line.
#[derive(Debug)]
pub struct App {
    explorer: Explorer,
    config: Config,
    sort_field: SortField,
    sort_direction: SortDirection,
    results: Vec<EntityId>,
    status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, clock: SharedClock) -> CoreResult<Self> {
        let explorer = Explorer::from_config(&config, clock)?;
        Ok(Self {
            explorer,
            config,
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
            results: Vec::new(),
            status_message: None,
        })
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn results(&self) -> &[EntityId] {
        &self.results
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The current folder's children in display order.
    pub fn listing(&self) -> Vec<EntityId> {
        let ids = self
            .explorer
            .contents(self.explorer.current_folder())
            .unwrap_or_default();
        sort_entries(
            self.explorer.tree(),
            ids,
            self.sort_field,
            self.sort_direction,
            self.config.general.folders_first,
        )
    }

    /// What names typed by the user refer to: search results while
    /// searching, otherwise the listing.
    pub fn scope(&self) -> Vec<EntityId> {
        if self.explorer.is_searching() {
            self.results.clone()
        } else {
            self.listing()
        }
    }

    /// Runs one action and prints its outcome. Returns `false` to quit.
    pub fn apply(&mut self, action: InputAction, out: &mut impl Write) -> anyhow::Result<bool> {
        match action {
            InputAction::Quit => return Ok(false),
            InputAction::Empty => {}
            InputAction::Invalid(message) => writeln!(out, "{message}")?,
            InputAction::Help => render::render_help(out)?,
            InputAction::Pwd => render::render_breadcrumb(out, self)?,
            InputAction::Tree => render::render_outline(out, self)?,
            InputAction::List => render::render_view(out, self)?,
            InputAction::Filter(query) => {
                let matches = fuzzy_filter(self.explorer.tree(), &self.listing(), &query);
                render::render_matches(out, self, &matches)?;
            }
            InputAction::Sort(field, direction) => {
                self.sort_field = field;
                self.sort_direction = direction;
                render::render_view(out, self)?;
            }
            InputAction::Command(command) => {
                let event = self.explorer.dispatch(command);
                self.handle_event(event);
                render::render_view(out, self)?;
            }
        }
        Ok(true)
    }

    fn handle_event(&mut self, event: Event) {
        self.status_message = match event {
            Event::Navigated { .. } | Event::SearchClosed => {
                self.results.clear();
                None
            }
            Event::EntityCreated { id } => self
                .explorer
                .entity(id)
                .ok()
                .map(|e| format!("created {}", e.display_name())),
            Event::DuplicateRejected { name } => Some(format!("{name:?} already exists")),
            Event::EntityUpdated { id } => self
                .explorer
                .entity(id)
                .ok()
                .map(|e| format!("updated {}", e.display_name())),
            Event::EntitiesRemoved { removed } => {
                let tree = self.explorer.tree();
                self.results.retain(|id| tree.contains(*id));
                Some(format!("removed {removed}"))
            }
            Event::SearchCompleted { keyword, results } => {
                let message = format!("{} matches for {keyword:?}", results.len());
                self.results = results;
                Some(message)
            }
            Event::OperationFailed { operation, error } => {
                Some(format!("{operation} failed: {error}"))
            }
        };
    }
}
