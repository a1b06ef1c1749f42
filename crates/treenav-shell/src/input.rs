use treenav_core::event::Command;
use treenav_core::nav::filter::{SortDirection, SortField};
use treenav_core::tree::names_equal;
use treenav_core::{EntityId, EntityType, Explorer};

/// What a typed line asks the shell to do.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Print the current listing (or search results).
    List,
    /// Print the folder outline from the root.
    Tree,
    /// Print the breadcrumb of the current folder.
    Pwd,
    /// Fuzzy-filter the current listing.
    Filter(String),
    /// Change the listing order.
    Sort(SortField, SortDirection),
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// The line could not be understood; the message says why.
    Invalid(String),
}

/// Parses one input line.
///
/// Entity names are looked up case-insensitively among `scope`, which is
/// the listing the user is looking at (search results while searching).
/// The first match in `scope` order wins.
pub fn resolve_line(line: &str, explorer: &Explorer, scope: &[EntityId]) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        return InputAction::Empty;
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(v, r)| (v, r.trim()));

    let lookup = |name: &str, kind: Option<EntityType>| {
        find_in_scope(explorer, scope, name, kind)
            .ok_or_else(|| InputAction::Invalid(format!("no such entry: {name}")))
    };

    let result = match verb {
        "ls" => Ok(InputAction::List),
        "tree" => Ok(InputAction::Tree),
        "pwd" => Ok(InputAction::Pwd),
        "help" | "?" => Ok(InputAction::Help),
        "quit" | "exit" | "q" => Ok(InputAction::Quit),
        "up" => Ok(InputAction::Command(Command::GoUp)),
        "back" => Ok(InputAction::Command(Command::GoBack)),
        "forward" => Ok(InputAction::Command(Command::GoForward)),
        "close" => Ok(InputAction::Command(Command::CloseSearch)),
        "find" => Ok(InputAction::Command(Command::Search(rest.to_string()))),
        "filter" => Ok(InputAction::Filter(rest.to_string())),
        "cd" => match rest {
            "" | "/" => Ok(InputAction::Command(Command::Navigate(explorer.tree().root()))),
            ".." => Ok(InputAction::Command(Command::GoUp)),
            name => lookup(name, Some(EntityType::Folder))
                .map(|id| InputAction::Command(Command::Navigate(id))),
        },
        "mkdir" if rest.is_empty() => Ok(InputAction::Command(Command::NewFolder)),
        "mkdir" => Ok(InputAction::Command(Command::CreateFolder(rest.to_string()))),
        "touch" if rest.is_empty() => Ok(InputAction::Command(Command::NewFile)),
        "touch" => {
            let (name, extension) = split_file_name(rest, explorer.default_extension());
            Ok(InputAction::Command(Command::CreateFile(name, extension)))
        }
        "rm" if rest.is_empty() => Err(usage("rm <name>")),
        "rm" => lookup(rest, None).map(|id| InputAction::Command(Command::Remove(vec![id]))),
        "mv" => match rest.split_once(" -> ") {
            Some((old, new)) if !new.trim().is_empty() => lookup(old.trim(), None)
                .map(|id| InputAction::Command(Command::Rename(id, new.trim().to_string()))),
            _ => Err(usage("mv <name> -> <new name>")),
        },
        "ext" => match rest.rsplit_once(char::is_whitespace) {
            Some((file, ext)) => lookup(file.trim(), Some(EntityType::File))
                .map(|id| InputAction::Command(Command::SetExtension(id, ext.to_string()))),
            None => Err(usage("ext <file> <extension>")),
        },
        "sort" => parse_sort(rest).ok_or_else(|| usage("sort name|created|updated|type [asc|desc]")),
        other => Err(InputAction::Invalid(format!("unknown command: {other}"))),
    };

    result.unwrap_or_else(|invalid| invalid)
}

fn usage(text: &str) -> InputAction {
    InputAction::Invalid(format!("usage: {text}"))
}

/// Finds `name` among `scope` by display name first, then by bare name.
fn find_in_scope(
    explorer: &Explorer,
    scope: &[EntityId],
    name: &str,
    kind: Option<EntityType>,
) -> Option<EntityId> {
    let candidates: Vec<_> = scope
        .iter()
        .filter_map(|id| explorer.tree().get(*id).map(|e| (*id, e)))
        .filter(|(_, e)| kind.is_none_or(|k| e.entity_type() == k))
        .collect();

    candidates
        .iter()
        .find(|(_, e)| names_equal(&e.display_name(), name))
        .or_else(|| candidates.iter().find(|(_, e)| names_equal(e.name(), name)))
        .map(|(id, _)| *id)
}

/// Splits `notes.md` into `("notes", "md")`. Without a usable dot the whole
/// input is the name and `default_extension` is used.
fn split_file_name(input: &str, default_extension: &str) -> (String, String) {
    match input.rsplit_once('.') {
        Some((name, ext)) if !name.trim().is_empty() && !ext.is_empty() => {
            (name.to_string(), ext.to_string())
        }
        _ => (input.to_string(), default_extension.to_string()),
    }
}

fn parse_sort(rest: &str) -> Option<InputAction> {
    let mut parts = rest.split_whitespace();
    let field = match parts.next()? {
        "name" => SortField::Name,
        "created" => SortField::Created,
        "updated" => SortField::Updated,
        "type" => SortField::Type,
        _ => return None,
    };
    let direction = match parts.next() {
        None | Some("asc") => SortDirection::Ascending,
        Some("desc") => SortDirection::Descending,
        Some(_) => return None,
    };
    Some(InputAction::Sort(field, direction))
}
