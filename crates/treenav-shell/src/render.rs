//! Plain-text rendering of the shell's views.
//!
//! Every function writes to an `impl Write` so tests can render into a
//! `Vec<u8>`.

use std::io::{self, Write};

use treenav_core::nav::filter::FuzzyMatch;
use treenav_core::view::{
    breadcrumb, count_types, directory_label, folder_outline, format_timestamp, status_text,
};
use treenav_core::{Controls, EntityId};

use crate::app::App;

/// Renders the current folder (or the search results) followed by the
/// status bar.
pub fn render_view(out: &mut impl Write, app: &App) -> io::Result<()> {
    let explorer = app.explorer();
    if explorer.is_searching() {
        writeln!(out, " search results")?;
        for id in app.results() {
            render_row(out, app, *id, true)?;
        }
        let (folders, files) = count_types(explorer.tree(), app.results());
        render_statusbar(out, app, folders, files)
    } else {
        render_breadcrumb(out, app)?;
        for id in app.listing() {
            render_row(out, app, id, false)?;
        }
        let (folders, files) = explorer.current_counts().unwrap_or_default();
        render_statusbar(out, app, folders, files)
    }
}

/// Example: " root / Folder 1 / a"
pub fn render_breadcrumb(out: &mut impl Write, app: &App) -> io::Result<()> {
    let explorer = app.explorer();
    let names = breadcrumb(explorer.tree(), explorer.current_folder()).unwrap_or_default();
    writeln!(out, " {}", names.join(&app.config().ui.breadcrumb_separator))
}

fn render_row(out: &mut impl Write, app: &App, id: EntityId, with_directory: bool) -> io::Result<()> {
    let tree = app.explorer().tree();
    let Some(entity) = tree.get(id) else {
        return Ok(());
    };
    let date_format = &app.config().ui.date_format;
    let created = timestamp(entity.created_at(), date_format);
    let updated = timestamp(entity.updated_at(), date_format);
    let marker = if entity.is_folder() { "[DIR]" } else { "" };
    let label = entity.entity_type().label();

    if with_directory {
        let directory = directory_label(tree, id, &app.config().ui.breadcrumb_separator)
            .unwrap_or_default();
        writeln!(
            out,
            "  {marker:<5} {:<24} {label:<6} {created}  {updated}  {directory}",
            entity.display_name()
        )
    } else {
        writeln!(
            out,
            "  {marker:<5} {:<24} {label:<6} {created}  {updated}",
            entity.display_name()
        )
    }
}

fn timestamp(time: std::time::SystemTime, format: &str) -> String {
    format_timestamp(time, format).unwrap_or_else(|_| "-".to_owned())
}

fn render_statusbar(out: &mut impl Write, app: &App, folders: usize, files: usize) -> io::Result<()> {
    let (folders, files) = status_text(folders, files);
    let controls = controls_text(&app.explorer().controls());
    write!(out, " {folders}  {files}  [{controls}]")?;
    if let Some(message) = app.status_message() {
        write!(out, "  {message}")?;
    }
    writeln!(out)
}

/// Enabled controls by name, disabled ones as `-`.
fn controls_text(controls: &Controls) -> String {
    [
        (controls.back, "back"),
        (controls.forward, "forward"),
        (controls.up, "up"),
        (controls.create, "new"),
        (controls.close_search, "close"),
    ]
    .iter()
    .map(|(enabled, name)| if *enabled { *name } else { "-" })
    .collect::<Vec<_>>()
    .join(" ")
}

/// Indented folder tree from the root; the current folder is marked `*`.
pub fn render_outline(out: &mut impl Write, app: &App) -> io::Result<()> {
    let explorer = app.explorer();
    let tree = explorer.tree();
    let rows = folder_outline(tree, tree.root()).unwrap_or_default();
    for row in rows {
        let Some(folder) = tree.get(row.id) else {
            continue;
        };
        let cursor = if row.id == explorer.current_folder() { "*" } else { " " };
        writeln!(out, "{cursor} {}{}", "  ".repeat(row.depth), folder.name())?;
    }
    Ok(())
}

pub fn render_matches(out: &mut impl Write, app: &App, matches: &[FuzzyMatch]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, " no matches");
    }
    for m in matches {
        render_row(out, app, m.id(), false)?;
    }
    Ok(())
}

pub fn render_help(out: &mut impl Write) -> io::Result<()> {
    const HELP: &[(&str, &str)] = &[
        ("ls", "list the current folder"),
        ("cd <folder> | cd .. | cd", "open a folder, go up, go to the root"),
        ("up / back / forward", "navigate"),
        ("mkdir [name]", "new folder"),
        ("touch [name[.ext]]", "new file"),
        ("rm <name>", "remove an entry"),
        ("mv <name> -> <new name>", "rename"),
        ("ext <file> <extension>", "change a file's extension"),
        ("find <keyword>", "search below the current folder"),
        ("close", "leave search results"),
        ("filter <query>", "fuzzy-filter the listing"),
        ("sort <field> [asc|desc]", "name, created, updated or type"),
        ("tree / pwd", "folder outline / current path"),
        ("quit", "exit"),
    ];
    for (usage, what) in HELP {
        writeln!(out, "  {usage:<28} {what}")?;
    }
    Ok(())
}
