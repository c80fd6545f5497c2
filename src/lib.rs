//! A single editable note bound to a persisted list of saved notes.
//!
//! The list lives as one JSON array under one storage key ([`store::Store`]);
//! [`manager::NoteManager`] owns the editor and the edit cursor and performs
//! every create/update/load/delete as a whole-list read-modify-write.

pub mod args;
pub mod clock;
pub mod config;
pub mod confirm;
pub mod error;
pub mod formatting;
mod help;
pub mod ids;
pub mod keymap;
pub mod logging;
pub mod manager;
pub mod note;
pub mod render;
pub mod session;
pub mod status;
pub mod storage;
pub mod store;

use args::CommonFlags;
use config::{Config, ensure_dir};
use confirm::AssumeYes;
use error::{NotesError, Result};
use formatting::{FormatContext, TimeFormatter};
use manager::{NoteManager, Outcome};
use note::NoteId;
use std::env;
use storage::FileStorage;
use store::Store;
use terminal_size::{Width, terminal_size};

pub fn entry() -> Result<()> {
    logging::init();
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return help::run(Vec::new());
    }

    let cmd = args.remove(0);
    let config = Config::from_env()?;
    ensure_dir(&config.notes_dir)?;

    match cmd.as_str() {
        "add" => add_note(args, &config)?,
        "update" | "edit" => update_note(args, &config)?,
        "list" | "ls" => list_notes(args, &config)?,
        "view" | "show" => view_note(args, &config)?,
        "delete" | "rm" => delete_note(args, &config)?,
        "delete-all" => delete_all_notes(args, &config)?,
        "export" => export_notes(&config),
        "session" | "repl" => session::run(&config)?,
        "path" => println!("{}", config.notes_dir.display()),
        "help" | "--help" | "-h" => help::run(args)?,
        other => {
            eprintln!("Unknown command: {other}");
            help::run(Vec::new())?;
        }
    }

    Ok(())
}

/// Manager over the configured file-backed slot. Prompts on the terminal
/// unless `assume_yes`.
pub fn open_manager(config: &Config, assume_yes: bool) -> NoteManager<FileStorage> {
    let store = Store::new(FileStorage::new(&config.notes_dir), &config.key);
    let mgr = NoteManager::new(store).with_status_timeout(config.status_timeout_ms);
    if assume_yes { mgr.with_confirm(AssumeYes) } else { mgr }
}

pub(crate) fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn contexts(config: &Config, flags: &CommonFlags) -> (FormatContext, TimeFormatter) {
    let ctx = FormatContext::new(config.use_color && !flags.plain);
    let times = TimeFormatter::new(
        flags.relative_time,
        chrono::Utc::now().timestamp_millis(),
    );
    (ctx, times)
}

fn add_note(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "add")?;
    let mut positional = flags.positional.into_iter();
    let title = positional
        .next()
        .ok_or("Usage: mn add <title> [text...]")?;
    let text = positional.collect::<Vec<_>>().join(" ");

    let mut mgr = open_manager(config, false);
    let outcome = mgr.save(&title, &text)?;
    let id = outcome.id();
    let saved_title = mgr
        .find(id)
        .map(|n| n.title)
        .unwrap_or_default();
    println!("Saved note {id} ({saved_title})");
    Ok(())
}

fn update_note(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "update")?;
    let mut positional = flags.positional.into_iter();
    let (Some(id), Some(title)) = (positional.next(), positional.next()) else {
        return Err("Usage: mn update <id> <title> [text...]".into());
    };
    let rest: Vec<String> = positional.collect();

    let mut mgr = open_manager(config, false);
    let id = NoteId::from(id);
    if mgr.load(&id) != Outcome::Done {
        return Err(NotesError::NotFound(id.to_string()));
    }
    let text =
        if rest.is_empty() { mgr.editor().text.clone() } else { rest.join(" ") };
    let outcome = mgr.save(&title, &text)?;
    println!("Updated note {}", outcome.id());
    Ok(())
}

fn list_notes(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "list")?;
    if let Some(extra) = flags.positional.first() {
        return Err(format!("Unexpected argument for list: {extra}").into());
    }
    let (ctx, times) = contexts(config, &flags);
    let mgr = open_manager(config, false);
    let width = terminal_columns().unwrap_or(80);
    println!("{}", render::render_saved_list(&mgr.notes(), &ctx, &times, width));
    Ok(())
}

fn view_note(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "view")?;
    let id = flags
        .positional
        .first()
        .map(|s| NoteId::from(s.as_str()))
        .ok_or("Usage: mn view <id> [--plain]")?;
    let (ctx, times) = contexts(config, &flags);
    let mgr = open_manager(config, false);
    let note = mgr
        .find(&id)
        .ok_or_else(|| NotesError::NotFound(id.to_string()))?;
    println!("{}", render::render_note(&note, &ctx, &times));
    Ok(())
}

fn delete_note(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "delete")?;
    let id = flags
        .positional
        .first()
        .map(|s| NoteId::from(s.as_str()))
        .ok_or("Usage: mn delete <id> [--yes]")?;
    let mut mgr = open_manager(config, flags.assume_yes);
    let existed = mgr.find(&id).is_some();
    match mgr.delete(&id)? {
        Outcome::Done if existed => println!("Deleted {id}"),
        Outcome::Done => println!("Note {id} not found"),
        _ => println!("Nothing deleted."),
    }
    Ok(())
}

fn delete_all_notes(args: Vec<String>, config: &Config) -> Result<()> {
    let flags = CommonFlags::parse(args, "delete-all")?;
    let mut mgr = open_manager(config, flags.assume_yes);
    if mgr.notes().is_empty() && mgr.store().export().is_none() {
        println!("No notes to delete.");
        return Ok(());
    }
    match mgr.delete_all()? {
        Outcome::Done => println!("Deleted all notes."),
        _ => println!("Nothing deleted."),
    }
    Ok(())
}

fn export_notes(config: &Config) {
    let mgr = open_manager(config, false);
    println!("{}", mgr.store().export().unwrap_or_else(|| "[]".to_string()));
}
