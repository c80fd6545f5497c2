//! Interactive editor session: one note in an in-memory editor, commands read
//! line by line from stdin, accelerators (`^S`, `ctrl+n`) mapped to Save/New.

use crate::config::Config;
use crate::error::Result;
use crate::formatting::{FormatContext, TimeFormatter};
use crate::keymap::{Action, parse_chord};
use crate::manager::{NoteManager, Outcome, SaveOutcome};
use crate::note::NoteId;
use crate::render::render_saved_list;
use crate::storage::Storage;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How the session prints notes.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub use_color: bool,
    pub relative_time: bool,
    pub width: usize,
}

const SESSION_HELP: &str = "\
Session commands:
  title <text>      Set the editor title
  text <text>       Replace the editor body
  append <text>     Add a line to the editor body
  show              Print the editor and which note it is bound to
  save  (^S)        Save the editor (updates the loaded note, else creates one)
  new   (^N)        Start a blank note
  clear             Empty the editor
  load <id>         Load a saved note into the editor
  delete <id>       Delete a saved note
  delete-all        Delete every saved note
  list              Show saved notes, newest first
  status            Show the status line
  help              Show this message
  quit              Leave the session";

pub fn run(config: &Config) -> Result<()> {
    let mut mgr = crate::open_manager(config, false);
    let view = View {
        use_color: config.use_color,
        relative_time: false,
        width: crate::terminal_columns().unwrap_or(80),
    };
    let mut stdout = io::stdout();
    writeln!(stdout, "Editing a new note. Type `help` for commands.")?;

    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);
        match execute(&mut mgr, input, &view, &mut stdout) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

/// Run one session command against `mgr`, writing any output to `out`.
pub fn execute<S: Storage, W: Write>(
    mgr: &mut NoteManager<S>,
    input: &str,
    view: &View,
    out: &mut W,
) -> Result<Flow> {
    let input = input.trim_start();
    if input.trim().is_empty() {
        return Ok(Flow::Continue);
    }
    if let Some(action) = parse_chord(input) {
        debug!(?action, "accelerator");
        return run_action(mgr, action, out).map(|_| Flow::Continue);
    }

    let (cmd, rest) = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim_start()),
        None => (input, ""),
    };

    match cmd {
        "title" => {
            mgr.editor_mut().title = rest.to_string();
        }
        "text" => {
            mgr.editor_mut().text = rest.to_string();
        }
        "append" => {
            let editor = mgr.editor_mut();
            if !editor.text.is_empty() {
                editor.text.push('\n');
            }
            editor.text.push_str(rest);
        }
        "show" => show_editor(mgr, out)?,
        "save" | "s" => run_action(mgr, Action::Save, out)?,
        "new" | "n" => run_action(mgr, Action::New, out)?,
        "clear" => match mgr.clear_current() {
            Outcome::Skipped => writeln!(out, "Editor is already empty.")?,
            Outcome::Declined => writeln!(out, "Kept the current note.")?,
            Outcome::Done => print_status(mgr, out)?,
        },
        "load" => {
            let Some(id) = require_id(rest, "load", out)? else {
                return Ok(Flow::Continue);
            };
            match mgr.load(&id) {
                Outcome::Done => {
                    print_status(mgr, out)?;
                    show_editor(mgr, out)?;
                }
                _ => writeln!(out, "Note {id} not found")?,
            }
        }
        "delete" => {
            let Some(id) = require_id(rest, "delete", out)? else {
                return Ok(Flow::Continue);
            };
            match mgr.delete(&id)? {
                Outcome::Done => print_status(mgr, out)?,
                _ => writeln!(out, "Nothing deleted.")?,
            }
        }
        "delete-all" => match mgr.delete_all()? {
            Outcome::Done => print_status(mgr, out)?,
            _ => writeln!(out, "Nothing deleted.")?,
        },
        "list" => {
            let ctx = FormatContext::new(view.use_color);
            let times =
                TimeFormatter::new(view.relative_time, chrono::Utc::now().timestamp_millis());
            writeln!(out, "{}", render_saved_list(&mgr.notes(), &ctx, &times, view.width))?;
        }
        "status" => print_status(mgr, out)?,
        "help" | "?" => writeln!(out, "{SESSION_HELP}")?,
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        other => writeln!(out, "Unknown command: {other} (try `help`)")?,
    }
    Ok(Flow::Continue)
}

fn run_action<S: Storage, W: Write>(
    mgr: &mut NoteManager<S>,
    action: Action,
    out: &mut W,
) -> Result<()> {
    match action {
        Action::Save => {
            let outcome = mgr.save_editor()?;
            let kind = match outcome {
                SaveOutcome::Created(_) => "new",
                SaveOutcome::Updated(_) => "updated",
            };
            writeln!(out, "[{}] {} ({kind})", mgr.status(), outcome.id())?;
        }
        Action::New => match mgr.create_new() {
            Outcome::Declined => writeln!(out, "Kept the current note.")?,
            _ => print_status(mgr, out)?,
        },
    }
    Ok(())
}

fn require_id<W: Write>(rest: &str, cmd: &str, out: &mut W) -> Result<Option<NoteId>> {
    let id = rest.trim();
    if id.is_empty() {
        writeln!(out, "Usage: {cmd} <id>")?;
        return Ok(None);
    }
    Ok(Some(NoteId::from(id)))
}

fn print_status<S: Storage, W: Write>(mgr: &NoteManager<S>, out: &mut W) -> Result<()> {
    writeln!(out, "[{}]", mgr.status())?;
    Ok(())
}

fn show_editor<S: Storage, W: Write>(mgr: &NoteManager<S>, out: &mut W) -> Result<()> {
    let bound = match mgr.editing_id() {
        Some(id) => format!("editing {id}"),
        None => "new note".to_string(),
    };
    let editor = mgr.editor();
    writeln!(out, "({bound})\nTitle: {}\n{}", editor.title, editor.text)?;
    Ok(())
}
