use crate::clock::{Clock, SystemClock};
use crate::confirm::{Confirm, TerminalConfirm};
use crate::error::{NotesError, Result};
use crate::ids::{IdSource, TimestampIds};
use crate::keymap::Action;
use crate::note::{Note, NoteId};
use crate::status::{Status, StatusLine};
use crate::storage::Storage;
use crate::store::Store;
use tracing::{debug, info};

pub const PROMPT_NEW: &str = "Start a new blank note?";
pub const PROMPT_CLEAR: &str = "Clear the current note?";
pub const PROMPT_DELETE: &str = "Delete this note?";
pub const PROMPT_DELETE_ALL: &str = "Delete all saved notes?";

const MAX_ID_ATTEMPTS: usize = 5000;

/// Title and body currently being edited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Editor {
    pub title: String,
    pub text: String,
}

impl Editor {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.text.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user answered "no"; nothing changed.
    Declined,
    /// Nothing to act on (empty editor, unknown id).
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(NoteId),
    Updated(NoteId),
}

impl SaveOutcome {
    pub fn id(&self) -> &NoteId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// Editor state bound to a [`Store`]: which note is loaded (the edit
/// cursor), what the editor holds, and the operations over both.
pub struct NoteManager<S> {
    store: Store<S>,
    editor: Editor,
    editing_id: Option<NoteId>,
    status: StatusLine,
    confirm: Box<dyn Confirm>,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl<S: Storage> NoteManager<S> {
    pub fn new(store: Store<S>) -> Self {
        Self {
            store,
            editor: Editor::default(),
            editing_id: None,
            status: StatusLine::default(),
            confirm: Box::new(TerminalConfirm),
            ids: Box::new(TimestampIds::default()),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_status_timeout(mut self, timeout_ms: i64) -> Self {
        self.status = StatusLine::new(timeout_ms);
        self
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing_id.as_ref()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.store.get_all()
    }

    pub fn find(&self, id: &NoteId) -> Option<Note> {
        self.store.get_all().into_iter().find(|n| &n.id == id)
    }

    /// Status line as of now.
    pub fn status(&self) -> Status {
        self.status.current(self.clock.now_millis())
    }

    /// Start a blank note. Asks first when the editor holds anything.
    pub fn create_new(&mut self) -> Outcome {
        if !self.editor.is_empty() && !self.confirm.confirm(PROMPT_NEW) {
            return Outcome::Declined;
        }
        self.reset_editor();
        self.set_status(Status::New);
        Outcome::Done
    }

    /// Empty the editor. Silent no-op when it is already empty.
    pub fn clear_current(&mut self) -> Outcome {
        if self.editor.is_empty() {
            return Outcome::Skipped;
        }
        if !self.confirm.confirm(PROMPT_CLEAR) {
            return Outcome::Declined;
        }
        self.reset_editor();
        self.set_status(Status::Cleared);
        Outcome::Done
    }

    /// Upsert. Updates the note under the cursor when it still exists,
    /// otherwise appends a new note and points the cursor at it.
    pub fn save(&mut self, title: &str, text: &str) -> Result<SaveOutcome> {
        let title = title.trim();
        let text = text.trim();
        let mut notes = self.store.get_all();
        let now = self.clock.now_millis();

        if let Some(id) = &self.editing_id {
            if let Some(note) = notes.iter_mut().find(|n| &n.id == id) {
                note.revise(title, text, now);
                let id = note.id.clone();
                self.store.set_all(&notes)?;
                self.status.set(Status::Saved, now);
                info!(%id, "updated note");
                return Ok(SaveOutcome::Updated(id));
            }
            debug!(%id, "edit cursor is stale; saving as a new note");
        }

        let id = self.fresh_id(&notes, now)?;
        notes.push(Note::create(id.clone(), title, text, now));
        self.store.set_all(&notes)?;
        self.editing_id = Some(id.clone());
        self.status.set(Status::Saved, now);
        info!(%id, count = notes.len(), "created note");
        Ok(SaveOutcome::Created(id))
    }

    /// Save whatever the editor holds.
    pub fn save_editor(&mut self) -> Result<SaveOutcome> {
        let Editor { title, text } = self.editor.clone();
        self.save(&title, &text)
    }

    /// Put a saved note in the editor. Unknown ids are ignored.
    pub fn load(&mut self, id: &NoteId) -> Outcome {
        let Some(note) = self.find(id) else {
            debug!(%id, "load: no such note");
            return Outcome::Skipped;
        };
        self.editor.title = note.title;
        self.editor.text = note.text;
        self.editing_id = Some(note.id);
        self.set_status(Status::Loaded);
        Outcome::Done
    }

    /// Remove one note after confirmation. The list is written back even
    /// when the id matched nothing.
    pub fn delete(&mut self, id: &NoteId) -> Result<Outcome> {
        if !self.confirm.confirm(PROMPT_DELETE) {
            return Ok(Outcome::Declined);
        }
        let mut notes = self.store.get_all();
        let before = notes.len();
        notes.retain(|n| &n.id != id);
        self.store.set_all(&notes)?;
        if self.editing_id.as_ref() == Some(id) {
            self.reset_editor();
        }
        self.set_status(Status::Deleted);
        info!(%id, removed = before - notes.len(), "deleted note");
        Ok(Outcome::Done)
    }

    /// Drop every saved note after confirmation. The editor and cursor are
    /// left untouched.
    pub fn delete_all(&mut self) -> Result<Outcome> {
        if !self.confirm.confirm(PROMPT_DELETE_ALL) {
            return Ok(Outcome::Declined);
        }
        self.store.clear_all()?;
        self.set_status(Status::AllCleared);
        info!("deleted all notes");
        Ok(Outcome::Done)
    }

    /// Run the operation bound to an accelerator.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Save => self.save_editor().map(|_| Outcome::Done),
            Action::New => Ok(self.create_new()),
        }
    }

    fn reset_editor(&mut self) {
        self.editing_id = None;
        self.editor.clear();
    }

    fn set_status(&mut self, status: Status) {
        let now = self.clock.now_millis();
        self.status.set(status, now);
    }

    fn fresh_id(&mut self, notes: &[Note], now: i64) -> Result<NoteId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id(now);
            if !notes.iter().any(|n| n.id == id) {
                return Ok(id);
            }
            debug!(%id, "id already taken; drawing another");
        }
        Err(NotesError::IdExhausted)
    }
}
