use serde::{Deserialize, Serialize};
use std::fmt;

/// Title stored for new notes whose title is blank.
pub const UNTITLED: &str = "Untitled";

/// Identifier of a saved note. Stored as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for NoteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NoteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One saved note. Field names and millisecond timestamps match the
/// persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Note {
    /// Build a fresh record. A blank title becomes [`UNTITLED`].
    pub fn create(id: NoteId, title: &str, text: &str, now: i64) -> Self {
        let title = if title.is_empty() { UNTITLED } else { title };
        Self {
            id,
            title: title.to_string(),
            text: text.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the content in place. The title is stored as given, even
    /// when empty.
    pub fn revise(&mut self, title: &str, text: &str, now: i64) {
        self.title = title.to_string();
        self.text = text.to_string();
        self.updated_at = now;
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { UNTITLED } else { &self.title }
    }

    /// Timestamp shown as "last modified": `updatedAt`, or `createdAt` for
    /// records that never carried one.
    pub fn last_modified(&self) -> i64 {
        if self.updated_at != 0 { self.updated_at } else { self.created_at }
    }
}
