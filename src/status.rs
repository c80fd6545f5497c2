use std::fmt;

/// Messages the status line can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    New,
    Cleared,
    Saved,
    Loaded,
    Deleted,
    AllCleared,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "Idle",
            Status::New => "New",
            Status::Cleared => "Cleared",
            Status::Saved => "Saved",
            Status::Loaded => "Loaded",
            Status::Deleted => "Deleted",
            Status::AllCleared => "All cleared",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient status message. Each `set` replaces the message and re-arms the
/// reset deadline; once the deadline passes the line reads `Idle`.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: Status,
    reset_at: Option<i64>,
    timeout_ms: i64,
}

impl StatusLine {
    pub fn new(timeout_ms: i64) -> Self {
        Self { message: Status::Idle, reset_at: None, timeout_ms }
    }

    pub fn set(&mut self, message: Status, now: i64) {
        self.message = message;
        self.reset_at = Some(now.saturating_add(self.timeout_ms));
    }

    pub fn current(&self, now: i64) -> Status {
        match self.reset_at {
            Some(deadline) if now < deadline => self.message,
            _ => Status::Idle,
        }
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_STATUS_MS)
    }
}
