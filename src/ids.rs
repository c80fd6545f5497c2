use crate::note::NoteId;

/// Hands out ids for new notes. `now` is the creation time the note will
/// carry.
pub trait IdSource {
    fn next_id(&mut self, now: i64) -> NoteId;
}

/// Decimal epoch-millisecond ids. When `now` has not moved past the last id
/// handed out, the next id is `last + 1`, so ids from one source never
/// repeat.
#[derive(Debug)]
pub struct TimestampIds {
    last_ts: i64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self { last_ts: i64::MIN }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for TimestampIds {
    fn next_id(&mut self, now: i64) -> NoteId {
        let ts = if now <= self.last_ts { self.last_ts.saturating_add(1) } else { now };
        self.last_ts = ts;
        NoteId::new(ts.to_string())
    }
}

/// `next-1`, `next-2`, ... Handy when ids should be readable.
#[derive(Debug, Default)]
pub struct SequentialIds {
    prefix: String,
    counter: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string(), counter: 0 }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self, _now: i64) -> NoteId {
        self.counter += 1;
        NoteId::new(format!("{}{}", self.prefix, self.counter))
    }
}

impl<F: FnMut(i64) -> NoteId> IdSource for F {
    fn next_id(&mut self, now: i64) -> NoteId {
        self(now)
    }
}
