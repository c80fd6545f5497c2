/// Operations reachable from a keyboard accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    New,
}

/// Map a key press to an action. Only chords with Ctrl or Cmd count.
pub fn accelerator(key: &str, modifier: bool) -> Option<Action> {
    if !modifier {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "s" => Some(Action::Save),
        "n" => Some(Action::New),
        _ => None,
    }
}

/// Parse a typed chord: `^S`, `ctrl+s`, `cmd+n`, `meta-n`.
pub fn parse_chord(input: &str) -> Option<Action> {
    let input = input.trim();
    if let Some(key) = input.strip_prefix('^') {
        return accelerator(key, true);
    }
    let (modifier, key) = input.split_once(['+', '-'])?;
    let modifier = matches!(
        modifier.to_ascii_lowercase().as_str(),
        "ctrl" | "control" | "cmd" | "meta"
    );
    accelerator(key, modifier)
}
