use crate::formatting::{FormatContext, TimeFormatter};
use crate::note::Note;

/// Body characters shown on a card before it is cut.
pub const SUMMARY_CHARS: usize = 200;
pub const ELLIPSIS: char = '…';
pub const EMPTY_LIST: &str = "No saved notes";

/// Card body: the first [`SUMMARY_CHARS`] characters, plus an ellipsis when
/// anything was cut.
pub fn summary(text: &str) -> String {
    match text.char_indices().nth(SUMMARY_CHARS) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Render the saved list newest first. `width` sizes the card separator.
pub fn render_saved_list(
    notes: &[Note],
    ctx: &FormatContext,
    times: &TimeFormatter,
    width: usize,
) -> String {
    if notes.is_empty() {
        return ctx.format_muted(EMPTY_LIST);
    }
    let rule = ctx.format_muted(&"─".repeat(width.clamp(20, 80)));
    notes
        .iter()
        .rev()
        .map(|note| render_card(note, ctx, times))
        .collect::<Vec<_>>()
        .join(&format!("\n{rule}\n"))
}

pub fn render_card(note: &Note, ctx: &FormatContext, times: &TimeFormatter) -> String {
    let mut lines = vec![
        ctx.format_header(note.display_title()),
        ctx.format_timestamp(&times.format(note.last_modified())),
    ];
    if !note.text.is_empty() {
        lines.push(summary(&note.text));
    }
    let id = ctx.format_id(note.id.as_str());
    lines.push(format!("[load {id}]  [delete {id}]"));
    lines.join("\n")
}

/// Full note for `view`.
pub fn render_note(note: &Note, ctx: &FormatContext, times: &TimeFormatter) -> String {
    format!(
        "# {} ({})\nCreated: {}\nUpdated: {}\n\n{}",
        ctx.format_header(note.display_title()),
        ctx.format_id(note.id.as_str()),
        ctx.format_timestamp(&times.format(note.created_at)),
        ctx.format_timestamp(&times.format(note.last_modified())),
        note.text
    )
}
