// Output — CSV export and terminal display.

pub mod csv_writer;
pub mod terminal;

/// Shorten `text` to at most `max_chars` characters, ending in '…' when cut.
///
/// Counts characters, not bytes, so umlauts in labels are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
