//! History view rendering.

use super::theme::Palette;
use crate::history::HistoryEntry;

/// Render the history list, newest first, numbered for deletion.
pub fn render_history(entries: &[HistoryEntry], palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str(&palette.title.paint("Calculation History").to_string());
    out.push('\n');

    if entries.is_empty() {
        out.push_str(&palette.muted.paint("No calculation history").to_string());
        out.push('\n');
        return out;
    }

    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}\n",
            index,
            palette
                .display
                .paint(format!("{} = {}", entry.equation, entry.result))
        ));
        out.push_str(&format!(
            "     {}\n",
            palette.muted.paint(entry.timestamp_iso())
        ));
    }

    out
}
