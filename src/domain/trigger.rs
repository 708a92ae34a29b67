//! Slash trigger detection.
//!
//! Offsets are character offsets into the document, matching the cursor
//! positions reported by the editor.

pub const TRIGGER_CHAR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    /// Offset of the `/` that opened the session.
    pub index: usize,
    /// Text between the trigger and the cursor.
    pub query: String,
}

/// Decides whether a slash session is active for `text` with the caret at
/// `cursor`.
///
/// Only the rightmost `/` before the cursor is considered. It must start a
/// word (document start, space or newline before it) and the text typed after
/// it must not contain a space.
pub fn detect(text: &str, cursor: usize) -> Option<Trigger> {
    let before: Vec<char> = text.chars().take(cursor).collect();
    let slash = before.iter().rposition(|&c| c == TRIGGER_CHAR)?;

    let starts_word = match slash.checked_sub(1).map(|i| before[i]) {
        None | Some(' ' | '\n') => true,
        Some(_) => false,
    };
    if !starts_word {
        return None;
    }

    let query: String = before[slash + 1..].iter().collect();
    if query.contains(' ') {
        return None;
    }

    Some(Trigger {
        index: slash,
        query,
    })
}
