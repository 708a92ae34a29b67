/// Result of replacing a trigger and its query with a command placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub text: String,
    /// Character offset of the caret after the inserted placeholder.
    pub cursor: usize,
}

/// Replaces `text[trigger_index..cursor]` with `"[title] "`.
///
/// Pure text surgery on character offsets: neither the title nor the
/// surrounding text is inspected. Callers are responsible for making sure
/// `trigger_index <= cursor`.
pub fn splice(text: &str, trigger_index: usize, cursor: usize, title: &str) -> Spliced {
    let before: String = text.chars().take(trigger_index).collect();
    let after: String = text.chars().skip(cursor).collect();
    let before_len = before.chars().count();

    let mut out = String::with_capacity(before.len() + title.len() + 3 + after.len());
    out.push_str(&before);
    out.push('[');
    out.push_str(title);
    out.push_str("] ");
    out.push_str(&after);

    Spliced {
        text: out,
        cursor: before_len + title.chars().count() + 3,
    }
}
