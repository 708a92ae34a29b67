//! Conversions between the editor's line/column cursor and flat character
//! offsets into the joined document.

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Splits on `\n` only, keeping a trailing empty line so that
/// `join_lines(split_lines(s)) == s`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn offset_of(lines: &[String], row: usize, col: usize) -> usize {
    let preceding: usize = lines
        .iter()
        .take(row)
        .map(|line| line.chars().count() + 1)
        .sum();
    let line_len = lines.get(row).map_or(0, |line| line.chars().count());
    preceding + col.min(line_len)
}

/// Inverse of [`offset_of`]. Offsets past the end land on the last column.
pub fn position_of(lines: &[String], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if remaining <= len {
            return (row, remaining);
        }
        remaining -= len + 1;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.get(last).map_or(0, |line| line.chars().count()))
}
