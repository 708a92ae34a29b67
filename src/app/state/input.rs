use crate::domain::text::{join_lines, offset_of, position_of, split_lines};
use ratatui::layout::Rect;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// The document being edited plus the part of it that is scrolled into view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState<'a> {
    pub text_area: AppTextArea<'a>,
    /// First visible line.
    pub scroll_row: u16,
    /// First visible display column.
    pub scroll_col: u16,
}

impl EditorState<'_> {
    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::default();
        let len = text.chars().count();
        editor.replace(text, len);
        editor
    }

    pub fn text(&self) -> String {
        join_lines(self.text_area.lines())
    }

    /// Caret as a character offset into [`EditorState::text`].
    pub fn cursor_offset(&self) -> usize {
        let (row, col) = self.text_area.cursor();
        offset_of(self.text_area.lines(), row, col)
    }

    /// Replaces the whole document and puts the caret at `cursor` (chars).
    pub fn replace(&mut self, text: &str, cursor: usize) {
        let lines = split_lines(text);
        let (row, col) = position_of(&lines, cursor);
        let mut area = TextArea::new(lines);
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        self.text_area = AppTextArea(area);
    }

    pub fn is_empty(&self) -> bool {
        self.text_area.lines().iter().all(String::is_empty)
    }

    /// Display width of the caret line up to the caret.
    pub fn caret_column(&self) -> u16 {
        let (row, col) = self.text_area.cursor();
        let line = self.text_area.lines().get(row).map_or("", String::as_str);
        let prefix: String = line.chars().take(col).collect();
        prefix.width() as u16
    }

    /// Adjusts the scroll offsets so the caret is inside `area`.
    pub fn follow_cursor(&mut self, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let row = self.text_area.cursor().0 as u16;
        let col = self.caret_column();

        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + area.height {
            self.scroll_row = row + 1 - area.height;
        }

        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + area.width {
            self.scroll_col = col + 1 - area.width;
        }
    }

    /// Scrolls vertically without moving the caret.
    pub fn scroll_by(&mut self, delta: i16) {
        let max_row = self.text_area.lines().len().saturating_sub(1) as u16;
        self.scroll_row = self.scroll_row.saturating_add_signed(delta).min(max_row);
    }

    /// Moves the caret to the document position rendered at `(col, row)`
    /// relative to the editor's inner area.
    pub fn place_cursor_at(&mut self, col: u16, row: u16) {
        let lines = self.text_area.lines();
        if lines.is_empty() {
            return;
        }
        let line_idx = usize::from(self.scroll_row + row).min(lines.len() - 1);
        let target = usize::from(self.scroll_col + col);

        let mut width = 0;
        let mut char_idx = 0;
        for ch in lines[line_idx].chars() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if width + w > target {
                break;
            }
            width += w;
            char_idx += 1;
        }
        self.text_area
            .move_cursor(CursorMove::Jump(line_idx as u16, char_idx as u16));
    }
}
