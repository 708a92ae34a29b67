use crate::app::state::EditorState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

pub const PLACEHOLDER: &str = "Start writing... (type / for commands)";

/// Screen cell of the caret for `editor` drawn into `area`.
///
/// Clamped to `area` so a caret scrolled out of view still yields a cell at
/// the nearest edge.
pub fn caret_position(editor: &EditorState, area: Rect) -> Position {
    let row = editor.text_area.cursor().0 as u16;
    let col = editor.caret_column();

    let x = area.x + col.saturating_sub(editor.scroll_col);
    let y = area.y + row.saturating_sub(editor.scroll_row);

    Position {
        x: x.min(area.right().saturating_sub(1)).max(area.x),
        y: y.min(area.bottom().saturating_sub(1)).max(area.y),
    }
}

/// Plain-text renderer for the document. Draws the scrolled window of lines
/// and tints the characters in `highlight` (document char offsets).
pub struct EditorView<'a, 'doc> {
    pub editor: &'a EditorState<'doc>,
    pub theme: &'a Theme,
    pub highlight: Option<Range<usize>>,
}

impl Widget for EditorView<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.editor.is_empty() {
            buf.set_line(
                area.x,
                area.y,
                &Line::from(Span::styled(PLACEHOLDER, self.theme.editor_placeholder)),
                area.width,
            );
            return;
        }

        let lines = self.editor.text_area.lines();
        let scroll_row = usize::from(self.editor.scroll_row);
        let scroll_col = usize::from(self.editor.scroll_col);

        let mut line_start: usize = lines
            .iter()
            .take(scroll_row)
            .map(|l| l.chars().count() + 1)
            .sum();

        for (screen_row, line) in lines
            .iter()
            .skip(scroll_row)
            .take(usize::from(area.height))
            .enumerate()
        {
            let rendered = self.render_line(line, line_start, scroll_col);
            buf.set_line(area.x, area.y + screen_row as u16, &rendered, area.width);
            line_start += line.chars().count() + 1;
        }
    }
}

impl EditorView<'_, '_> {
    fn style_at(&self, offset: usize) -> Style {
        match &self.highlight {
            Some(range) if range.contains(&offset) => self.theme.slash_query,
            _ => self.theme.editor_text,
        }
    }

    // Groups consecutive chars with the same style into one span.
    fn render_line(&self, line: &str, line_start: usize, scroll_col: usize) -> Line<'static> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = self.theme.editor_text;
        let mut col = 0;

        for (i, ch) in line.chars().enumerate() {
            let width = ch.width().unwrap_or(0);
            if col < scroll_col {
                col += width;
                continue;
            }
            col += width;

            let style = self.style_at(line_start + i);
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }
        Line::from(spans)
    }
}
