use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a, 'doc> {
    pub state: &'a AppState<'doc>,
    pub theme: &'a Theme,
}

impl Header<'_, '_> {
    fn stats_text(&self) -> String {
        let lines = self.state.editor.text_area.lines();
        let chars: usize = lines.iter().map(|l| l.chars().count()).sum();
        let (row, col) = self.state.editor.text_area.cursor();
        format!(" Ln {}, Col {}  {} lines  {} chars ", row + 1, col + 1, lines.len(), chars)
    }
}

impl Widget for Header<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let item_bg = self.theme.header_item.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" / SLASHPAD ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(item_bg)),
            Span::styled(self.stats_text(), self.theme.header_item),
            Span::styled(SEP_RIGHT, Style::default().fg(item_bg).bg(base_bg)),
        ];

        if !self.state.source_label.is_empty() {
            spans.push(Span::styled(
                format!("  source: {} ", self.state.source_label),
                self.theme.header,
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
