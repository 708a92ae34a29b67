use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Writing",
        &[
            (" /", "Open the command menu at the caret"),
            (" /text", "Filter commands while typing"),
            (" Space", "Dismiss the menu and keep the text"),
        ],
    ),
    (
        "Command menu",
        &[
            (" ↓ / Ctrl-N", "Next command"),
            (" ↑ / Ctrl-P", "Previous command"),
            (" Enter / Tab", "Insert selected command"),
            (" Esc", "Close the menu"),
            (" Click", "Insert the clicked command"),
        ],
    ),
    (
        "Application",
        &[(" F1", "Toggle this help"), (" Ctrl-Q", "Quit")],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    pub palette: PaletteType,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(60, 70, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" theme: {} ", self.palette.label()),
                    self.theme.dimmed,
                ))
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*section, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .block(block)
            .column_spacing(2)
            .render(help_area, buf);
    }
}
