use crate::app::state::{AppMode, AppState, Severity};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

fn item(key: &'static str, desc: &'static str) -> FooterItem {
    FooterItem { key, desc }
}

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![item("F1", "close"), item("Ctrl-Q", "quit")],
        }],
        AppMode::Editing if state.is_slash_open() => vec![FooterGroup {
            name: "MENU",
            items: vec![
                item("↑/↓", "move"),
                item("Enter", "insert"),
                item("Esc", "close"),
            ],
        }],
        AppMode::Editing => vec![
            FooterGroup {
                name: "EDIT",
                items: vec![item("/", "commands")],
            },
            FooterGroup {
                name: "APP",
                items: vec![item("F1", "help"), item("Ctrl-Q", "quit")],
            },
        ],
    }
}

pub struct Footer<'a, 'doc> {
    pub state: &'a AppState<'doc>,
    pub theme: &'a Theme,
}

impl Footer<'_, '_> {
    fn status_span(&self) -> Span<'static> {
        let theme = self.theme;
        let state = self.state;

        if let Some(notice) = &state.notice {
            let style = match notice.severity {
                Severity::Info => theme.status_info,
                Severity::Warning => theme.status_warn,
            };
            return Span::styled(format!("  {}  ", notice.message), style);
        }

        match (&state.slash.session, state.slash.loading) {
            (Some(_), true) => Span::styled("  SEARCHING  ", theme.status_info),
            (Some(_), false) => Span::styled(
                format!("  {} RESULTS  ", state.slash.total()),
                theme.status_info,
            ),
            (None, _) => Span::styled("  READY  ", theme.status_ready),
        }
    }
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let mut spans = vec![self.status_span(), Span::raw("  ")];

        let available_width = area.width.saturating_sub(4) as usize; // Margin
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in get_groups(self.state) {
            // Group labels only on wide terminals.
            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.footer_group_name);
                if current_width + label.width() < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.chars().count() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                spans.push(Span::styled(key_str, theme.footer_segment_key));
                spans.push(Span::styled(desc_str, theme.footer_segment_val));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
