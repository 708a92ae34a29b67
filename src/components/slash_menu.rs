use super::helpers::fit_width;
use crate::app::config::PopupConfig;
use crate::app::state::SlashMenuState;
use crate::domain::models::{Command, CommandGroup};
use crate::theme::icons::{glyph_or_fallback, IconProvider};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

const ICON_COLUMNS: usize = 3;

/// One visual row of the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuRow<'a> {
    Header(&'a str),
    /// A command with its index in the flattened list.
    Item(usize, &'a Command),
}

pub fn menu_rows(groups: &[CommandGroup]) -> Vec<MenuRow<'_>> {
    let mut rows = Vec::new();
    let mut index = 0;
    for group in groups {
        rows.push(MenuRow::Header(&group.category));
        for command in &group.commands {
            rows.push(MenuRow::Item(index, command));
            index += 1;
        }
    }
    rows
}

/// Outer size of the popup, borders included, for the given results.
pub fn menu_size(groups: &[CommandGroup], config: &PopupConfig, container: Rect) -> Size {
    // An empty list still needs one row for its message.
    let rows = menu_rows(groups).len().max(1) as u16;
    Size {
        width: config.width.min(container.width),
        height: (rows + 2).min(config.max_height).min(container.height),
    }
}

/// Places a popup of `size` next to the caret cell.
///
/// Prefers the rows directly above the caret. Falls back to below the caret
/// when that would cross `container.top + margin`, clamped so the bottom edge
/// stays `margin` rows inside the container. The left border sits one column
/// before the caret so the list lines up with the typed `/`.
pub fn popup_rect(caret: Position, size: Size, container: Rect, margin: u16) -> Rect {
    let width = size.width.min(container.width);
    let height = size.height.min(container.height);
    if width == 0 || height == 0 {
        return Rect::new(container.x, container.y, 0, 0);
    }

    let min_top = container.y.saturating_add(margin);
    let y = match caret.y.checked_sub(height) {
        Some(above) if above >= min_top => above,
        _ => {
            let max_top = container
                .bottom()
                .saturating_sub(height.saturating_add(margin))
                .max(container.y);
            caret.y.saturating_add(1).min(max_top)
        }
    };

    let x = caret
        .x
        .saturating_sub(1)
        .clamp(container.x, container.right() - width);

    Rect::new(x, y, width, height)
}

/// First row to draw so that the selected item is visible in `visible` rows.
pub fn visible_offset(rows: &[MenuRow], selected: usize, visible: usize) -> usize {
    let Some(row) = rows
        .iter()
        .position(|r| matches!(r, MenuRow::Item(i, _) if *i == selected))
    else {
        return 0;
    };
    // Keep the group header in view for the first item of the list.
    (row + 1).saturating_sub(visible.max(1))
}

/// Flattened command index under a click at `(col, row)` in frame coordinates.
pub fn item_at(state: &SlashMenuState, area: Rect, col: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if !inner.contains(Position { x: col, y: row }) {
        return None;
    }
    let rows = menu_rows(&state.groups);
    let offset = visible_offset(&rows, state.selected, usize::from(inner.height));
    match rows.get(offset + usize::from(row - inner.y)) {
        Some(MenuRow::Item(index, _)) => Some(*index),
        _ => None,
    }
}

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub struct SlashMenu<'a> {
    pub state: &'a SlashMenuState,
    pub theme: &'a Theme,
    pub icons: &'a dyn IconProvider,
    pub frame_count: u64,
}

impl Widget for SlashMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);

        let title = match self.state.query() {
            Some("") | None => " Blocks ".to_string(),
            Some(query) => format!(" /{query} "),
        };
        let mut block = Block::default()
            .title(Span::styled(title, self.theme.header_active))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        if self.state.loading {
            let spinner = SPINNER[(self.frame_count as usize) % SPINNER.len()];
            block = block.title_bottom(
                Line::from(Span::styled(format!(" {spinner} "), self.theme.status_info))
                    .right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = menu_rows(&self.state.groups);
        if rows.is_empty() {
            let message = if self.state.loading {
                "Searching..."
            } else {
                "No results found"
            };
            buf.set_line(
                inner.x + 1,
                inner.y,
                &Line::from(Span::styled(message, self.theme.dimmed)),
                inner.width.saturating_sub(1),
            );
            return;
        }

        let width = usize::from(inner.width);
        let offset = visible_offset(&rows, self.state.selected, usize::from(inner.height));
        for (i, row) in rows
            .iter()
            .skip(offset)
            .take(usize::from(inner.height))
            .enumerate()
        {
            let line = match row {
                MenuRow::Header(category) => Line::from(Span::styled(
                    fit_width(&format!(" {}", category.to_uppercase()), width),
                    self.theme.menu_group,
                )),
                MenuRow::Item(index, command) => self.item_line(*index, command, width),
            };
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}

impl SlashMenu<'_> {
    fn item_line(&self, index: usize, command: &Command, width: usize) -> Line<'static> {
        let selected = index == self.state.selected;
        let base = if selected {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };

        let icon = fit_width(glyph_or_fallback(self.icons, &command.icon), ICON_COLUMNS);
        let avail = width.saturating_sub(1 + ICON_COLUMNS);
        let title = format!("{} ", command.title);
        let title_width = title.width().min(avail);
        let description = fit_width(&command.description, avail - title_width);

        Line::from(vec![
            Span::styled(" ", base),
            Span::styled(icon, base.patch(self.theme.menu_icon)),
            Span::styled(fit_width(&title, title_width), base),
            Span::styled(description, base.patch(self.theme.menu_description)),
        ])
    }
}
