use crate::app::state::{AppMode, AppState, LayoutState};
use crate::app::viewport::ViewportEvent;
use crate::components::helpers::draw_drop_shadow;
use crate::components::{caret_position, EditorView, Footer, Header, HelpModal, SlashMenu};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

fn editor_block(state: &AppState) -> Block<'static> {
    let theme = &state.theme;
    let (border, title_style) = if state.mode == AppMode::Editing {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("DOCUMENT", title_style),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled("/", theme.footer_segment_key),
            Span::raw(": commands "),
            Span::styled("F1", theme.footer_segment_key),
            Span::raw(": help "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let block = editor_block(state);
    let editor_area = block.inner(layout.body);

    let current = LayoutState {
        body: layout.body,
        editor: editor_area,
    };
    if state.layout != current {
        state.layout = current;
        state.editor.follow_cursor(editor_area);
        state.viewport.emit(ViewportEvent::Resized);
    }

    let state = &*state;
    let theme = &state.theme;

    // --- Header ---
    if layout.header.height > 0 {
        f.render_widget(Header { state, theme }, layout.header);
    }

    // --- Document ---
    f.render_widget(block, layout.body);
    let highlight = state
        .slash
        .session
        .as_ref()
        .map(|s| s.trigger_index..state.editor.cursor_offset());
    f.render_widget(
        EditorView {
            editor: &state.editor,
            theme,
            highlight,
        },
        editor_area,
    );

    if state.mode == AppMode::Editing && editor_area.width > 0 && editor_area.height > 0 {
        f.set_cursor_position(caret_position(&state.editor, editor_area));
    }

    // --- Slash Menu ---
    if let Some(anchor) = state.slash.session.as_ref().and_then(|s| s.anchor) {
        // A resize may have left the anchor stale until the reposition lands.
        let area = anchor.intersection(layout.body);
        if area.width > 0 && area.height > 0 {
            draw_drop_shadow(f.buffer_mut(), area, layout.body);
            f.render_widget(
                SlashMenu {
                    state: &state.slash,
                    theme,
                    icons: state.icons.as_ref(),
                    frame_count: state.frame_count,
                },
                area,
            );
        }
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        f.render_widget(Footer { state, theme }, layout.footer);
    }

    if state.mode == AppMode::Help {
        f.render_widget(
            HelpModal {
                theme,
                palette: state.palette_type,
            },
            f.area(),
        );
    }
}
