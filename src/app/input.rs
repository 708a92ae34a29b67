use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crate::components::slash_menu;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

const SCROLL_LINES: i16 = 3;

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) if app_state.mode == AppMode::Editing => map_mouse(mouse, app_state),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match app_state.mode {
        AppMode::Help => match app_state.keymap.get_action(key, false) {
            Some(action) => Some(action),
            None if key.code == KeyCode::Esc => Some(Action::ToggleHelp),
            None => None,
        },
        // Popup bindings win while the menu is open, even with no results.
        AppMode::Editing => app_state
            .keymap
            .get_action(key, app_state.is_slash_open())
            .or(Some(Action::EditorInput(key))),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>) -> Option<Action> {
    let position = Position {
        x: mouse.column,
        y: mouse.row,
    };
    let popup = app_state
        .slash
        .session
        .as_ref()
        .and_then(|s| s.anchor)
        .filter(|area| area.contains(position));
    let over_editor = app_state.layout.editor.contains(position);

    match mouse.kind {
        MouseEventKind::ScrollUp if popup.is_some() => Some(Action::SlashPrev),
        MouseEventKind::ScrollDown if popup.is_some() => Some(Action::SlashNext),
        MouseEventKind::ScrollUp if over_editor => Some(Action::ScrollEditor(-SCROLL_LINES)),
        MouseEventKind::ScrollDown if over_editor => Some(Action::ScrollEditor(SCROLL_LINES)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = popup {
                slash_menu::item_at(&app_state.slash, area, mouse.column, mouse.row)
                    .map(Action::SlashSelectIndex)
            } else if over_editor {
                Some(Action::EditorClick(mouse.column, mouse.row))
            } else if app_state.is_slash_open() {
                Some(Action::SlashClose)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{LayoutState, SlashSession};
    use crate::app::viewport::ViewportListeners;
    use crate::domain::models::{Command, CommandGroup, CommandId};
    use crate::domain::trigger::Trigger;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn open_menu(state: &mut AppState) {
        let listeners = ViewportListeners::default();
        let mut session = SlashSession::new(
            Trigger {
                index: 0,
                query: String::new(),
            },
            listeners.subscribe(|_| {}),
        );
        session.anchor = Some(Rect::new(10, 3, 30, 6));
        state.slash.session = Some(session);
        state.slash.set_results(vec![CommandGroup {
            category: "Basic blocks".to_string(),
            commands: ["Text", "Quote"]
                .iter()
                .map(|t| Command {
                    id: CommandId(t.to_lowercase()),
                    title: (*t).to_string(),
                    description: String::new(),
                    icon: "text".to_string(),
                    keywords: Vec::new(),
                })
                .collect(),
        }]);
    }

    fn state() -> AppState<'static> {
        let mut state = AppState::default();
        state.layout = LayoutState {
            body: Rect::new(0, 1, 80, 20),
            editor: Rect::new(1, 2, 78, 18),
        };
        state
    }

    #[test]
    fn test_keys_reach_editor_when_closed() {
        let state = state();
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state),
            Some(Action::EditorInput(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)))
        );
    }

    #[test]
    fn test_menu_keys_are_consumed_when_open() {
        let mut state = state();
        open_menu(&mut state);
        state.slash.set_results(Vec::new());

        assert_eq!(map_event_to_action(key(KeyCode::Down), &state), Some(Action::SlashNext));
        assert_eq!(map_event_to_action(key(KeyCode::Up), &state), Some(Action::SlashPrev));
        assert_eq!(map_event_to_action(key(KeyCode::Enter), &state), Some(Action::SlashSelect));
        assert_eq!(map_event_to_action(key(KeyCode::Esc), &state), Some(Action::SlashClose));
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('x')), &state),
            Some(Action::EditorInput(_))
        ));
    }

    #[test]
    fn test_help_mode_only_closes() {
        let mut state = state();
        state.mode = AppMode::Help;
        assert_eq!(map_event_to_action(key(KeyCode::Esc), &state), Some(Action::ToggleHelp));
        assert_eq!(map_event_to_action(key(KeyCode::F(1)), &state), Some(Action::ToggleHelp));
        assert_eq!(map_event_to_action(key(KeyCode::Char('a')), &state), None);
    }

    #[test]
    fn test_click_on_popup_selects_row() {
        let mut state = state();
        open_menu(&mut state);

        // Row 4 is the group header, rows 5 and 6 are the commands.
        let click = |row| mouse(MouseEventKind::Down(MouseButton::Left), 15, row);
        assert_eq!(map_event_to_action(click(4), &state), None);
        assert_eq!(map_event_to_action(click(6), &state), Some(Action::SlashSelectIndex(1)));
    }

    #[test]
    fn test_click_and_scroll_routing() {
        let mut state = state();
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::ScrollDown, 5, 5), &state),
            Some(Action::ScrollEditor(3))
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5), &state),
            Some(Action::EditorClick(5, 5))
        );

        open_menu(&mut state);
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::ScrollDown, 15, 5), &state),
            Some(Action::SlashNext)
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &state),
            Some(Action::SlashClose)
        );
    }
}
