use crate::app::{
    action::{Action, UpdateResult},
    features::slash,
    state::AppState,
    viewport::ViewportEvent,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EditorInput(key) => {
            let before = state.editor.text_area.cursor();
            let modified = state.editor.text_area.input(*key);
            let moved = state.editor.text_area.cursor() != before;

            state.editor.follow_cursor(state.layout.editor);
            let command = slash::sync_with_document(state);
            if modified || moved {
                state.viewport.emit(ViewportEvent::CaretMoved);
            }
            UpdateResult::Handled(command)
        }
        Action::EditorClick(col, row) => {
            let area = state.layout.editor;
            state
                .editor
                .place_cursor_at(col.saturating_sub(area.x), row.saturating_sub(area.y));
            state.editor.follow_cursor(area);
            let command = slash::sync_with_document(state);
            state.viewport.emit(ViewportEvent::CaretMoved);
            UpdateResult::Handled(command)
        }
        Action::ScrollEditor(delta) => {
            state.editor.scroll_by(*delta);
            state.viewport.emit(ViewportEvent::Scrolled);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::command::Command;
    use crate::app::state::LayoutState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Action {
        Action::EditorInput(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_caret_move_into_query_reopens() {
        let mut state = AppState::default();
        for c in "/code x".chars() {
            update(&mut state, &key(KeyCode::Char(c)));
        }
        assert!(!state.is_slash_open());

        update(&mut state, &key(KeyCode::Left));
        update(&mut state, &key(KeyCode::Left));
        let UpdateResult::Handled(command) = update(&mut state, &key(KeyCode::Left)) else {
            panic!("editor input must be handled");
        };
        assert_eq!(state.slash.query(), Some("cod"));
        assert!(matches!(command, Some(Command::Search { ref query, .. }) if query == "cod"));
    }

    #[test]
    fn test_click_places_caret_relative_to_pane() {
        let mut state = AppState::default();
        state.layout = LayoutState {
            body: Rect::new(0, 1, 40, 10),
            editor: Rect::new(1, 2, 38, 8),
        };
        state.editor.replace("first\nsecond", 0);

        update(&mut state, &Action::EditorClick(4, 3));
        assert_eq!(state.editor.text_area.cursor(), (1, 3));
    }

    #[test]
    fn test_scroll_notifies_listeners() {
        let mut state = AppState::default();
        state.editor.replace("a\nb\nc", 0);
        let _subscription = state.viewport.subscribe(|event| {
            assert_eq!(event, ViewportEvent::Scrolled);
        });

        update(&mut state, &Action::ScrollEditor(2));
        assert_eq!(state.editor.scroll_row, 2);
    }
}
