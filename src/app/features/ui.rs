use crate::app::{
    action::{Action, UpdateResult},
    features::slash,
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHelp => {
            if state.mode == AppMode::Help {
                state.mode = AppMode::Editing;
            } else {
                slash::close(state);
                state.mode = AppMode::Help;
            }
            UpdateResult::Handled(None)
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .notice
                .as_ref()
                .is_some_and(|n| n.is_expired(chrono::Local::now()))
            {
                state.notice = None;
            }
            UpdateResult::Handled(None)
        }
        // The next draw picks up the new size and notifies viewport listeners.
        Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Notice, Severity};

    #[test]
    fn test_help_closes_menu() {
        let mut state = AppState::default();
        state.editor.replace("/", 1);
        slash::sync_with_document(&mut state);
        assert!(state.is_slash_open());

        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        assert!(!state.is_slash_open());

        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Editing);
    }

    #[test]
    fn test_tick_expires_notice() {
        let mut state = AppState::default();
        let mut notice = Notice::new(Severity::Info, "hello");
        notice.timestamp -= chrono::Duration::seconds(10);
        state.notice = Some(notice);

        update(&mut state, &Action::Tick);
        assert!(state.notice.is_none());
        assert_eq!(state.frame_count, 1);
    }
}
