use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    if let Action::Quit = action {
        state.should_quit = true;
        return None;
    }

    if let UpdateResult::Handled(cmd) = features::editor::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::slash::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }

    tracing::trace!(?action, "unhandled action");
    None
}
