//! The slash-command popup controller.
//!
//! A session opens when the trigger detector matches at the caret and lives
//! until it no longer does, a command is inserted, or the user dismisses it.
//! Every query change issues a search tagged with a fresh generation; only the
//! answer to the latest generation is ever applied.

use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Notice, Severity, SlashSession},
    viewport::ViewportEvent,
};
use crate::components::{caret_position, slash_menu};
use crate::domain::models::{flattened_get, CommandGroup};
use crate::domain::splice::splice;
use crate::domain::trigger::{detect, Trigger};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SlashNext if state.is_slash_open() => {
            state.slash.select_next();
            UpdateResult::Handled(None)
        }
        Action::SlashPrev if state.is_slash_open() => {
            state.slash.select_prev();
            UpdateResult::Handled(None)
        }
        Action::SlashSelect if state.is_slash_open() => {
            let selected = state.slash.selected;
            insert_command(state, selected);
            UpdateResult::Handled(None)
        }
        Action::SlashSelectIndex(index) if state.is_slash_open() => {
            insert_command(state, *index);
            UpdateResult::Handled(None)
        }
        Action::SlashClose => {
            close(state);
            UpdateResult::Handled(None)
        }
        Action::RepositionPopup => {
            reposition(state);
            UpdateResult::Handled(None)
        }
        Action::CommandsLoaded { generation, result } => {
            apply_results(state, *generation, result);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Re-runs trigger detection against the live document and caret. Opens,
/// updates or closes the session to match.
pub fn sync_with_document(state: &mut AppState) -> Option<Command> {
    let text = state.editor.text();
    let cursor = state.editor.cursor_offset();

    match detect(&text, cursor) {
        Some(trigger) => open_or_update(state, trigger),
        None => {
            close(state);
            None
        }
    }
}

fn open_or_update(state: &mut AppState, trigger: Trigger) -> Option<Command> {
    match state.slash.session.as_mut() {
        Some(session) => {
            let query_changed = session.query != trigger.query;
            session.trigger_index = trigger.index;
            if !query_changed {
                reposition(state);
                return None;
            }
            session.query.clone_from(&trigger.query);
        }
        None => {
            let dispatcher = state.dispatcher.clone();
            let subscription = state
                .viewport
                .subscribe(move |_| dispatcher.send(Action::RepositionPopup));
            state.slash.session = Some(SlashSession::new(trigger.clone(), subscription));
            state.slash.groups.clear();
            state.slash.selected = 0;
            tracing::debug!(index = trigger.index, "slash menu opened");
        }
    }

    reposition(state);
    Some(issue_search(state, trigger.query))
}

fn issue_search(state: &mut AppState, query: String) -> Command {
    state.slash.generation += 1;
    state.slash.loading = true;
    Command::Search {
        query,
        generation: state.slash.generation,
    }
}

fn apply_results(
    state: &mut AppState,
    generation: u64,
    result: &Result<Vec<CommandGroup>, String>,
) {
    if !state.is_slash_open() {
        tracing::debug!(generation, "dropping results for a closed menu");
        return;
    }
    if generation != state.slash.generation {
        tracing::debug!(
            generation,
            latest = state.slash.generation,
            "dropping stale search results"
        );
        return;
    }

    match result {
        Ok(groups) => {
            state.slash.set_results(groups.clone());
            reposition(state);
        }
        Err(message) => {
            // Keep whatever was listed before.
            state.slash.loading = false;
            state.notice = Some(Notice::new(
                Severity::Warning,
                format!("Command search failed: {message}"),
            ));
        }
    }
}

/// Replaces the trigger and query with the command at `index`.
///
/// The trigger is revalidated against the live document first; if it moved
/// or vanished the insertion is refused and the session closed.
fn insert_command(state: &mut AppState, index: usize) {
    let Some(trigger_index) = state.slash.session.as_ref().map(|s| s.trigger_index) else {
        return;
    };
    let Some(command) = flattened_get(&state.slash.groups, index) else {
        return;
    };
    let title = command.title.clone();
    let id = command.id.clone();

    let text = state.editor.text();
    let cursor = state.editor.cursor_offset();
    if detect(&text, cursor).map(|t| t.index) != Some(trigger_index) {
        tracing::warn!(
            trigger_index,
            cursor,
            "slash trigger no longer matches the document; not inserting"
        );
        state.notice = Some(Notice::new(Severity::Info, "Command trigger moved; nothing inserted"));
        close(state);
        return;
    }

    let spliced = splice(&text, trigger_index, cursor, &title);
    state.editor.replace(&spliced.text, spliced.cursor);
    state.editor.follow_cursor(state.layout.editor);
    tracing::info!(command = %id, "inserted command");

    close(state);
    state.viewport.emit(ViewportEvent::CaretMoved);
}

pub fn close(state: &mut AppState) {
    if state.is_slash_open() {
        state.slash.close();
        tracing::debug!("slash menu closed");
    }
}

/// Recomputes the popup rectangle from the caret cell and the last layout.
pub fn reposition(state: &mut AppState) {
    if !state.is_slash_open() {
        return;
    }
    let container = state.layout.body;
    let size = slash_menu::menu_size(&state.slash.groups, &state.popup, container);
    let caret = caret_position(&state.editor, state.layout.editor);
    let rect = slash_menu::popup_rect(caret, size, container, state.popup.margin);

    if let Some(session) = state.slash.session.as_mut() {
        session.anchor = Some(rect);
    }
}
