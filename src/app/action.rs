use crate::app::command::Command;
use crate::domain::models::CommandGroup;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Editor ---
    EditorInput(crossterm::event::KeyEvent), // Keystroke for the text area
    EditorClick(u16, u16),                   // Click at (col, row) inside the editor pane
    ScrollEditor(i16),                       // Scroll the editor without moving the caret

    // --- Slash Menu ---
    SlashNext,               // Move the selection down (wraps)
    SlashPrev,               // Move the selection up (wraps)
    SlashSelect,             // Insert the selected command
    SlashSelectIndex(usize), // Insert the command at a flattened index (mouse)
    SlashClose,              // Dismiss the menu
    RepositionPopup,         // Recompute the popup anchor from the caret

    // --- UI ---
    ToggleHelp,

    // --- Async Results ---
    CommandsLoaded {
        generation: u64,
        result: Result<Vec<CommandGroup>, String>,
    },
}

/// Lets synchronous code (viewport listeners) post actions back to the
/// runtime. Detached dispatchers drop everything.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    tx: Option<mpsc::Sender<Action>>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn send(&self, action: Action) {
        if let Some(tx) = &self.tx {
            if let Err(err) = tx.try_send(action) {
                tracing::debug!(%err, "dropped dispatched action");
            }
        }
    }
}
