use crate::app::viewport::ViewportSubscription;
use crate::domain::models::{flattened_get, flattened_len, Command, CommandGroup};
use crate::domain::trigger::Trigger;
use ratatui::layout::Rect;

/// An open slash-command interaction. Exists iff the popup is visible.
#[derive(Debug)]
pub struct SlashSession {
    pub trigger_index: usize,
    pub query: String,
    /// Where the popup is drawn, in frame coordinates.
    pub anchor: Option<Rect>,
    // Held for its Drop: keeps the reposition listener alive while open.
    _viewport: ViewportSubscription,
}

impl SlashSession {
    pub fn new(trigger: Trigger, viewport: ViewportSubscription) -> Self {
        Self {
            trigger_index: trigger.index,
            query: trigger.query,
            anchor: None,
            _viewport: viewport,
        }
    }
}

#[derive(Debug, Default)]
pub struct SlashMenuState {
    pub session: Option<SlashSession>,
    pub groups: Vec<CommandGroup>,
    /// Index into the flattened command list.
    pub selected: usize,
    /// Generation of the most recently issued search.
    pub generation: u64,
    pub loading: bool,
}

impl SlashMenuState {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn total(&self) -> usize {
        flattened_len(&self.groups)
    }

    pub fn selected_command(&self) -> Option<&Command> {
        flattened_get(&self.groups, self.selected)
    }

    pub fn query(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.query.as_str())
    }

    /// Drops the session (releasing its listeners) and all results.
    pub fn close(&mut self) {
        self.session = None;
        self.groups.clear();
        self.selected = 0;
        self.loading = false;
    }

    pub fn select_next(&mut self) {
        let total = self.total();
        if total > 0 {
            self.selected = (self.selected + 1) % total;
        }
    }

    pub fn select_prev(&mut self) {
        let total = self.total();
        if total > 0 {
            self.selected = (self.selected + total - 1) % total;
        }
    }

    pub fn set_results(&mut self, groups: Vec<CommandGroup>) {
        self.groups = groups;
        self.selected = 0;
        self.loading = false;
    }
}
