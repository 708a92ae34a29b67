use super::action::Dispatcher;
use super::config::{AppConfig, PopupConfig};
use super::keymap::KeyMap;
use super::viewport::ViewportListeners;
use crate::theme::icons::{IconProvider, IconTable};
use crate::theme::{PaletteType, Theme};
use ratatui::layout::Rect;
use std::sync::Arc;

pub mod error;
pub mod input;
pub mod slash;

// Re-exports
pub use error::{Notice, Severity};
pub use input::{AppTextArea, EditorState};
pub use slash::{SlashMenuState, SlashSession};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Editing, // Typing in the document (the slash menu may be open)
    Help,    // Showing the help overlay
}

/// Screen areas from the last draw, used for hit testing and popup anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    /// Everything between header and footer; the popup's container.
    pub body: Rect,
    /// Inner text area of the editor pane.
    pub editor: Rect,
}

pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub notice: Option<Notice>,
    pub source_label: String,

    // --- Document ---
    pub editor: EditorState<'a>,

    // --- Slash Menu ---
    pub slash: SlashMenuState,

    // --- Layout & Viewport ---
    pub layout: LayoutState,
    pub viewport: ViewportListeners,
    pub dispatcher: Dispatcher,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub popup: PopupConfig,
    pub palette_type: PaletteType,
    pub theme: Theme,
    pub icons: Arc<dyn IconProvider>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            popup: config.popup.clone(),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            icons: Arc::new(IconTable::default().with_overrides(&config.icons)),
            ..Default::default()
        }
    }

    pub fn is_slash_open(&self) -> bool {
        self.slash.is_open()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Editing,
            notice: None,
            source_label: String::new(),
            editor: EditorState::default(),
            slash: SlashMenuState::default(),
            layout: LayoutState::default(),
            viewport: ViewportListeners::default(),
            dispatcher: Dispatcher::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            popup: PopupConfig::default(),
            palette_type: PaletteType::CatppuccinMocha,
            theme: Theme::default(),
            icons: Arc::new(IconTable::default()),
        }
    }
}
