use super::action::Action;
use super::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct KeyMap {
    /// Always active.
    pub global: HashMap<KeyEvent, Action>,
    /// Active while the slash menu is open; these keys never reach the editor.
    pub popup: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::new())
    }
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut popup = HashMap::new();

        // --- Global ---
        global.insert(ctrl('q'), Action::Quit);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);

        // --- Slash Menu ---
        popup.insert(key(KeyCode::Down), Action::SlashNext);
        popup.insert(ctrl('n'), Action::SlashNext);
        popup.insert(key(KeyCode::Up), Action::SlashPrev);
        popup.insert(ctrl('p'), Action::SlashPrev);
        popup.insert(key(KeyCode::Enter), Action::SlashSelect);
        popup.insert(key(KeyCode::Tab), Action::SlashSelect);
        popup.insert(key(KeyCode::Esc), Action::SlashClose);

        let mut keymap = Self { global, popup };
        for (name, binding) in config {
            if let Err(reason) = keymap.bind(name, binding) {
                tracing::warn!(action = %name, key = %binding, reason, "ignoring key override");
            }
        }
        keymap
    }

    fn bind(&mut self, name: &str, binding: &str) -> Result<(), &'static str> {
        let event = parse_key(binding).ok_or("unrecognised key")?;
        let (table, action) = match name {
            "quit" => (&mut self.global, Action::Quit),
            "help" => (&mut self.global, Action::ToggleHelp),
            "popup.next" => (&mut self.popup, Action::SlashNext),
            "popup.prev" => (&mut self.popup, Action::SlashPrev),
            "popup.select" => (&mut self.popup, Action::SlashSelect),
            "popup.close" => (&mut self.popup, Action::SlashClose),
            _ => return Err("unknown action"),
        };
        table.insert(event, action);
        Ok(())
    }

    pub fn get_action(&self, event: KeyEvent, popup_open: bool) -> Option<Action> {
        let event = KeyEvent::new(event.code, event.modifiers);
        if popup_open {
            if let Some(action) = self.popup.get(&event) {
                return Some(action.clone());
            }
        }
        self.global.get(&event).cloned()
    }
}

/// Parses `"ctrl+n"`, `"alt+enter"`, `"f1"`, `"down"`, `"x"`.
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = binding.split('+').map(str::trim).collect();
    let code_part = parts.pop()?;

    for part in parts {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let lower = code_part.to_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            let mut chars = code_part.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
