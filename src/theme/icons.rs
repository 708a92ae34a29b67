use std::collections::HashMap;

/// Glyph drawn for icon keys nobody knows about.
pub const FALLBACK_GLYPH: &str = "⌘";

/// Maps a command's icon key to a terminal glyph.
pub trait IconProvider: Send + Sync {
    fn glyph(&self, key: &str) -> Option<&str>;
}

pub fn glyph_or_fallback<'a>(icons: &'a dyn IconProvider, key: &str) -> &'a str {
    icons.glyph(key).unwrap_or(FALLBACK_GLYPH)
}

const DEFAULT_GLYPHS: &[(&str, &str)] = &[
    ("text", "¶"),
    ("heading-1", "H1"),
    ("heading-2", "H2"),
    ("heading-3", "H3"),
    ("list", "•"),
    ("list-ordered", "1."),
    ("check-square", "☑"),
    ("chevrons-down-up", "▸"),
    ("text-quote", "❝"),
    ("minus", "─"),
    ("megaphone", "!"),
    ("image", "▣"),
    ("video", "▶"),
    ("headphones", "♫"),
    ("file", "▤"),
    ("file-text", "≡"),
    ("code", "<>"),
    ("bookmark", "⚑"),
    ("sigma", "Σ"),
    ("table", "▦"),
    ("link", "↗"),
];

#[derive(Debug, Clone)]
pub struct IconTable {
    glyphs: HashMap<String, String>,
}

impl Default for IconTable {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

impl IconTable {
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, String>) -> Self {
        self.glyphs
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

impl IconProvider for IconTable {
    fn glyph(&self, key: &str) -> Option<&str> {
        self.glyphs.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back() {
        let table = IconTable::default();
        assert_eq!(glyph_or_fallback(&table, "heading-1"), "H1");
        assert_eq!(glyph_or_fallback(&table, "rocket"), FALLBACK_GLYPH);
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let overrides = HashMap::from([
            ("video".to_string(), "V".to_string()),
            ("rocket".to_string(), "^".to_string()),
        ]);
        let table = IconTable::default().with_overrides(&overrides);
        assert_eq!(table.glyph("video"), Some("V"));
        assert_eq!(table.glyph("rocket"), Some("^"));
        assert_eq!(table.glyph("code"), Some("<>"));
    }
}
