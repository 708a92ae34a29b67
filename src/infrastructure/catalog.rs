use crate::domain::models::{Command, CommandGroup, CommandId};
use crate::domain::source::CommandSource;
use anyhow::Result;
use async_trait::async_trait;

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    keywords: &'static [&'static str],
}

#[rustfmt::skip]
const BASIC_BLOCKS: &[Entry] = &[
    Entry { id: "text", title: "Text", description: "Just start writing with plain text.", icon: "text", keywords: &["paragraph", "plain"] },
    Entry { id: "page", title: "Page", description: "Embed a sub-page inside this page.", icon: "file-text", keywords: &["subpage", "nested"] },
    Entry { id: "todo", title: "To-do list", description: "Track tasks with a to-do list.", icon: "check-square", keywords: &["checkbox", "task"] },
    Entry { id: "heading_1", title: "Heading 1", description: "Big section heading.", icon: "heading-1", keywords: &["h1", "title"] },
    Entry { id: "heading_2", title: "Heading 2", description: "Medium section heading.", icon: "heading-2", keywords: &["h2", "subtitle"] },
    Entry { id: "heading_3", title: "Heading 3", description: "Small section heading.", icon: "heading-3", keywords: &["h3"] },
    Entry { id: "table", title: "Table", description: "Add a simple table to this page.", icon: "table", keywords: &["grid", "spreadsheet"] },
    Entry { id: "bulleted_list", title: "Bulleted list", description: "Create a simple bulleted list.", icon: "list", keywords: &["ul", "bullet"] },
    Entry { id: "numbered_list", title: "Numbered list", description: "Create a list with numbering.", icon: "list-ordered", keywords: &["ol", "number"] },
    Entry { id: "toggle", title: "Toggle list", description: "Toggles can hide and show content inside.", icon: "chevrons-down-up", keywords: &["collapse", "expand", "accordion"] },
    Entry { id: "quote", title: "Quote", description: "Capture a quote.", icon: "text-quote", keywords: &["blockquote", "cite"] },
    Entry { id: "divider", title: "Divider", description: "Visually divide blocks.", icon: "minus", keywords: &["hr", "separator", "line"] },
    Entry { id: "link_to_page", title: "Link to page", description: "Link to an existing page.", icon: "link", keywords: &["reference", "internal link"] },
    Entry { id: "callout", title: "Callout", description: "Make writing stand out.", icon: "megaphone", keywords: &["alert", "notice", "info"] },
];

#[rustfmt::skip]
const MEDIA: &[Entry] = &[
    Entry { id: "image", title: "Image", description: "Upload or embed with a link.", icon: "image", keywords: &["photo", "picture", "img"] },
    Entry { id: "bookmark", title: "Web bookmark", description: "Save a link as a visual bookmark.", icon: "bookmark", keywords: &["link", "url"] },
    Entry { id: "video", title: "Video", description: "Embed from YouTube, Vimeo...", icon: "video", keywords: &["movie", "clip"] },
    Entry { id: "audio", title: "Audio", description: "Embed from SoundCloud, Spotify...", icon: "headphones", keywords: &["sound", "music"] },
    Entry { id: "code", title: "Code", description: "Capture a code snippet.", icon: "code", keywords: &["snippet", "programming"] },
    Entry { id: "file", title: "File", description: "Upload or embed with a link.", icon: "file", keywords: &["attachment", "upload"] },
];

#[rustfmt::skip]
const EMBEDS: &[Entry] = &[
    Entry { id: "equation", title: "Equation", description: "Display a math equation.", icon: "sigma", keywords: &["math", "latex", "formula"] },
];

const CATEGORIES: &[(&str, &[Entry])] = &[
    ("Basic blocks", BASIC_BLOCKS),
    ("Media", MEDIA),
    ("Embeds", EMBEDS),
];

impl Entry {
    fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .keywords
                .iter()
                .any(|kw| kw.to_lowercase().contains(query_lower))
    }

    fn to_command(&self) -> Command {
        Command {
            id: CommandId(self.id.to_string()),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            keywords: self.keywords.iter().map(|kw| (*kw).to_string()).collect(),
        }
    }
}

/// In-process command source with the stock block commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Case-insensitive substring search over title, description and
    /// keywords. Empty categories are dropped; an empty query returns all.
    #[must_use]
    pub fn search_sync(&self, query: &str) -> Vec<CommandGroup> {
        let query_lower = query.to_lowercase();
        CATEGORIES
            .iter()
            .filter_map(|(category, entries)| {
                let commands: Vec<Command> = entries
                    .iter()
                    .filter(|e| query_lower.is_empty() || e.matches(&query_lower))
                    .map(Entry::to_command)
                    .collect();
                (!commands.is_empty()).then(|| CommandGroup {
                    category: (*category).to_string(),
                    commands,
                })
            })
            .collect()
    }
}

#[async_trait]
impl CommandSource for BuiltinCatalog {
    async fn search(&self, query: &str) -> Result<Vec<CommandGroup>> {
        Ok(self.search_sync(query))
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}
