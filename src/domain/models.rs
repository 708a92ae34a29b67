use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(pub String);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block-insertion command as returned by the command source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandGroup {
    pub category: String,
    pub commands: Vec<Command>,
}

/// Wire shape of the command-search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandsResponse {
    pub groups: Vec<CommandGroup>,
}

pub fn flattened_len(groups: &[CommandGroup]) -> usize {
    groups.iter().map(|g| g.commands.len()).sum()
}

/// Looks up a command by its index in the flattened list.
pub fn flattened_get(groups: &[CommandGroup], mut index: usize) -> Option<&Command> {
    for group in groups {
        if index < group.commands.len() {
            return group.commands.get(index);
        }
        index -= group.commands.len();
    }
    None
}
