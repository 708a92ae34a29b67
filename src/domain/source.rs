use crate::domain::models::CommandGroup;
use anyhow::Result;
use async_trait::async_trait;

/// The command-search collaborator behind the slash menu.
///
/// An empty query returns the default set. Implementations must preserve
/// their own group and command order; the popup never re-sorts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<CommandGroup>>;

    /// Short label for the footer, e.g. the endpoint host.
    fn describe(&self) -> String;
}
