use crate::app::{action::Action, command::Command};
use crate::domain::source::CommandSource;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Runs `command` in the background; its outcome comes back as an [`Action`].
pub fn handle_command(
    command: Command,
    source: Arc<dyn CommandSource>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Search { query, generation } => {
            let span = tracing::debug_span!("search", generation, query = %query);
            tokio::spawn(
                async move {
                    let result = source.search(&query).await.map_err(|e| format!("{e:#}"));
                    match &result {
                        Ok(groups) => tracing::debug!(groups = groups.len(), "search finished"),
                        Err(error) => tracing::warn!(%error, "command search failed"),
                    }
                    let _ = tx.send(Action::CommandsLoaded { generation, result }).await;
                }
                .instrument(span),
            );
        }
    }
    Ok(())
}
