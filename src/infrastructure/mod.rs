pub mod catalog;
pub mod http_source;

use crate::app::config::{AppConfig, SourceKind};
use crate::domain::source::CommandSource;
use anyhow::Result;
use std::sync::Arc;

pub use catalog::BuiltinCatalog;
pub use http_source::HttpCommandSource;

/// Builds the command source selected in `config`.
pub fn command_source(config: &AppConfig) -> Result<Arc<dyn CommandSource>> {
    let source: Arc<dyn CommandSource> = match config.source {
        SourceKind::Http => Arc::new(HttpCommandSource::new(
            &config.endpoint,
            config.request_timeout(),
        )?),
        SourceKind::Builtin => Arc::new(BuiltinCatalog),
    };
    tracing::info!(source = %source.describe(), "command source ready");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_selected_source() {
        let config = AppConfig {
            source: SourceKind::Builtin,
            ..AppConfig::default()
        };
        assert_eq!(command_source(&config).unwrap().describe(), "builtin");

        let config = AppConfig {
            endpoint: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(command_source(&config).is_err());
    }
}
