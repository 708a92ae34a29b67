use crate::domain::models::{CommandGroup, CommandsResponse};
use crate::domain::source::CommandSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Queries a remote command-search endpoint: `GET {endpoint}?q={query}`.
#[derive(Debug, Clone)]
pub struct HttpCommandSource {
    client: Client,
    endpoint: Url,
}

impl HttpCommandSource {
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid command endpoint `{endpoint}`"))?;
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(request_timeout)
            .build()
            .context("failed to build command search HTTP client")?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CommandSource for HttpCommandSource {
    async fn search(&self, query: &str) -> Result<Vec<CommandGroup>> {
        tracing::debug!(endpoint = %self.endpoint, query, "searching commands");
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await
            .context("command search request failed")?
            .error_for_status()
            .context("command search returned an error status")?;

        let body: CommandsResponse = response
            .json()
            .await
            .context("command search returned malformed JSON")?;
        Ok(body.groups)
    }

    fn describe(&self) -> String {
        self.endpoint
            .host_str()
            .map_or_else(|| self.endpoint.to_string(), |host| match self.endpoint.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            })
    }
}
