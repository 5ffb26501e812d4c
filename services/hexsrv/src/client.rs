//! HTTP bridge to a running hexsrv

use async_trait::async_trait;
use errors::{ErrorInfo, HexError, HexResult};
use hex_utils::Bridge;
use serde_json::Value;
use tracing::debug;

/// [`Bridge`] that invokes commands on a remote hexsrv over HTTP
#[derive(Debug, Clone)]
pub struct RemoteBridge {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBridge {
    /// `base_url` such as `http://127.0.0.1:6010`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn invoke_url(&self, command: &str) -> String {
        format!("{}/api/invoke/{}", self.base_url, command)
    }
}

#[async_trait]
impl Bridge for RemoteBridge {
    async fn invoke(&self, command: &str, args: Value) -> HexResult<Value> {
        let url = self.invoke_url(command);
        debug!("POST {}", url);

        let bridge_error = |message: String| HexError::Bridge {
            command: command.to_string(),
            message,
        };

        let response = self
            .client
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| bridge_error(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| bridge_error(e.to_string()));
        }

        // Error bodies are ErrorInfo; fall back to the status line
        let message = match response.json::<ErrorInfo>().await {
            Ok(info) => info.message,
            Err(_) => format!("HTTP {}", status),
        };
        Err(bridge_error(message))
    }
}
