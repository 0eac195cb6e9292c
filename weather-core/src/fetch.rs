use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::config::ProviderConfig;
use crate::model::{Observation, ProviderError, ProviderReply, UnitSystem};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the provider's current-weather endpoint.
///
/// One round trip per lookup: no retries, no caching, no shared state
/// between calls.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: ProviderConfig,
}

#[derive(Debug, Error)]
enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unparseable provider payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherClient {
    pub fn new(config: ProviderConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                warn!("Failed to build HTTP client with timeout, using defaults: {err}");
                Client::new()
            });

        Self { http, config }
    }

    /// Fetch current weather for `location`. An empty location is legal
    /// and forwarded as-is.
    ///
    /// Never returns an error to the caller: a missing credential, a
    /// provider-reported failure, and a transport failure all come back
    /// as an error-shaped [`ProviderReply`].
    pub async fn fetch(&self, location: &str, units: UnitSystem) -> ProviderReply {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("No API key configured, skipping provider call");
            return ProviderReply::Error(ProviderError::missing_key());
        };

        match self.request(location, units, api_key).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("Provider request for {location:?} failed: {err}");
                ProviderReply::Error(ProviderError::unreachable())
            }
        }
    }

    async fn request(
        &self,
        location: &str,
        units: UnitSystem,
        api_key: &str,
    ) -> Result<ProviderReply, TransportError> {
        let res = self
            .http
            .get(&self.config.base_url)
            .query(&[("q", location), ("appid", api_key), ("units", units.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status.is_client_error() || status.is_server_error() {
            warn!("Provider returned {status} for {location:?}");

            // Pass the provider's own error payload through when it
            // parses; otherwise report the response as unusable.
            let reply = match serde_json::from_str::<ProviderError>(&body) {
                Ok(provider_error) => provider_error,
                Err(_) => ProviderError::unreachable(),
            };
            return Ok(ProviderReply::Error(reply));
        }

        let observation: Observation = serde_json::from_str(&body)?;
        Ok(ProviderReply::Observation(observation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_short_circuits_without_network() {
        // Unroutable endpoint: a network attempt would fail loudly, a
        // short-circuit answers instantly.
        let config = ProviderConfig::new(None).with_base_url("http://127.0.0.1:1");
        let client = WeatherClient::new(config);

        let reply = client.fetch("London", UnitSystem::Metric).await;

        match reply {
            ProviderReply::Error(err) => {
                assert_eq!(err.cod, 401);
                assert_eq!(err.message.as_deref(), Some("API Key is missing"));
            }
            ProviderReply::Observation(_) => panic!("expected an error reply"),
        }
    }

    #[tokio::test]
    async fn connection_refused_becomes_generic_error() {
        let config =
            ProviderConfig::new(Some("KEY".to_string())).with_base_url("http://127.0.0.1:1");
        let client = WeatherClient::new(config);

        let reply = client.fetch("London", UnitSystem::Metric).await;

        match reply {
            ProviderReply::Error(err) => {
                assert_eq!(err.cod, 500);
                assert_eq!(
                    err.message.as_deref(),
                    Some("Network error or API is unreachable")
                );
            }
            ProviderReply::Observation(_) => panic!("expected an error reply"),
        }
    }
}
