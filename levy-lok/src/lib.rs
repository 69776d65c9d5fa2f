//! levy-lok
//!
//! Production connector that implements `ContributionProvider` against the
//! public League of Kingdoms land-statistics endpoint. One HTTP GET per
//! (weekly window, land) pair; the endpoint only understands Sunday-aligned
//! 7-day ranges, which is what [`WeeklyWindow`] encodes.
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use levy_core::{ContributionProvider, KingdomTotal, LandId, LevyError, WeeklyWindow};
use url::Url;

/// Production endpoint the default connector talks to.
const DEFAULT_BASE_URL: &str = "https://api-lok-live.leagueofkingdoms.com/";
const CONTRIBUTION_PATH: &str = "api/stat/land/contribution";
const NAME: &str = "levy-lok";

/// Connector for the League of Kingdoms contribution-stats API.
pub struct LokConnector {
    http: reqwest::Client,
    base_url: Url,
}

impl LokConnector {
    /// Build against the production endpoint with a fresh `reqwest::Client`.
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default endpoint URL is valid"),
        }
    }

    /// Start building a connector with a custom endpoint or HTTP client.
    #[must_use]
    pub fn builder() -> LokConnectorBuilder {
        LokConnectorBuilder::default()
    }

    fn contribution_url(&self, land: &LandId, window: WeeklyWindow) -> Result<Url, LevyError> {
        let mut url = self
            .base_url
            .join(CONTRIBUTION_PATH)
            .map_err(|e| LevyError::InvalidArg(format!("bad contribution endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("landId", land.as_str())
            .append_pair("from", &window.start().to_string())
            .append_pair("to", &window.end().to_string());
        Ok(url)
    }
}

impl Default for LokConnector {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Builder for [`LokConnector`].
#[derive(Default)]
pub struct LokConnectorBuilder {
    base_url: Option<String>,
    client: Option<reqwest::Client>,
}

impl LokConnectorBuilder {
    /// Override the endpoint base URL (tests point this at a local mock
    /// server). A trailing slash is added when missing so relative joins
    /// behave.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a preconfigured `reqwest::Client` (custom timeouts, proxies).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL cannot be parsed.
    pub fn build(self) -> Result<LokConnector, LevyError> {
        let base_url = match self.base_url {
            Some(mut raw) => {
                if !raw.ends_with('/') {
                    raw.push('/');
                }
                Url::parse(&raw)
                    .map_err(|e| LevyError::InvalidArg(format!("bad base URL {raw:?}: {e}")))?
            }
            None => Url::parse(DEFAULT_BASE_URL).expect("default endpoint URL is valid"),
        };
        Ok(LokConnector {
            http: self.client.unwrap_or_default(),
            base_url,
        })
    }
}

#[async_trait]
impl ContributionProvider for LokConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn land_contributions(
        &self,
        land: &LandId,
        window: WeeklyWindow,
    ) -> Result<Vec<KingdomTotal>, LevyError> {
        let url = self.contribution_url(land, window)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LevyError::provider(NAME, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LevyError::status(NAME, status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LevyError::provider(NAME, e.to_string()))?;
        let envelope: wire::Envelope =
            serde_json::from_str(&body).map_err(|e| LevyError::decode(NAME, e.to_string()))?;

        Ok(wire::rows_from_envelope(envelope, land, window))
    }
}
