use std::time::Duration;

use reqwest::Client;

use crate::client::HttpRecipeApi;
use crate::config::GuideConfig;
use crate::GuideError;

const DEFAULT_USER_AGENT: &str = concat!("cooking-guide/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring the HTTP recipe client
#[derive(Debug, Default)]
pub struct HttpRecipeApiBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpRecipeApiBuilder {
    /// Set the service base URL
    ///
    /// # Example
    /// ```
    /// use cooking_guide::HttpRecipeApi;
    ///
    /// let builder = HttpRecipeApi::builder()
    ///     .base_url("http://localhost:10000");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use cooking_guide::HttpRecipeApi;
    /// use std::time::Duration;
    ///
    /// let builder = HttpRecipeApi::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Take base URL and timeout from a loaded configuration
    pub fn config(self, config: &GuideConfig) -> Self {
        self.base_url(config.base_url.clone())
            .timeout(config.timeout())
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `GuideError::BuilderError` if:
    /// - No base URL was specified
    /// - The base URL is not an http(s) URL
    ///
    /// and `GuideError::FetchError` if reqwest cannot set up its client.
    pub fn build(self) -> Result<HttpRecipeApi, GuideError> {
        let base_url = self.base_url.ok_or_else(|| {
            GuideError::BuilderError("No base URL specified. Use .base_url()".to_string())
        })?;

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GuideError::BuilderError(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(
                self.user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            )
            .build()?;

        Ok(HttpRecipeApi::from_parts(client, base_url))
    }
}
