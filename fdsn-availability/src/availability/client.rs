//! FDSN availability web-service client.

use reqwest::StatusCode;
use tracing::{debug, warn};

use super::error::AvailabilityError;
use super::query::ExtentQuery;

/// Default extent endpoint (IRIS DMC).
pub const DEFAULT_BASE_URL: &str = "https://service.iris.edu/fdsnws/availability/1/extent";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body kept in a `Service` error.
const MAX_ERROR_BODY: usize = 500;

/// Anything that can answer an extent query with a response body.
///
/// The real implementation is [`AvailabilityClient`]; tests substitute
/// [`super::MockAvailabilitySource`] so no network call is made.
pub trait AvailabilitySource {
    /// Fetch the raw `format=request` body for a query.
    ///
    /// Fails with [`AvailabilityError::Service`] unless the status is 200.
    fn fetch_availability(
        &self,
        query: &ExtentQuery,
    ) -> impl Future<Output = Result<String, AvailabilityError>> + Send;
}

impl<T: AvailabilitySource> AvailabilitySource for &T {
    fn fetch_availability(
        &self,
        query: &ExtentQuery,
    ) -> impl Future<Output = Result<String, AvailabilityError>> + Send {
        (**self).fetch_availability(query)
    }
}

/// Turn a status and body into the body, or a `Service` error.
pub(crate) fn accept_status(status: u16, body: String) -> Result<String, AvailabilityError> {
    if status != StatusCode::OK.as_u16() {
        return Err(AvailabilityError::Service {
            status,
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }
    Ok(body)
}

/// Configuration for the availability client.
#[derive(Debug, Clone)]
pub struct AvailabilityConfig {
    /// Extent endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AvailabilityConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint (another data center, or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for an FDSN availability extent endpoint.
///
/// Issues exactly one GET per call. No retries, no backoff.
#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl AvailabilityClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AvailabilityConfig) -> Result<Self, AvailabilityError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, err: reqwest::Error) -> AvailabilityError {
        if err.is_timeout() {
            warn!(secs = self.timeout_secs, "availability request timed out");
            AvailabilityError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            AvailabilityError::Http(err)
        }
    }

    /// Issue the extent request and return the body of a 200 response.
    pub async fn fetch_availability(
        &self,
        query: &ExtentQuery,
    ) -> Result<String, AvailabilityError> {
        debug!(
            url = %self.base_url,
            network = %query.network,
            station = %query.station,
            "requesting availability extent"
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "availability service responded");

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return accept_status(status.as_u16(), body);
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        accept_status(status.as_u16(), body)
    }
}

impl AvailabilitySource for AvailabilityClient {
    async fn fetch_availability(&self, query: &ExtentQuery) -> Result<String, AvailabilityError> {
        AvailabilityClient::fetch_availability(self, query).await
    }
}
