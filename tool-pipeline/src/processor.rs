//! The processor endpoint client.

use std::{env, fmt, time::Duration};

use async_trait::async_trait;
use hyper::body::to_bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Request, Uri};
use tokio::time::timeout;

use crate::error::{PipelineError, PipelineResult};
use crate::http_client::{HttpsClient, build_client};
use crate::wire::{ProcessRequest, RawResponse};

/// Environment variable naming the processor endpoint URL.
pub const PROCESSOR_URL_ENV: &str = "TEXTSMITH_PROCESSOR_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the HTTP processor client.
#[derive(Clone, Debug)]
pub struct ProcessorConfig {
    endpoint: String,
    timeout: Duration,
}

impl ProcessorConfig {
    /// Creates a configuration targeting the supplied endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Configuration`] if the URL is missing a
    /// scheme or cannot be parsed.
    pub fn new(endpoint: impl AsRef<str>) -> PipelineResult<Self> {
        let endpoint = sanitize_endpoint(endpoint.as_ref())?;
        Ok(Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Loads the endpoint from the `TEXTSMITH_PROCESSOR_URL` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Configuration`] if the variable is unset or
    /// its value is not a valid URL.
    pub fn from_env() -> PipelineResult<Self> {
        let endpoint = env::var(PROCESSOR_URL_ENV).map_err(|_| {
            PipelineError::configuration(format!("{PROCESSOR_URL_ENV} is not set"))
        })?;
        Self::new(endpoint)
    }

    /// Sets the per-request timeout enforced by the transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Submits one request to the remote text processor.
///
/// The trait is the seam between the orchestration logic and the transport;
/// tests substitute scripted implementations. Implementations are stateless
/// and reentrant: concurrent submissions share nothing but the socket pool.
#[async_trait]
pub trait TextProcessor: Send + Sync {
    /// Performs exactly one exchange; no retries, no backoff.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Transport`] for connection-level failures.
    async fn submit(&self, request: &ProcessRequest) -> PipelineResult<RawResponse>;
}

/// Production [`TextProcessor`] speaking HTTPS via `hyper`.
pub struct HttpProcessor {
    client: HttpsClient,
    endpoint: Uri,
    timeout: Duration,
}

impl fmt::Debug for HttpProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProcessor")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpProcessor {
    /// Constructs a new client from the supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Configuration`] if the endpoint URL does not
    /// parse as a URI.
    pub fn new(config: ProcessorConfig) -> PipelineResult<Self> {
        let endpoint = config.endpoint.parse::<Uri>().map_err(|err| {
            PipelineError::configuration(format!("invalid processor endpoint: {err}"))
        })?;

        let client = build_client()?;

        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl TextProcessor for HttpProcessor {
    async fn submit(&self, request: &ProcessRequest) -> PipelineResult<RawResponse> {
        let body = serde_json::to_vec(request).map_err(|err| {
            PipelineError::transport(format!("failed to encode processor request: {err}"))
        })?;

        let req = Request::post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|err| {
                PipelineError::transport(format!("failed to build processor request: {err}"))
            })?;

        let response = timeout(self.timeout, self.client.request(req))
            .await
            .map_err(|_| PipelineError::transport("processor request timed out"))?
            .map_err(|err| PipelineError::transport(format!("processor request failed: {err}")))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = to_bytes(response.into_body()).await.map_err(|err| {
            PipelineError::transport(format!("failed to read processor response: {err}"))
        })?;

        Ok(RawResponse::new(
            status,
            content_type,
            String::from_utf8_lossy(&bytes).to_string(),
        ))
    }
}

fn sanitize_endpoint(input: &str) -> PipelineResult<String> {
    let endpoint = input.trim().to_owned();
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(PipelineError::configuration(
            "processor endpoint must start with http:// or https://",
        ));
    }
    endpoint.parse::<Uri>().map_err(|err| {
        PipelineError::configuration(format!("invalid processor endpoint: {err}"))
    })?;
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_requires_scheme() {
        let err = ProcessorConfig::new("example.com/api/utilities").expect_err("missing scheme");
        assert!(matches!(err, PipelineError::Configuration { .. }));
    }

    #[test]
    fn endpoint_keeps_full_path() {
        let config =
            ProcessorConfig::new("https://example.com/api/utilities").expect("valid URL");
        assert_eq!(config.endpoint(), "https://example.com/api/utilities");
    }

    #[test]
    fn endpoint_is_trimmed() {
        let config = ProcessorConfig::new("  https://example.com/run  ").expect("valid URL");
        assert_eq!(config.endpoint(), "https://example.com/run");
    }

    #[test]
    fn timeout_is_configurable() {
        let config = ProcessorConfig::new("https://example.com/run")
            .expect("valid URL")
            .with_timeout(Duration::from_secs(5));
        let processor = HttpProcessor::new(config).expect("processor");
        assert_eq!(processor.timeout, Duration::from_secs(5));
    }
}
