use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::{Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::endpoint::{Endpoints, EnvironmentProbe, resolve_base_url};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Keep a cookie store and send cookies back on later requests.
    pub with_credentials: bool,
    /// Origin a root-relative `base_url` is resolved against.
    pub origin: Option<Url>,
}

impl ClientConfig {
    pub fn resolve(probe: &EnvironmentProbe, endpoints: &Endpoints) -> Self {
        let base_url = resolve_base_url(probe, endpoints);
        debug!(%probe, %base_url, "resolved API base URL");
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            with_credentials: false,
            origin: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(&EnvironmentProbe::Detached, &Endpoints::default())
    }
}

/// HTTP client bound to one base URL and timeout for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    origin: Option<Url>,
    timeout: Duration,
    with_credentials: bool,
}

impl ApiClient {
    /// Builds the client. No request is sent until one is explicitly issued.
    pub fn new(config: ClientConfig) -> Result<Self> {
        debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            with_credentials = config.with_credentials,
            "building HTTP client"
        );
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(config.with_credentials)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            inner,
            base_url: config.base_url,
            origin: config.origin,
            timeout: config.timeout,
            with_credentials: config.with_credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Absolute URL for `path` relative to the base URL.
    pub fn url(&self, path: &str) -> Result<Url> {
        let joined = combine_urls(&self.base_url, path);
        if joined.starts_with('/') {
            let origin = self.origin.as_ref().ok_or_else(|| {
                anyhow!(
                    "base URL '{}' is root-relative and no origin is configured (set BLOCKS_ORIGIN)",
                    self.base_url
                )
            })?;
            return origin
                .join(&joined)
                .with_context(|| format!("invalid request path: {}", joined));
        }
        Url::parse(&joined).with_context(|| format!("invalid request URL: {}", joined))
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!(%method, %url, "issuing request");
        Ok(self.inner.request(method, url))
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::POST, path)
    }
}

/// `scheme://...` (any case) or protocol-relative `//...`.
fn is_absolute_url(path: &str) -> bool {
    let rest = match path.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => path,
    };
    rest.starts_with("//")
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn combine_urls(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Builds the process-wide client. Fails if it was already built.
pub fn install_shared_client(config: ClientConfig) -> Result<&'static ApiClient> {
    let client = ApiClient::new(config)?;
    SHARED
        .set(client)
        .map_err(|_| anyhow!("shared HTTP client is already initialized"))?;
    SHARED
        .get()
        .ok_or_else(|| anyhow!("shared HTTP client is not initialized"))
}
