use std::future::Future;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};

use crate::system::snapshot::Snapshot;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("malformed snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// One source of snapshots; each call is a single attempt with no retries.
pub trait Fetch {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpFetcher {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sysmonitor/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("failed to build HTTP client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send {
        let request = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        async move {
            let response = request.send().await.map_err(FetchError::Network)?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }
            let body = response.bytes().await.map_err(FetchError::Network)?;
            serde_json::from_slice(&body).map_err(FetchError::Decode)
        }
    }
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).wrap_err_with(|| format!("invalid endpoint `{endpoint}`"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(eyre!(
            "endpoint `{endpoint}` must use http or https, not `{other}`"
        )),
    }
}
