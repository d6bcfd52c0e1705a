use std::time::Duration;

use futures_util::StreamExt;
use roster_core::Item;

use crate::decode::{decode_items, DecodeError};

/// Endpoint the roster is served from when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fetch-hiring.s3.amazonaws.com/";
pub const DEFAULT_RESOURCE_PATH: &str = "hiring.json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Base URL of the roster service; must end with a slash so the
    /// resource path joins onto it.
    pub base_url: String,
    pub resource_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {message}")]
    Transport { message: String },
    #[error("server rejected request: http status {status}")]
    Server { status: u16 },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Transport {
                message: err.to_string(),
            })?;
        Ok(Self { settings, client })
    }

    fn resource_url(&self) -> Result<reqwest::Url, FetchError> {
        let base =
            reqwest::Url::parse(&self.settings.base_url).map_err(|err| FetchError::Transport {
                message: format!("invalid base url: {err}"),
            })?;
        base.join(&self.settings.resource_path)
            .map_err(|err| FetchError::Transport {
                message: format!("invalid resource path: {err}"),
            })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        let url = self.resource_url()?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(oversized(self.settings.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(oversized(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(decode_items(&bytes)?)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Transport {
            message: format!("timed out: {err}"),
        };
    }
    if err.is_connect() {
        return FetchError::Transport {
            message: format!("connect failed: {err}"),
        };
    }
    FetchError::Transport {
        message: err.to_string(),
    }
}

fn oversized(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::Decode(DecodeError::Oversized { max_bytes, actual })
}
