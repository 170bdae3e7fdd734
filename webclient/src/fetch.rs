use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{error::*, model::Url};

/// Retrieves the raw content of a page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs one GET request. A status other than `200 OK` is an error.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    inner: reqwest::Client,
}

impl HttpFetcher {
    const USER_AGENT: &str = concat!("cfs/", env!("CARGO_PKG_VERSION"));

    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .gzip(true)
            .build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        log::debug!("GET {}", url);
        let resp = self.inner.get(url.clone()).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedResponseCode {
                got: status,
                expected: StatusCode::OK,
                requested_url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }
}
