//! Banner image fetch collaborator.
//!
//! The renderer never talks to the network; it only sees "bytes present" or
//! "absent". [`resolve_banner`] maps every fetch failure to absence with a
//! warning, so a missing banner can never abort a document.

use anyhow::Result;
use std::time::Duration;
use tracing::warn;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Narrow transport interface for fetching an image by URL.
#[cfg_attr(test, mockall::automock)]
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher used in production.
pub struct HttpImageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

/// Fetches the banner once, best-effort. No URL or any failure yields `None`.
pub fn resolve_banner(fetcher: &dyn ImageFetcher, url: Option<&str>) -> Option<Vec<u8>> {
    let url = url?;
    match fetcher.fetch(url) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(url, error = %e, "banner image unavailable, continuing without it");
            None
        }
    }
}
