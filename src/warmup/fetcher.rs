use std::io;

use reqwest::blocking::Client;

use crate::model::error::fetch_errors::FetchError;

/// issues the GET for a single warmup url
pub trait UrlFetcher {
    /// `Ok` as soon as any response comes back, whatever its status
    fn fetch(&self, url: &str) -> Result<(), FetchError>;
}

/// [`UrlFetcher`] on top of a blocking reqwest client, using the client's default timeouts
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlFetcher for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<(), FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        // the body only needs to be rendered server side
        response
            .copy_to(&mut io::sink())
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(())
    }
}
