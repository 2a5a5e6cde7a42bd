//! HTTP GET for source pages and image bytes.
//!
//! Uses the curl crate (libcurl) in blocking mode: one attempt per request, no
//! retries. Page requests carry a browser `User-Agent`; image requests do not.

use crate::config::HttpConfig;
use crate::error::{DownloadError, FetchError};
use crate::resolver::{ImageFetcher, PageFetcher};
use std::time::Duration;

/// Browser identity sent with page requests; the site blocks curl's default agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; WOW64; rv:45.0) Gecko/20100101 Firefox/45.0";

/// Status code and body of a completed request.
#[derive(Debug)]
pub struct Response {
    pub code: u32,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Blocking curl client shared by the page fetcher and the image downloader.
#[derive(Debug, Clone)]
pub struct CurlClient {
    user_agent: String,
    http: HttpConfig,
}

impl CurlClient {
    pub fn new(user_agent: impl Into<String>, http: HttpConfig) -> Self {
        Self {
            user_agent: user_agent.into(),
            http,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Performs one GET. Runs in the current thread.
    pub fn get(&self, url: &str, user_agent: Option<&str>) -> Result<Response, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        if self.http.follow_redirects {
            easy.follow_location(true)?;
            easy.max_redirections(10)?;
        }
        if let Some(secs) = self.http.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(secs) = self.http.timeout_secs {
            easy.timeout(Duration::from_secs(secs))?;
        }
        if let Some(ua) = user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        tracing::debug!(url, code, bytes = body.len(), "GET finished");
        Ok(Response { code, body })
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT, HttpConfig::default())
    }
}

impl PageFetcher for CurlClient {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .get(url, Some(&self.user_agent))
            .map_err(|e| FetchError::Transport(Box::new(e)))?;
        if !resp.is_success() {
            return Err(FetchError::Status(resp.code));
        }
        Ok(String::from_utf8_lossy(&resp.body).into_owned())
    }
}

impl ImageFetcher for CurlClient {
    fn fetch_image(&self, source: &str) -> Result<Vec<u8>, DownloadError> {
        let resp = self
            .get(source, None)
            .map_err(|e| DownloadError::Transport(Box::new(e)))?;
        if !resp.is_success() {
            return Err(DownloadError::Status(resp.code));
        }
        Ok(resp.body)
    }
}
