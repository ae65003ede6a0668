mod ureq_fetcher;

use std::time::Duration;

pub use ureq_fetcher::UReqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(Vec<u8>, Option<String>),
    NotFound,
    Status(u16),
    InvalidBody,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body, None)
    }

    pub fn ok_with_type(body: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self::Ok(body, Some(content_type.into()))
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }

    pub fn into_body(self) -> Result<Vec<u8>, String> {
        self.into_parts().map(|(body, _)| body)
    }

    pub fn into_parts(self) -> Result<(Vec<u8>, Option<String>), String> {
        match self {
            Response::Ok(body, content_type) => Ok((body, content_type)),
            Response::NotFound => Err("HTTP 404: not found".to_string()),
            Response::Status(code) => Err(format!("HTTP {}", code)),
            Response::InvalidBody => Err("could not read response body".to_string()),
            Response::NetworkError(reason) => Err(reason),
        }
    }
}

pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Response;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &str) -> Response {
        (**self).fetch(url)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub user_agent: String,
    /// `None` waits on a stalled connection forever.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
