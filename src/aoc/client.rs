// Puzzle site HTTP client.
// Handles session authentication, request timeouts and status classification.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{COOKIE, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::credential::Credential;
use crate::error::{AocError, Result};

/// Default site base URL.
pub const AOC_BASE_URL: &str = "https://adventofcode.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CLIENT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Authenticated client for the puzzle site.
pub struct AocClient {
    client: Client,
    base_url: String,
}

impl AocClient {
    /// Create a client that sends `credential` as the session cookie.
    pub fn new(base_url: &str, credential: &Credential, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut cookie = HeaderValue::from_str(&format!("session={}", credential.as_str()))
            .map_err(|_| AocError::InvalidCredential)?;
        cookie.set_sensitive(true);
        headers.insert(COOKIE, cookie);
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request to the site.
    ///
    /// Returns `Ok(None)` for 404 so callers can treat a missing resource as
    /// an expected condition.
    pub async fn get(&self, endpoint: &str) -> Result<Option<Response>> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Option<Response>> {
        match response.status() {
            status if status.is_success() => Ok(Some(response)),
            StatusCode::NOT_FOUND => Ok(None),
            status @ (StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN) => Err(AocError::Unauthorized {
                status: status.as_u16(),
            }),
            status => Err(AocError::Http {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
