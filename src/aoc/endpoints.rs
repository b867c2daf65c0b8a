// Puzzle site endpoint functions.
// Provides typed methods for fetching puzzle data.

use crate::error::Result;
use crate::puzzle::PuzzleId;

use super::client::AocClient;

/// Endpoint path of a puzzle's input.
pub fn input_endpoint(id: PuzzleId) -> String {
    format!("/{}/day/{}/input", id.year(), id.day())
}

impl AocClient {
    /// Fetch the raw input for a puzzle.
    ///
    /// Returns `Ok(None)` when the site reports the input as not found, which
    /// happens for days that have not unlocked yet.
    pub async fn fetch_input(&self, id: PuzzleId) -> Result<Option<String>> {
        tracing::info!(puzzle = %id, "Fetching input");

        let Some(response) = self.get(&input_endpoint(id)).await? else {
            match id.unlocks_at() {
                Some(at) => {
                    tracing::warn!(puzzle = %id, unlocks_at = %at, "Input not available yet")
                }
                None => tracing::warn!(puzzle = %id, "Input not available yet"),
            }
            return Ok(None);
        };

        let body = response.text().await?;
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::Credential;
    use crate::error::AocError;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client_for(server: &MockServer) -> AocClient {
        AocClient::new(
            &server.base_url(),
            &Credential::new("token123"),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[test]
    fn test_input_endpoint() {
        let id = PuzzleId::new(2024, 1).unwrap();
        assert_eq!(input_endpoint(id), "/2024/day/1/input");
    }

    #[tokio::test]
    async fn test_fetch_sends_session_cookie() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/2024/day/1/input")
                    .header("cookie", "session=token123");
                then.status(200).body("abc");
            })
            .await;

        let client = client_for(&server);
        let body = client
            .fetch_input(PuzzleId::new(2024, 1).unwrap())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_not_found_is_not_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/2025/day/1/input");
                then.status(404).body("Please don't repeatedly request this endpoint");
            })
            .await;

        let client = client_for(&server);
        let body = client
            .fetch_input(PuzzleId::new(2025, 1).unwrap())
            .await
            .unwrap();

        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_bad_session_is_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/2024/day/2/input");
                then.status(400).body("Puzzle inputs differ by user.  Please log in.");
            })
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_input(PuzzleId::new(2024, 2).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AocError::Unauthorized { status: 400 }));
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/2024/day/3/input");
                then.status(500).body("oops");
            })
            .await;

        let client = client_for(&server);
        let err = client
            .fetch_input(PuzzleId::new(2024, 3).unwrap())
            .await
            .unwrap_err();

        match err {
            AocError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/2024/day/4/input");
                then.status(200)
                    .body("late")
                    .delay(Duration::from_millis(500));
            })
            .await;

        let client = AocClient::new(
            &server.base_url(),
            &Credential::new("token123"),
            Duration::from_millis(50),
        )
        .unwrap();
        let err = client
            .fetch_input(PuzzleId::new(2024, 4).unwrap())
            .await
            .unwrap_err();

        match err {
            AocError::Request(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let result = AocClient::new(
            "http://localhost",
            &Credential::new("bad\ntoken"),
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(AocError::InvalidCredential)));
    }
}
