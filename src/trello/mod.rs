use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::trello::model::{Action, Card, Sticker};

pub mod model;

const TRELLO_API_BASE: &str = "https://api.trello.com/";

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid Trello endpoint {path}: {reason}")]
    Url { path: String, reason: String },
    #[error("failed to reach Trello: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("trello error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("empty response body from Trello")]
    EmptyBody,
    #[error("invalid Trello response JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only view of a board. One request per call, no retries.
#[async_trait]
pub trait BoardService: Send + Sync {
    async fn list_cards(&self, board_id: &str) -> Result<Vec<Card>, BoardError>;

    async fn list_stickers(&self, card_id: &str) -> Result<Vec<Sticker>, BoardError>;

    async fn list_actions(&self, card_id: &str) -> Result<Vec<Action>, BoardError>;
}

#[derive(Clone)]
pub struct TrelloClient {
    http: Client,
    base_url: Url,
    api_key: String,
    api_token: String,
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TrelloClient {
    pub fn new(api_key: String, api_token: String) -> Self {
        let base_url = Url::parse(TRELLO_API_BASE).expect("valid default Trello URL");
        Self::with_base_url(api_key, api_token, base_url)
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.trello.api_key.clone(), cfg.trello.api_token.clone())
    }

    pub fn with_base_url(api_key: String, api_token: String, base_url: Url) -> Self {
        let http = Client::builder()
            .user_agent("trello-sticker-notifier/0.1")
            .no_proxy()
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url,
            api_key,
            api_token,
        }
    }

    /// Append `segments` to the API base. Each segment is percent-encoded,
    /// so an id can never reach another endpoint or the query string.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, BoardError> {
        let invalid = |reason: &str| BoardError::Url {
            path: segments.join("/"),
            reason: reason.to_string(),
        };
        if segments.iter().any(|s| s.is_empty() || *s == "." || *s == "..") {
            return Err(invalid("empty or relative path segment"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid("base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build an authenticated GET for the API path made of `segments`.
    pub fn build_request(&self, segments: &[&str]) -> Result<reqwest::Request, BoardError> {
        let endpoint = self.endpoint(segments)?;
        let request = self
            .http
            .get(endpoint)
            .header("Accept", "application/json")
            .query(&[("key", &self.api_key), ("token", &self.api_token)])
            .build()?;
        Ok(request)
    }

    async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, BoardError> {
        let request = self.build_request(segments)?;
        // The full URL carries the credentials; only the path is logged.
        debug!(path = %request.url().path(), "sending trello request");
        let res = self.http.execute(request).await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BoardError::Status { status, body });
        }

        let body = res.text().await?;
        if body.trim().is_empty() {
            return Err(BoardError::EmptyBody);
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn list_cards(&self, board_id: &str) -> Result<Vec<Card>, BoardError> {
        self.get_list(&["1", "boards", board_id, "cards"]).await
    }

    pub async fn list_stickers(&self, card_id: &str) -> Result<Vec<Sticker>, BoardError> {
        self.get_list(&["1", "cards", card_id, "stickers"]).await
    }

    pub async fn list_actions(&self, card_id: &str) -> Result<Vec<Action>, BoardError> {
        self.get_list(&["1", "cards", card_id, "actions"]).await
    }
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn list_cards(&self, board_id: &str) -> Result<Vec<Card>, BoardError> {
        TrelloClient::list_cards(self, board_id).await
    }

    async fn list_stickers(&self, card_id: &str) -> Result<Vec<Sticker>, BoardError> {
        TrelloClient::list_stickers(self, card_id).await
    }

    async fn list_actions(&self, card_id: &str) -> Result<Vec<Action>, BoardError> {
        TrelloClient::list_actions(self, card_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_sets_credentials_and_path() {
        let client = TrelloClient::new("the-key".into(), "the-token".into());
        let request = client.build_request(&["1", "boards", "b1", "cards"]).unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().host_str(), Some("api.trello.com"));
        assert_eq!(request.url().path(), "/1/boards/b1/cards");

        let query: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("key".to_string(), "the-key".to_string()),
                ("token".to_string(), "the-token".to_string()),
            ]
        );
        assert_eq!(
            request
                .headers()
                .get("Accept")
                .and_then(|h| h.to_str().ok())
                .unwrap(),
            "application/json"
        );
    }

    #[test]
    fn debug_output_hides_credentials() {
        let client = TrelloClient::new("the-key".into(), "the-token".into());
        let shown = format!("{:?}", client);
        assert!(shown.contains("api.trello.com"));
        assert!(!shown.contains("the-key"));
        assert!(!shown.contains("the-token"));
    }

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        let client = TrelloClient::new("k".into(), "t".into());
        let request = client
            .build_request(&["1", "cards", "a/b?filter=all#x", "actions"])
            .unwrap();
        assert_eq!(request.url().path(), "/1/cards/a%2Fb%3Ffilter=all%23x/actions");
        assert_eq!(request.url().fragment(), None);

        let keys: Vec<String> = request
            .url()
            .query_pairs()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["key", "token"]);
    }

    #[test]
    fn relative_segments_are_rejected() {
        let client = TrelloClient::new("k".into(), "t".into());
        for id in ["..", ".", ""] {
            let err = client.build_request(&["1", "cards", id, "actions"]).unwrap_err();
            assert!(matches!(err, BoardError::Url { .. }), "id {:?}", id);
        }
    }

    #[test]
    fn base_path_is_kept() {
        let base = Url::parse("http://localhost:8080/trello/").unwrap();
        let client = TrelloClient::with_base_url("k".into(), "t".into(), base);
        let request = client.build_request(&["1", "boards", "b1", "cards"]).unwrap();
        assert_eq!(request.url().path(), "/trello/1/boards/b1/cards");
    }

    #[test]
    fn action_without_text_is_not_a_comment() {
        let actions: Vec<Action> = serde_json::from_str(
            r#"[
                {"id":"a1","type":"updateCard","date":"2024-05-01T10:00:00.000Z","data":{"listAfter":{"id":"l"}}},
                {"id":"a2","type":"commentCard","date":"2024-05-01 10:00","data":{"text":"hello"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(actions[0].data.text, None);
        assert_eq!(actions[1].data.text.as_deref(), Some("hello"));
    }
}
