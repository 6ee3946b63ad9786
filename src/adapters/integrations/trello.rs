//! Trello adapter. Implements TrelloGateway against the Trello REST API.
//!
//! Requires API key and token from https://trello.com/app-key. Board fetches
//! are scoped to the configured member; card creation targets the list id
//! carried by the card itself.

use crate::domain::{
    AttachmentCounts, AttachmentsByType, CreatedTrelloCard, DomainError, TrelloBadges, TrelloBoard,
    TrelloCard, TrelloList,
};
use crate::ports::TrelloGateway;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Trello REST gateway.
///
/// `api_url` is the API base (normally `https://api.trello.com/1`); tests point
/// it at a local mock server.
pub struct TrelloHttpGateway {
    client: Client,
    api_url: String,
    api_key: String,
    token: String,
    username: String,
}

impl TrelloHttpGateway {
    /// Create a new Trello gateway.
    ///
    /// # Arguments
    /// * `api_url` - API base URL without trailing slash
    /// * `api_key` - Trello API key (from the app key page)
    /// * `token` - Trello API token
    /// * `username` - Member whose boards are listed
    pub fn new(api_url: String, api_key: String, token: String, username: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            token,
            username,
        }
    }

    fn auth_query(&self) -> [(&'static str, &str); 2] {
        [("key", self.api_key.as_str()), ("token", self.token.as_str())]
    }
}

/// Board shape on the Trello wire.
#[derive(Deserialize)]
struct WireBoard {
    id: String,
    name: String,
    #[serde(default)]
    lists: Vec<WireList>,
}

#[derive(Deserialize)]
struct WireList {
    id: String,
    name: String,
    #[serde(default)]
    closed: bool,
}

/// Card-creation response shape on the Trello wire.
#[derive(Deserialize)]
struct WireCreatedCard {
    id: String,
    name: String,
    #[serde(rename = "shortUrl", default)]
    short_url: String,
    #[serde(default)]
    badges: Option<WireBadges>,
}

#[derive(Deserialize)]
struct WireBadges {
    #[serde(default)]
    votes: i32,
    #[serde(rename = "attachmentsByType", default)]
    attachments: Option<WireAttachmentsByType>,
}

#[derive(Deserialize, Default)]
struct WireAttachmentsByType {
    #[serde(default)]
    trello: WireAttachmentCounts,
}

#[derive(Deserialize, Default)]
struct WireAttachmentCounts {
    #[serde(default)]
    board: i32,
    #[serde(default)]
    card: i32,
}

fn board_from_wire(board: WireBoard) -> TrelloBoard {
    TrelloBoard {
        id: board.id,
        name: board.name,
        lists: board.lists.into_iter().map(list_from_wire).collect(),
    }
}

fn list_from_wire(list: WireList) -> TrelloList {
    TrelloList {
        id: list.id,
        name: list.name,
        closed: list.closed,
    }
}

fn created_card_from_wire(card: WireCreatedCard) -> CreatedTrelloCard {
    CreatedTrelloCard {
        id: card.id,
        name: card.name,
        short_url: card.short_url,
        badges: card.badges.map(|b| {
            let counts = b.attachments.unwrap_or_default();
            TrelloBadges {
                votes: b.votes,
                attachments: AttachmentsByType {
                    trello: AttachmentCounts {
                        board: counts.trello.board,
                        card: counts.trello.card,
                    },
                },
            }
        }),
    }
}

#[async_trait::async_trait]
impl TrelloGateway for TrelloHttpGateway {
    async fn fetch_boards(&self) -> Result<Vec<TrelloBoard>, DomainError> {
        let url = format!("{}/members/{}/boards", self.api_url, self.username);

        let res = self
            .client
            .get(&url)
            .query(&self.auth_query())
            .query(&[("fields", "name,id"), ("lists", "all")])
            .send()
            .await
            .map_err(|e| DomainError::TrelloGateway(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::TrelloGateway(format!(
                "Trello API error {}: {}",
                status, text
            )));
        }

        let boards: Vec<WireBoard> = res
            .json()
            .await
            .map_err(|e| DomainError::TrelloGateway(format!("Malformed boards response: {}", e)))?;

        debug!(count = boards.len(), "fetched boards from Trello");
        Ok(boards.into_iter().map(board_from_wire).collect())
    }

    async fn create_card(&self, card: &TrelloCard) -> Result<CreatedTrelloCard, DomainError> {
        let url = format!("{}/cards", self.api_url);

        let body = serde_json::json!({
            "idList": card.list_id,
            "name": card.name,
            "desc": card.description,
            "pos": card.pos,
        });

        let res = self
            .client
            .post(&url)
            .query(&self.auth_query())
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::TrelloGateway(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::TrelloGateway(format!(
                "Trello API error {}: {}",
                status, text
            )));
        }

        let created: WireCreatedCard = res
            .json()
            .await
            .map_err(|e| DomainError::TrelloGateway(format!("Malformed card response: {}", e)))?;

        info!(card_id = %created.id, "card created on Trello");
        Ok(created_card_from_wire(created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> TrelloHttpGateway {
        TrelloHttpGateway::new(
            server.uri(),
            "key123".to_string(),
            "token456".to_string(),
            "testuser".to_string(),
        )
    }

    fn card() -> TrelloCard {
        TrelloCard {
            name: "Test Card".to_string(),
            description: "desc".to_string(),
            pos: "top".to_string(),
            list_id: "list-1".to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_boards_maps_nested_lists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/testuser/boards"))
            .and(query_param("key", "key123"))
            .and(query_param("token", "token456"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "b1",
                    "name": "Kanban",
                    "lists": [
                        {"id": "l1", "name": "To do", "closed": false},
                        {"id": "l2", "name": "Done", "closed": true}
                    ]
                }
            ])))
            .mount(&server)
            .await;

        let boards = gateway(&server).fetch_boards().await.unwrap();

        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, "b1");
        assert_eq!(boards[0].lists.len(), 2);
        assert_eq!(boards[0].lists[1].name, "Done");
        assert!(boards[0].lists[1].closed);
    }

    #[tokio::test]
    async fn fetch_boards_empty_upstream_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/testuser/boards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let boards = gateway(&server).fetch_boards().await.unwrap();
        assert!(boards.is_empty());
    }

    #[tokio::test]
    async fn fetch_boards_upstream_failure_surfaces_as_gateway_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/members/testuser/boards"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = gateway(&server).fetch_boards().await.unwrap_err();
        assert!(matches!(err, DomainError::TrelloGateway(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn create_card_maps_response_with_badges() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cards"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "1",
                "name": "Test Card",
                "shortUrl": "https://trello.com/c/abc",
                "badges": {
                    "votes": 3,
                    "attachmentsByType": {"trello": {"board": 1, "card": 2}}
                }
            })))
            .mount(&server)
            .await;

        let created = gateway(&server).create_card(&card()).await.unwrap();

        assert_eq!(created.id, "1");
        assert_eq!(created.name, "Test Card");
        assert_eq!(created.short_url, "https://trello.com/c/abc");
        let badges = created.badges.unwrap();
        assert_eq!(badges.votes, 3);
        assert_eq!(badges.attachments.trello.board, 1);
        assert_eq!(badges.attachments.trello.card, 2);
    }

    #[tokio::test]
    async fn create_card_tolerates_missing_badges() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cards"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "2", "name": "Bare", "shortUrl": ""})),
            )
            .mount(&server)
            .await;

        let created = gateway(&server).create_card(&card()).await.unwrap();
        assert_eq!(created.id, "2");
        assert!(created.badges.is_none());
    }
}
