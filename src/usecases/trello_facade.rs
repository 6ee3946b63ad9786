//! Trello facade. Single entry point for the Trello surface.
//!
//! One gateway call per operation, no retries; gateway errors pass through
//! untouched for the HTTP layer to translate.

use crate::domain::{CreatedTrelloCard, DomainError, TrelloBoard, TrelloCard};
use crate::ports::TrelloGateway;
use std::sync::Arc;
use tracing::info;

pub struct TrelloFacade {
    gateway: Arc<dyn TrelloGateway>,
}

impl TrelloFacade {
    pub fn new(gateway: Arc<dyn TrelloGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the member's boards with their lists. An empty upstream list is a
    /// valid (empty) result, not an error.
    pub async fn fetch_trello_boards(&self) -> Result<Vec<TrelloBoard>, DomainError> {
        let boards = self.gateway.fetch_boards().await?;
        info!(count = boards.len(), "fetched trello boards");
        Ok(boards)
    }

    /// Create one card and return the API's view of it.
    pub async fn create_card(&self, card: TrelloCard) -> Result<CreatedTrelloCard, DomainError> {
        let created = self.gateway.create_card(&card).await?;
        info!(card_id = %created.id, name = %created.name, "trello card created");
        Ok(created)
    }
}
