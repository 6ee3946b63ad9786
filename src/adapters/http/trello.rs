//! Trello endpoints: /v1/trello.

use crate::adapters::http::dto::{CreatedTrelloCardDto, TrelloBoardDto, TrelloCardDto};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::mapper;
use crate::adapters::http::server::AppState;
use axum::Json;
use axum::extract::State;

/// GET /v1/trello/boards
pub async fn get_trello_boards(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrelloBoardDto>>, ApiError> {
    let boards = state.trello.fetch_trello_boards().await?;
    Ok(Json(mapper::boards_to_dto(boards)))
}

/// POST /v1/trello/cards
pub async fn create_trello_card(
    State(state): State<AppState>,
    Json(dto): Json<TrelloCardDto>,
) -> Result<Json<CreatedTrelloCardDto>, ApiError> {
    let created = state.trello.create_card(mapper::card_from_dto(dto)).await?;
    Ok(Json(mapper::created_card_to_dto(created)))
}
