//! Wire DTOs for the HTTP surface.
//!
//! Field names follow the JSON contract (`listId`, `shortUrl`,
//! `attachmentsByType`). Absent optional fields deserialize to empty values,
//! never null.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaskDto {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrelloBoardDto {
    pub id: String,
    pub name: String,
    pub lists: Vec<TrelloListDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrelloListDto {
    pub id: String,
    pub name: String,
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TrelloCardDto {
    pub name: String,
    pub description: String,
    pub pos: String,
    pub list_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatedTrelloCardDto {
    pub id: String,
    pub name: String,
    pub short_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<TrelloBadgesDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrelloBadgesDto {
    pub votes: i32,
    #[serde(rename = "attachmentsByType")]
    pub attachments: AttachmentsByTypeDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttachmentsByTypeDto {
    pub trello: AttachmentCountsDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AttachmentCountsDto {
    pub board: i32,
    pub card: i32,
}
